//! Helpers for growing a schedule at its end.

use chrono::{DateTime, Utc};

use crate::collection::OrderedEntityCollection;
use crate::error::CoreError;
use crate::id::ProgramId;
use crate::program::Program;

/// A schedule is an ordered collection of programs.
pub type Schedule = OrderedEntityCollection<Program>;

/// Duration given to programs appended with [`append_program`], in seconds.
pub const DEFAULT_PROGRAM_DURATION: i64 = 3600;

/// Where the next appended program should start: the end of the last
/// program, or `now` when the schedule is empty.
pub fn next_slot_start(schedule: &Schedule, now: DateTime<Utc>) -> DateTime<Utc> {
    schedule
        .last()
        .map(Program::end_date_time)
        .unwrap_or(now)
}

/// Returns a schedule with a fresh, untitled program appended right after
/// the last one, and the new program's id.
pub fn append_program(
    schedule: &Schedule,
    now: DateTime<Utc>,
) -> Result<(Schedule, ProgramId), CoreError> {
    let program = Program::scheduled(next_slot_start(schedule, now), DEFAULT_PROGRAM_DURATION);
    let id = program.id().clone();
    let next = schedule.add(program)?;
    Ok((next, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, h, m, 0).unwrap()
    }

    #[test]
    fn empty_schedule_starts_now() {
        let schedule = Schedule::new();
        assert_eq!(next_slot_start(&schedule, at(8, 0)), at(8, 0));
    }

    #[test]
    fn next_slot_follows_last_program() {
        let schedule = Schedule::from_entities(vec![
            Program::scheduled(at(9, 0), 1800),
            Program::scheduled(at(9, 30), 2700),
        ])
        .unwrap();
        assert_eq!(next_slot_start(&schedule, at(8, 0)), at(10, 15));
    }

    #[test]
    fn append_program_chains_default_slots() {
        let (one, first) = append_program(&Schedule::new(), at(20, 0)).unwrap();
        let (two, second) = append_program(&one, at(6, 0)).unwrap();

        assert_eq!(one.len(), 1);
        assert_eq!(two.len(), 2);
        assert_eq!(two.index_of(second.as_str()), Some(1));

        let a = two.get(first.as_str()).unwrap();
        let b = two.get(second.as_str()).unwrap();
        assert_eq!(a.start_date_time, at(20, 0));
        assert_eq!(a.duration, DEFAULT_PROGRAM_DURATION);
        assert_eq!(b.start_date_time, at(21, 0));
    }
}
