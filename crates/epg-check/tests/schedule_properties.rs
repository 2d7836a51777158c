//! Property-based tests for schedule validation and time adjustment.
//!
//! 1. Adjusted schedules never report TIME_GAP.
//! 2. Adjustment is idempotent.
//! 3. Adjustment only moves start times after the first program.
//! 4. Validation is keyed by id and never lists a clean program.
//! 5. Gaps are reported on exactly the programs that do not follow on.

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;

use epg_check::{adjust_date_times, DefectKind, ScheduleValidator, Severity};
use epg_core::{Program, Rating};

// ── Helpers ─────────────────────────────────────────────────────────────

fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
}

fn rating_strategy() -> impl Strategy<Value = Rating> {
    prop::sample::select(Rating::ALL.to_vec())
}

/// Programs with start offsets within about a year and durations that
/// include zero and negative values.
fn program_strategy() -> impl Strategy<Value = Program> {
    (
        -40_000_000i64..40_000_000,
        -7_200i64..172_800,
        "[ a-z]{0,8}",
        "[ a-z]{0,8}",
        rating_strategy(),
    )
        .prop_map(|(offset, duration, title, description, rating)| {
            let mut p = Program::scheduled(epg_core::time::add_seconds(epoch(), offset), duration);
            p.title = title;
            p.description = description;
            p.rating = rating;
            p
        })
}

fn schedule(max_len: usize) -> impl Strategy<Value = Vec<Program>> {
    proptest::collection::vec(program_strategy(), 0..=max_len)
}

fn validator() -> ScheduleValidator {
    ScheduleValidator::default()
}

// ═════════════════════════════════════════════════════════════════════════
// 1-3. adjust_date_times
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn adjusted_schedule_has_no_gaps(programs in schedule(30)) {
        let adjusted = adjust_date_times(&programs);
        let messages = validator().validate_at(&adjusted, epoch());
        prop_assert_eq!(messages.count_of(DefectKind::TimeGap), 0);
    }

    #[test]
    fn adjust_is_idempotent(programs in schedule(30)) {
        let once = adjust_date_times(&programs);
        let twice = adjust_date_times(&once);
        prop_assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(&twice) {
            prop_assert!(a.same_contents(b), "{:?} != {:?}", a, b);
        }
    }

    #[test]
    fn adjust_only_moves_later_starts(programs in schedule(30)) {
        let adjusted = adjust_date_times(&programs);
        prop_assert_eq!(adjusted.len(), programs.len());

        for (i, (before, after)) in programs.iter().zip(&adjusted).enumerate() {
            prop_assert_eq!(before.id(), after.id());
            prop_assert_eq!(&before.title, &after.title);
            prop_assert_eq!(&before.description, &after.description);
            prop_assert_eq!(before.rating, after.rating);
            prop_assert_eq!(before.duration, after.duration);
            if i == 0 {
                prop_assert_eq!(before.start_date_time, after.start_date_time);
            } else {
                prop_assert_eq!(after.start_date_time, adjusted[i - 1].end_date_time());
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4-5. validate
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn present_programs_have_messages(programs in schedule(30)) {
        let messages = validator().validate_at(&programs, epoch());
        for (id, diagnostics) in messages.iter() {
            prop_assert!(programs.iter().any(|p| p.id() == id));
            prop_assert!(!diagnostics.is_empty());
            for severity in Severity::ALL {
                for kind in diagnostics.at(severity) {
                    prop_assert_eq!(kind.severity(), severity);
                }
            }
        }
    }

    #[test]
    fn gaps_match_pairwise_discontinuity(programs in schedule(30)) {
        let messages = validator().validate_at(&programs, epoch());

        if let Some(first) = programs.first() {
            prop_assert!(!messages.has_kind(first.id().as_str(), DefectKind::TimeGap));
        }
        for pair in programs.windows(2) {
            let expected = pair[1].start_date_time != pair[0].end_date_time();
            prop_assert_eq!(
                messages.has_kind(pair[1].id().as_str(), DefectKind::TimeGap),
                expected
            );
        }
    }
}
