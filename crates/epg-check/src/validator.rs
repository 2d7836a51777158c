//! Schedule validation and time normalization.
//!
//! Provides two operations over a snapshot of programs in schedule order:
//! - [`ScheduleValidator::validate_at`]: reports every data-quality defect,
//!   keyed by program id.
//! - [`adjust_date_times`]: rewrites start times so each program begins
//!   exactly when the previous one ends.
//!
//! Both are pure and total: they never mutate their input and never fail.

use chrono::{DateTime, Utc};

use epg_core::Program;

use crate::config::ValidatorConfig;
use crate::diagnostics::{DefectKind, ValidationMessages};

/// Validates schedules against a [`ValidatorConfig`].
#[derive(Debug, Clone, Default)]
pub struct ScheduleValidator {
    config: ValidatorConfig,
}

impl ScheduleValidator {
    pub fn new(config: ValidatorConfig) -> Self {
        ScheduleValidator { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates against the current instant.
    pub fn validate(&self, programs: &[Program]) -> ValidationMessages {
        self.validate_at(programs, Utc::now())
    }

    /// Validates `programs`, in schedule order, as seen at `now`.
    ///
    /// Per-program checks are recorded first, then the pairwise time-gap
    /// check, so within a severity bucket independent kinds precede
    /// `TIME_GAP`. The first program never gets `TIME_GAP`.
    pub fn validate_at(&self, programs: &[Program], now: DateTime<Utc>) -> ValidationMessages {
        let mut messages = ValidationMessages::default();
        let far_limit = now
            .checked_add_signed(self.config.horizon())
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        for program in programs {
            if is_blank(&program.title) {
                messages.record(program.id(), DefectKind::EmptyTitle);
            }
            if is_blank(&program.description) {
                messages.record(program.id(), DefectKind::EmptyDescription);
            }
            if program.duration <= 0 {
                messages.record(program.id(), DefectKind::InvalidDuration);
            }
            if !program.rating.is_rated() {
                messages.record(program.id(), DefectKind::NoParentalRating);
            }
            if program.start_date_time < now {
                messages.record(program.id(), DefectKind::PastStartDate);
            }
            if program.start_date_time > far_limit {
                messages.record(program.id(), DefectKind::FarStartDate);
            }
        }

        let mut gaps = 0usize;
        for pair in programs.windows(2) {
            let (previous, current) = (&pair[0], &pair[1]);
            if current.start_date_time != previous.end_date_time() {
                messages.record(current.id(), DefectKind::TimeGap);
                gaps += 1;
            }
        }

        tracing::debug!(
            programs = programs.len(),
            flagged = messages.len(),
            gaps,
            "validated schedule"
        );
        messages
    }
}

/// Validates against the current instant with the default configuration.
pub fn validate(programs: &[Program]) -> ValidationMessages {
    ScheduleValidator::default().validate(programs)
}

/// Returns a copy of `programs` where every program after the first starts
/// at the end of the one before it.
///
/// Durations and every other attribute are kept, so the result is
/// contiguous and calling this again changes nothing.
pub fn adjust_date_times(programs: &[Program]) -> Vec<Program> {
    let mut adjusted: Vec<Program> = Vec::with_capacity(programs.len());
    let mut moved = 0usize;

    for program in programs {
        let mut next = program.clone();
        if let Some(previous) = adjusted.last() {
            let start = previous.end_date_time();
            if next.start_date_time != start {
                tracing::trace!(
                    id = %next.id(),
                    from = %next.start_date_time,
                    to = %start,
                    "moved program start"
                );
                next.start_date_time = start;
                moved += 1;
            }
        }
        adjusted.push(next);
    }

    tracing::debug!(programs = programs.len(), moved, "adjusted schedule times");
    adjusted
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
