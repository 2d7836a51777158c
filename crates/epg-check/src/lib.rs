//! Schedule checker for EPG program lists.
//!
//! Given a snapshot of programs in schedule order, reports data-quality
//! defects as leveled diagnostics and can normalize start times so the
//! schedule has no gaps or overlaps. Defects are never errors: a program
//! with a blank title or an overlapping slot is still a valid program.
//!
//! - [`validator`] -- `validate` and `adjust_date_times`
//! - [`diagnostics`] -- severity levels, defect kinds, the result map
//! - [`config`] -- validator thresholds loaded from TOML

pub mod config;
pub mod diagnostics;
pub mod validator;

pub use config::{ConfigError, EpgConfig, ValidatorConfig};
pub use diagnostics::{DefectKind, ProgramDiagnostics, Severity, ValidationMessages};
pub use validator::{adjust_date_times, validate, ScheduleValidator};
