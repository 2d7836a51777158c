//! Schedule data model for the EPG engine.
//!
//! - [`collection`] -- keyed, insertion-ordered immutable collection
//! - [`program`] -- the broadcast entity and its parental rating
//! - [`schedule`] -- appending programs at the end of a schedule
//! - [`time`] -- saturating instant arithmetic and `HH:MM:SS` durations
//! - [`error`] -- structural errors

pub mod collection;
pub mod error;
pub mod id;
pub mod program;
pub mod schedule;
pub mod time;

// Re-export commonly used types
pub use collection::{Keyed, OrderedEntityCollection};
pub use error::CoreError;
pub use id::ProgramId;
pub use program::{Program, Rating};
pub use schedule::{append_program, next_slot_start, Schedule, DEFAULT_PROGRAM_DURATION};
