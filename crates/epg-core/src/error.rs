//! Core error types for epg-core.
//!
//! Uses `thiserror` for structured, matchable error variants. These cover
//! structural misuse of the collection and malformed helper input only;
//! data-quality problems in a schedule are never errors (see `epg-check`).

use thiserror::Error;

/// Core errors produced by the epg-core crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// An entity was handed to a collection without a usable key.
    #[error("invalid entity: missing '{field}' key")]
    InvalidEntity { field: &'static str },

    /// `update` targeted a key that is not in the collection.
    #[error("entity not found: '{key}'")]
    EntityNotFound { key: String },

    /// A duration string could not be parsed as `HH:MM:SS`.
    #[error("invalid duration: '{input}'")]
    InvalidDuration { input: String },

    /// A rating code is not one of the known parental ratings.
    #[error("unknown rating code: '{code}'")]
    UnknownRating { code: String },
}
