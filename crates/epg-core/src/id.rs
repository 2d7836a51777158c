//! Stable identifier newtype for programs.
//!
//! Program ids are opaque strings. Freshly created programs get a UUID v4;
//! imported programs may carry whatever id their source assigned.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque, unique program identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgramId(String);

impl ProgramId {
    /// Generates a new random id. Ids are never reused.
    pub fn generate() -> Self {
        ProgramId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProgramId {
    fn from(s: &str) -> Self {
        ProgramId(s.to_string())
    }
}

impl From<String> for ProgramId {
    fn from(s: String) -> Self {
        ProgramId(s)
    }
}

// Lets id-keyed maps be queried with a plain `&str`.
impl Borrow<str> for ProgramId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProgramId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
