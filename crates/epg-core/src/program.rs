//! The scheduled broadcast entity and its parental rating.
//!
//! A [`Program`] is a plain value: nothing about it is validated on
//! construction. Empty titles, non-positive durations, or start times in the
//! past are all storable; judging them is the validator's job.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::collection::Keyed;
use crate::error::CoreError;
use crate::id::ProgramId;
use crate::time::{add_seconds, truncate_to_seconds};

/// Parental rating of a program.
///
/// `Unrated` is the "no rating" marker and serializes as `"NONE"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Rating {
    #[default]
    #[serde(rename = "NONE")]
    Unrated,
    Rsc,
    Rl,
    R10,
    R12,
    R14,
    R16,
    R18,
}

impl Rating {
    /// Every rating, marker first, then in increasing strictness.
    pub const ALL: [Rating; 8] = [
        Rating::Unrated,
        Rating::Rsc,
        Rating::Rl,
        Rating::R10,
        Rating::R12,
        Rating::R14,
        Rating::R16,
        Rating::R18,
    ];

    /// The wire code, e.g. `"R14"`.
    pub fn code(self) -> &'static str {
        match self {
            Rating::Unrated => "NONE",
            Rating::Rsc => "RSC",
            Rating::Rl => "RL",
            Rating::R10 => "R10",
            Rating::R12 => "R12",
            Rating::R14 => "R14",
            Rating::R16 => "R16",
            Rating::R18 => "R18",
        }
    }

    /// False only for the "no rating" marker.
    pub fn is_rated(self) -> bool {
        self != Rating::Unrated
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Rating {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Rating::ALL
            .into_iter()
            .find(|rating| rating.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| CoreError::UnknownRating {
                code: s.to_string(),
            })
    }
}

/// One scheduled broadcast.
///
/// Equality and hashing look at the id only; use
/// [`same_contents`](Program::same_contents) to compare every attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    id: ProgramId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rating: Rating,
    pub start_date_time: DateTime<Utc>,
    /// Length in seconds.
    #[serde(default)]
    pub duration: i64,
}

impl Program {
    /// A fresh program starting now, with no duration and no rating.
    pub fn new() -> Self {
        Self::scheduled(Utc::now(), 0)
    }

    /// A fresh program at `start` lasting `duration` seconds.
    pub fn scheduled(start: DateTime<Utc>, duration: i64) -> Self {
        Program {
            id: ProgramId::generate(),
            title: String::new(),
            description: String::new(),
            rating: Rating::Unrated,
            start_date_time: truncate_to_seconds(start),
            duration,
        }
    }

    /// Replaces the generated id, for records that arrive with their own.
    pub fn with_id(mut self, id: impl Into<ProgramId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn id(&self) -> &ProgramId {
        &self.id
    }

    /// `start_date_time + duration`.
    pub fn end_date_time(&self) -> DateTime<Utc> {
        add_seconds(self.start_date_time, self.duration)
    }

    /// Attribute-wise comparison, including the id.
    pub fn same_contents(&self, other: &Program) -> bool {
        self.id == other.id
            && self.title == other.title
            && self.description == other.description
            && self.rating == other.rating
            && self.start_date_time == other.start_date_time
            && self.duration == other.duration
    }
}

impl Default for Program {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Program {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Program {}

impl Hash for Program {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Keyed for Program {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}
