//! Leveled schedule diagnostics.
//!
//! [`ValidationMessages`] maps a program id to the [`DefectKind`]s found for
//! that program, bucketed by [`Severity`]. A program without defects is
//! absent from the map, and a present program never holds an empty bucket,
//! so "no entry" is the only way to say "no messages".
//!
//! Serialized form, as consumed by a diagnostics renderer:
//!
//! ```json
//! { "<program id>": { "WARN": ["NO_PARENTAL_RATING", "TIME_GAP"] } }
//! ```

use std::collections::BTreeMap;
use std::fmt;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use epg_core::ProgramId;

/// How serious a defect is. ERROR is advisory: nothing is blocked by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Warn,
    Error,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Info, Severity::Warn, Severity::Error];
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        };
        f.write_str(tag)
    }
}

/// A category of data-quality problem in a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DefectKind {
    /// Title is empty or whitespace.
    EmptyTitle,
    /// Description is empty or whitespace.
    EmptyDescription,
    /// Duration is zero or negative.
    InvalidDuration,
    /// Rating is the "no rating" marker.
    NoParentalRating,
    /// Starts before the validation instant.
    PastStartDate,
    /// Starts beyond the configured horizon.
    FarStartDate,
    /// Does not start exactly when the previous program ends.
    TimeGap,
}

impl DefectKind {
    /// The fixed severity each kind is reported at.
    pub fn severity(self) -> Severity {
        match self {
            DefectKind::EmptyTitle | DefectKind::EmptyDescription | DefectKind::InvalidDuration => {
                Severity::Error
            }
            DefectKind::NoParentalRating | DefectKind::PastStartDate | DefectKind::TimeGap => {
                Severity::Warn
            }
            DefectKind::FarStartDate => Severity::Info,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            DefectKind::EmptyTitle => "EMPTY_TITLE",
            DefectKind::EmptyDescription => "EMPTY_DESCRIPTION",
            DefectKind::InvalidDuration => "INVALID_DURATION",
            DefectKind::NoParentalRating => "NO_PARENTAL_RATING",
            DefectKind::PastStartDate => "PAST_START_DATE",
            DefectKind::FarStartDate => "FAR_START_DATE",
            DefectKind::TimeGap => "TIME_GAP",
        }
    }
}

impl fmt::Display for DefectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Defects of a single program, bucketed by severity.
///
/// Within a bucket, kinds keep the order in which they were recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgramDiagnostics {
    levels: BTreeMap<Severity, IndexSet<DefectKind>>,
}

impl ProgramDiagnostics {
    pub(crate) fn record(&mut self, kind: DefectKind) {
        self.levels.entry(kind.severity()).or_default().insert(kind);
    }

    /// Kinds reported at `severity`, in emission order.
    pub fn at(&self, severity: Severity) -> impl Iterator<Item = DefectKind> + '_ {
        self.levels
            .get(&severity)
            .into_iter()
            .flat_map(|kinds| kinds.iter().copied())
    }

    pub fn contains(&self, kind: DefectKind) -> bool {
        self.levels
            .get(&kind.severity())
            .is_some_and(|kinds| kinds.contains(&kind))
    }

    /// The most serious level with at least one kind.
    pub fn max_severity(&self) -> Option<Severity> {
        self.levels.keys().next_back().copied()
    }

    /// Every (severity, kind) pair, least severe level first.
    pub fn iter(&self) -> impl Iterator<Item = (Severity, DefectKind)> + '_ {
        self.levels
            .iter()
            .flat_map(|(severity, kinds)| kinds.iter().map(move |kind| (*severity, *kind)))
    }

    /// Total number of kinds across all levels.
    pub fn len(&self) -> usize {
        self.levels.values().map(IndexSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// Diagnostics for a whole schedule, keyed by program id in schedule order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationMessages {
    programs: IndexMap<ProgramId, ProgramDiagnostics>,
}

impl ValidationMessages {
    pub(crate) fn record(&mut self, id: &ProgramId, kind: DefectKind) {
        if let Some(diagnostics) = self.programs.get_mut(id.as_str()) {
            diagnostics.record(kind);
            return;
        }
        let mut diagnostics = ProgramDiagnostics::default();
        diagnostics.record(kind);
        self.programs.insert(id.clone(), diagnostics);
    }

    /// Diagnostics for a program, or `None` when it has no defects.
    pub fn get(&self, id: &str) -> Option<&ProgramDiagnostics> {
        self.programs.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.programs.contains_key(id)
    }

    /// Kinds reported for `id` at `severity`, in emission order.
    pub fn kinds(&self, id: &str, severity: Severity) -> Vec<DefectKind> {
        self.get(id)
            .map(|diagnostics| diagnostics.at(severity).collect())
            .unwrap_or_default()
    }

    pub fn has_kind(&self, id: &str, kind: DefectKind) -> bool {
        self.get(id).is_some_and(|diagnostics| diagnostics.contains(kind))
    }

    /// Number of programs flagged with `kind`.
    pub fn count_of(&self, kind: DefectKind) -> usize {
        self.programs
            .values()
            .filter(|diagnostics| diagnostics.contains(kind))
            .count()
    }

    pub fn max_severity(&self, id: &str) -> Option<Severity> {
        self.get(id).and_then(ProgramDiagnostics::max_severity)
    }

    /// True when any program has an ERROR-level defect.
    pub fn has_errors(&self) -> bool {
        self.programs
            .values()
            .any(|diagnostics| diagnostics.max_severity() == Some(Severity::Error))
    }

    /// Number of programs with at least one defect.
    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ProgramId, &ProgramDiagnostics)> {
        self.programs.iter()
    }
}
