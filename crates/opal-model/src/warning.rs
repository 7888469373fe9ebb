use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed set of row-level conditions surfaced during processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// Row matched an earlier row on times and stops; no record emitted.
    #[serde(rename = "duplicate row")]
    DuplicateRow,
    /// Tap-off time was absent or unparseable; record still emitted.
    #[serde(rename = "missing tap off")]
    MissingTapOff,
    /// Fare resolved to a default; record still emitted.
    #[serde(rename = "default fare charged")]
    DefaultFare,
}

impl WarningKind {
    pub fn message(&self) -> &'static str {
        match self {
            Self::DuplicateRow => "duplicate row",
            Self::MissingTapOff => "missing tap off",
            Self::DefaultFare => "default fare charged",
        }
    }
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A warning attached to one input row.
///
/// `index` is the 0-based position over the rows handed to the processor,
/// counting rows that were later skipped as duplicates. Warnings are
/// informational and never block the rest of the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowWarning {
    pub index: usize,
    #[serde(rename = "message")]
    pub kind: WarningKind,
}

impl RowWarning {
    pub fn new(index: usize, kind: WarningKind) -> Self {
        Self { index, kind }
    }
}
