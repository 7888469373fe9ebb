use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::warning::RowWarning;

/// A single raw input row: column label to cell text, as produced by a
/// format adapter. Transient; one per input row.
pub type RawRow = BTreeMap<String, String>;

/// Inferred transit category of a trip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Line {
    #[serde(rename = "train")]
    Train,
    #[serde(rename = "bus")]
    Bus,
    #[serde(rename = "ferry")]
    Ferry,
    #[default]
    #[serde(rename = "")]
    Unknown,
}

impl Line {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Train => "train",
            Self::Bus => "bus",
            Self::Ferry => "ferry",
            Self::Unknown => "",
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized trip, the output unit of statement parsing.
///
/// Timestamps are RFC 3339 strings carrying the statement zone's UTC offset
/// at that instant; `None` means the source value was absent or unparseable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
    pub tap_on_time: Option<String>,
    pub tap_off_time: Option<String>,
    /// Fare amount in cents, never negative.
    pub fare_cents: u32,
    /// True when no usable fare text was supplied, the fare resolved to
    /// zero, or the source text explicitly flagged a default fare.
    pub is_default_fare: bool,
    pub from_stop: String,
    pub to_stop: String,
    /// Raw mode text from the statement.
    pub mode: String,
    pub line: Line,
    pub from_lat: Option<f64>,
    pub from_lng: Option<f64>,
    pub to_lat: Option<f64>,
    pub to_lng: Option<f64>,
}

/// Result of parsing one statement: surviving records plus row warnings,
/// both in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedStatement {
    pub records: Vec<TripRecord>,
    pub warnings: Vec<RowWarning>,
}

impl ParsedStatement {
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_serializes_to_wire_strings() {
        assert_eq!(serde_json::to_string(&Line::Train).unwrap(), "\"train\"");
        assert_eq!(serde_json::to_string(&Line::Unknown).unwrap(), "\"\"");
        let line: Line = serde_json::from_str("\"ferry\"").unwrap();
        assert_eq!(line, Line::Ferry);
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = TripRecord {
            tap_on_time: Some("2021-04-03T09:00:00+11:00".to_string()),
            tap_off_time: None,
            fare_cents: 300,
            is_default_fare: false,
            from_stop: "Central".to_string(),
            to_stop: "Town Hall".to_string(),
            mode: "Train".to_string(),
            line: Line::Train,
            from_lat: Some(-33.87),
            from_lng: Some(151.21),
            to_lat: None,
            to_lng: None,
        };
        let json = serde_json::to_string(&record).expect("serialize record");
        let round: TripRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round, record);
    }
}
