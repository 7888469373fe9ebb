//! Spending/usage aggregation over parsed records.

use std::collections::BTreeMap;

use opal_model::{Line, TripRecord};
use serde::{Deserialize, Serialize};

/// Aggregate spending and usage over a slice of trip records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendSummary {
    /// Number of trips.
    pub trips: usize,
    /// Total fare across all trips, in cents.
    pub fare_cents: u64,
    /// Trips charged a default fare.
    pub default_fares: usize,
    /// Trips missing a tap-off time.
    pub missing_tap_offs: usize,
    /// Trip counts per inferred line.
    pub by_line: BTreeMap<Line, usize>,
}

impl SpendSummary {
    pub fn trips_on(&self, line: Line) -> usize {
        self.by_line.get(&line).copied().unwrap_or(0)
    }
}

pub fn summarize(records: &[TripRecord]) -> SpendSummary {
    let mut summary = SpendSummary {
        trips: records.len(),
        ..SpendSummary::default()
    };
    for record in records {
        summary.fare_cents += u64::from(record.fare_cents);
        if record.is_default_fare {
            summary.default_fares += 1;
        }
        if record.tap_off_time.is_none() {
            summary.missing_tap_offs += 1;
        }
        *summary.by_line.entry(record.line).or_insert(0) += 1;
    }
    summary
}
