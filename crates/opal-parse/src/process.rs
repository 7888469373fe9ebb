//! Row processing: normalization, deduplication, warning assembly.

use std::collections::HashSet;

use opal_model::{ParsedStatement, RawRow, RowWarning, TripRecord, WarningKind};
use tracing::debug;

use crate::normalize::normalize_row;
use crate::options::ParseOptions;

// Unit separator: cannot appear in legitimate field text, so joined keys
// never collide.
const KEY_DELIMITER: char = '\u{1f}';

fn dedup_key(record: &TripRecord) -> String {
    let mut key = String::new();
    for part in [
        record.tap_on_time.as_deref().unwrap_or(""),
        record.tap_off_time.as_deref().unwrap_or(""),
        &record.from_stop,
        &record.to_stop,
    ] {
        key.push_str(part);
        key.push(KEY_DELIMITER);
    }
    key
}

/// Normalize a sequence of raw rows into records and warnings.
///
/// Single pass, preserving input order for surviving records. Exact
/// duplicates (same tap-on, tap-off, from-stop, to-stop after
/// normalization) are skipped with a single `duplicate row` warning and no
/// further checks; surviving rows gain `missing tap off` and `default fare
/// charged` warnings as applicable. Warning indices are 0-based positions
/// in `rows`, counting skipped duplicates.
pub fn process_rows(rows: &[RawRow], options: &ParseOptions) -> ParsedStatement {
    let mut seen = HashSet::new();
    let mut records = Vec::new();
    let mut warnings = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        let record = normalize_row(row, options);
        if !seen.insert(dedup_key(&record)) {
            debug!(index, "skipping duplicate row");
            warnings.push(RowWarning::new(index, WarningKind::DuplicateRow));
            continue;
        }
        if record.tap_off_time.is_none() {
            warnings.push(RowWarning::new(index, WarningKind::MissingTapOff));
        }
        if record.is_default_fare {
            warnings.push(RowWarning::new(index, WarningKind::DefaultFare));
        }
        records.push(record);
    }

    debug!(
        records = records.len(),
        warnings = warnings.len(),
        "processed statement rows"
    );
    ParsedStatement { records, warnings }
}
