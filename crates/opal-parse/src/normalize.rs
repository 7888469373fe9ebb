//! Row normalization: one raw row map to one canonical trip record.
//!
//! Statement exports disagree on column labels (`tap_on_time`, `tap_on`,
//! `"Tap On"`), so each canonical field resolves through an ordered alias
//! list against a case-insensitive view of the row. Unparseable sub-fields
//! degrade to their documented null/default value; normalization never
//! fails on a row.

use opal_model::{Line, RawRow, TripRecord};

use crate::datetime::parse_zoned;
use crate::fare::parse_fare;
use crate::options::ParseOptions;

// Alias lists per canonical field, in resolution priority order.
const TAP_ON_ALIASES: &[&str] = &["tap_on_time", "tap_on", "tap on"];
const TAP_OFF_ALIASES: &[&str] = &["tap_off_time", "tap_off", "tap off"];
const FARE_ALIASES: &[&str] = &["fare_cents", "fare"];
const MODE_ALIASES: &[&str] = &["mode"];
const FROM_STOP_ALIASES: &[&str] = &["from_stop", "from stop", "from"];
const TO_STOP_ALIASES: &[&str] = &["to_stop", "to stop", "to"];

/// Resolve a canonical field: the value under the first alias present in
/// the row, matched case-insensitively. A present-but-empty value wins over
/// a later alias.
fn resolve<'a>(row: &'a RawRow, aliases: &[&str]) -> Option<&'a str> {
    for alias in aliases {
        let hit = row
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(alias));
        if let Some((_, value)) = hit {
            return Some(value.as_str());
        }
    }
    None
}

/// Infer the transit category from mode text, falling back to the
/// origin-stop prefix (`T1` → train, `B10` → bus, `F2` → ferry).
pub fn infer_line(mode: &str, from_stop: &str) -> Line {
    let mode = mode.to_lowercase();
    if mode.contains("train") {
        return Line::Train;
    }
    if mode.contains("bus") {
        return Line::Bus;
    }
    if mode.contains("ferry") {
        return Line::Ferry;
    }
    stop_prefix_line(from_stop)
}

fn stop_prefix_line(stop: &str) -> Line {
    let mut chars = stop.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(second)) if second.is_ascii_digit() => {
            match first.to_ascii_lowercase() {
                't' => Line::Train,
                'b' => Line::Bus,
                'f' => Line::Ferry,
                _ => Line::Unknown,
            }
        }
        _ => Line::Unknown,
    }
}

/// Normalize one raw row into a canonical trip record.
///
/// Pure and total: no side effects, and any unparseable sub-field degrades
/// to null/default rather than raising.
pub fn normalize_row(row: &RawRow, options: &ParseOptions) -> TripRecord {
    let tap_on_time =
        resolve(row, TAP_ON_ALIASES).and_then(|value| parse_zoned(value, options.timezone));
    let tap_off_time =
        resolve(row, TAP_OFF_ALIASES).and_then(|value| parse_zoned(value, options.timezone));
    let fare = parse_fare(resolve(row, FARE_ALIASES));
    let from_stop = resolve(row, FROM_STOP_ALIASES).unwrap_or_default().to_string();
    let to_stop = resolve(row, TO_STOP_ALIASES).unwrap_or_default().to_string();
    let mode = resolve(row, MODE_ALIASES).unwrap_or_default().to_string();
    let line = infer_line(&mode, &from_stop);

    let from_coords = options.stops.coordinates(&from_stop);
    let to_coords = options.stops.coordinates(&to_stop);

    TripRecord {
        tap_on_time,
        tap_off_time,
        fare_cents: fare.cents,
        is_default_fare: fare.is_default,
        from_stop,
        to_stop,
        mode,
        line,
        from_lat: from_coords.map(|c| c.lat),
        from_lng: from_coords.map(|c| c.lng),
        to_lat: to_coords.map(|c| c.lat),
        to_lng: to_coords.map(|c| c.lng),
    }
}
