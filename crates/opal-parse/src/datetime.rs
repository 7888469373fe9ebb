//! Zone-aware timestamp parsing for statement fields.
//!
//! Statement exports mix fully-qualified ISO 8601 values with zone-naive
//! wall-clock text. Naive values are interpreted in the statement zone and
//! serialized back out with that zone's UTC offset *at that instant*, so the
//! same wall clock legitimately produces different offsets on either side of
//! a daylight-saving transition.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone};
use chrono_tz::Tz;

/// Zone-naive layouts accepted before the fallback pattern.
const ISO_NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// The fixed fallback pattern used by statement exports (`2021-04-03 09:00`).
const FALLBACK_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parse a timestamp field, localizing naive input in `zone`.
///
/// Returns an RFC 3339 string carrying the zone's UTC offset at that
/// instant, or `None` for absent, empty, or unparseable input. This function
/// is total; bad input never propagates an error.
pub fn parse_zoned(value: &str, zone: Tz) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Fully-qualified ISO input keeps its instant and is re-expressed in
    // the statement zone.
    if let Ok(fixed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(format_zoned(fixed.with_timezone(&zone)));
    }

    let naive = parse_naive(trimmed)?;
    // Ambiguous wall clocks (DST end) resolve to the earlier offset; wall
    // clocks inside a DST gap have no instant and degrade to None.
    let zoned = zone.from_local_datetime(&naive).earliest()?;
    Some(format_zoned(zoned))
}

fn parse_naive(value: &str) -> Option<NaiveDateTime> {
    for format in ISO_NAIVE_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Some(datetime);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    NaiveDateTime::parse_from_str(value, FALLBACK_FORMAT).ok()
}

fn format_zoned(datetime: DateTime<Tz>) -> String {
    datetime.to_rfc3339_opts(SecondsFormat::Secs, false)
}
