//! Delimited-text adapter: comma-separated statement text to raw rows.

use csv::ReaderBuilder;
use opal_model::RawRow;
use tracing::debug;

use crate::error::Result;

/// Read comma-separated statement text into raw row maps.
///
/// The first line supplies column keys. Standard quoting rules apply, so
/// embedded commas and newlines inside quoted fields are respected. Values
/// are trimmed of surrounding whitespace; blank lines are skipped. Rows may
/// be ragged: cells beyond the header count are dropped, and short rows
/// simply leave the trailing keys absent.
pub fn read_rows(input: &str) -> Result<Vec<RawRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_matches('\u{feff}').trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row = RawRow::new();
        for (idx, value) in record.iter().enumerate() {
            let Some(key) = headers.get(idx) else {
                // Extra cells beyond the header row are dropped.
                break;
            };
            row.insert(key.clone(), value.trim().to_string());
        }
        rows.push(row);
    }
    debug!(rows = rows.len(), columns = headers.len(), "read delimited statement");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_header_keyed_rows_with_trimming() {
        let rows = read_rows("from_stop, to_stop\n Central , Town Hall \n").expect("read");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["from_stop"], "Central");
        assert_eq!(rows[0]["to_stop"], "Town Hall");
    }

    #[test]
    fn respects_quoted_commas_and_newlines() {
        let rows = read_rows("from_stop,to_stop\n\"Central, Platform 1\",\"Town\nHall\"\n")
            .expect("read");
        assert_eq!(rows[0]["from_stop"], "Central, Platform 1");
        assert_eq!(rows[0]["to_stop"], "Town\nHall");
    }

    #[test]
    fn skips_blank_lines() {
        let rows = read_rows("from_stop,to_stop\nCentral,Town Hall\n\n\nWynyard,Central\n")
            .expect("read");
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn drops_extra_cells_and_leaves_missing_keys_absent() {
        let rows = read_rows("a,b\n1,2,3\n1\n").expect("read");
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[0]["b"], "2");
        assert_eq!(rows[1].len(), 1);
        assert!(!rows[1].contains_key("b"));
    }

    #[test]
    fn strips_byte_order_mark_from_first_header() {
        let rows = read_rows("\u{feff}from_stop,to_stop\nCentral,Wynyard\n").expect("read");
        assert_eq!(rows[0]["from_stop"], "Central");
    }

    #[test]
    fn header_only_input_yields_no_rows() {
        let rows = read_rows("from_stop,to_stop\n").expect("read");
        assert!(rows.is_empty());
    }
}
