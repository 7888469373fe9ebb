//! HTML-table adapter: statement table dumps to raw rows.

use opal_model::RawRow;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Read the first `<table>` of an HTML document into raw row maps.
///
/// The table's first row supplies column keys (from `<th>` or `<td>` text,
/// trimmed); every later row becomes one map keyed by header at the same
/// column index. Cells beyond the header count are dropped, and rows with no
/// cells at all are skipped. Fails with [`IngestError::NoTable`] when the
/// document has no table.
pub fn read_rows(input: &str) -> Result<Vec<RawRow>> {
    let table_selector = Selector::parse("table").unwrap();
    let row_selector = Selector::parse("tr").unwrap();
    let header_selector = Selector::parse("th, td").unwrap();
    let cell_selector = Selector::parse("td").unwrap();

    let document = Html::parse_document(input);
    let table = document
        .select(&table_selector)
        .next()
        .ok_or(IngestError::NoTable)?;

    let mut table_rows = table.select(&row_selector);
    let headers: Vec<String> = match table_rows.next() {
        Some(header_row) => header_row
            .select(&header_selector)
            .map(cell_text)
            .collect(),
        None => Vec::new(),
    };

    let mut rows = Vec::new();
    for table_row in table_rows {
        let mut row = RawRow::new();
        for (idx, cell) in table_row.select(&cell_selector).enumerate() {
            let Some(key) = headers.get(idx) else {
                break;
            };
            row.insert(key.clone(), cell_text(cell));
        }
        if !row.is_empty() {
            rows.push(row);
        }
    }
    debug!(rows = rows.len(), columns = headers.len(), "read HTML statement");
    Ok(rows)
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_first_table_with_th_headers() {
        let html = "<html><body><table>\
            <tr><th>from_stop</th><th>to_stop</th></tr>\
            <tr><td> Central </td><td>Town Hall</td></tr>\
            </table></body></html>";
        let rows = read_rows(html).expect("read");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["from_stop"], "Central");
        assert_eq!(rows[0]["to_stop"], "Town Hall");
    }

    #[test]
    fn td_header_row_works_too() {
        let html = "<table><tr><td>mode</td></tr><tr><td>Bus</td></tr></table>";
        let rows = read_rows(html).expect("read");
        assert_eq!(rows[0]["mode"], "Bus");
    }

    #[test]
    fn skips_rows_without_cells() {
        let html = "<table>\
            <tr><th>mode</th></tr>\
            <tr></tr>\
            <tr><td>Ferry</td></tr>\
            </table>";
        let rows = read_rows(html).expect("read");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["mode"], "Ferry");
    }

    #[test]
    fn extra_cells_beyond_headers_are_dropped() {
        let html = "<table>\
            <tr><th>mode</th></tr>\
            <tr><td>Train</td><td>ignored</td></tr>\
            </table>";
        let rows = read_rows(html).expect("read");
        assert_eq!(rows[0].len(), 1);
    }

    #[test]
    fn only_the_first_table_is_read() {
        let html = "<table><tr><th>a</th></tr><tr><td>1</td></tr></table>\
            <table><tr><th>b</th></tr><tr><td>2</td></tr></table>";
        let rows = read_rows(html).expect("read");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["a"], "1");
    }

    #[test]
    fn document_without_table_is_an_error() {
        let result = read_rows("<html><body><p>no trips here</p></body></html>");
        assert!(matches!(result, Err(IngestError::NoTable)));
    }
}
