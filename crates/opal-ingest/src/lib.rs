pub mod delimited;
pub mod error;
pub mod html;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use error::{IngestError, Result};

use opal_model::RawRow;

/// Input format discriminator, chosen by the caller that fetched the bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementFormat {
    Csv,
    Html,
}

impl fmt::Display for StatementFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => f.write_str("csv"),
            Self::Html => f.write_str("html"),
        }
    }
}

/// Reduce raw statement text to a uniform sequence of row maps.
pub fn read_statement_rows(input: &str, format: StatementFormat) -> Result<Vec<RawRow>> {
    match format {
        StatementFormat::Csv => delimited::read_rows(input),
        StatementFormat::Html => html::read_rows(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_by_format() {
        let csv_rows =
            read_statement_rows("mode\nTrain\n", StatementFormat::Csv).expect("csv rows");
        let html_rows = read_statement_rows(
            "<table><tr><th>mode</th></tr><tr><td>Train</td></tr></table>",
            StatementFormat::Html,
        )
        .expect("html rows");
        assert_eq!(csv_rows, html_rows);
    }

    #[test]
    fn format_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&StatementFormat::Csv).unwrap(), "\"csv\"");
        let format: StatementFormat = serde_json::from_str("\"html\"").unwrap();
        assert_eq!(format, StatementFormat::Html);
    }
}
