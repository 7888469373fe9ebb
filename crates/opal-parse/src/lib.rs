//! Opal statement parsing.
//!
//! Turns raw statement text (CSV or HTML table dumps) into canonical trip
//! records plus row-level warnings. Pure data transformation: no I/O, no
//! shared state across calls, safe to invoke from any number of concurrent
//! callers.

pub mod datetime;
pub mod fare;
pub mod normalize;
pub mod options;
pub mod process;
pub mod summary;

pub use opal_ingest::{IngestError, StatementFormat};
pub use opal_model::{
    Coordinates, Line, ParsedStatement, RawRow, RowWarning, StopDirectory, TripRecord,
    WarningKind,
};
pub use options::ParseOptions;
pub use process::process_rows;
pub use summary::{SpendSummary, summarize};

use tracing::debug;

/// Parse a raw statement into records and warnings.
///
/// The caller picks the `format` and fetches the text; this function never
/// performs I/O. Malformed individual rows degrade to defaults and warnings;
/// only a structurally unusable document (untokenizable CSV, HTML without a
/// table) returns an error.
pub fn parse_statement(
    input: &str,
    format: StatementFormat,
    options: &ParseOptions,
) -> Result<ParsedStatement, IngestError> {
    let rows = opal_ingest::read_statement_rows(input, format)?;
    debug!(%format, rows = rows.len(), "parsing statement");
    Ok(process_rows(&rows, options))
}

/// Parse comma-separated statement text.
pub fn parse_csv(input: &str, options: &ParseOptions) -> Result<ParsedStatement, IngestError> {
    parse_statement(input, StatementFormat::Csv, options)
}

/// Parse an HTML statement table.
pub fn parse_html(input: &str, options: &ParseOptions) -> Result<ParsedStatement, IngestError> {
    parse_statement(input, StatementFormat::Html, options)
}
