//! Error types for statement ingestion.

use thiserror::Error;

/// Structural input errors from the format adapters.
///
/// Field-level problems (bad dates, odd fare text) are not errors; they
/// degrade to null/default values during normalization. An `IngestError`
/// means the document as a whole could not be reduced to rows.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Delimited input could not be tokenized at all.
    #[error("malformed delimited input: {message}")]
    MalformedDelimited { message: String },

    /// The HTML document contains no `<table>` element.
    #[error("no table element found in HTML input")]
    NoTable,
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        Self::MalformedDelimited {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
