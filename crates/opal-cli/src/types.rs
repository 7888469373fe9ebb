use std::path::PathBuf;

use opal_ingest::StatementFormat;
use opal_model::ParsedStatement;
use opal_parse::SpendSummary;

#[derive(Debug)]
pub struct ParseRunResult {
    pub file: PathBuf,
    pub format: StatementFormat,
    pub parsed: ParsedStatement,
    pub summary: SpendSummary,
}
