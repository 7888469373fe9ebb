//! CLI argument definitions for the Opal statement parser.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "opal",
    version,
    about = "Opal statement parser - normalize transit card statements",
    long_about = "Parse Opal (Sydney transit) card statement exports into canonical\n\
                  trip records with deduplication and row-level warnings.\n\
                  Accepts CSV and HTML table statement dumps."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow row-level statement values (stops, times) in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse a statement file and report records, warnings, and spending.
    Parse(ParseArgs),

    /// List the built-in stop coordinate directory.
    Stops,
}

#[derive(Parser)]
pub struct ParseArgs {
    /// Path to the statement file (.csv, .html, or .htm).
    #[arg(value_name = "STATEMENT_FILE")]
    pub file: PathBuf,

    /// Input format (default: inferred from the file extension).
    #[arg(long = "format", value_enum)]
    pub format: Option<FormatArg>,

    /// IANA timezone for zone-naive timestamps (default: Australia/Sydney).
    #[arg(long = "timezone", value_name = "ZONE")]
    pub timezone: Option<String>,

    /// Skip stop-coordinate enrichment.
    #[arg(long = "no-stops")]
    pub no_stops: bool,

    /// Emit the full parse result as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Html,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
