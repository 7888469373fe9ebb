use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono_tz::Tz;
use comfy_table::Table;
use tracing::{debug, info, info_span, trace};

use opal_cli::logging::redact_value;
use opal_ingest::StatementFormat;
use opal_model::StopDirectory;
use opal_parse::{ParseOptions, parse_statement, summarize};

use crate::cli::{FormatArg, ParseArgs};
use crate::summary::apply_table_style;
use crate::types::ParseRunResult;

pub fn run_parse(args: &ParseArgs) -> Result<ParseRunResult> {
    let span = info_span!("parse", file = %args.file.display());
    let _guard = span.enter();

    let format = resolve_format(args)?;
    let timezone = resolve_timezone(args.timezone.as_deref())?;
    let input = fs::read_to_string(&args.file)
        .with_context(|| format!("read statement file {}", args.file.display()))?;
    debug!(%format, %timezone, bytes = input.len(), "statement loaded");

    let mut options = ParseOptions::default().with_timezone(timezone);
    if args.no_stops {
        options = options.with_stops(StopDirectory::default());
    }

    let parsed = parse_statement(&input, format, &options)
        .with_context(|| format!("parse statement {}", args.file.display()))?;
    for warning in &parsed.warnings {
        debug!(index = warning.index, message = warning.kind.message(), "row warning");
    }
    for record in &parsed.records {
        trace!(
            from = redact_value(&record.from_stop),
            to = redact_value(&record.to_stop),
            line = %record.line,
            "record"
        );
    }
    info!(
        records = parsed.record_count(),
        warnings = parsed.warning_count(),
        "statement parsed"
    );

    let summary = summarize(&parsed.records);
    Ok(ParseRunResult {
        file: args.file.clone(),
        format,
        parsed,
        summary,
    })
}

pub fn run_stops() -> Result<()> {
    let stops = StopDirectory::builtin();
    let mut table = Table::new();
    table.set_header(vec!["Stop", "Latitude", "Longitude"]);
    apply_table_style(&mut table);
    for (name, coords) in stops.iter_sorted() {
        table.add_row(vec![
            name.to_string(),
            coords.lat.to_string(),
            coords.lng.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn resolve_format(args: &ParseArgs) -> Result<StatementFormat> {
    if let Some(format) = args.format {
        return Ok(match format {
            FormatArg::Csv => StatementFormat::Csv,
            FormatArg::Html => StatementFormat::Html,
        });
    }
    format_from_extension(&args.file)
}

fn format_from_extension(path: &Path) -> Result<StatementFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("csv") | Some("txt") => Ok(StatementFormat::Csv),
        Some("html") | Some("htm") => Ok(StatementFormat::Html),
        _ => bail!(
            "cannot infer format of {}; pass --format csv|html",
            path.display()
        ),
    }
}

fn resolve_timezone(name: Option<&str>) -> Result<Tz> {
    match name {
        Some(name) => name
            .parse::<Tz>()
            .map_err(|_| anyhow::anyhow!("unknown timezone: {name}")),
        None => Ok(chrono_tz::Australia::Sydney),
    }
}
