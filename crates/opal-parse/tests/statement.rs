//! End-to-end statement parsing tests.

use opal_parse::{
    Line, ParseOptions, StatementFormat, StopDirectory, parse_csv, parse_html, parse_statement,
    summarize,
};

const STATEMENT_CSV: &str = "\
tap_on_time,tap_off_time,fare,mode,from_stop,to_stop
2021-04-03 09:00,2021-04-03 09:30,3.00,Train,Station A,Station B
2021-04-05 09:00,,default fare,Bus,Stop X,
2021-04-03 09:00,2021-04-03 09:30,3.00,Train,Station A,Station B
";

const STATEMENT_HTML: &str = "<table>\
<tr><th>tap_on_time</th><th>tap_off_time</th><th>fare</th><th>mode</th><th>from_stop</th><th>to_stop</th></tr>\
<tr><td>2021-04-03 09:00</td><td>2021-04-03 09:30</td><td>3.00</td><td>Train</td><td>Station A</td><td>Station B</td></tr>\
<tr><td>2021-04-05 09:00</td><td></td><td>default fare</td><td>Bus</td><td>Stop X</td><td></td></tr>\
</table>";

#[test]
fn csv_statement_parses_with_dst_dedup_and_warnings() {
    let parsed = parse_csv(STATEMENT_CSV, &ParseOptions::default()).expect("parse");

    assert_eq!(parsed.records.len(), 2);
    // Row 1 predates Sydney's daylight-saving end, row 2 follows it.
    let first_on = parsed.records[0].tap_on_time.as_deref().expect("tap on");
    let second_on = parsed.records[1].tap_on_time.as_deref().expect("tap on");
    assert!(first_on.ends_with("+11:00"), "got {first_on}");
    assert!(second_on.ends_with("+10:00"), "got {second_on}");

    assert!(parsed.records[1].is_default_fare);
    assert_eq!(parsed.records[0].fare_cents, 300);
    assert_eq!(parsed.records[0].line, Line::Train);
    assert_eq!(parsed.records[1].line, Line::Bus);

    let messages: Vec<_> = parsed.warnings.iter().map(|w| w.kind.message()).collect();
    assert!(messages.contains(&"missing tap off"));
    assert!(messages.contains(&"default fare charged"));
    assert!(messages.contains(&"duplicate row"));
}

#[test]
fn html_statement_matches_csv_output() {
    let from_csv = parse_csv(STATEMENT_CSV, &ParseOptions::default()).expect("csv");
    let from_html = parse_html(STATEMENT_HTML, &ParseOptions::default()).expect("html");

    // The HTML fixture omits the duplicate third row; compare the shared rows.
    assert_eq!(from_html.records, from_csv.records);
    assert_eq!(from_html.warnings.len(), 2);
}

#[test]
fn format_discriminator_routes_to_the_right_adapter() {
    let parsed = parse_statement(STATEMENT_HTML, StatementFormat::Html, &ParseOptions::default())
        .expect("parse");
    assert_eq!(parsed.records.len(), 2);

    // The same bytes under the CSV adapter are one long header and no rows.
    let as_csv = parse_statement(STATEMENT_HTML, StatementFormat::Csv, &ParseOptions::default())
        .expect("tokenizes, just uselessly");
    assert!(as_csv.records.is_empty());
}

#[test]
fn htmlless_document_fails_structurally() {
    let result = parse_html("<p>nothing tabular</p>", &ParseOptions::default());
    assert!(result.is_err());
}

#[test]
fn coordinates_attach_only_for_known_stops() {
    let csv = "tap_on_time,fare,from_stop,to_stop\n2021-04-03 09:00,3.00,Central,Station B\n";
    let parsed = parse_csv(csv, &ParseOptions::default()).expect("parse");
    let record = &parsed.records[0];
    assert_eq!(record.from_lat, Some(-33.87));
    assert!(record.to_lat.is_none());

    // An empty directory still parses, just without enrichment.
    let bare = ParseOptions::default().with_stops(StopDirectory::default());
    let parsed = parse_csv(csv, &bare).expect("parse");
    assert!(parsed.records[0].from_lat.is_none());
}

#[test]
fn alternate_zone_changes_rendered_offsets() {
    let options = ParseOptions::default().with_timezone(chrono_tz::Australia::Perth);
    let parsed = parse_csv(STATEMENT_CSV, &options).expect("parse");
    // Perth has no daylight saving; both rows render +08:00.
    for record in &parsed.records {
        let tap_on = record.tap_on_time.as_deref().expect("tap on");
        assert!(tap_on.ends_with("+08:00"), "got {tap_on}");
    }
}

#[test]
fn summary_aggregates_parsed_records() {
    let parsed = parse_csv(STATEMENT_CSV, &ParseOptions::default()).expect("parse");
    let summary = summarize(&parsed.records);
    assert_eq!(summary.trips, 2);
    assert_eq!(summary.fare_cents, 300);
    assert_eq!(summary.default_fares, 1);
    assert_eq!(summary.trips_on(Line::Train), 1);
    assert_eq!(summary.trips_on(Line::Bus), 1);
}
