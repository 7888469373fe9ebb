use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use opal_model::Line;

use crate::types::ParseRunResult;

pub fn print_summary(result: &ParseRunResult) {
    println!("Statement: {}", result.file.display());
    println!("Format: {}", result.format);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Trips"),
        header_cell("Fare"),
        header_cell("Default fares"),
        header_cell("Missing tap-offs"),
        header_cell("Train"),
        header_cell("Bus"),
        header_cell("Ferry"),
        header_cell("Other"),
    ]);
    apply_table_style(&mut table);
    for column in 0..8 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    let summary = &result.summary;
    table.add_row(vec![
        Cell::new(summary.trips),
        Cell::new(format_fare(summary.fare_cents)),
        Cell::new(summary.default_fares),
        Cell::new(summary.missing_tap_offs),
        Cell::new(summary.trips_on(Line::Train)),
        Cell::new(summary.trips_on(Line::Bus)),
        Cell::new(summary.trips_on(Line::Ferry)),
        Cell::new(summary.trips_on(Line::Unknown)),
    ]);
    println!("{table}");

    if result.parsed.has_warnings() {
        let mut warnings = Table::new();
        warnings.set_header(vec![header_cell("Row"), header_cell("Warning")]);
        apply_table_style(&mut warnings);
        align_column(&mut warnings, 0, CellAlignment::Right);
        for warning in &result.parsed.warnings {
            warnings.add_row(vec![
                Cell::new(warning.index),
                Cell::new(warning.kind.message()),
            ]);
        }
        println!("{warnings}");
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn format_fare(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fare_formatting() {
        assert_eq!(format_fare(0), "$0.00");
        assert_eq!(format_fare(5), "$0.05");
        assert_eq!(format_fare(300), "$3.00");
        assert_eq!(format_fare(12345), "$123.45");
    }
}
