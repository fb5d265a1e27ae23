use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tlxml_cli::pipeline::ConversionOutcome;

pub fn print_summary(outcome: &ConversionOutcome) {
    println!("Success!");
    println!("{}", summary_table(outcome));
}

fn summary_table(outcome: &ConversionOutcome) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Item"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new("Input"),
        Cell::new(outcome.input.display()),
    ]);
    table.add_row(vec![
        Cell::new("Output"),
        Cell::new(outcome.output.display()),
    ]);
    table.add_row(vec![Cell::new("Mode"), Cell::new(outcome.mode.label())]);
    table.add_row(vec![Cell::new("Data rows"), count_cell(outcome.data_rows)]);
    table.add_row(vec![
        Cell::new(outcome.mode.label()),
        count_cell(outcome.entries),
    ]);
    let skipped = outcome.skipped();
    let skipped_cell = if skipped > 0 {
        count_cell(skipped).fg(Color::Yellow)
    } else {
        count_cell(skipped)
    };
    table.add_row(vec![Cell::new("Skipped"), skipped_cell]);
    table.add_row(vec![Cell::new("Bytes"), count_cell(outcome.bytes)]);
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    Cell::new(count).set_alignment(CellAlignment::Right)
}
