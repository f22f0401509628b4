//! Terminal tables for parameters and reports.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use fss_model::{Layout, ParameterSet, format_number};
use fss_report::{ExportLocation, ExportOutcome, Report};

pub fn print_layouts() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Layout"),
        header_cell("Name"),
        header_cell("Machines"),
        header_cell("Parameters"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for layout in Layout::ALL {
        let machines = layout
            .machines()
            .iter()
            .map(|machine| format!("{} ({})", machine.as_str(), machine.label()))
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            key_cell(layout.as_str()),
            Cell::new(layout.label()),
            Cell::new(machines),
            Cell::new(layout.parameters().len()),
        ]);
    }
    println!("{table}");
}

pub fn print_parameters(parameters: &ParameterSet) {
    println!("Parameters: {}", parameters.layout().label());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Label"),
        header_cell("Value"),
        header_cell("Unit"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for (spec, value) in parameters.iter() {
        let changed = value.to_bits() != spec.default.to_bits();
        table.add_row(vec![
            key_cell(spec.name),
            Cell::new(spec.label),
            value_cell(value, changed),
            dim_cell(spec.unit),
        ]);
    }
    println!("{table}");
}

pub fn print_report(report: &Report) {
    println!("{}", report.title);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Metric"),
        header_cell("Process"),
        header_cell("Value"),
    ]);
    apply_report_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for section in &report.sections {
        for (index, line) in section.lines.iter().enumerate() {
            let heading = if index == 0 {
                Cell::new(section.heading).add_attribute(Attribute::Bold)
            } else {
                Cell::new("")
            };
            let process = line.label.map_or_else(|| dim_cell("-"), Cell::new);
            table.add_row(vec![heading, process, Cell::new(&line.value)]);
        }
    }
    println!("{table}");
}

pub fn print_export(outcome: &ExportOutcome) {
    match outcome {
        ExportOutcome::Delivered(receipt) => match &receipt.location {
            ExportLocation::Saved(path) => println!("Exported: {}", path.display()),
            ExportLocation::Shared => println!("Shared: {}", receipt.file_name),
        },
        ExportOutcome::Failed { reason } => eprintln!("Export failed: {reason}"),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_report_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn key_cell(name: &str) -> Cell {
    Cell::new(name)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn value_cell(value: f64, changed: bool) -> Cell {
    let cell = Cell::new(format_number(value));
    if value.is_nan() {
        cell.fg(Color::Red).add_attribute(Attribute::Bold)
    } else if changed {
        cell.fg(Color::Yellow)
    } else {
        cell
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
