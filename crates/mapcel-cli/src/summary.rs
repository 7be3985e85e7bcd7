use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::{DatasetSummary, RunResult};

/// Maximum validation errors listed per dataset.
const MAX_ERRORS_PER_DATASET: usize = 20;

pub fn print_summary(result: &RunResult) {
    if !result.datasets.is_empty() {
        println!("{}", dataset_table(&result.datasets));
    }
    if let Some(table) = error_table(&result.datasets) {
        println!();
        println!("Validation errors:");
        println!("{table}");
    }
    for output in &result.outputs {
        println!("Wrote {}", output.display());
    }
    if let Some(reason) = &result.blocked {
        eprintln!("{reason}");
    }
    if !result.failures.is_empty() {
        eprintln!("Errors:");
        for failure in &result.failures {
            eprintln!("- {}: {}", failure.path.display(), failure.message);
        }
    }
}

pub fn dataset_table(datasets: &[DatasetSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dataset"),
        header_cell("Rows"),
        header_cell("Latitude"),
        header_cell("Longitude"),
        header_cell("Features"),
        header_cell("Errors"),
        header_cell("Color"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);

    for summary in datasets {
        table.add_row(vec![
            name_cell(summary),
            Cell::new(summary.rows),
            column_cell(summary.lat_column.as_deref()),
            column_cell(summary.long_column.as_deref()),
            summary.features.map_or_else(|| dim_cell("-"), Cell::new),
            count_cell(summary.errors.len()),
            Cell::new(&summary.color),
        ]);
    }
    table
}

pub fn error_table(datasets: &[DatasetSummary]) -> Option<Table> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dataset"),
        header_cell("Row"),
        header_cell("Column"),
        header_cell("Value"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    let mut any = false;
    for summary in datasets {
        for error in summary.errors.iter().take(MAX_ERRORS_PER_DATASET) {
            any = true;
            let row = if error.is_table_level() {
                dim_cell("-")
            } else {
                Cell::new(error.row)
            };
            table.add_row(vec![
                Cell::new(&summary.name),
                row,
                Cell::new(&error.column),
                error.value.as_deref().map_or_else(|| dim_cell("(missing)"), Cell::new),
                Cell::new(&error.message).fg(Color::Red),
            ]);
        }
        let hidden = summary.errors.len().saturating_sub(MAX_ERRORS_PER_DATASET);
        if hidden > 0 {
            table.add_row(vec![
                Cell::new(&summary.name),
                dim_cell("..."),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell(format!("{hidden} more")),
            ]);
        }
    }
    any.then_some(table)
}

fn apply_table_style(table: &mut Table) {
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

fn name_cell(summary: &DatasetSummary) -> Cell {
    let cell = Cell::new(&summary.name).add_attribute(Attribute::Bold);
    if summary.is_valid() {
        cell.fg(Color::Green)
    } else {
        cell.fg(Color::Red)
    }
}

fn column_cell(column: Option<&str>) -> Cell {
    match column {
        Some(name) => Cell::new(name),
        None => Cell::new("not found").fg(Color::Yellow),
    }
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
