use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roster_cli::report::{CheckReport, ResolveReport, status_label};
use roster_map::MappingStatus;
use roster_model::{FieldName, MappingResult};

pub fn print_fields() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Type"),
        header_cell("Checked"),
        header_cell("Resolved"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Center);
    for field in FieldName::ALL {
        let field_type = field.field_type();
        table.add_row(vec![
            Cell::new(field.as_str()),
            Cell::new(field_type.as_str()),
            flag_cell(field_type.has_validator()),
            flag_cell(field_type.is_resolvable()),
        ]);
    }
    println!("{table}");
}

pub fn print_check(report: &CheckReport) {
    println!("Sheet: {}", report.sheet);
    println!("Country: {}", report.country);
    println!("Data rows: {}", report.data_rows);
    if !report.has_errors() {
        println!("No problems found.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Problem"), header_cell("Description")]);
    apply_table_style(&mut table);
    for kind in &report.errors {
        let color = if kind.is_identifier_kind() {
            Color::Red
        } else {
            Color::Yellow
        };
        table.add_row(vec![
            Cell::new(kind.as_str())
                .fg(color)
                .add_attribute(Attribute::Bold),
            Cell::new(kind.description()),
        ]);
    }
    println!("{table}");
}

pub fn print_resolve(report: &ResolveReport) {
    println!("Sheet: {}", report.sheet);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Header"),
        header_cell("Mapped to"),
        header_cell("Status"),
        header_cell("Values"),
        header_cell("Mapped"),
        header_cell("People"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Right);
    for column in &report.columns {
        let selected = column.status != MappingStatus::Unselected;
        table.add_row(vec![
            dim_cell(column.index),
            Cell::new(column.header.as_deref().unwrap_or("-")),
            if selected {
                Cell::new(&column.label)
            } else {
                dim_cell("-")
            },
            status_cell(column.status),
            values_cell(column.distinct_values, &column.samples),
            mapping_cell(column.mapping, |m| m.num_mapped_to),
            mapping_cell(column.mapping, |m| m.num_people),
        ]);
    }
    println!("{table}");
    if let Some(reason) = &report.unavailable {
        eprintln!("Directory unavailable: {reason}");
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
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

fn status_cell(status: MappingStatus) -> Cell {
    let label = status_label(&status);
    match status {
        MappingStatus::Mapped(_) | MappingStatus::Ready => Cell::new(label).fg(Color::Green),
        MappingStatus::NeedsConfig | MappingStatus::NeedsMapping => Cell::new(label)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold),
        MappingStatus::Unselected => dim_cell(label),
    }
}

fn values_cell(distinct: usize, samples: &[String]) -> Cell {
    if distinct == 0 {
        return dim_cell("(empty)");
    }
    let mut text = samples.join(", ");
    if distinct > samples.len() {
        text.push_str(&format!(" and {} more", distinct - samples.len()));
    }
    Cell::new(text)
}

fn mapping_cell(mapping: Option<MappingResult>, count: fn(&MappingResult) -> usize) -> Cell {
    match mapping {
        Some(result) if count(&result) > 0 => Cell::new(count(&result)),
        Some(result) => Cell::new(count(&result)).fg(Color::Red),
        None => dim_cell("-"),
    }
}

fn flag_cell(flag: bool) -> Cell {
    if flag {
        Cell::new("yes").fg(Color::Green)
    } else {
        dim_cell("-")
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
