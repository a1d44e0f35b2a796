use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use varigrid_model::{ColumnRef, Feature, VariationAnalysis};

use crate::types::AnalyzeResult;

pub fn print_analysis(result: &AnalyzeResult) {
    println!("Grid: {}", result.grid_path.display());
    for path in &result.outputs {
        println!("Wrote: {}", path.display());
    }
    print_axes(&result.analysis);
}

pub fn print_axes(analysis: &VariationAnalysis) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Axis"),
        header_cell("Group"),
        header_cell("Color"),
        header_cell("Columns"),
        header_cell("Count"),
        header_cell("Pattern"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Right);
    for axis in &analysis.axes {
        if axis.is_empty() {
            table.add_row(vec![
                Cell::new(&axis.selection),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell("no data"),
                dim_cell(0),
                dim_cell("-"),
            ]);
            continue;
        }
        for group in &axis.groups {
            let columns: Vec<String> = group.columns.iter().map(ColumnRef::letters).collect();
            table.add_row(vec![
                Cell::new(&axis.selection),
                Cell::new(group.id.as_str()).add_attribute(Attribute::Bold),
                Cell::new(&group.color),
                Cell::new(columns.join(" ")),
                Cell::new(group.columns.len()),
                Cell::new(group.pattern.as_str()),
            ]);
        }
    }
    println!("{table}");
    println!(
        "{} group(s) across {} axis/axes",
        analysis.group_count(),
        analysis.axes.len()
    );
}

pub fn print_features(features: &[Feature]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Feature"), header_cell("Items")]);
    apply_table_style(&mut table);
    for feature in features {
        let items: Vec<&str> = feature.items.iter().map(|item| item.name.as_str()).collect();
        table.add_row(vec![
            Cell::new(&feature.name),
            Cell::new(items.join(", ")),
        ]);
    }
    println!("{table}");
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

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
