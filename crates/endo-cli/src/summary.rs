use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use endo_core::EndoscopicConversion;
use endo_map::rule_for;
use endo_model::{FieldName, MediaKind};

pub fn print_conversion(manifest: &Path, conversion: &EndoscopicConversion) {
    println!("Manifest: {}", manifest.display());

    let mut attributes = Table::new();
    attributes.set_header(vec![
        header_cell("Tag"),
        header_cell("VR"),
        header_cell("Attribute"),
        header_cell("Value"),
    ]);
    apply_table_style(&mut attributes);
    align_column(&mut attributes, 1, CellAlignment::Center);
    for (tag, attribute) in conversion.attributes().iter() {
        attributes.add_row(vec![
            dim_cell(tag),
            Cell::new(attribute.vr),
            Cell::new(tag.keyword()),
            Cell::new(attribute.value.to_dicom_string()),
        ]);
    }
    if conversion.attributes().is_empty() {
        attributes.add_row(vec![
            dim_cell("-"),
            dim_cell("-"),
            dim_cell("no recognized fields"),
            dim_cell("-"),
        ]);
    }
    println!("{attributes}");

    let mut media = Table::new();
    media.set_header(vec![header_cell("Kind"), header_cell("#"), header_cell("Path")]);
    apply_table_style(&mut media);
    align_column(&mut media, 1, CellAlignment::Right);
    for kind in MediaKind::ALL {
        let files = conversion.files_of(kind);
        if files.is_empty() {
            media.add_row(vec![Cell::new(kind), dim_cell(0), dim_cell("-")]);
        }
        for (index, path) in files.iter().enumerate() {
            media.add_row(vec![
                Cell::new(kind),
                Cell::new(index + 1),
                Cell::new(path.display()),
            ]);
        }
    }
    println!("{media}");
}

pub fn print_fields() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Attribute"),
        header_cell("Tag"),
        header_cell("VR"),
        header_cell("Format"),
    ]);
    apply_table_style(&mut table);
    for field in FieldName::ALL {
        let rule = rule_for(field);
        let format = rule.expected_format().unwrap_or("-");
        for (tag, vr) in rule.outputs() {
            table.add_row(vec![
                Cell::new(field),
                Cell::new(tag.keyword()),
                dim_cell(tag),
                Cell::new(vr),
                dim_cell(format),
            ]);
        }
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
