use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use gearforge::catalog::SlotCatalog;
use gearforge::search::{Combination, Totals};
use std::ops::Range;

const NAME_WIDTH: usize = 64;

/// Formats an integer with thousands separators: 1234567 -> "1,234,567".
pub fn format_gold(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn truncate_name(name: &str) -> String {
    if name.chars().count() > NAME_WIDTH {
        let head: String = name.chars().take(NAME_WIDTH - 3).collect();
        format!("{}...", head)
    } else {
        name.to_string()
    }
}

pub fn combination(combo: &Combination) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Item Name").add_attribute(Attribute::Bold),
        Cell::new("Gold"),
        Cell::new("DPS").fg(Color::Cyan),
        Cell::new("Stam"),
        Cell::new("Hit Rate"),
        Cell::new("Expertise"),
    ]);

    for i in 1..=5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for item in &combo.items {
        table.add_row(vec![
            Cell::new(truncate_name(&item.name)),
            Cell::new(format_gold(item.cost as i64)),
            Cell::new(format!("{:.2}", item.dps)).fg(Color::Cyan),
            Cell::new(item.stamina),
            Cell::new(item.hit_rating),
            Cell::new(item.expertise_rating),
        ]);
    }
    table
}

pub fn summary(t: &Totals) -> String {
    format!(
        "Total Cost: {} Gold, Total DPS: {:.2}, Total Stam: {}, Total Hit: {}, Total Expertise: {}",
        format_gold(t.cost),
        t.dps,
        t.stamina,
        t.hit,
        t.expertise
    )
}

pub fn slot_summary(catalog: &SlotCatalog) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec![
        Cell::new("Slot").add_attribute(Attribute::Bold),
        Cell::new("Items"),
        Cell::new("Best DPS").fg(Color::Cyan),
    ]);

    for i in 1..=2 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (i, slot) in catalog.slots().iter().enumerate() {
        let best = slot.iter().map(|item| item.dps).fold(f64::NEG_INFINITY, f64::max);
        table.add_row(vec![
            Cell::new(catalog.slot_id(i)),
            Cell::new(slot.len()),
            Cell::new(format!("{:.2}", best)),
        ]);
    }
    table
}

pub fn ranges(ranges: &[Range<u64>]) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec!["Worker", "Start", "End", "Count"]);

    for (i, r) in ranges.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i),
            Cell::new(r.start),
            Cell::new(r.end),
            Cell::new(r.end - r.start),
        ]);
    }
    table
}
