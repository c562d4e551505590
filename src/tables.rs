use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{
        chart::{RenderModel, Rgb},
        dashboard::Dashboard,
    },
    fmt::Fixed,
    quantity::rate::KilowattHourRate,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

#[must_use]
pub fn build_summary_table(dashboard: &Dashboard) -> Table {
    let mut table = new_table();
    table.set_header(vec!["", "Fecha", "Precio"]);
    for card in &dashboard.cards {
        table.add_row(vec![
            Cell::new(card.title),
            Cell::new(&card.date).add_attribute(Attribute::Dim),
            Cell::new(card.price).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Hourly prices colored the same way as the chart bars.
///
/// Only the highlighted bar is marked, even when its hour repeats on a daylight saving day.
#[must_use]
pub fn build_prices_table(chart: &RenderModel) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Inicio", "Fin", "Precio", ""]);
    let current = chart.bars.iter().position(|bar| bar.hour == chart.highlight.hour);
    for (index, bar) in chart.bars.iter().enumerate() {
        let is_current = current == Some(index);
        let price = KilowattHourRate::from(bar.price);
        let mut price = Cell::new(format!("{} €/kWh", Fixed::new(price.0, 3)))
            .set_alignment(CellAlignment::Right)
            .fg(to_color(bar.fill));
        if is_current {
            price = price.add_attribute(Attribute::Bold);
        }
        table.add_row(vec![
            Cell::new(format!("{:02}:00", bar.hour)),
            Cell::new(format!("{:02}:00", (bar.hour + 1) % 24)).add_attribute(Attribute::Dim),
            price,
            Cell::new(if is_current { "ahora" } else { "" }).fg(Color::Blue),
        ]);
    }
    table
}

const fn to_color(rgb: Rgb) -> Color {
    Color::Rgb { r: rgb.0, g: rgb.1, b: rgb.2 }
}
