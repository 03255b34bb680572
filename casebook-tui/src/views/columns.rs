//! Column builders shared by the dashboard pages.

use casebook_data::format::{display_row_date, format_currency};
use casebook_table::{Alignment, Badge, CellContent, Column, ColumnKind, Value};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

/// Sortable date column; rows carry `YYYY-MM-DD`, cells show `MM/DD/YYYY`.
pub fn date(key: &str, header: &str) -> Column {
    let field = key.to_string();
    Column::new(key, header, header_width(header, 10)).sortable().render(move |row| {
        match row.get_str(&field).filter(|s| !s.is_empty()) {
            Some(date) => CellContent::text(display_row_date(date)),
            None => CellContent::Placeholder,
        }
    })
}

/// Sortable, right-aligned currency column over a numeric field.
pub fn currency(key: &str, header: &str) -> Column {
    let field = key.to_string();
    Column::new(key, header, header_width(header, 12))
        .align(Alignment::Right)
        .sortable()
        .render(move |row| {
            match row.get(&field).and_then(Value::as_f64).and_then(Decimal::from_f64) {
                Some(amount) => CellContent::text(format_currency(amount)),
                None => CellContent::Placeholder,
            }
        })
}

/// Room for `header` plus its sort marker, at least `min`.
fn header_width(header: &str, min: u16) -> u16 {
    (header.chars().count() as u16 + 3).max(min)
}

/// Compliance flag icons.
pub fn badges() -> Column {
    Column::new("badges", "BADGES", 12).kind(ColumnKind::Badges(vec![
        Badge::new("email", "✉"),
        Badge::new("star", "★"),
        Badge::new("check", "✔"),
        Badge::new("thumb", "👍"),
        Badge::new("doc", "📄"),
    ]))
}
