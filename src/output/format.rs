use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::core::AttendanceStatus;

/// Attendance-rate badge thresholds: green from 90%, yellow from 80%.
pub(super) fn rate_color(pct: i64) -> Color {
    if pct >= 90 {
        Color::Green
    } else if pct >= 80 {
        Color::Yellow
    } else {
        Color::Red
    }
}

pub(super) fn status_color(status: AttendanceStatus) -> Color {
    match status {
        AttendanceStatus::Present => Color::Green,
        AttendanceStatus::Late => Color::Yellow,
        AttendanceStatus::Absent => Color::Red,
    }
}

pub(super) fn styled_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

pub(super) fn right_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text).set_alignment(CellAlignment::Right);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Create a table with the standard preset, inner borders, and normalized header separator.
pub(super) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_color_thresholds() {
        assert_eq!(rate_color(100), Color::Green);
        assert_eq!(rate_color(90), Color::Green);
        assert_eq!(rate_color(89), Color::Yellow);
        assert_eq!(rate_color(80), Color::Yellow);
        assert_eq!(rate_color(79), Color::Red);
        assert_eq!(rate_color(0), Color::Red);
    }

    #[test]
    fn status_colors() {
        assert_eq!(status_color(AttendanceStatus::Present), Color::Green);
        assert_eq!(status_color(AttendanceStatus::Late), Color::Yellow);
        assert_eq!(status_color(AttendanceStatus::Absent), Color::Red);
    }
}
