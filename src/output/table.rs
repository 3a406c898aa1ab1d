use chrono::{NaiveDate, NaiveTime};
use comfy_table::Cell;

use crate::consts::UNKNOWN;
use crate::core::{
    AttendanceRecord, AttendanceStatus, ClassInfo, DateInput, FormatMode, ReportRow, Role,
    RosterRow, Student, Summary, format_date, relative_date,
};
use crate::output::format::{create_styled_table, header_cell, rate_color, right_cell, status_color, styled_cell};

#[derive(Debug, Clone, Copy)]
pub(crate) struct TableOptions {
    pub(crate) role: Role,
    pub(crate) use_color: bool,
}

/// Render a wall-clock time through the role-aware formatter so the viewer's
/// 12/24-hour convention applies. `-` for missing marks.
fn time_cell_text(date: NaiveDate, time: Option<NaiveTime>, role: Role) -> String {
    match time {
        Some(t) => format_date(&DateInput::from(date.and_time(t)), FormatMode::Time, role),
        None => "-".to_string(),
    }
}

fn class_name(classes: &[ClassInfo], id: u32) -> String {
    classes
        .iter()
        .find(|c| c.id == id)
        .map_or_else(|| UNKNOWN.to_string(), |c| c.name.clone())
}

fn status_cell(status: AttendanceStatus, use_color: bool) -> Cell {
    let color = use_color.then(|| status_color(status));
    styled_cell(status.label(), color, false)
}

/// Single-day roster. The admin view carries the full column set; the teacher
/// view drops the email column.
pub(crate) fn print_roster_table(
    rows: &[RosterRow],
    class: Option<&ClassInfo>,
    date: NaiveDate,
    opts: TableOptions,
) {
    let scope = class.map_or_else(
        || "All Classes".to_string(),
        |c| format!("{} ({})", c.name, c.teacher),
    );
    let day_label = relative_date(&DateInput::from(date), opts.role);
    println!("\n  {scope} - {day_label}\n");

    let show_email = opts.role == Role::Admin;
    let c = opts.use_color;

    let mut table = create_styled_table();
    let mut header = vec![header_cell("Student", c), header_cell("ID", c)];
    if show_email {
        header.push(header_cell("Email", c));
    }
    header.extend([header_cell("Status", c), header_cell("In", c), header_cell("Out", c)]);
    table.set_header(header);

    for row in rows {
        let (time_in, time_out) = row
            .record
            .as_ref()
            .map_or((None, None), |r| (r.time_in, r.time_out));
        let mut cells = vec![
            Cell::new(&row.student.name),
            Cell::new(&row.student.student_id),
        ];
        if show_email {
            cells.push(Cell::new(&row.student.email));
        }
        cells.extend([
            status_cell(row.status(), c),
            right_cell(&time_cell_text(date, time_in, opts.role), None, false),
            right_cell(&time_cell_text(date, time_out, opts.role), None, false),
        ]);
        table.add_row(cells);
    }

    println!("{table}");
    print_presence_line(rows, c);
}

/// "N of M students present (P%)" line under the roster, Late counting as
/// present like the original summary card.
fn print_presence_line(rows: &[RosterRow], use_color: bool) {
    let total = rows.len();
    let present = rows
        .iter()
        .filter(|r| r.status() != AttendanceStatus::Absent)
        .count();
    let pct = if total == 0 {
        0
    } else {
        (present as f64 / total as f64 * 100.0).round() as i64
    };
    if use_color {
        println!("\n  {present} of {total} students present (\x1b[36m{pct}%\x1b[0m)\n");
    } else {
        println!("\n  {present} of {total} students present ({pct}%)\n");
    }
}

/// A single student's own attendance history, dated with relative labels
/// where the role allows them.
pub(crate) fn print_history_table(
    history: &[AttendanceRecord],
    student: &Student,
    classes: &[ClassInfo],
    opts: TableOptions,
) {
    println!("\n  Attendance for {} ({})\n", student.name, student.student_id);

    let c = opts.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Date", c),
        header_cell("Class", c),
        header_cell("Status", c),
        header_cell("In", c),
        header_cell("Out", c),
    ]);

    for record in history {
        let date = record.date();
        let day_label = relative_date(&DateInput::from(date), opts.role);
        table.add_row(vec![
            Cell::new(day_label),
            Cell::new(class_name(classes, record.class_id)),
            status_cell(record.status, c),
            right_cell(&time_cell_text(date, record.time_in, opts.role), None, false),
            right_cell(&time_cell_text(date, record.time_out, opts.role), None, false),
        ]);
    }

    println!("{table}");
}

/// Per-student totals over a window, with the attendance-rate badge colors
/// (green >= 90, yellow >= 80, red below).
pub(crate) fn print_report_table(rows: &[ReportRow], heading: &str, opts: TableOptions) {
    println!("\n  Attendance Report: {heading}\n");

    let c = opts.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Student", c),
        header_cell("ID", c),
        header_cell("Present", c),
        header_cell("Absent", c),
        header_cell("Late", c),
        header_cell("Attendance", c),
    ]);

    for row in rows {
        let pct = row.totals.percentage();
        let color = c.then(|| rate_color(pct));
        table.add_row(vec![
            Cell::new(&row.student.name),
            Cell::new(&row.student.student_id),
            right_cell(&row.totals.present.to_string(), None, false),
            right_cell(&row.totals.absent.to_string(), None, false),
            right_cell(&row.totals.late.to_string(), None, false),
            right_cell(&format!("{pct}%"), color, true),
        ]);
    }

    println!("{table}");
}

/// Overall distribution table plus the attendance-rate line.
pub(crate) fn print_summary_table(summary: &Summary, heading: &str, opts: TableOptions) {
    println!("\n  Attendance Summary: {heading}\n");

    let c = opts.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Status", c),
        header_cell("Marks", c),
        header_cell("Share", c),
    ]);

    let lines = [
        ("Present", summary.present, summary.present_pct(), comfy_table::Color::Green),
        ("Absent", summary.absent, summary.absent_pct(), comfy_table::Color::Red),
        ("Late", summary.late, summary.late_pct(), comfy_table::Color::Yellow),
    ];
    for (label, count, pct, color) in lines {
        table.add_row(vec![
            styled_cell(label, c.then_some(color), false),
            right_cell(&count.to_string(), None, false),
            right_cell(&format!("{pct}%"), None, false),
        ]);
    }

    println!("{table}");

    let rate = summary.attendance_rate();
    if c {
        let color = match rate_color(rate) {
            comfy_table::Color::Green => "\x1b[32m",
            comfy_table::Color::Yellow => "\x1b[33m",
            _ => "\x1b[31m",
        };
        println!("\n  {} marks total | attendance rate {color}{rate}%\x1b[0m\n", summary.total());
    } else {
        println!("\n  {} marks total | attendance rate {rate}%\n", summary.total());
    }
}
