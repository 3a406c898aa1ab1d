use std::fmt::Write;

use chrono::{NaiveDate, NaiveTime};

use crate::core::{AttendanceRecord, ClassInfo, DateInput, FormatMode, ReportRow, Role, RosterRow, format_date};

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

fn time_field(date: NaiveDate, time: Option<NaiveTime>, role: Role) -> String {
    match time {
        Some(t) => format_date(&DateInput::from(date.and_time(t)), FormatMode::Time, role),
        None => String::new(),
    }
}

pub(crate) fn output_roster_csv(rows: &[RosterRow], date: NaiveDate, role: Role) -> String {
    let date_str = format_date(&DateInput::from(date), FormatMode::Date, role);
    let mut out = String::new();
    out.push_str("student_id,name,email,date,status,time_in,time_out\n");
    for row in rows {
        let (time_in, time_out) = row
            .record
            .as_ref()
            .map_or((None, None), |r| (r.time_in, r.time_out));
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{}",
            csv_escape(&row.student.student_id),
            csv_escape(&row.student.name),
            csv_escape(&row.student.email),
            date_str,
            row.status().label(),
            time_field(date, time_in, role),
            time_field(date, time_out, role),
        );
    }
    out
}

pub(crate) fn output_report_csv(rows: &[ReportRow]) -> String {
    let mut out = String::new();
    out.push_str("student_id,name,present,absent,late,percentage\n");
    for row in rows {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{}",
            csv_escape(&row.student.student_id),
            csv_escape(&row.student.name),
            row.totals.present,
            row.totals.absent,
            row.totals.late,
            row.totals.percentage(),
        );
    }
    out
}

pub(crate) fn output_history_csv(
    history: &[AttendanceRecord],
    classes: &[ClassInfo],
    role: Role,
) -> String {
    let mut out = String::new();
    out.push_str("date,class,status,time_in,time_out\n");
    for record in history {
        let date = record.date();
        let class = classes
            .iter()
            .find(|c| c.id == record.class_id)
            .map_or("", |c| c.name.as_str());
        let _ = writeln!(
            out,
            "{},{},{},{},{}",
            format_date(&DateInput::from(date), FormatMode::Date, role),
            csv_escape(class),
            record.status.label(),
            time_field(date, record.time_in, role),
            time_field(date, record.time_out, role),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AttendanceStatus, Student, StudentTotals};

    #[test]
    fn csv_escape_quotes_fields_with_commas() {
        assert_eq!(csv_escape("plain"), "plain");
        assert_eq!(csv_escape("Doe, John"), "\"Doe, John\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn report_csv_header_and_row() {
        let rows = vec![ReportRow {
            student: Student {
                student_id: "STU001".to_string(),
                name: "John Doe".to_string(),
                email: "john.doe@school.edu".to_string(),
            },
            totals: StudentTotals {
                present: 28,
                absent: 2,
                late: 1,
            },
        }];
        let out = output_report_csv(&rows);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "student_id,name,present,absent,late,percentage");
        assert_eq!(lines[1], "STU001,John Doe,28,2,1,94");
    }

    #[test]
    fn roster_csv_empty_times_for_missing_record() {
        let rows = vec![RosterRow {
            student: Student {
                student_id: "STU002".to_string(),
                name: "Jane Smith".to_string(),
                email: "jane.smith@school.edu".to_string(),
            },
            record: None,
        }];
        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        let out = output_roster_csv(&rows, date, Role::Admin);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "student_id,name,email,date,status,time_in,time_out");
        assert_eq!(
            lines[1],
            "STU002,Jane Smith,jane.smith@school.edu,05-03-2026,Absent,,"
        );
    }

    #[test]
    fn roster_csv_time_follows_role_convention() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        let rows = vec![RosterRow {
            student: Student {
                student_id: "STU001".to_string(),
                name: "John Doe".to_string(),
                email: "john.doe@school.edu".to_string(),
            },
            record: Some(AttendanceRecord {
                student_id: "STU001".to_string(),
                class_id: 1,
                marked_at: date.and_hms_opt(8, 45, 0).unwrap(),
                time_in: NaiveTime::from_hms_opt(8, 45, 0),
                time_out: NaiveTime::from_hms_opt(15, 30, 0),
                status: AttendanceStatus::Present,
            }),
        }];
        let admin = output_roster_csv(&rows, date, Role::Admin);
        assert!(admin.contains(",08:45,15:30"));
        let student = output_roster_csv(&rows, date, Role::Student);
        assert!(student.contains(",08:45 AM,03:30 PM"));
    }
}
