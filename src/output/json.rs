use chrono::{NaiveDate, NaiveTime};

use crate::core::{
    AttendanceRecord, ClassInfo, DateInput, FormatMode, ReportRow, Role, RosterRow, Summary,
    format_date, relative_date,
};

fn time_value(date: NaiveDate, time: Option<NaiveTime>, role: Role) -> serde_json::Value {
    match time {
        Some(t) => serde_json::json!(format_date(
            &DateInput::from(date.and_time(t)),
            FormatMode::Time,
            role
        )),
        None => serde_json::Value::Null,
    }
}

pub(crate) fn output_roster_json(rows: &[RosterRow], date: NaiveDate, role: Role) -> String {
    let date_label = relative_date(&DateInput::from(date), role);
    let output: Vec<serde_json::Value> = rows
        .iter()
        .map(|row| {
            serde_json::json!({
                "student_id": row.student.student_id,
                "name": row.student.name,
                "email": row.student.email,
                "date": date_label,
                "status": row.status(),
                "time_in": time_value(date, row.record.as_ref().and_then(|r| r.time_in), role),
                "time_out": time_value(date, row.record.as_ref().and_then(|r| r.time_out), role),
            })
        })
        .collect();
    serde_json::to_string_pretty(&output).unwrap_or_default()
}

pub(crate) fn output_report_json(rows: &[ReportRow], range_label: &str) -> String {
    let output: Vec<serde_json::Value> = rows
        .iter()
        .map(|row| {
            serde_json::json!({
                "student_id": row.student.student_id,
                "name": row.student.name,
                "range": range_label,
                "present": row.totals.present,
                "absent": row.totals.absent,
                "late": row.totals.late,
                "percentage": row.totals.percentage(),
            })
        })
        .collect();
    serde_json::to_string_pretty(&output).unwrap_or_default()
}

pub(crate) fn output_history_json(
    history: &[AttendanceRecord],
    classes: &[ClassInfo],
    role: Role,
) -> String {
    let output: Vec<serde_json::Value> = history
        .iter()
        .map(|record| {
            let date = record.date();
            serde_json::json!({
                "date": relative_date(&DateInput::from(date), role),
                "class": classes
                    .iter()
                    .find(|c| c.id == record.class_id)
                    .map(|c| c.name.as_str()),
                "status": record.status,
                "time_in": time_value(date, record.time_in, role),
                "time_out": time_value(date, record.time_out, role),
            })
        })
        .collect();
    serde_json::to_string_pretty(&output).unwrap_or_default()
}

pub(crate) fn output_summary_json(summary: &Summary, range_label: &str) -> String {
    let value = serde_json::json!({
        "range": range_label,
        "present": summary.present,
        "absent": summary.absent,
        "late": summary.late,
        "total": summary.total(),
        "present_pct": summary.present_pct(),
        "absent_pct": summary.absent_pct(),
        "late_pct": summary.late_pct(),
        "attendance_rate": summary.attendance_rate(),
    });
    serde_json::to_string_pretty(&value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AttendanceStatus, Student, StudentTotals};

    // A date far outside any relative window, so labels are deterministic
    fn fixed_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 3, 3).unwrap()
    }

    fn student() -> Student {
        Student {
            student_id: "STU001".to_string(),
            name: "John Doe".to_string(),
            email: "john.doe@school.edu".to_string(),
        }
    }

    fn late_record(date: NaiveDate) -> AttendanceRecord {
        AttendanceRecord {
            student_id: "STU001".to_string(),
            class_id: 1,
            marked_at: date.and_hms_opt(14, 30, 0).unwrap(),
            time_in: NaiveTime::from_hms_opt(14, 30, 0),
            time_out: None,
            status: AttendanceStatus::Late,
        }
    }

    #[test]
    fn roster_json_uses_role_time_convention() {
        let date = fixed_date();
        let row = RosterRow {
            student: student(),
            record: Some(late_record(date)),
        };

        let admin: serde_json::Value =
            serde_json::from_str(&output_roster_json(&[row.clone()], date, Role::Admin)).unwrap();
        assert_eq!(admin[0]["time_in"].as_str(), Some("14:30"));
        assert_eq!(admin[0]["status"].as_str(), Some("late"));
        assert_eq!(admin[0]["date"].as_str(), Some("03-03-2020"));
        assert!(admin[0]["time_out"].is_null());

        let student_view: serde_json::Value =
            serde_json::from_str(&output_roster_json(&[row], date, Role::Student)).unwrap();
        assert_eq!(student_view[0]["time_in"].as_str(), Some("02:30 PM"));
    }

    #[test]
    fn roster_json_unrecorded_student_reads_absent() {
        let row = RosterRow {
            student: student(),
            record: None,
        };
        let json: serde_json::Value =
            serde_json::from_str(&output_roster_json(&[row], fixed_date(), Role::Admin)).unwrap();
        assert_eq!(json[0]["status"].as_str(), Some("absent"));
        assert!(json[0]["time_in"].is_null());
    }

    #[test]
    fn history_json_resolves_class_names() {
        let classes = vec![ClassInfo {
            id: 1,
            name: "Mathematics 101".to_string(),
            teacher: "Mr. Johnson".to_string(),
        }];
        let json: serde_json::Value = serde_json::from_str(&output_history_json(
            &[late_record(fixed_date())],
            &classes,
            Role::Teacher,
        ))
        .unwrap();
        assert_eq!(json[0]["class"].as_str(), Some("Mathematics 101"));
        // Teacher never sees relative labels
        assert_eq!(json[0]["date"].as_str(), Some("03-03-2020"));
    }

    #[test]
    fn report_json_carries_totals_and_percentage() {
        let row = ReportRow {
            student: student(),
            totals: StudentTotals {
                present: 25,
                absent: 4,
                late: 2,
            },
        };
        let json: serde_json::Value =
            serde_json::from_str(&output_report_json(&[row], "01-03-2026 to 31-03-2026")).unwrap();
        assert_eq!(json[0]["present"].as_i64(), Some(25));
        assert_eq!(json[0]["percentage"].as_i64(), Some(87));
        assert_eq!(json[0]["range"].as_str(), Some("01-03-2026 to 31-03-2026"));
    }

    #[test]
    fn summary_json_shape() {
        let summary = Summary {
            present: 85,
            absent: 10,
            late: 5,
        };
        let json: serde_json::Value =
            serde_json::from_str(&output_summary_json(&summary, "all records")).unwrap();
        assert_eq!(json["total"].as_i64(), Some(100));
        assert_eq!(json["present_pct"].as_i64(), Some(85));
        assert_eq!(json["attendance_rate"].as_i64(), Some(90));
    }
}
