//! Aggregation of attendance records into report views

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::core::types::{AttendanceRecord, AttendanceStatus, DateFilter, Student, StudentTotals};

/// Per-student report line over a date window.
#[derive(Debug, Clone)]
pub(crate) struct ReportRow {
    pub(crate) student: Student,
    pub(crate) totals: StudentTotals,
}

/// Overall distribution over a date window.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Summary {
    pub(crate) present: i64,
    pub(crate) absent: i64,
    pub(crate) late: i64,
}

impl Summary {
    pub(crate) fn total(&self) -> i64 {
        self.present + self.absent + self.late
    }

    fn pct(&self, part: i64) -> i64 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        (part as f64 / total as f64 * 100.0).round() as i64
    }

    pub(crate) fn present_pct(&self) -> i64 {
        self.pct(self.present)
    }

    pub(crate) fn absent_pct(&self) -> i64 {
        self.pct(self.absent)
    }

    pub(crate) fn late_pct(&self) -> i64 {
        self.pct(self.late)
    }

    /// Overall attendance rate; Late counts as attended.
    pub(crate) fn attendance_rate(&self) -> i64 {
        self.pct(self.present + self.late)
    }
}

/// One line of the single-day roster view.
#[derive(Debug, Clone)]
pub(crate) struct RosterRow {
    pub(crate) student: Student,
    pub(crate) record: Option<AttendanceRecord>,
}

impl RosterRow {
    pub(crate) fn status(&self) -> AttendanceStatus {
        // No mark for the day reads as absent, matching the checkbox default
        self.record
            .as_ref()
            .map_or(AttendanceStatus::Absent, |r| r.status)
    }
}

fn matches_class(record: &AttendanceRecord, class: Option<u32>) -> bool {
    class.is_none_or(|id| record.class_id == id)
}

/// Build per-student totals over the filter window, in roster order. Students
/// with no records in the window still get a zeroed row.
pub(crate) fn aggregate_report(
    records: &[AttendanceRecord],
    students: &[Student],
    filter: &DateFilter,
    class: Option<u32>,
) -> Vec<ReportRow> {
    let mut totals: HashMap<&str, StudentTotals> = HashMap::new();

    for record in records {
        if !filter.contains(record.date()) || !matches_class(record, class) {
            continue;
        }
        totals
            .entry(record.student_id.as_str())
            .or_default()
            .add(record.status);
    }

    students
        .iter()
        .map(|student| ReportRow {
            student: student.clone(),
            totals: totals
                .get(student.student_id.as_str())
                .copied()
                .unwrap_or_default(),
        })
        .collect()
}

/// Distribution across every record in the window.
pub(crate) fn summarize(
    records: &[AttendanceRecord],
    filter: &DateFilter,
    class: Option<u32>,
) -> Summary {
    let mut summary = Summary::default();
    for record in records {
        if !filter.contains(record.date()) || !matches_class(record, class) {
            continue;
        }
        match record.status {
            AttendanceStatus::Present => summary.present += 1,
            AttendanceStatus::Absent => summary.absent += 1,
            AttendanceStatus::Late => summary.late += 1,
        }
    }
    summary
}

/// Single-day roster: one row per student with their mark for the day, if any.
pub(crate) fn day_roster(
    records: &[AttendanceRecord],
    students: &[Student],
    date: NaiveDate,
    class: Option<u32>,
) -> Vec<RosterRow> {
    students
        .iter()
        .map(|student| RosterRow {
            student: student.clone(),
            record: records
                .iter()
                .find(|r| {
                    r.student_id == student.student_id
                        && r.date() == date
                        && matches_class(r, class)
                })
                .cloned(),
        })
        .collect()
}

/// A single student's marks over the window, oldest first. Used for the
/// student role's own-history view.
pub(crate) fn student_history(
    records: &[AttendanceRecord],
    student_id: &str,
    filter: &DateFilter,
) -> Vec<AttendanceRecord> {
    let mut history: Vec<AttendanceRecord> = records
        .iter()
        .filter(|r| r.student_id == student_id && filter.contains(r.date()))
        .cloned()
        .collect();
    history.sort_by_key(|r| r.marked_at);
    history
}
