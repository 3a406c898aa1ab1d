//! Core attendance data model
//!
//! In-memory only: records are produced by the sample data generator and
//! discarded when the process exits.

use chrono::{NaiveDateTime, NaiveTime};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub(crate) struct Student {
    pub(crate) student_id: String,
    pub(crate) name: String,
    pub(crate) email: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ClassInfo {
    pub(crate) id: u32,
    pub(crate) name: String,
    pub(crate) teacher: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

impl AttendanceStatus {
    pub(crate) fn label(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Late => "Late",
        }
    }
}

/// One attendance mark for one student on one day.
#[derive(Debug, Clone)]
pub(crate) struct AttendanceRecord {
    pub(crate) student_id: String,
    pub(crate) class_id: u32,
    /// Check-in instant (local). Date component drives day grouping.
    pub(crate) marked_at: NaiveDateTime,
    pub(crate) time_in: Option<NaiveTime>,
    pub(crate) time_out: Option<NaiveTime>,
    pub(crate) status: AttendanceStatus,
}

impl AttendanceRecord {
    pub(crate) fn date(&self) -> chrono::NaiveDate {
        self.marked_at.date()
    }
}

/// Per-student counters over a report window.
#[derive(Debug, Default, Clone, Copy, Serialize)]
pub(crate) struct StudentTotals {
    pub(crate) present: i64,
    pub(crate) absent: i64,
    pub(crate) late: i64,
}

impl StudentTotals {
    pub(crate) fn add(&mut self, status: AttendanceStatus) {
        match status {
            AttendanceStatus::Present => self.present += 1,
            AttendanceStatus::Absent => self.absent += 1,
            AttendanceStatus::Late => self.late += 1,
        }
    }

    pub(crate) fn total(&self) -> i64 {
        self.present + self.absent + self.late
    }

    /// Attendance percentage counting Present and Late as attended,
    /// rounded to the nearest whole percent. 0 when there are no records.
    pub(crate) fn percentage(&self) -> i64 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        let attended = (self.present + self.late) as f64;
        (attended / total as f64 * 100.0).round() as i64
    }
}

/// Inclusive date filter for report windows.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct DateFilter {
    pub(crate) since: Option<chrono::NaiveDate>,
    pub(crate) until: Option<chrono::NaiveDate>,
}

impl DateFilter {
    pub(crate) fn new(since: Option<chrono::NaiveDate>, until: Option<chrono::NaiveDate>) -> Self {
        Self { since, until }
    }

    pub(crate) fn contains(&self, date: chrono::NaiveDate) -> bool {
        if let Some(s) = self.since
            && date < s
        {
            return false;
        }
        if let Some(u) = self.until
            && date > u
        {
            return false;
        }
        true
    }
}
