//! Deterministic sample attendance records
//!
//! Generates a rolling window of marks relative to a supplied "today" so the
//! relative-date paths always have data to show. Pattern-based, no RNG: the
//! same today always yields the same records.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};

use crate::core::{AttendanceRecord, AttendanceStatus};
use crate::data::roster::sample_students;

/// Days of history to generate, counting back from today.
const WINDOW_DAYS: i64 = 30;

fn is_school_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Roughly the distribution of the original dataset: 85% present,
/// 10% absent, 5% late.
fn status_for(student_idx: usize, day_offset: i64) -> AttendanceStatus {
    match (student_idx as i64 * 13 + day_offset * 7) % 20 {
        0 | 1 => AttendanceStatus::Absent,
        2 => AttendanceStatus::Late,
        _ => AttendanceStatus::Present,
    }
}

fn times_for(status: AttendanceStatus, student_idx: usize) -> (Option<NaiveTime>, Option<NaiveTime>) {
    match status {
        AttendanceStatus::Absent => (None, None),
        AttendanceStatus::Late => (
            NaiveTime::from_hms_opt(9, 15, 0),
            NaiveTime::from_hms_opt(15, 45, 0),
        ),
        AttendanceStatus::Present => (
            NaiveTime::from_hms_opt(8, 30 + (student_idx as u32 * 3) % 25, 0),
            NaiveTime::from_hms_opt(15, 30, 0),
        ),
    }
}

/// One record per student per school day over the window. Today and yesterday
/// are always included regardless of weekday so relative dates have material.
pub(crate) fn sample_records(today: NaiveDate) -> Vec<AttendanceRecord> {
    let students = sample_students();
    let mut records = Vec::new();

    for day_offset in 0..WINDOW_DAYS {
        let date = today - Duration::days(day_offset);
        if day_offset > 1 && !is_school_day(date) {
            continue;
        }
        for (idx, student) in students.iter().enumerate() {
            let status = status_for(idx, day_offset);
            let (time_in, time_out) = times_for(status, idx);
            let marked_at = date.and_time(
                time_in.unwrap_or(NaiveTime::from_hms_opt(8, 0, 0).unwrap_or(NaiveTime::MIN)),
            );
            records.push(AttendanceRecord {
                student_id: student.student_id.clone(),
                class_id: ((idx as i64 + day_offset) % 4 + 1) as u32,
                marked_at,
                time_in,
                time_out,
                status,
            });
        }
    }

    records
}
