//! Core module - role-aware formatting and attendance aggregation

mod format;
mod report;
mod role;
mod types;

pub(crate) use format::{DateInput, FormatMode, format_date, format_date_range, relative_date};
pub(crate) use report::{ReportRow, RosterRow, Summary, aggregate_report, day_roster, student_history, summarize};
pub(crate) use role::Role;
pub(crate) use types::{AttendanceRecord, AttendanceStatus, ClassInfo, DateFilter, Student, StudentTotals};
