//! Role-aware date/time formatting
//!
//! Pure conversion of a temporal value into the display string a given viewer
//! role should see. The only failure mode is an input that cannot be coerced
//! to a valid instant, reported as the `INVALID_DATE` sentinel string; these
//! functions never return an error and never panic.
//!
//! "Today" for relative rendering is read from the wall clock exactly once,
//! in [`relative_date`]; everything else is referentially transparent and the
//! clock-free [`relative_date_on`] is the seam tests pin a date through.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};

use crate::consts::INVALID_DATE;
use crate::core::role::{Role, role_format};

/// A temporal value as accepted from callers: an already-parsed instant, an
/// ISO-like string, or an epoch-millisecond number. The formatter only reads
/// it; coercion happens per call.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DateInput {
    Timestamp(NaiveDateTime),
    Day(NaiveDate),
    Text(String),
    EpochMillis(i64),
    EpochMillisFloat(f64),
}

impl DateInput {
    /// Coerce to a local instant. `None` means the value is not a valid
    /// point in time and the caller renders the sentinel.
    pub(crate) fn coerce(&self) -> Option<NaiveDateTime> {
        match self {
            DateInput::Timestamp(dt) => Some(*dt),
            DateInput::Day(d) => Some(d.and_time(NaiveTime::MIN)),
            DateInput::Text(s) => parse_text(s),
            DateInput::EpochMillis(ms) => millis_to_local(*ms),
            DateInput::EpochMillisFloat(ms) => {
                if ms.is_finite() {
                    millis_to_local(*ms as i64)
                } else {
                    None
                }
            }
        }
    }
}

fn millis_to_local(ms: i64) -> Option<NaiveDateTime> {
    DateTime::<Utc>::from_timestamp_millis(ms).map(|dt| dt.with_timezone(&Local).naive_local())
}

fn parse_text(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d.and_time(NaiveTime::MIN));
    }
    None
}

impl From<NaiveDateTime> for DateInput {
    fn from(dt: NaiveDateTime) -> Self {
        DateInput::Timestamp(dt)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(d: NaiveDate) -> Self {
        DateInput::Day(d)
    }
}

impl From<DateTime<Local>> for DateInput {
    fn from(dt: DateTime<Local>) -> Self {
        DateInput::Timestamp(dt.naive_local())
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(dt: DateTime<Utc>) -> Self {
        DateInput::Timestamp(dt.with_timezone(&Local).naive_local())
    }
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        DateInput::Text(s.to_string())
    }
}

impl From<String> for DateInput {
    fn from(s: String) -> Self {
        DateInput::Text(s)
    }
}

impl From<i64> for DateInput {
    fn from(ms: i64) -> Self {
        DateInput::EpochMillis(ms)
    }
}

impl From<f64> for DateInput {
    fn from(ms: f64) -> Self {
        DateInput::EpochMillisFloat(ms)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum FormatMode {
    #[default]
    Date,
    Time,
    Full,
}

impl FormatMode {
    /// Parse a mode name; unknown modes fall back to `Date`.
    pub(crate) fn parse(s: &str) -> FormatMode {
        match s.trim().to_ascii_lowercase().as_str() {
            "time" => FormatMode::Time,
            "full" => FormatMode::Full,
            _ => FormatMode::Date,
        }
    }
}

/// Render an instant for a viewer role. Date output is DD-MM-YYYY for every
/// role; the role profile only selects the time convention (24-hour vs
/// 12-hour with AM/PM).
pub(crate) fn format_date(input: &DateInput, mode: FormatMode, role: Role) -> String {
    let Some(dt) = input.coerce() else {
        return INVALID_DATE.to_string();
    };

    let config = role_format(role);
    let date = format!("{:02}-{:02}-{:04}", dt.day(), dt.month(), dt.year());
    match mode {
        FormatMode::Date => date,
        FormatMode::Time => format_time(&dt, config.uses_24h_clock()),
        FormatMode::Full => format!("{} {}", date, format_time(&dt, config.uses_24h_clock())),
    }
}

fn format_time(dt: &NaiveDateTime, clock_24h: bool) -> String {
    if clock_24h {
        format!("{:02}:{:02}", dt.hour(), dt.minute())
    } else {
        // hour12() wraps hour 0 to 12
        let (pm, hour12) = dt.hour12();
        let ampm = if pm { "PM" } else { "AM" };
        format!("{:02}:{:02} {}", hour12, dt.minute(), ampm)
    }
}

/// "Today"/"Yesterday" substitution, gated per role. Reads the wall clock;
/// all logic lives in [`relative_date_on`].
pub(crate) fn relative_date(input: &DateInput, role: Role) -> String {
    relative_date_on(input, role, Local::now().date_naive())
}

/// Clock-free variant of [`relative_date`]. Comparison is on the local
/// calendar day, not a rolling 24-hour window.
pub(crate) fn relative_date_on(input: &DateInput, role: Role, today: NaiveDate) -> String {
    if !role_format(role).relative_dates {
        return format_date(input, FormatMode::Date, role);
    }
    let Some(day) = input.coerce().map(|dt| dt.date()) else {
        return INVALID_DATE.to_string();
    };
    if day == today {
        "Today".to_string()
    } else if Some(day) == today.pred_opt() {
        "Yesterday".to_string()
    } else {
        format_date(input, FormatMode::Date, role)
    }
}

/// Render "{start} to {end}" in date mode. No ordering validation; an invalid
/// endpoint substitutes the sentinel in place.
pub(crate) fn format_date_range(start: &DateInput, end: &DateInput, role: Role) -> String {
    format!(
        "{} to {}",
        format_date(start, FormatMode::Date, role),
        format_date(end, FormatMode::Date, role)
    )
}
