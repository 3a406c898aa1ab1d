/// Sentinel returned whenever an input cannot be coerced to a valid instant.
/// This is the formatter's only failure signal; it never errors or panics.
pub(crate) const INVALID_DATE: &str = "Invalid Date";

/// Standard date format for CLI input parsing: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Fallback when a class id has no entry in the class list
pub(crate) const UNKNOWN: &str = "unknown";
