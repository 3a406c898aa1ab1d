use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("--since ({since}) must not be after --until ({until})")]
    InvalidRange { since: String, until: String },

    #[error("Unknown class: {input}")]
    UnknownClass { input: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_date() {
        let e = AppError::InvalidDate {
            input: "abc".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid date "abc" (expected YYYYMMDD or YYYY-MM-DD)"#
        );
    }

    #[test]
    fn app_error_display_range() {
        let e = AppError::InvalidRange {
            since: "2026-03-01".to_string(),
            until: "2026-01-01".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "--since (2026-03-01) must not be after --until (2026-01-01)"
        );
    }

    #[test]
    fn app_error_display_class() {
        let e = AppError::UnknownClass {
            input: "Alchemy 401".to_string(),
        };
        assert_eq!(e.to_string(), "Unknown class: Alchemy 401");
    }
}
