//! Utilities for date and time formatting
//!
//! Timestamps are decoded into `chrono` types by the contracts crate; these
//! helpers only render them.

use chrono::{DateTime, Utc};

const EMPTY: &str = "-";

/// Example: 2024-03-15T14:02:26Z -> "15 Mar 2024, 14:02"
pub fn format_datetime(value: Option<&DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%d %b %Y, %H:%M").to_string())
        .unwrap_or_else(|| EMPTY.to_string())
}

/// Example: 2024-03-15T14:02:26Z -> "15 Mar 2024"
pub fn format_date(value: Option<&DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%d %b %Y").to_string())
        .unwrap_or_else(|| EMPTY.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::serde_utils::parse_datetime;

    #[test]
    fn test_format_datetime() {
        let dt = parse_datetime("2024-03-15T14:02:26.123Z");
        assert_eq!(format_datetime(dt.as_ref()), "15 Mar 2024, 14:02");
        let dt = parse_datetime("2024-12-31 23:59:59");
        assert_eq!(format_datetime(dt.as_ref()), "31 Dec 2024, 23:59");
    }

    #[test]
    fn test_format_date() {
        let dt = parse_datetime("2025-02-14");
        assert_eq!(format_date(dt.as_ref()), "14 Feb 2025");
    }

    #[test]
    fn test_missing_value() {
        assert_eq!(format_datetime(None), "-");
        assert_eq!(format_date(None), "-");
    }
}
