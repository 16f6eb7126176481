//! Date helpers for date-bounded queries.

use chrono::{DateTime, Utc};

/// Format time as ISO 8601 for the API (second precision, `Z` suffix).
pub fn format_time(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_time() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 1, 7, 5, 9).unwrap();
        assert_eq!(format_time(dt), "2024-03-01T07:05:09Z");
    }
}
