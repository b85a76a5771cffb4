use chrono::{DateTime, NaiveDateTime};

/// `dd/MM/yyyy HH:mm` (UTC) for a millisecond timestamp; empty when absent or out of range.
pub fn format_timestamp(ms: Option<i64>) -> String {
    ms.and_then(DateTime::from_timestamp_millis)
        .map(|dt| dt.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_default()
}

/// `yyyy-MM-ddTHH:mm` (UTC), the `datetime-local` input format.
pub fn to_datetime_local(ms: i64) -> String {
    DateTime::from_timestamp_millis(ms)
        .map(|dt| dt.format("%Y-%m-%dT%H:%M").to_string())
        .unwrap_or_default()
}

/// Date part (`yyyy-MM-dd`) of a `datetime-local` value, if it parses.
pub fn date_part(datetime_local: &str) -> Option<String> {
    let value = datetime_local.trim();
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .map(|dt| dt.date().format("%Y-%m-%d").to_string())
        .ok()
        .or_else(|| {
            chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .map(|d| d.format("%Y-%m-%d").to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        // 2024-01-25T10:00:00Z
        assert_eq!(format_timestamp(Some(1_706_176_800_000)), "25/01/2024 10:00");
        assert_eq!(format_timestamp(None), "");
    }

    #[test]
    fn test_datetime_local() {
        assert_eq!(to_datetime_local(1_706_176_800_000), "2024-01-25T10:00");
    }

    #[test]
    fn test_date_part() {
        assert_eq!(date_part("2024-01-25T10:00").as_deref(), Some("2024-01-25"));
        assert_eq!(date_part("2024-01-25T10:00:30").as_deref(), Some("2024-01-25"));
        assert_eq!(date_part("2024-01-25").as_deref(), Some("2024-01-25"));
        assert_eq!(date_part(""), None);
        assert_eq!(date_part("yesterday"), None);
    }
}
