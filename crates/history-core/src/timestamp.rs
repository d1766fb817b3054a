use chrono::{DateTime, Utc};

use crate::error::{HistoryError, Result};

/// Parse the `time` field of a watch-history event into a UTC [`DateTime`].
///
/// The export writes `Z`-suffixed ISO-8601 strings; the suffix is treated as
/// equivalent to a `+00:00` offset. Anything that is not a valid RFC 3339
/// datetime after that normalisation yields
/// [`HistoryError::MalformedTimestamp`].
pub fn parse_watch_time(value: &str) -> Result<DateTime<Utc>> {
    let normalised = match value.strip_suffix('Z') {
        Some(rest) => format!("{rest}+00:00"),
        None => value.to_string(),
    };

    DateTime::parse_from_rfc3339(&normalised)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| HistoryError::MalformedTimestamp(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_z_suffixed() {
        let ts = parse_watch_time("2023-05-01T10:00:00Z").unwrap();
        assert_eq!(ts.year(), 2023);
        assert_eq!(ts.month(), 5);
        assert_eq!(ts.day(), 1);
        assert_eq!(ts.hour(), 10);
    }

    #[test]
    fn test_parse_fractional_seconds() {
        let ts = parse_watch_time("2023-05-01T10:00:00.123Z").unwrap();
        assert_eq!(ts.hour(), 10);
        assert_eq!(ts.timestamp_subsec_millis(), 123);
    }

    #[test]
    fn test_parse_explicit_offset_converted_to_utc() {
        let ts = parse_watch_time("2023-05-01T12:00:00+02:00").unwrap();
        assert_eq!(ts.hour(), 10);
    }

    #[test]
    fn test_parse_garbage_is_malformed() {
        let err = parse_watch_time("yesterday at noon").unwrap_err();
        assert!(matches!(err, HistoryError::MalformedTimestamp(_)));
        assert!(err.to_string().contains("yesterday at noon"));
    }

    #[test]
    fn test_parse_date_only_is_malformed() {
        // The export always carries a full datetime; a bare date is rejected.
        assert!(parse_watch_time("2023-05-01").is_err());
    }

    #[test]
    fn test_parse_empty_is_malformed() {
        assert!(parse_watch_time("").is_err());
    }
}
