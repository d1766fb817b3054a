use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Channel name used when an event carries no usable `subtitles` entry.
pub const UNKNOWN_CHANNEL: &str = "Unknown";

/// Prefix Google Takeout prepends to every watched-video title.
pub const WATCHED_PREFIX: &str = "Watched ";

/// Full weekday names, Monday first. Row order of the weekday×hour matrix.
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// One element of the `watch-history.json` export array.
///
/// Every field is optional: Takeout emits ads, removed videos, and music
/// entries with different subsets of keys. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawEvent {
    /// Display title, usually prefixed with `"Watched "`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Video URL, expected to carry a `v=` query parameter.
    #[serde(rename = "titleUrl", default, skip_serializing_if = "Option::is_none")]
    pub title_url: Option<String>,
    /// ISO-8601 timestamp string, `Z`-suffixed UTC.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Channel attribution; the first element's `name` is the channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitles: Option<Vec<Subtitle>>,
}

/// One `subtitles` element of a [`RawEvent`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Subtitle {
    /// Channel name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Channel URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A normalized watch event derived from a valid [`RawEvent`].
///
/// Immutable once constructed. Records keep the input order of the export;
/// there is no deduplication and no sorting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchRecord {
    /// Title with the leading `"Watched "` prefix stripped, if it was present.
    pub title: String,
    /// Video id taken from the URL, `None` when the URL has no `v=` marker.
    pub video_id: Option<String>,
    /// Channel name, or [`UNKNOWN_CHANNEL`].
    pub channel: String,
    /// Absolute point in time (UTC) the video was watched.
    pub timestamp: DateTime<Utc>,
    /// Calendar date component of `timestamp`.
    pub date: NaiveDate,
    /// Hour component of `timestamp`, 0–23.
    pub hour: u32,
    /// Full weekday name, e.g. `"Monday"`.
    pub weekday: String,
}

impl WatchRecord {
    /// Build a record, deriving `date`, `hour` and `weekday` from `timestamp`.
    pub fn new(
        title: String,
        video_id: Option<String>,
        channel: String,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            title,
            video_id,
            channel,
            date: timestamp.date_naive(),
            hour: timestamp.hour(),
            weekday: weekday_name(timestamp).to_string(),
            timestamp,
        }
    }

    /// Row index of this record's weekday in [`WEEKDAYS`] (Monday = 0).
    pub fn weekday_index(&self) -> usize {
        self.timestamp.weekday().num_days_from_monday() as usize
    }

    /// Month key of this record, formatted `"YYYY-MM"`.
    pub fn month_key(&self) -> String {
        self.timestamp.format("%Y-%m").to_string()
    }
}

/// Full English weekday name for a UTC timestamp.
pub fn weekday_name(timestamp: DateTime<Utc>) -> &'static str {
    WEEKDAYS[timestamp.weekday().num_days_from_monday() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    // ── RawEvent serde ─────────────────────────────────────────────────────

    #[test]
    fn test_raw_event_full_deserialization() {
        let json = r#"{
            "header": "YouTube",
            "title": "Watched Some Video",
            "titleUrl": "https://www.youtube.com/watch?v=ABC123",
            "subtitles": [{"name": "Acme", "url": "https://www.youtube.com/channel/x"}],
            "time": "2023-05-01T10:00:00Z",
            "products": ["YouTube"]
        }"#;
        let event: RawEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.title.as_deref(), Some("Watched Some Video"));
        assert_eq!(
            event.title_url.as_deref(),
            Some("https://www.youtube.com/watch?v=ABC123")
        );
        assert_eq!(event.time.as_deref(), Some("2023-05-01T10:00:00Z"));
        let subs = event.subtitles.unwrap();
        assert_eq!(subs[0].name.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_raw_event_sparse_deserialization() {
        // Ads and removed videos come without titleUrl / subtitles.
        let json = r#"{"title": "Watched a video that has been removed"}"#;
        let event: RawEvent = serde_json::from_str(json).unwrap();
        assert!(event.title_url.is_none());
        assert!(event.time.is_none());
        assert!(event.subtitles.is_none());
    }

    #[test]
    fn test_raw_event_empty_object() {
        let event: RawEvent = serde_json::from_str("{}").unwrap();
        assert!(event.title.is_none());
        assert!(event.title_url.is_none());
    }

    // ── WatchRecord derivation ─────────────────────────────────────────────

    #[test]
    fn test_watch_record_derives_date_hour_weekday() {
        // 2023-05-01 was a Monday.
        let ts = Utc.with_ymd_and_hms(2023, 5, 1, 10, 0, 0).unwrap();
        let record = WatchRecord::new(
            "Some Video".to_string(),
            Some("ABC123".to_string()),
            "Acme".to_string(),
            ts,
        );
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2023, 5, 1).unwrap());
        assert_eq!(record.hour, 10);
        assert_eq!(record.weekday, "Monday");
        assert_eq!(record.weekday_index(), 0);
        assert_eq!(record.month_key(), "2023-05");
    }

    #[test]
    fn test_weekday_name_covers_full_week() {
        // 2024-01-01 was a Monday; walk one full week.
        let expected = WEEKDAYS;
        for (offset, want) in expected.iter().enumerate() {
            let ts = Utc
                .with_ymd_and_hms(2024, 1, 1 + offset as u32, 12, 0, 0)
                .unwrap();
            assert_eq!(weekday_name(ts), *want);
        }
    }

    #[test]
    fn test_weekday_index_sunday_is_six() {
        let ts = Utc.with_ymd_and_hms(2023, 5, 7, 0, 0, 0).unwrap(); // Sunday
        let record = WatchRecord::new("t".into(), None, "c".into(), ts);
        assert_eq!(record.weekday, "Sunday");
        assert_eq!(record.weekday_index(), 6);
    }
}
