//! The history transform: raw export events into normalized watch records.
//!
//! A pure, single-pass function of its input. Events missing `titleUrl` or
//! `time` never produce a record and are not counted anywhere.

use history_core::models::{RawEvent, WatchRecord, UNKNOWN_CHANNEL, WATCHED_PREFIX};
use history_core::timestamp::parse_watch_time;
use tracing::warn;

/// Normalize a sequence of [`RawEvent`]s into [`WatchRecord`]s.
///
/// Input order is preserved; no deduplication, no sorting. An event whose
/// `time` value fails to parse is logged and skipped, exactly like an event
/// with the field missing.
pub fn parse(events: &[RawEvent]) -> Vec<WatchRecord> {
    let mut records = Vec::with_capacity(events.len());

    for event in events {
        let (Some(url), Some(time)) = (event.title_url.as_deref(), event.time.as_deref()) else {
            continue;
        };

        let timestamp = match parse_watch_time(time) {
            Ok(ts) => ts,
            Err(err) => {
                warn!("Skipping event with unparseable time: {}", err);
                continue;
            }
        };

        let raw_title = event.title.as_deref().unwrap_or_default();
        let title = raw_title
            .strip_prefix(WATCHED_PREFIX)
            .unwrap_or(raw_title)
            .to_string();

        let channel = event
            .subtitles
            .as_ref()
            .and_then(|subs| subs.first())
            .and_then(|sub| sub.name.clone())
            .unwrap_or_else(|| UNKNOWN_CHANNEL.to_string());

        records.push(WatchRecord::new(
            title,
            extract_video_id(url),
            channel,
            timestamp,
        ));
    }

    records
}

/// Extract the video id: everything after the *last* `v=` in the URL.
///
/// Returns `None` when the URL carries no `v=` marker at all.
pub fn extract_video_id(url: &str) -> Option<String> {
    url.rfind("v=").map(|idx| url[idx + 2..].to_string())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
