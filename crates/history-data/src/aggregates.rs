//! Aggregation passes over the normalized watch-record sequence.
//!
//! Each aggregate is a single explicit pass from key to accumulator; the
//! output structures carry no dependency on any UI or charting layer.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::NaiveDate;
use history_core::error::{HistoryError, Result};
use history_core::models::{WatchRecord, WEEKDAYS};
use serde::Serialize;

// ── Row types ─────────────────────────────────────────────────────────────────

/// One row of the top-channels ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelCount {
    pub channel: String,
    pub count: u64,
}

/// One row of the most-repeated-titles ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleCount {
    pub title: String,
    pub count: u64,
}

/// One row of the monthly watch counts, keyed `"YYYY-MM"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    pub month: String,
    pub count: u64,
}

// ── Rankings ──────────────────────────────────────────────────────────────────

/// Count distinct `channel` values and return the `limit` highest counts,
/// descending. Ties are broken by first-encountered order of the channel.
pub fn top_channels(records: &[WatchRecord], limit: usize) -> Vec<ChannelCount> {
    ranked_counts(records.iter().map(|r| r.channel.as_str()), limit)
        .into_iter()
        .map(|(channel, count)| ChannelCount { channel, count })
        .collect()
}

/// Count distinct `title` values (not deduplicated by video id) and return
/// the `limit` highest counts, same tie-break as [`top_channels`].
pub fn most_repeated_titles(records: &[WatchRecord], limit: usize) -> Vec<TitleCount> {
    ranked_counts(records.iter().map(|r| r.title.as_str()), limit)
        .into_iter()
        .map(|(title, count)| TitleCount { title, count })
        .collect()
}

/// Stable frequency ranking: count occurrences of each key, then order by
/// count descending with the key's first appearance as the tie-break.
fn ranked_counts<'a>(keys: impl Iterator<Item = &'a str>, limit: usize) -> Vec<(String, u64)> {
    // Value is (first-seen index, count).
    let mut counts: HashMap<&str, (usize, u64)> = HashMap::new();

    for key in keys {
        if let Some(slot) = counts.get_mut(key) {
            slot.1 += 1;
        } else {
            let first_seen = counts.len();
            counts.insert(key, (first_seen, 1));
        }
    }

    let mut rows: Vec<(usize, &str, u64)> = counts
        .into_iter()
        .map(|(key, (first_seen, count))| (first_seen, key, count))
        .collect();
    rows.sort_by(|a, b| b.2.cmp(&a.2).then(a.0.cmp(&b.0)));
    rows.truncate(limit);

    rows.into_iter()
        .map(|(_, key, count)| (key.to_string(), count))
        .collect()
}

// ── Monthly counts ────────────────────────────────────────────────────────────

/// Group records by calendar month of `timestamp` and count per group.
///
/// Returned ascending by month key (BTreeMap order).
pub fn monthly_counts(records: &[WatchRecord]) -> Vec<MonthlyCount> {
    let mut map: BTreeMap<String, u64> = BTreeMap::new();
    for record in records {
        *map.entry(record.month_key()).or_insert(0) += 1;
    }
    map.into_iter()
        .map(|(month, count)| MonthlyCount { month, count })
        .collect()
}

// ── Weekday × hour matrix ─────────────────────────────────────────────────────

/// A 7×24 pivot of watch counts: rows are weekdays (Monday first), columns
/// are hours 0–23. Cells with no records stay zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayHourMatrix {
    cells: [[u64; 24]; 7],
}

impl WeekdayHourMatrix {
    /// Count at (`weekday`, `hour`). Zero for unknown names or hours ≥ 24.
    pub fn get(&self, weekday: &str, hour: u32) -> u64 {
        let Some(row) = WEEKDAYS.iter().position(|w| *w == weekday) else {
            return 0;
        };
        if hour >= 24 {
            return 0;
        }
        self.cells[row][hour as usize]
    }

    /// Iterate rows as `(weekday name, &[u64; 24])`, Monday first.
    pub fn rows(&self) -> impl Iterator<Item = (&'static str, &[u64; 24])> {
        WEEKDAYS.iter().copied().zip(self.cells.iter())
    }

    /// Largest cell value; zero for an empty matrix.
    pub fn max_cell(&self) -> u64 {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .copied()
            .max()
            .unwrap_or(0)
    }

    /// Sum of all cells.
    pub fn total(&self) -> u64 {
        self.cells.iter().flat_map(|row| row.iter()).sum()
    }
}

/// Pivot records into the [`WeekdayHourMatrix`].
pub fn weekday_hour_matrix(records: &[WatchRecord]) -> WeekdayHourMatrix {
    let mut cells = [[0u64; 24]; 7];
    for record in records {
        let row = record.weekday_index();
        let col = record.hour as usize;
        cells[row][col] += 1;
    }
    WeekdayHourMatrix { cells }
}

// ── Summary ───────────────────────────────────────────────────────────────────

/// Headline figures across the whole record sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistorySummary {
    /// Total number of watch records.
    pub total_records: usize,
    /// Number of distinct channel values.
    pub distinct_channels: usize,
    /// Earliest watch date.
    pub first_date: NaiveDate,
    /// Latest watch date.
    pub last_date: NaiveDate,
}

/// Compute the summary statistics.
///
/// Fails with [`HistoryError::EmptyHistory`] on an empty sequence, since the
/// date range is undefined there.
pub fn summary(records: &[WatchRecord]) -> Result<HistorySummary> {
    if records.is_empty() {
        return Err(HistoryError::EmptyHistory);
    }

    let distinct_channels = records
        .iter()
        .map(|r| r.channel.as_str())
        .collect::<HashSet<_>>()
        .len();

    // Non-empty: min/max always exist.
    let first_date = records.iter().map(|r| r.date).min().unwrap_or_default();
    let last_date = records.iter().map(|r| r.date).max().unwrap_or_default();

    Ok(HistorySummary {
        total_records: records.len(),
        distinct_channels,
        first_date,
        last_date,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn record(ts_str: &str, title: &str, channel: &str) -> WatchRecord {
        let timestamp = DateTime::parse_from_rfc3339(ts_str)
            .unwrap()
            .with_timezone(&Utc);
        WatchRecord::new(title.to_string(), None, channel.to_string(), timestamp)
    }

    // ── top_channels ───────────────────────────────────────────────────────

    #[test]
    fn test_top_channels_basic_ranking() {
        let records = vec![
            record("2023-05-01T10:00:00Z", "x", "A"),
            record("2023-05-01T11:00:00Z", "y", "A"),
            record("2023-05-01T12:00:00Z", "z", "B"),
        ];
        let top = top_channels(&records, 1);
        assert_eq!(
            top,
            vec![ChannelCount {
                channel: "A".to_string(),
                count: 2
            }]
        );
    }

    #[test]
    fn test_top_channels_limit_larger_than_distinct() {
        let records = vec![
            record("2023-05-01T10:00:00Z", "x", "A"),
            record("2023-05-01T11:00:00Z", "y", "B"),
        ];
        assert_eq!(top_channels(&records, 10).len(), 2);
    }

    #[test]
    fn test_top_channels_tie_break_first_encountered() {
        let records = vec![
            record("2023-05-01T10:00:00Z", "x", "B"),
            record("2023-05-01T11:00:00Z", "y", "A"),
        ];
        // Equal counts: B was seen first, so B ranks first.
        let top = top_channels(&records, 2);
        assert_eq!(top[0].channel, "B");
        assert_eq!(top[1].channel, "A");
    }

    #[test]
    fn test_top_channels_empty() {
        assert!(top_channels(&[], 5).is_empty());
    }

    // ── most_repeated_titles ───────────────────────────────────────────────

    #[test]
    fn test_most_repeated_titles_counts_by_title() {
        let records = vec![
            record("2023-05-01T10:00:00Z", "Same Video", "A"),
            record("2023-05-02T10:00:00Z", "Same Video", "B"),
            record("2023-05-03T10:00:00Z", "Other", "A"),
        ];
        let top = most_repeated_titles(&records, 2);
        assert_eq!(top[0].title, "Same Video");
        assert_eq!(top[0].count, 2);
        assert_eq!(top[1].count, 1);
    }

    #[test]
    fn test_most_repeated_titles_respects_limit() {
        let records = vec![
            record("2023-05-01T10:00:00Z", "a", "C"),
            record("2023-05-01T11:00:00Z", "b", "C"),
            record("2023-05-01T12:00:00Z", "c", "C"),
        ];
        assert_eq!(most_repeated_titles(&records, 2).len(), 2);
    }

    // ── monthly_counts ─────────────────────────────────────────────────────

    #[test]
    fn test_monthly_counts_ascending() {
        let records = vec![
            record("2023-02-01T10:00:00Z", "x", "A"),
            record("2023-01-15T10:00:00Z", "y", "A"),
        ];
        let months = monthly_counts(&records);
        assert_eq!(
            months,
            vec![
                MonthlyCount {
                    month: "2023-01".to_string(),
                    count: 1
                },
                MonthlyCount {
                    month: "2023-02".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_monthly_counts_groups_same_month() {
        let records = vec![
            record("2023-01-01T10:00:00Z", "x", "A"),
            record("2023-01-31T23:00:00Z", "y", "A"),
        ];
        let months = monthly_counts(&records);
        assert_eq!(months.len(), 1);
        assert_eq!(months[0].count, 2);
    }

    #[test]
    fn test_monthly_counts_empty() {
        assert!(monthly_counts(&[]).is_empty());
    }

    // ── weekday_hour_matrix ────────────────────────────────────────────────

    #[test]
    fn test_matrix_single_record() {
        // 2023-05-01 was a Monday; hour 5.
        let records = vec![record("2023-05-01T05:00:00Z", "x", "A")];
        let matrix = weekday_hour_matrix(&records);

        assert_eq!(matrix.get("Monday", 5), 1);
        assert_eq!(matrix.total(), 1);
        // Every other cell is zero.
        for (weekday, row) in matrix.rows() {
            for (hour, cell) in row.iter().enumerate() {
                if weekday == "Monday" && hour == 5 {
                    continue;
                }
                assert_eq!(*cell, 0, "cell ({weekday}, {hour}) must be zero");
            }
        }
    }

    #[test]
    fn test_matrix_accumulates_same_cell() {
        let records = vec![
            record("2023-05-01T05:00:00Z", "x", "A"),
            record("2023-05-08T05:30:00Z", "y", "A"), // also Monday, hour 5
        ];
        let matrix = weekday_hour_matrix(&records);
        assert_eq!(matrix.get("Monday", 5), 2);
        assert_eq!(matrix.max_cell(), 2);
    }

    #[test]
    fn test_matrix_empty_is_all_zero() {
        let matrix = weekday_hour_matrix(&[]);
        assert_eq!(matrix.total(), 0);
        assert_eq!(matrix.max_cell(), 0);
    }

    #[test]
    fn test_matrix_unknown_weekday_is_zero() {
        let matrix = weekday_hour_matrix(&[]);
        assert_eq!(matrix.get("Funday", 0), 0);
        assert_eq!(matrix.get("Monday", 24), 0);
    }

    // ── summary ────────────────────────────────────────────────────────────

    #[test]
    fn test_summary_counts_and_range() {
        let records = vec![
            record("2023-05-03T10:00:00Z", "x", "A"),
            record("2023-05-01T10:00:00Z", "y", "B"),
            record("2023-05-02T10:00:00Z", "z", "A"),
        ];
        let s = summary(&records).unwrap();
        assert_eq!(s.total_records, 3);
        assert_eq!(s.distinct_channels, 2);
        assert_eq!(s.first_date.to_string(), "2023-05-01");
        assert_eq!(s.last_date.to_string(), "2023-05-03");
    }

    #[test]
    fn test_summary_empty_history_error() {
        let err = summary(&[]).unwrap_err();
        assert!(matches!(err, HistoryError::EmptyHistory));
    }
}
