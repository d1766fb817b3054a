//! Watch-history export discovery and loading.
//!
//! Reads the `watch-history.json` array produced by Google Takeout and
//! converts it into [`RawEvent`]s for the transform. This is the loading
//! layer; the transform itself never touches the filesystem.

use std::path::{Path, PathBuf};

use history_core::error::{HistoryError, Result};
use history_core::models::{RawEvent, WatchRecord};
use tracing::{debug, warn};

use crate::transform;

/// Name Takeout gives the watch-history export file.
pub const HISTORY_FILE_NAME: &str = "watch-history.json";

// ── Public API ────────────────────────────────────────────────────────────────

/// Find all watch-history export files under `data_path`, sorted by path.
///
/// A file path is returned as-is; a directory is searched recursively for
/// files named [`HISTORY_FILE_NAME`] (a Takeout archive nests the export
/// several directories deep).
pub fn find_history_files(data_path: &Path) -> Vec<PathBuf> {
    if data_path.is_file() {
        return vec![data_path.to_path_buf()];
    }
    if !data_path.exists() {
        warn!("Data path does not exist: {}", data_path.display());
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(data_path)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file() && entry.file_name() == HISTORY_FILE_NAME
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

/// Read one export file and parse its JSON array into [`RawEvent`]s.
pub fn load_raw_events(file_path: &Path) -> Result<Vec<RawEvent>> {
    let content = std::fs::read_to_string(file_path).map_err(|source| HistoryError::FileRead {
        path: file_path.to_path_buf(),
        source,
    })?;

    let events: Vec<RawEvent> = serde_json::from_str(&content)?;
    debug!(
        "Loaded {} raw events from {}",
        events.len(),
        file_path.display()
    );
    Ok(events)
}

/// Load and normalize the full watch history under `data_path`.
///
/// Discovers export files, loads them in sorted path order, concatenates the
/// raw events, and runs the transform. Within each file the export's input
/// order is preserved.
pub fn load_watch_history(data_path: &Path) -> Result<Vec<WatchRecord>> {
    if !data_path.exists() {
        return Err(HistoryError::DataPathNotFound(data_path.to_path_buf()));
    }

    let files = find_history_files(data_path);
    if files.is_empty() {
        return Err(HistoryError::NoHistoryFiles(data_path.to_path_buf()));
    }

    let mut all_events: Vec<RawEvent> = Vec::new();
    for file_path in &files {
        all_events.extend(load_raw_events(file_path)?);
    }

    let records = transform::parse(&all_events);
    debug!(
        "Parsed {} records from {} events across {} files",
        records.len(),
        all_events.len(),
        files.len()
    );

    Ok(records)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
