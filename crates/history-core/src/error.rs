use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by watchlens.
#[derive(Error, Debug)]
pub enum HistoryError {
    /// An export file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON document could not be parsed.
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A `time` value is not a valid ISO-8601 datetime.
    #[error("Malformed timestamp: {0}")]
    MalformedTimestamp(String),

    /// The record sequence is empty, so summary statistics are undefined.
    #[error("Watch history is empty")]
    EmptyHistory,

    /// The expected data path does not exist.
    #[error("Data path not found: {0}")]
    DataPathNotFound(PathBuf),

    /// No watch-history export files were found under the given directory.
    #[error("No watch-history files found in {0}")]
    NoHistoryFiles(PathBuf),
}

/// Convenience alias used throughout the watchlens crates.
pub type Result<T> = std::result::Result<T, HistoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = HistoryError::FileRead {
            path: PathBuf::from("/some/watch-history.json"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read file"));
        assert!(msg.contains("/some/watch-history.json"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_malformed_timestamp() {
        let err = HistoryError::MalformedTimestamp("not-a-timestamp".to_string());
        assert_eq!(err.to_string(), "Malformed timestamp: not-a-timestamp");
    }

    #[test]
    fn test_error_display_empty_history() {
        assert_eq!(HistoryError::EmptyHistory.to_string(), "Watch history is empty");
    }

    #[test]
    fn test_error_display_data_path_not_found() {
        let err = HistoryError::DataPathNotFound(PathBuf::from("/missing/dir"));
        assert_eq!(err.to_string(), "Data path not found: /missing/dir");
    }

    #[test]
    fn test_error_display_no_history_files() {
        let err = HistoryError::NoHistoryFiles(PathBuf::from("/empty/dir"));
        assert_eq!(err.to_string(), "No watch-history files found in /empty/dir");
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid}").unwrap_err();
        let err: HistoryError = json_err.into();
        assert!(err.to_string().contains("Failed to parse JSON"));
    }
}
