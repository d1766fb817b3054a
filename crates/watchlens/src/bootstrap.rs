use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Directory bootstrap ────────────────────────────────────────────────────────

/// Ensure the standard `~/.watchlens/` directory hierarchy exists.
///
/// Creates the following directories if absent (including any missing parents):
/// - `~/.watchlens/`
/// - `~/.watchlens/logs/`
pub fn ensure_directories() -> anyhow::Result<()> {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    let app_dir = home.join(".watchlens");
    std::fs::create_dir_all(&app_dir)?;
    std::fs::create_dir_all(app_dir.join("logs"))?;
    Ok(())
}

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` is mapped to a [`tracing_subscriber::EnvFilter`] directive,
/// falling back to `"info"` if the level string is not recognised.
///
/// `log_file` is accepted but not wired up yet; everything goes to stderr
/// for now.
pub fn setup_logging(log_level: &str, _log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt::layer().with_target(false).with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .init();

    Ok(())
}

// ── Data-path discovery ────────────────────────────────────────────────────────

/// Attempt to locate a watch-history export on the local system.
///
/// Checks the following paths in order and returns the first that exists:
/// 1. `./watch-history.json`
/// 2. `./data/` (searched recursively by the loader)
/// 3. `~/Takeout/` (the default Google Takeout extraction directory)
///
/// Returns `None` when none of the paths exist.
pub fn discover_data_path() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut candidates = vec![cwd.join("watch-history.json"), cwd.join("data")];
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join("Takeout"));
    }
    candidates.into_iter().find(|p| p.exists())
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ── test_ensure_directories ───────────────────────────────────────────────

    #[test]
    fn test_ensure_directories() {
        let tmp = TempDir::new().expect("tempdir");

        // Override HOME so that dirs::home_dir() resolves to our temp dir.
        let original_home = std::env::var_os("HOME");
        std::env::set_var("HOME", tmp.path());

        let result = ensure_directories();

        // Restore HOME.
        match original_home {
            Some(v) => std::env::set_var("HOME", v),
            None => std::env::remove_var("HOME"),
        }

        result.expect("ensure_directories should succeed");

        let app_dir = tmp.path().join(".watchlens");
        assert!(app_dir.is_dir(), ".watchlens dir must exist");
        assert!(app_dir.join("logs").is_dir(), "logs subdir must exist");
    }

    // ── test_discover_data_path ───────────────────────────────────────────────

    // Single test because the working directory is process-global state.
    #[test]
    fn test_discover_data_path_finds_cwd_export() {
        let tmp = TempDir::new().expect("tempdir");
        std::fs::write(tmp.path().join("watch-history.json"), "[]").unwrap();
        // A data/ dir alongside must not shadow the export file itself.
        std::fs::create_dir_all(tmp.path().join("data")).unwrap();

        let original_cwd = std::env::current_dir().unwrap();
        std::env::set_current_dir(tmp.path()).unwrap();

        let path = discover_data_path();

        std::env::set_current_dir(original_cwd).unwrap();

        assert!(path.expect("should find export").ends_with("watch-history.json"));
    }
}
