mod bootstrap;

use anyhow::{bail, Result};
use history_core::settings::Settings;
use history_data::loader::load_watch_history;
use history_ui::app::{App, DashboardData};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load_with_last_used();

    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("watchlens v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("View: {}, Theme: {}", settings.view, settings.theme);

    let data_path = match settings.data_path.clone() {
        Some(path) => path,
        None => match bootstrap::discover_data_path() {
            Some(path) => path,
            None => {
                bail!(
                    "No watch-history export found. Pass --data-path or place \
                     watch-history.json in the current directory."
                );
            }
        },
    };

    tracing::info!("Loading watch history from {}", data_path.display());
    let records = load_watch_history(&data_path)?;
    tracing::info!("Loaded {} watch records", records.len());

    let data = DashboardData::from_records(
        &records,
        settings.top_channels as usize,
        settings.top_titles as usize,
    );

    let app = App::new(&settings.theme, &settings.view, data);

    // Run the TUI event loop. The loop exits on 'q' / Ctrl+C inside the TUI.
    // We also listen for Ctrl+C at the OS level so that signals received
    // while the terminal is in raw mode are handled cleanly.
    tokio::select! {
        result = app.run() => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Ctrl+C received; shutting down");
        }
    }

    Ok(())
}
