//! Terminal UI layer for watchlens.
//!
//! Provides themes, header and bar components, the ranking/chart/heatmap
//! views, and the main application event loop built on top of [`ratatui`]
//! for rendering the watch-history dashboard in the terminal.

pub mod app;
pub mod chart_view;
pub mod components;
pub mod heatmap_view;
pub mod table_view;
pub mod themes;

pub use history_core as core;
