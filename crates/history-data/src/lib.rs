//! Data layer for watchlens.
//!
//! Responsible for discovering and reading `watch-history.json` exports,
//! normalizing raw events into watch records, and computing the aggregate
//! statistics consumed by the UI layer.

pub mod aggregates;
pub mod loader;
pub mod transform;

pub use history_core as core;
