//! Core domain layer for watchlens.
//!
//! Holds the watch-history data model, timestamp parsing, error types,
//! display formatting helpers and CLI settings shared by every other crate.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod timestamp;
