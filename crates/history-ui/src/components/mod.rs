//! Reusable rendering components shared by the dashboard views.

pub mod bars;
pub mod header;
