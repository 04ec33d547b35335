//! Flutter-facing bindings for the Daily Positivity core.

pub mod api;
