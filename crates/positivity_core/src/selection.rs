//! Message selection rules.
//!
//! # Responsibility
//! - Map a calendar date to its deterministic daily catalog index.
//! - Map a uniform sample to a random catalog index.
//!
//! # Invariants
//! - January 1 is day 1; the index is `day_of_year % len`.
//! - Random indices are always in `[0, len)` for a non-empty catalog.

use chrono::{Datelike, NaiveDate};

/// Whole days elapsed since the day before January 1 of `date`'s year.
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// Catalog index shown on `date` for a catalog of `len` entries.
///
/// `len` must be positive; `Catalog` guarantees this.
pub fn daily_index(date: NaiveDate, len: usize) -> usize {
    day_of_year(date) as usize % len
}

/// Scales a uniform `sample` in `[0, 1)` to an index in `[0, len)`.
///
/// Out-of-range samples are clamped so a misbehaving source cannot index
/// past the catalog.
pub fn random_index(sample: f64, len: usize) -> usize {
    let sample = if sample.is_finite() {
        sample.clamp(0.0, 1.0)
    } else {
        0.0
    };
    ((sample * len as f64).floor() as usize).min(len - 1)
}
