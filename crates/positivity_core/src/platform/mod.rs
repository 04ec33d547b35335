//! Platform collaborator contracts.
//!
//! # Responsibility
//! - Define the injectable boundary between display logic and host UI
//!   capabilities (clock, randomness, share sheet, clipboard, notices).
//! - Provide default implementations usable without a UI runtime.
//!
//! # Invariants
//! - Share capability presence is resolved per invocation as
//!   `ShareCapability::{Native, Unavailable}`; a failing native share never
//!   turns into `Unavailable`.
//! - Collaborator failures are values, never panics.

pub mod capability;

use chrono::{DateTime, FixedOffset, Local};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex, PoisonError};

/// Wall-clock source.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Uniform random source. Need not be cryptographically strong.
pub trait RandomSource {
    /// Returns a sample in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

/// Payload handed to a native share sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// Native share failure, including user cancellation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    Cancelled,
    Failed(String),
}

impl Display for ShareError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cancelled => write!(f, "share cancelled by user"),
            Self::Failed(reason) => write!(f, "share failed: {reason}"),
        }
    }
}

impl Error for ShareError {}

/// Native share sheet.
pub trait NativeShare {
    fn share(&self, request: &ShareRequest) -> Result<(), ShareError>;
}

/// Clipboard write failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    Unavailable(String),
    WriteFailed(String),
}

impl Display for ClipboardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(reason) => write!(f, "clipboard unavailable: {reason}"),
            Self::WriteFailed(reason) => write!(f, "clipboard write failed: {reason}"),
        }
    }
}

impl Error for ClipboardError {}

/// System clipboard writer.
pub trait Clipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// User-facing notice primitive.
pub trait Notifier {
    fn notify(&self, notice: &str);
}

/// Native share presence for one share invocation.
#[derive(Clone, Copy)]
pub enum ShareCapability<'a> {
    Native(&'a dyn NativeShare),
    Unavailable,
}

/// Collaborators consulted by one share invocation.
#[derive(Clone, Copy)]
pub struct ShareServices<'a> {
    pub share: ShareCapability<'a>,
    pub clipboard: &'a dyn Clipboard,
    pub notifier: &'a dyn Notifier,
}

/// Clock backed by the local system time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same instant, so a host (or a test) can keep one handle
/// while the controller owns another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<FixedOffset>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<FixedOffset>) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    /// Jumps to `instant`.
    pub fn set(&self, instant: DateTime<FixedOffset>) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = instant;
    }

    /// Moves forward by `delta`.
    pub fn advance(&self, delta: chrono::Duration) {
        let mut guard = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = *guard + delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<FixedOffset> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Thread-local generator seeded by the OS.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Deterministic generator for reproducible sessions.
#[derive(Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, ManualClock, RandomSource, SeededRandom};
    use chrono::{DateTime, Duration};

    #[test]
    fn manual_clock_clones_share_one_instant() {
        let start = DateTime::parse_from_rfc3339("2026-03-01T08:00:00+01:00").expect("rfc3339");
        let clock = ManualClock::new(start);
        let handle = clock.clone();

        handle.advance(Duration::seconds(90));
        assert_eq!(clock.now(), start + Duration::seconds(90));
    }

    #[test]
    fn seeded_random_is_reproducible_and_in_range() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        for _ in 0..32 {
            let sample = a.next_unit();
            assert_eq!(sample, b.next_unit());
            assert!((0.0..1.0).contains(&sample));
        }
    }
}
