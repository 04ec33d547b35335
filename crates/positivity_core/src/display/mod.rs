//! Display controller and its supporting pieces.
//!
//! # Responsibility
//! - Own the single on-screen message, the clock and the refresh transition.
//! - Derive render-ready presentation for host shells.
//!
//! # See also
//! - `crate::platform` for the injected collaborators.

pub mod controller;
pub mod presentation;
pub mod timer;
