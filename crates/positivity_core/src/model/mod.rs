//! Domain model for affirmation records.
//!
//! # Responsibility
//! - Define the canonical message record shared by catalog, controller and
//!   host shells.
//! - Keep the category set closed so presentation lookups stay total.
//!
//! # Invariants
//! - Every message is identified by a positive `MessageId`.
//! - `Category` has exactly five members.

pub mod message;
