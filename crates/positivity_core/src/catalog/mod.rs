//! Immutable affirmation catalog.
//!
//! # Responsibility
//! - Own the ordered list of affirmation records.
//! - Validate catalog invariants once, at construction.
//! - Expose category-derived accent and icon tables.
//!
//! # Invariants
//! - A `Catalog` is never empty; selection divides by its length.
//! - Ids are positive and unique; texts are non-empty.
//! - The built-in catalog is validated on first access and lives for the
//!   whole process.

mod entries;
pub mod style;

use crate::model::message::{AffirmationMessage, MessageId};
use once_cell::sync::Lazy;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

static BUILTIN_CATALOG: Lazy<Catalog> = Lazy::new(|| {
    Catalog::new(entries::BUILTIN_MESSAGES).expect("built-in catalog must satisfy invariants")
});

/// Returns the process-wide built-in catalog.
pub fn builtin_catalog() -> &'static Catalog {
    &BUILTIN_CATALOG
}

/// Catalog validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Empty,
    ZeroId { position: usize },
    DuplicateId(MessageId),
    EmptyText(MessageId),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "catalog must contain at least one message"),
            Self::ZeroId { position } => {
                write!(f, "message at position {position} has id 0; ids must be positive")
            }
            Self::DuplicateId(id) => write!(f, "message id {id} appears more than once"),
            Self::EmptyText(id) => write!(f, "message {id} has empty text"),
        }
    }
}

impl Error for CatalogError {}

/// Validated, read-only list of affirmation records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    messages: &'static [AffirmationMessage],
}

impl Catalog {
    /// Validates `messages` and wraps them.
    ///
    /// # Errors
    /// - `Empty` when no records are given.
    /// - `ZeroId`, `DuplicateId`, `EmptyText` for the first offending record.
    pub fn new(messages: &'static [AffirmationMessage]) -> Result<Self, CatalogError> {
        if messages.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = BTreeSet::new();
        for (position, message) in messages.iter().enumerate() {
            if message.id == 0 {
                return Err(CatalogError::ZeroId { position });
            }
            if !seen.insert(message.id) {
                return Err(CatalogError::DuplicateId(message.id));
            }
            if message.text.trim().is_empty() {
                return Err(CatalogError::EmptyText(message.id));
            }
        }
        Ok(Self { messages })
    }

    /// Number of records. Always positive.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// All records in catalog order.
    pub fn messages(&self) -> &'static [AffirmationMessage] {
        self.messages
    }

    /// Record at `index`, wrapping around the catalog length.
    pub fn get_wrapped(&self, index: usize) -> &'static AffirmationMessage {
        &self.messages[index % self.messages.len()]
    }

    /// Record with the given stable id.
    pub fn find(&self, id: MessageId) -> Option<&'static AffirmationMessage> {
        self.messages.iter().find(|message| message.id == id)
    }

    /// Whether `message` is one of this catalog's records.
    pub fn contains(&self, message: &AffirmationMessage) -> bool {
        self.find(message.id) == Some(message)
    }
}
