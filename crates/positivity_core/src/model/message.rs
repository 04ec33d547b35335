//! Affirmation message model.
//!
//! # Responsibility
//! - Define the record rendered by every host shell.
//! - Provide the closed category set and its wire names.
//!
//! # Invariants
//! - `id` is positive and never reused inside one catalog.
//! - `text` is non-empty.
//! - `category` wire names are `motivation|gratitude|self-love|success|mindfulness`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Stable identifier for one catalog entry.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type MessageId = u32;

/// Closed set of affirmation themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Motivation,
    Gratitude,
    SelfLove,
    Success,
    Mindfulness,
}

impl Category {
    /// Every category in declaration order.
    pub const ALL: [Category; 5] = [
        Self::Motivation,
        Self::Gratitude,
        Self::SelfLove,
        Self::Success,
        Self::Mindfulness,
    ];

    /// Stable wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Motivation => "motivation",
            Self::Gratitude => "gratitude",
            Self::SelfLove => "self-love",
            Self::Success => "success",
            Self::Mindfulness => "mindfulness",
        }
    }

    /// Display label: separators become spaces and every word is capitalized.
    ///
    /// `self-love` renders as `Self Love`.
    pub fn label(self) -> String {
        self.as_str()
            .replace('-', " ")
            .split(' ')
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| UnknownCategory(value.to_string()))
    }
}

/// Category parse error for values outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl Display for UnknownCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown category `{}`; expected motivation|gratitude|self-love|success|mindfulness",
            self.0
        )
    }
}

impl Error for UnknownCategory {}

/// One affirmation record.
///
/// Fields borrow `'static` text because every catalog is built from
/// compile-time literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AffirmationMessage {
    /// Stable id; ordering follows catalog position.
    pub id: MessageId,
    /// The affirmation itself.
    pub text: &'static str,
    /// Optional attribution. Unused by the built-in catalog.
    pub author: Option<&'static str>,
    /// Theme used for presentation lookups.
    pub category: Category,
}

impl AffirmationMessage {
    /// Creates one unattributed record.
    pub const fn new(id: MessageId, text: &'static str, category: Category) -> Self {
        Self {
            id,
            text,
            author: None,
            category,
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
