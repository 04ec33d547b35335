//! Category-derived presentation tables.
//!
//! # Invariants
//! - `accent_for` and `icon_for` are total over `Category`.
//! - Gradient class strings match the web shell's utility classes exactly.

use crate::model::message::Category;
use serde::Serialize;

/// One sRGB color stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` form.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Two-stop gradient accent for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryAccent {
    /// Gradient utility classes, e.g. `from-orange-400 to-pink-500`.
    pub gradient: &'static str,
    /// First gradient stop.
    pub from: Rgb,
    /// Last gradient stop.
    pub to: Rgb,
}

/// Icon shown next to a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryIcon {
    Star,
    Heart,
    Sparkles,
    Sun,
    Calendar,
}

impl CategoryIcon {
    /// Stable icon name for host icon sets.
    pub fn name(self) -> &'static str {
        match self {
            Self::Star => "star",
            Self::Heart => "heart",
            Self::Sparkles => "sparkles",
            Self::Sun => "sun",
            Self::Calendar => "calendar",
        }
    }

    /// Single-glyph rendering for terminals.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Star => "★",
            Self::Heart => "♥",
            Self::Sparkles => "✨",
            Self::Sun => "☀",
            Self::Calendar => "📅",
        }
    }
}

const ORANGE_400: Rgb = Rgb::new(0xfb, 0x92, 0x3c);
const ORANGE_500: Rgb = Rgb::new(0xf9, 0x73, 0x16);
const PINK_400: Rgb = Rgb::new(0xf4, 0x72, 0xb6);
const PINK_500: Rgb = Rgb::new(0xec, 0x48, 0x99);
const GREEN_400: Rgb = Rgb::new(0x4a, 0xde, 0x80);
const BLUE_400: Rgb = Rgb::new(0x60, 0xa5, 0xfa);
const BLUE_500: Rgb = Rgb::new(0x3b, 0x82, 0xf6);
const PURPLE_500: Rgb = Rgb::new(0xa8, 0x55, 0xf7);
const YELLOW_400: Rgb = Rgb::new(0xfa, 0xcc, 0x15);
const INDIGO_500: Rgb = Rgb::new(0x63, 0x66, 0xf1);

/// Returns the gradient accent for `category`.
pub fn accent_for(category: Category) -> CategoryAccent {
    match category {
        Category::Motivation => CategoryAccent {
            gradient: "from-orange-400 to-pink-500",
            from: ORANGE_400,
            to: PINK_500,
        },
        Category::Gratitude => CategoryAccent {
            gradient: "from-green-400 to-blue-500",
            from: GREEN_400,
            to: BLUE_500,
        },
        Category::SelfLove => CategoryAccent {
            gradient: "from-pink-400 to-purple-500",
            from: PINK_400,
            to: PURPLE_500,
        },
        Category::Success => CategoryAccent {
            gradient: "from-yellow-400 to-orange-500",
            from: YELLOW_400,
            to: ORANGE_500,
        },
        Category::Mindfulness => CategoryAccent {
            gradient: "from-blue-400 to-indigo-500",
            from: BLUE_400,
            to: INDIGO_500,
        },
    }
}

/// Returns the icon for `category`.
pub fn icon_for(category: Category) -> CategoryIcon {
    match category {
        Category::Motivation => CategoryIcon::Star,
        Category::Gratitude => CategoryIcon::Heart,
        Category::SelfLove => CategoryIcon::Sparkles,
        Category::Success => CategoryIcon::Sun,
        Category::Mindfulness => CategoryIcon::Calendar,
    }
}

#[cfg(test)]
mod tests {
    use super::{accent_for, icon_for, CategoryIcon, Rgb};
    use crate::model::message::Category;
    use std::collections::HashSet;

    #[test]
    fn every_category_has_a_distinct_icon() {
        let icons = Category::ALL
            .into_iter()
            .map(icon_for)
            .collect::<HashSet<_>>();
        assert_eq!(icons.len(), Category::ALL.len());
        assert_eq!(icon_for(Category::SelfLove), CategoryIcon::Sparkles);
    }

    #[test]
    fn accent_gradients_name_their_stops() {
        let accent = accent_for(Category::Gratitude);
        assert_eq!(accent.gradient, "from-green-400 to-blue-500");
        assert_eq!(accent.from.hex(), "#4ade80");
        assert_eq!(accent.to, Rgb::new(0x3b, 0x82, 0xf6));
    }
}
