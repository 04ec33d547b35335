//! View-model derived from display state.
//!
//! Everything here is cosmetic: hosts render it, nothing feeds back into
//! selection.

use crate::catalog::style::{accent_for, icon_for, CategoryAccent, CategoryIcon};
use crate::model::message::{AffirmationMessage, Category, MessageId};
use chrono::{DateTime, FixedOffset};
use serde::Serialize;

pub const APP_TITLE: &str = "Daily Positivity";
pub const APP_TAGLINE: &str = "Start each day with uplifting messages to brighten your mood";
pub const BANNER_TITLE: &str = "Find Your Inner Peace";
pub const BANNER_TEXT: &str = "Every sunrise brings new opportunities for growth and happiness";
pub const FOOTER_TEXT: &str = "Spread positivity and make each day a little brighter";
/// Icon shown in the app header.
pub const HEADER_ICON: CategoryIcon = CategoryIcon::Sun;

/// Notice shown after a successful clipboard fallback.
pub const COPIED_NOTICE: &str = "Message copied to clipboard!";
/// Notice shown when the clipboard fallback could not write.
pub const COPY_FAILED_NOTICE: &str = "Could not copy message to clipboard.";

/// Static feature highlight card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureHighlight {
    pub title: &'static str,
    pub blurb: &'static str,
    pub icon: CategoryIcon,
}

pub const FEATURE_HIGHLIGHTS: [FeatureHighlight; 3] = [
    FeatureHighlight {
        title: "Daily Inspiration",
        blurb: "Receive a new positive message every day to start your morning right",
        icon: CategoryIcon::Calendar,
    },
    FeatureHighlight {
        title: "Mindful Moments",
        blurb: "Take a pause and reflect on uplifting thoughts throughout your day",
        icon: CategoryIcon::Heart,
    },
    FeatureHighlight {
        title: "Personal Growth",
        blurb: "Build confidence and cultivate a positive mindset with daily affirmations",
        icon: CategoryIcon::Sparkles,
    },
];

/// Render-ready projection of the current display state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessagePresentation {
    pub message_id: MessageId,
    pub text: &'static str,
    pub author: Option<&'static str>,
    pub category: Category,
    /// Capitalized, separator-free category name.
    pub category_label: String,
    pub accent: CategoryAccent,
    pub icon: CategoryIcon,
    /// Hosts dim/shrink the card and disable the refresh control while set.
    pub is_animating: bool,
    /// Header date, en-US long form.
    pub date_label: String,
}

impl MessagePresentation {
    pub fn new(
        message: &AffirmationMessage,
        is_animating: bool,
        now: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            message_id: message.id,
            text: message.text,
            author: message.author,
            category: message.category,
            category_label: message.category.label(),
            accent: accent_for(message.category),
            icon: icon_for(message.category),
            is_animating,
            date_label: format_long_date(now),
        }
    }
}

/// Formats `now` as `Friday, October 16, 2026`.
pub fn format_long_date(now: DateTime<FixedOffset>) -> String {
    now.format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::{format_long_date, MessagePresentation};
    use crate::catalog::builtin_catalog;
    use crate::catalog::style::CategoryIcon;
    use chrono::DateTime;

    #[test]
    fn long_date_uses_us_ordering_without_padding() {
        let now = DateTime::parse_from_rfc3339("2026-03-05T09:30:00-05:00").expect("rfc3339");
        assert_eq!(format_long_date(now), "Thursday, March 5, 2026");
    }

    #[test]
    fn presentation_derives_style_from_category() {
        let message = builtin_catalog().find(2).expect("message 2");
        let now = DateTime::parse_from_rfc3339("2026-10-16T08:00:00+02:00").expect("rfc3339");
        let view = MessagePresentation::new(message, false, now);

        assert_eq!(view.category_label, "Self Love");
        assert_eq!(view.icon, CategoryIcon::Sparkles);
        assert_eq!(view.accent.gradient, "from-pink-400 to-purple-500");
        assert_eq!(view.date_label, "Friday, October 16, 2026");
    }
}
