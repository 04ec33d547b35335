//! Built-in affirmation records.

use crate::model::message::{AffirmationMessage, Category};

pub(crate) const BUILTIN_MESSAGES: &[AffirmationMessage] = &[
    AffirmationMessage::new(
        1,
        "Today is a new beginning. Embrace the possibilities that await you.",
        Category::Motivation,
    ),
    AffirmationMessage::new(
        2,
        "You are stronger than you think and more capable than you imagine.",
        Category::SelfLove,
    ),
    AffirmationMessage::new(
        3,
        "Every small step forward is progress worth celebrating.",
        Category::Motivation,
    ),
    AffirmationMessage::new(
        4,
        "Your kindness creates ripples of positivity in the world.",
        Category::Gratitude,
    ),
    AffirmationMessage::new(
        5,
        "Believe in yourself - you have everything you need to succeed.",
        Category::Success,
    ),
    AffirmationMessage::new(
        6,
        "Take a moment to breathe and appreciate this present moment.",
        Category::Mindfulness,
    ),
    AffirmationMessage::new(
        7,
        "You are worthy of love, happiness, and all good things.",
        Category::SelfLove,
    ),
    AffirmationMessage::new(
        8,
        "Challenges are opportunities for growth and learning.",
        Category::Motivation,
    ),
    AffirmationMessage::new(
        9,
        "Your unique perspective makes the world a more beautiful place.",
        Category::Gratitude,
    ),
    AffirmationMessage::new(
        10,
        "Success is not a destination, but a journey of continuous growth.",
        Category::Success,
    ),
    AffirmationMessage::new(
        11,
        "Peace begins with a smile and a grateful heart.",
        Category::Mindfulness,
    ),
    AffirmationMessage::new(
        12,
        "You have the power to create positive change in your life.",
        Category::Motivation,
    ),
    AffirmationMessage::new(
        13,
        "Every day you choose kindness, you make the world brighter.",
        Category::Gratitude,
    ),
    AffirmationMessage::new(
        14,
        "Trust the process - you are exactly where you need to be.",
        Category::Mindfulness,
    ),
    AffirmationMessage::new(
        15,
        "Your dreams are valid and achievable with persistence and faith.",
        Category::Success,
    ),
];
