use positivity_core::{
    accent_for, builtin_catalog, icon_for, Category, CategoryIcon, MessagePresentation,
};
use std::collections::HashSet;

#[test]
fn builtin_catalog_ids_are_unique_and_positive() {
    let catalog = builtin_catalog();
    let ids = catalog
        .messages()
        .iter()
        .map(|message| message.id)
        .collect::<HashSet<_>>();
    assert_eq!(ids.len(), catalog.len());
    assert!(ids.iter().all(|id| *id > 0));
    assert!(catalog
        .messages()
        .iter()
        .all(|message| !message.text.trim().is_empty() && message.author.is_none()));
}

#[test]
fn every_catalog_entry_resolves_accent_and_icon() {
    for message in builtin_catalog().messages() {
        let accent = accent_for(message.category);
        assert!(accent.gradient.starts_with("from-"));
        assert!(accent.gradient.contains(" to-"));
        let expected_icon = match message.category {
            Category::Motivation => CategoryIcon::Star,
            Category::Gratitude => CategoryIcon::Heart,
            Category::SelfLove => CategoryIcon::Sparkles,
            Category::Success => CategoryIcon::Sun,
            Category::Mindfulness => CategoryIcon::Calendar,
        };
        assert_eq!(icon_for(message.category), expected_icon, "message {}", message.id);
        assert!(!expected_icon.glyph().is_empty());
    }
}

#[test]
fn every_category_is_used_by_the_builtin_catalog() {
    let used = builtin_catalog()
        .messages()
        .iter()
        .map(|message| message.category)
        .collect::<HashSet<_>>();
    for category in Category::ALL {
        assert!(used.contains(&category), "{category} missing from catalog");
    }
}

#[test]
fn category_tables_match_web_shell_classes() {
    let expected = [
        (Category::Motivation, "from-orange-400 to-pink-500", CategoryIcon::Star),
        (Category::Gratitude, "from-green-400 to-blue-500", CategoryIcon::Heart),
        (Category::SelfLove, "from-pink-400 to-purple-500", CategoryIcon::Sparkles),
        (Category::Success, "from-yellow-400 to-orange-500", CategoryIcon::Sun),
        (Category::Mindfulness, "from-blue-400 to-indigo-500", CategoryIcon::Calendar),
    ];
    for (category, gradient, icon) in expected {
        assert_eq!(accent_for(category).gradient, gradient);
        assert_eq!(icon_for(category), icon);
    }
}

#[test]
fn message_serialization_uses_expected_wire_fields() {
    let message = builtin_catalog().find(2).expect("message 2");
    let json = serde_json::to_value(message).expect("serialize");
    assert_eq!(json["id"], 2);
    assert_eq!(json["category"], "self-love");
    assert_eq!(json["author"], serde_json::Value::Null);

    let category: Category = serde_json::from_str("\"self-love\"").expect("deserialize");
    assert_eq!(category, Category::SelfLove);
}

#[test]
fn presentation_serializes_icon_and_accent() {
    let message = builtin_catalog().find(6).expect("message 6");
    let now = chrono::DateTime::parse_from_rfc3339("2026-01-06T07:00:00+00:00").expect("rfc3339");
    let json = serde_json::to_value(MessagePresentation::new(message, true, now)).expect("json");

    assert_eq!(json["category_label"], "Mindfulness");
    assert_eq!(json["icon"], "calendar");
    assert_eq!(json["accent"]["gradient"], "from-blue-400 to-indigo-500");
    assert_eq!(json["is_animating"], true);
    assert_eq!(json["date_label"], "Tuesday, January 6, 2026");
}
