//! Terminal rendering of the display view-model.

use crossterm::style::{Color, Stylize};
use positivity_core::display::presentation::{
    APP_TAGLINE, APP_TITLE, BANNER_TEXT, BANNER_TITLE, FEATURE_HIGHLIGHTS, FOOTER_TEXT,
    HEADER_ICON,
};
use positivity_core::{icon_for, AffirmationMessage, MessagePresentation, Rgb};
use std::io::{self, Write};

const CARD_WIDTH: usize = 64;

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

pub fn write_header(out: &mut impl Write, date_label: &str, eol: &str) -> io::Result<()> {
    write!(out, "{} {}{eol}", HEADER_ICON.glyph(), APP_TITLE.bold())?;
    write!(out, "{}{eol}", APP_TAGLINE.dark_grey())?;
    write!(out, "{}{eol}{eol}", date_label.dark_grey())
}

pub fn write_card(out: &mut impl Write, view: &MessagePresentation, eol: &str) -> io::Result<()> {
    let rule = "─".repeat(CARD_WIDTH);
    write!(out, "{}{eol}", rule.as_str().with(color(view.accent.from)))?;
    write!(
        out,
        "  {} {}{eol}{eol}",
        view.icon.glyph(),
        view.category_label.as_str().with(color(view.accent.from)).bold()
    )?;

    for line in wrap(&format!("\"{}\"", view.text), CARD_WIDTH - 4) {
        if view.is_animating {
            write!(out, "  {}{eol}", line.as_str().dim())?;
        } else {
            write!(out, "  {line}{eol}")?;
        }
    }
    if let Some(author) = view.author {
        write!(out, "{eol}  — {author}{eol}")?;
    }
    write!(out, "{eol}{}{eol}", rule.as_str().with(color(view.accent.to)))
}

pub fn write_highlights(out: &mut impl Write, eol: &str) -> io::Result<()> {
    for feature in FEATURE_HIGHLIGHTS {
        write!(
            out,
            "{} {}: {}{eol}",
            feature.icon.glyph(),
            feature.title.bold(),
            feature.blurb.dark_grey()
        )?;
    }
    write!(out, "{eol}{}{eol}{}{eol}", BANNER_TITLE.bold(), BANNER_TEXT)
}

pub fn write_footer(out: &mut impl Write, eol: &str) -> io::Result<()> {
    write!(out, "{eol}{} ✨{eol}", FOOTER_TEXT.dark_grey())
}

pub fn write_catalog_line(
    out: &mut impl Write,
    message: &AffirmationMessage,
    eol: &str,
) -> io::Result<()> {
    let accent = positivity_core::accent_for(message.category);
    write!(
        out,
        "{:>3} {} {} {}{eol}",
        message.id,
        icon_for(message.category).glyph(),
        format!("{:<12}", message.category.label()).with(color(accent.from)),
        message.text
    )
}

/// Greedy word wrap. Words longer than `width` get their own line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::{wrap, write_card};
    use chrono::DateTime;
    use positivity_core::{builtin_catalog, MessagePresentation};

    #[test]
    fn wrap_respects_width_and_keeps_words() {
        let lines = wrap("Every small step forward is progress worth celebrating.", 20);
        assert!(lines.iter().all(|line| line.chars().count() <= 20));
        assert_eq!(
            lines.join(" "),
            "Every small step forward is progress worth celebrating."
        );
        assert_eq!(wrap("", 10), Vec::<String>::new());
    }

    #[test]
    fn card_contains_label_and_text() {
        let message = builtin_catalog().find(7).expect("message 7");
        let now = DateTime::parse_from_rfc3339("2026-10-16T08:00:00+02:00").expect("rfc3339");
        let view = MessagePresentation::new(message, false, now);

        let mut out = Vec::new();
        write_card(&mut out, &view, "\n").expect("write to vec");
        let rendered = String::from_utf8(out).expect("utf-8");
        assert!(rendered.contains("Self Love"));
        assert!(rendered.contains("worthy of love"));
        assert!(rendered.contains("✨"));
    }
}
