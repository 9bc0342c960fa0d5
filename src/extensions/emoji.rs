//! `:shortcode:` emoji.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    error::RenderError,
    grammar::{Match, Pattern, Rule, TokenKind},
    scanner::Scanner,
};

/// Group 1: the shortcode name.
static EMOJI: LazyLock<Regex> = lazy_regex!(
    r"^:([A-Za-z0-9_+-]+?):",
    "emoji pattern should compile",
);

pub(crate) fn rule() -> Rule { Rule::new(TokenKind::Emoji, 40, Pattern::Regex(&EMOJI), render) }

/// Unknown names, or emoji switched off, leave the shortcode as text.
fn render(scanner: &mut Scanner<'_>, m: &Match<'_>) -> Result<String, RenderError> {
    let renderer = scanner.renderer();
    let Some(name) = m.group(1) else {
        return Ok(renderer.text(m.as_str()));
    };
    Ok(match scanner.config().emoji_class(name) {
        Some(class) => renderer.emoji(&class, name),
        None => renderer.text(m.as_str()),
    })
}
