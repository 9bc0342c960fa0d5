//! `@name` mentions.
//!
//! Names are resolved through the configured
//! [`MentionResolver`](crate::MentionResolver). Each distinct name (compared in
//! lowercase) is looked up at most once per render, and
//! [`Config::max_mentions`] caps how many lookups a render may attempt. Once a
//! lookup is refused, every later mention in the render stays text, including
//! names resolved earlier.

use std::{
    collections::{BTreeMap, HashMap},
    sync::LazyLock,
};

use regex::Regex;

use crate::{
    config::{Config, Identity},
    error::RenderError,
    grammar::{Match, Pattern, Rule, TokenKind},
    scanner::Scanner,
};

/// Resolved mentions keyed by the spelling first seen in the text.
pub type Mentions = BTreeMap<String, Identity>;

/// Group 1: the name without `@`.
static MENTION: LazyLock<Regex> =
    lazy_regex!(r"^@([\w.@+-]+)", "mention pattern should compile");

pub(crate) fn rule() -> Rule { Rule::new(TokenKind::Mention, 30, Pattern::Regex(&MENTION), render) }

fn render(scanner: &mut Scanner<'_>, m: &Match<'_>) -> Result<String, RenderError> {
    let renderer = scanner.renderer();
    let identity = match m.group(1) {
        Some(name) if !scanner.in_link() => scanner.resolve_mention(name).map(|id| (name, id)),
        _ => None,
    };
    Ok(match identity {
        Some((name, identity)) => renderer.mention(name, &identity),
        None => renderer.text(m.as_str()),
    })
}

/// Per-render lookup cache and the mentions found so far.
#[derive(Debug, Default)]
pub(crate) struct MentionTable {
    cache: HashMap<String, Option<Identity>>,
    found: Mentions,
    attempts: usize,
    capped: bool,
}

impl MentionTable {
    pub(crate) fn resolve(&mut self, config: &Config, name: &str) -> Option<Identity> {
        if self.capped {
            return None;
        }
        let key = name.to_lowercase();
        if let Some(cached) = self.cache.get(&key) {
            return cached.clone();
        }
        if !config.has_resolver() {
            return None;
        }
        if config.max_mentions.is_some_and(|max| self.attempts >= max) {
            tracing::debug!(name, attempts = self.attempts, "mention limit reached");
            self.capped = true;
            return None;
        }
        self.attempts += 1;
        let identity = config.resolve(&key);
        tracing::trace!(name, found = identity.is_some(), "resolved mention");
        if let Some(identity) = &identity {
            self.found.insert(name.to_string(), identity.clone());
        }
        self.cache.insert(key, identity.clone());
        identity
    }

    pub(crate) fn found(&self) -> &Mentions { &self.found }

    pub(crate) fn into_found(self) -> Mentions { self.found }
}
