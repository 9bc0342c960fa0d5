//! Per-render configuration and the collaborators it injects.
//!
//! A [`Config`] is built once (usually at process or request start) and only
//! read afterwards, so the same value can back renders on many threads.

use std::{
    collections::{HashMap, HashSet},
    fmt,
    sync::Arc,
};

use crate::escape::{EscapeFn, escape_html};

/// A user a mention resolved to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub profile_url: String,
}

impl Identity {
    #[must_use]
    pub fn new(username: impl Into<String>, profile_url: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            profile_url: profile_url.into(),
        }
    }
}

/// Looks up the user behind an `@name` token.
pub trait MentionResolver: Send + Sync {
    /// Return the identity for `name`, or `None` when nobody answers to it.
    fn resolve(&self, name: &str) -> Option<Identity>;
}

/// Keys are compared in lowercase, so `@Nitely` and `@nitely` hit the same entry.
impl MentionResolver for HashMap<String, Identity> {
    fn resolve(&self, name: &str) -> Option<Identity> {
        self.get(&name.to_lowercase())
            .or_else(|| self.get(name))
            .cloned()
    }
}

impl<F> MentionResolver for F
where
    F: Fn(&str) -> Option<Identity> + Send + Sync,
{
    fn resolve(&self, name: &str) -> Option<Identity> { self(name) }
}

/// Maps an emoji shortcode name to the CSS class of its icon.
pub trait EmojiLookup: Send + Sync {
    fn class_for(&self, name: &str) -> Option<String>;
}

/// A set of known names; the class is derived with [`emoji_class`].
impl EmojiLookup for HashSet<String> {
    fn class_for(&self, name: &str) -> Option<String> {
        self.contains(name).then(|| emoji_class(name))
    }
}

/// Explicit name to class pairs.
impl EmojiLookup for HashMap<String, String> {
    fn class_for(&self, name: &str) -> Option<String> { self.get(name).cloned() }
}

/// Emoji table backed by GitHub's shortcode list.
#[derive(Clone, Copy, Debug, Default)]
pub struct GithubEmoji;

impl EmojiLookup for GithubEmoji {
    fn class_for(&self, name: &str) -> Option<String> {
        gh_emoji::get(name).map(|_| emoji_class(name))
    }
}

/// Turn a shortcode name into its CSS class form.
///
/// # Examples
///
/// ```
/// use inlinemark::emoji_class;
///
/// assert_eq!(emoji_class("+1"), "plus1");
/// assert_eq!(emoji_class("thumbs_up"), "thumbs-up");
/// ```
#[must_use]
pub fn emoji_class(name: &str) -> String { name.replace('_', "-").replace('+', "plus") }

/// Settings that shape a single render.
#[derive(Clone)]
pub struct Config {
    /// Emit `rel="nofollow"` on anchors built from user text.
    pub no_follow: bool,
    /// Stop resolving new mentions once this many lookups were attempted.
    pub max_mentions: Option<usize>,
    pub(crate) emoji: Option<Arc<dyn EmojiLookup>>,
    pub(crate) mentions: Option<Arc<dyn MentionResolver>>,
    pub(crate) escape: EscapeFn,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            no_follow: true,
            max_mentions: None,
            emoji: Some(Arc::new(GithubEmoji)),
            mentions: None,
            escape: escape_html,
        }
    }
}

impl Config {
    #[must_use]
    pub fn with_no_follow(mut self, no_follow: bool) -> Self {
        self.no_follow = no_follow;
        self
    }

    #[must_use]
    pub fn with_max_mentions(mut self, max: Option<usize>) -> Self {
        self.max_mentions = max;
        self
    }

    #[must_use]
    pub fn with_emoji(mut self, lookup: impl EmojiLookup + 'static) -> Self {
        self.emoji = Some(Arc::new(lookup));
        self
    }

    /// Treat every `:name:` shortcode as plain text.
    #[must_use]
    pub fn without_emoji(mut self) -> Self {
        self.emoji = None;
        self
    }

    #[must_use]
    pub fn with_resolver(mut self, resolver: impl MentionResolver + 'static) -> Self {
        self.mentions = Some(Arc::new(resolver));
        self
    }

    #[must_use]
    pub fn with_escape(mut self, escape: EscapeFn) -> Self {
        self.escape = escape;
        self
    }

    pub(crate) fn emoji_class(&self, name: &str) -> Option<String> {
        self.emoji.as_ref().and_then(|lookup| lookup.class_for(name))
    }

    pub(crate) fn resolve(&self, name: &str) -> Option<Identity> {
        self.mentions.as_ref().and_then(|r| r.resolve(name))
    }

    pub(crate) fn has_resolver(&self) -> bool { self.mentions.is_some() }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("no_follow", &self.no_follow)
            .field("max_mentions", &self.max_mentions)
            .field("emoji", &self.emoji.is_some())
            .field("mentions", &self.mentions.is_some())
            .finish_non_exhaustive()
    }
}
