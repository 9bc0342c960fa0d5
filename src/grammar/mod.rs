//! The ordered rule set that drives the inline scanner.
//!
//! A [`Grammar`] is assembled once from the base rules plus any extension
//! rules and never changes afterwards; every [`Scanner`](crate::Scanner)
//! borrows it. Rules are tried in ascending priority and the first one whose
//! anchored pattern matches at the cursor wins. Plain text is the fallback.

mod lookahead;
pub(crate) mod patterns;
mod scanning;

use std::{fmt, sync::LazyLock};

use regex::{Captures, Regex};

pub(crate) use lookahead::Lookahead;

use crate::{
    error::RenderError,
    extensions,
    handlers,
    scanner::Scanner,
};

/// The kinds of inline token the grammar recognises.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Escape,
    InlineHtml,
    Mention,
    Emoji,
    Autolink,
    Url,
    Link,
    DoubleEmphasis,
    Emphasis,
    Code,
    LineBreak,
    Strikethrough,
    Text,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Escape => "escape",
            Self::InlineHtml => "inline_html",
            Self::Mention => "mention",
            Self::Emoji => "emoji",
            Self::Autolink => "autolink",
            Self::Url => "url",
            Self::Link => "link",
            Self::DoubleEmphasis => "double_emphasis",
            Self::Emphasis => "emphasis",
            Self::Code => "code",
            Self::LineBreak => "linebreak",
            Self::Strikethrough => "strikethrough",
            Self::Text => "text",
        };
        f.write_str(name)
    }
}

/// One application of a rule at the cursor.
///
/// Group 0 is the whole consumed span; numbered groups are rule specific.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match<'t> {
    text: &'t str,
    groups: Vec<Option<&'t str>>,
}

impl<'t> Match<'t> {
    pub(crate) fn new(text: &'t str, groups: Vec<Option<&'t str>>) -> Self { Self { text, groups } }

    fn from_captures(caps: &Captures<'t>) -> Option<Self> {
        let text = caps.get(0)?.as_str();
        let groups = caps.iter().skip(1).map(|g| g.map(|m| m.as_str())).collect();
        Some(Self { text, groups })
    }

    #[must_use]
    pub fn as_str(&self) -> &'t str { self.text }

    #[must_use]
    pub fn len(&self) -> usize { self.text.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.text.is_empty() }

    /// Group `idx`, where 0 is the whole span.
    #[must_use]
    pub fn group(&self, idx: usize) -> Option<&'t str> {
        match idx {
            0 => Some(self.text),
            n => self.groups.get(n - 1).copied().flatten(),
        }
    }
}

pub(crate) type ScanFn = fn(&str) -> Option<Match<'_>>;

/// A scanner whose closer may lie far ahead; searches go through the run's
/// [`Lookahead`].
pub(crate) type LookaheadFn = for<'t> fn(&'t str, &mut Lookahead<'t>) -> Option<Match<'t>>;

/// Checks the text following a match; stands in for a lookahead.
pub(crate) type Guard = fn(&Match<'_>, &str) -> bool;

pub(crate) type Handler =
    for<'a, 'b> fn(&mut Scanner<'a>, &Match<'b>) -> Result<String, RenderError>;

pub(crate) enum Pattern {
    Regex(&'static LazyLock<Regex>),
    Scan(ScanFn),
    Lookahead(LookaheadFn),
}

/// A token recogniser: pattern, priority and output handler.
pub struct Rule {
    kind: TokenKind,
    priority: u16,
    pattern: Pattern,
    guard: Option<Guard>,
    handler: Handler,
}

impl Rule {
    pub(crate) fn new(kind: TokenKind, priority: u16, pattern: Pattern, handler: Handler) -> Self {
        Self {
            kind,
            priority,
            pattern,
            guard: None,
            handler,
        }
    }

    pub(crate) fn with_guard(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    #[must_use]
    pub fn kind(&self) -> TokenKind { self.kind }

    #[must_use]
    pub fn priority(&self) -> u16 { self.priority }

    pub(crate) fn handler(&self) -> Handler { self.handler }

    /// Match at the very start of `rest`; never searches ahead.
    #[must_use]
    pub fn try_match<'t>(&self, rest: &'t str) -> Option<Match<'t>> {
        self.match_ahead(rest, &mut Lookahead::new(rest))
    }

    pub(crate) fn match_ahead<'t>(
        &self,
        rest: &'t str,
        ahead: &mut Lookahead<'t>,
    ) -> Option<Match<'t>> {
        let m = match &self.pattern {
            Pattern::Regex(re) => Match::from_captures(&re.captures(rest)?)?,
            Pattern::Scan(scan) => scan(rest)?,
            Pattern::Lookahead(scan) => scan(rest, ahead)?,
        };
        if let Some(guard) = self.guard
            && !guard(&m, &rest[m.len()..])
        {
            return None;
        }
        Some(m)
    }

    fn is_anchored(&self) -> bool {
        match &self.pattern {
            Pattern::Regex(re) => re.as_str().starts_with('^'),
            Pattern::Scan(_) | Pattern::Lookahead(_) => true,
        }
    }

    fn matches_empty(&self) -> bool { self.try_match("").is_some_and(|m| m.is_empty()) }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("kind", &self.kind)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

static STANDARD: LazyLock<Grammar> = LazyLock::new(|| Grammar::builder().build());

/// An immutable, priority-ordered rule set.
#[derive(Debug)]
pub struct Grammar {
    rules: Vec<Rule>,
    fallback: Rule,
}

impl Grammar {
    #[must_use]
    pub fn builder() -> GrammarBuilder { GrammarBuilder::default() }

    /// The base rules plus mentions and emoji, built on first use.
    #[must_use]
    pub fn standard() -> &'static Grammar { &STANDARD }

    /// Rules in the order they are tried, excluding the text fallback.
    #[must_use]
    pub fn rules(&self) -> &[Rule] { &self.rules }

    /// The first rule matching at the start of `rest`, or the text fallback.
    ///
    /// Returns `None` only for empty input.
    #[must_use]
    pub fn match_at<'t>(&self, rest: &'t str) -> Option<(&Rule, Match<'t>)> {
        self.match_ahead(rest, &mut Lookahead::new(rest))
    }

    /// [`Grammar::match_at`] for a cursor inside the run `ahead` was built for.
    pub(crate) fn match_ahead<'t>(
        &self,
        rest: &'t str,
        ahead: &mut Lookahead<'t>,
    ) -> Option<(&Rule, Match<'t>)> {
        self.rules
            .iter()
            .find_map(|rule| rule.match_ahead(rest, ahead).map(|m| (rule, m)))
            .or_else(|| self.fallback.match_ahead(rest, ahead).map(|m| (&self.fallback, m)))
    }
}

/// Chooses which extension rules join the base set.
#[derive(Clone, Copy, Debug)]
pub struct GrammarBuilder {
    mentions: bool,
    emoji: bool,
}

impl Default for GrammarBuilder {
    fn default() -> Self {
        Self {
            mentions: true,
            emoji: true,
        }
    }
}

impl GrammarBuilder {
    #[must_use]
    pub fn mentions(mut self, enabled: bool) -> Self {
        self.mentions = enabled;
        self
    }

    #[must_use]
    pub fn emoji(mut self, enabled: bool) -> Self {
        self.emoji = enabled;
        self
    }

    #[must_use]
    pub fn build(self) -> Grammar {
        let mut rules = base_rules();
        if self.mentions {
            rules.push(extensions::mention::rule());
        }
        if self.emoji {
            rules.push(extensions::emoji::rule());
        }
        rules.sort_by_key(Rule::priority);
        debug_assert!(
            rules.iter().all(|r| r.is_anchored() && !r.matches_empty()),
            "inline rules must be anchored and consume input"
        );
        Grammar {
            rules,
            fallback: Rule::new(
                TokenKind::Text,
                u16::MAX,
                Pattern::Scan(patterns::scan_text),
                handlers::text,
            ),
        }
    }
}

fn more_text_follows(_: &Match<'_>, after: &str) -> bool { !after.trim().is_empty() }

fn base_rules() -> Vec<Rule> {
    use Pattern::{Lookahead as Ahead, Regex as Re, Scan};
    vec![
        Rule::new(TokenKind::Escape, 10, Re(&patterns::ESCAPE), handlers::escape),
        Rule::new(
            TokenKind::InlineHtml,
            20,
            Ahead(patterns::scan_inline_html),
            handlers::inline_html,
        ),
        Rule::new(TokenKind::Autolink, 50, Ahead(patterns::scan_autolink), handlers::autolink),
        Rule::new(TokenKind::Url, 60, Re(&patterns::URL), handlers::url),
        Rule::new(TokenKind::Link, 70, Ahead(patterns::scan_link), handlers::link),
        Rule::new(
            TokenKind::DoubleEmphasis,
            80,
            Scan(patterns::scan_double_emphasis),
            handlers::double_emphasis,
        ),
        Rule::new(TokenKind::Emphasis, 90, Scan(patterns::scan_emphasis), handlers::emphasis),
        Rule::new(TokenKind::Code, 100, Scan(patterns::scan_code_span), handlers::code),
        Rule::new(TokenKind::LineBreak, 110, Re(&patterns::LINEBREAK), handlers::linebreak)
            .with_guard(more_text_follows),
        Rule::new(
            TokenKind::Strikethrough,
            120,
            Ahead(patterns::scan_strikethrough),
            handlers::strikethrough,
        ),
    ]
}
