//! The inline scanning loop.
//!
//! A [`Scanner`] walks its input left to right. At every position it asks the
//! [`Grammar`] for the first rule that matches, hands the match to that rule's
//! handler and moves past the consumed span. Nothing is ever rescanned, so
//! output order is input order. Searches for far closers are shared across the
//! whole run through a lookahead memo, which keeps the scan linear in its input.

use std::mem;

use crate::{
    config::{Config, Identity},
    error::RenderError,
    extensions::mention::{MentionTable, Mentions},
    grammar::{Grammar, Lookahead, Match},
    renderer::Renderer,
};

/// How deep emphasis and link text may nest before the rest is emitted as text.
pub const MAX_DEPTH: usize = 32;

/// Per-render scanning state.
///
/// Borrows the shared grammar and configuration; owns only the mention table
/// and bookkeeping for the current position.
#[derive(Debug)]
pub struct Scanner<'a> {
    grammar: &'a Grammar,
    config: &'a Config,
    mentions: MentionTable,
    in_link: bool,
    depth: usize,
    /// Top-level byte offset of the span being handled.
    offset: usize,
    /// Length of the current top-level input without trailing whitespace.
    input_len: usize,
}

impl<'a> Scanner<'a> {
    #[must_use]
    pub fn new(grammar: &'a Grammar, config: &'a Config) -> Self {
        Self {
            grammar,
            config,
            mentions: MentionTable::default(),
            in_link: false,
            depth: 0,
            offset: 0,
            input_len: 0,
        }
    }

    /// Render one run of inline text.
    ///
    /// May be called repeatedly; mentions accumulate across calls.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Stalled`] if a rule matches without consuming
    /// input.
    pub fn scan(&mut self, text: &str) -> Result<String, RenderError> {
        tracing::trace!(len = text.len(), "scanning inline run");
        self.input_len = text.trim_end().len();
        let out = self.run(text)?;
        tracing::trace!(len = out.len(), "inline run rendered");
        Ok(out)
    }

    /// Scan text captured by an enclosing rule, such as emphasis content.
    ///
    /// # Errors
    ///
    /// Propagates [`RenderError::Stalled`] from the inner scan.
    pub fn scan_nested(&mut self, text: &str) -> Result<String, RenderError> {
        if self.depth >= MAX_DEPTH {
            tracing::debug!(depth = self.depth, "nesting limit reached; emitting text");
            return Ok(self.renderer().text(text));
        }
        self.depth += 1;
        let out = self.run(text);
        self.depth -= 1;
        out
    }

    /// Scan the label of a link. Bare URLs and mentions inside render as text.
    ///
    /// # Errors
    ///
    /// Propagates [`RenderError::Stalled`] from the inner scan.
    pub fn scan_link_text(&mut self, text: &str) -> Result<String, RenderError> {
        let outer = mem::replace(&mut self.in_link, true);
        let out = self.scan_nested(text);
        self.in_link = outer;
        out
    }

    fn run(&mut self, text: &str) -> Result<String, RenderError> {
        let mut out = String::with_capacity(text.len());
        let mut ahead = Lookahead::new(text);
        let mut pos = 0;
        while let Some((rule, m)) = self.grammar.match_ahead(&text[pos..], &mut ahead) {
            if m.is_empty() {
                tracing::error!(rule = %rule.kind(), offset = pos, "inline rule stalled");
                return Err(RenderError::Stalled {
                    rule: rule.kind(),
                    offset: pos,
                });
            }
            if self.depth == 0 {
                self.offset = pos;
            }
            out.push_str(&(rule.handler())(self, &m)?);
            pos += m.len();
        }
        Ok(out)
    }

    #[must_use]
    pub fn renderer(&self) -> Renderer<'a> { Renderer::new(self.config) }

    #[must_use]
    pub fn config(&self) -> &'a Config { self.config }

    #[must_use]
    pub fn in_link(&self) -> bool { self.in_link }

    /// Whether `m` is the entire top-level input, give or take trailing space.
    #[must_use]
    pub fn is_standalone(&self, m: &Match<'_>) -> bool {
        self.depth == 0 && !self.in_link && self.offset == 0 && m.len() == self.input_len
    }

    pub(crate) fn resolve_mention(&mut self, name: &str) -> Option<Identity> {
        self.mentions.resolve(self.config, name)
    }

    /// Mentions resolved so far, keyed by their first spelling.
    #[must_use]
    pub fn mentions(&self) -> &Mentions { self.mentions.found() }

    #[must_use]
    pub fn into_mentions(self) -> Mentions { self.mentions.into_found() }
}
