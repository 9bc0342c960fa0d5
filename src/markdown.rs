//! A minimal block front-end for comment text.
//!
//! Splits input into paragraphs at blank lines and hands each paragraph to
//! one [`Scanner`] as a single inline run, so newlines inside it become hard
//! breaks. A line holding nothing but a URL is rendered on its own when it
//! would start a paragraph, or anywhere if the URL embeds: iframes and players
//! stand alone, images and plain links get their own paragraph.

use crate::{
    config::Config,
    error::RenderError,
    extensions::mention::Mentions,
    grammar::{Grammar, patterns},
    media,
    scanner::Scanner,
};

/// The HTML for a render plus the mentions it resolved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rendered {
    pub html: String,
    pub mentions: Mentions,
}

/// Renders whole comments with a shared grammar and configuration.
#[derive(Clone, Copy, Debug)]
pub struct Markdown<'c> {
    grammar: &'c Grammar,
    config: &'c Config,
}

impl<'c> Markdown<'c> {
    /// Use the standard grammar with mentions and emoji.
    #[must_use]
    pub fn new(config: &'c Config) -> Self {
        Self {
            grammar: Grammar::standard(),
            config,
        }
    }

    #[must_use]
    pub fn with_grammar(mut self, grammar: &'c Grammar) -> Self {
        self.grammar = grammar;
        self
    }

    /// Render block text: paragraphs, standalone embeds and inline markup.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if a grammar rule fails to make progress.
    ///
    /// # Examples
    ///
    /// ```
    /// use inlinemark::{Config, Markdown};
    ///
    /// let config = Config::default();
    /// let out = Markdown::new(&config).render("*hi*\n\nthere").unwrap();
    /// assert_eq!(out.html, "<p><em>hi</em></p>\n<p>there</p>");
    /// ```
    pub fn render(&self, text: &str) -> Result<Rendered, RenderError> {
        let text = text.replace("\r\n", "\n");
        let mut blocks = Blocks::new(Scanner::new(self.grammar, self.config));
        for line in text.lines() {
            if line.trim().is_empty() {
                blocks.flush()?;
            } else if let Some(url) = standalone_url(line)
                && (blocks.pending.is_empty() || media::detect(url).is_some())
            {
                blocks.flush()?;
                blocks.lift(url)?;
            } else {
                blocks.pending.push(line);
            }
        }
        blocks.flush()?;
        tracing::debug!(blocks = blocks.html.len(), "rendered comment");
        Ok(Rendered {
            html: blocks.html.join("\n"),
            mentions: blocks.scanner.into_mentions(),
        })
    }

    /// Render `text` as a single inline run with no paragraph wrapping.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if a grammar rule fails to make progress.
    pub fn render_inline(&self, text: &str) -> Result<Rendered, RenderError> {
        let mut scanner = Scanner::new(self.grammar, self.config);
        let html = scanner.scan(text)?;
        Ok(Rendered {
            html,
            mentions: scanner.into_mentions(),
        })
    }
}

/// The URL a line holds when it is exactly one bare URL.
fn standalone_url(line: &str) -> Option<&str> {
    let url = line.trim();
    patterns::URL
        .find(url)
        .filter(|m| m.len() == url.len())
        .map(|_| url)
}

struct Blocks<'a, 't> {
    scanner: Scanner<'a>,
    pending: Vec<&'t str>,
    html: Vec<String>,
}

impl<'a, 't> Blocks<'a, 't> {
    fn new(scanner: Scanner<'a>) -> Self {
        Self {
            scanner,
            pending: Vec::new(),
            html: Vec::new(),
        }
    }

    fn flush(&mut self) -> Result<(), RenderError> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let para = self.pending.join("\n");
        self.pending.clear();
        let inner = self.scanner.scan(para.trim_end())?;
        self.html.push(format!("<p>{inner}</p>"));
        Ok(())
    }

    fn lift(&mut self, url: &str) -> Result<(), RenderError> {
        let html = self.scanner.scan(url)?;
        self.html.push(if media::detect(url).is_some_and(|embed| embed.is_block()) {
            html
        } else {
            format!("<p>{html}</p>")
        });
        Ok(())
    }
}
