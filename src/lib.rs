//! Render comment-style Markdown to sanitized HTML.
//!
//! Inline text is scanned left to right against an ordered [`Grammar`]. Each
//! rule recognises one token kind (emphasis, code, links, mentions, emoji,
//! bare URLs and so on) and its handler emits an HTML fragment through the
//! [`Renderer`]. Link and image destinations pass through
//! [`sanitize_url`]; bare links to videos, audio files and images become
//! embeds when they stand on their own line.
//!
//! ```
//! use inlinemark::{Config, render};
//!
//! let out = render("**hi** :+1:", &Config::default()).unwrap();
//! assert_eq!(
//!     out.html,
//!     "<p><strong>hi</strong> <i class=\"tw tw-plus1\" title=\":+1:\"></i></p>"
//! );
//! ```

#[macro_use]
mod macros;

pub mod config;
pub mod error;
pub mod escape;
pub mod extensions;
pub mod grammar;
mod handlers;
pub mod markdown;
pub mod media;
pub mod quote;
pub mod renderer;
pub mod sanitize;
pub mod scanner;
pub mod settings;

pub use config::{Config, EmojiLookup, GithubEmoji, Identity, MentionResolver, emoji_class};
pub use error::RenderError;
pub use escape::{EscapeFn, escape_html};
pub use extensions::mention::Mentions;
pub use grammar::{Grammar, GrammarBuilder, Match, Rule, TokenKind};
pub use markdown::{Markdown, Rendered};
pub use quote::quotify;
pub use renderer::Renderer;
pub use sanitize::sanitize_url;
pub use scanner::{MAX_DEPTH, Scanner};
pub use settings::Settings;

/// Render block text with the standard grammar.
///
/// # Errors
///
/// Returns [`RenderError`] if a grammar rule fails to make progress.
pub fn render(text: &str, config: &Config) -> Result<Rendered, RenderError> {
    Markdown::new(config).render(text)
}

/// Render one inline run with the standard grammar, without paragraphs.
///
/// # Errors
///
/// Returns [`RenderError`] if a grammar rule fails to make progress.
pub fn render_inline(text: &str, config: &Config) -> Result<Rendered, RenderError> {
    Markdown::new(config).render_inline(text)
}
