//! Errors a render can fail with.
//!
//! Malformed markup never produces an error; it falls back to literal text.
//! The only failure is a broken rule definition.

use std::fmt;

use crate::grammar::TokenKind;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderError {
    /// A rule matched without consuming input, so the cursor cannot advance.
    Stalled { rule: TokenKind, offset: usize },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stalled { rule, offset } => write!(
                f,
                "inline rule `{rule}` matched an empty span at byte {offset}; scanning cannot advance"
            ),
        }
    }
}

impl std::error::Error for RenderError {}
