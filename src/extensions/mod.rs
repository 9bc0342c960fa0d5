//! Token kinds layered on top of the base grammar.
//!
//! Each extension contributes one [`Rule`](crate::grammar::Rule) which
//! [`GrammarBuilder`](crate::grammar::GrammarBuilder) appends before sorting
//! by priority.

pub mod emoji;
pub mod mention;
