//! Closer memo for one run of inline text.
//!
//! Link labels, destinations and titles, strikethrough, HTML comments, paired
//! tags and autolinks all search ahead for a closing delimiter. Repeating that
//! search from every opener rescans the same tail each time, so text dense in
//! openers costs quadratic time. A [`Lookahead`] belongs to a single run and
//! remembers each search: a hit found from `from` also answers every later
//! query that starts at or before it, and a miss answers every later query.
//! Bracket pairs come from one pass over the run.

use std::collections::HashMap;

use super::scanning::{find_closing_tag, scan_while};

/// The kinds of closer searched for by position alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Closer {
    /// Any whitespace; ends a bare link destination.
    Whitespace,
    /// `>` or a newline; ends a `<…>` destination.
    AngleEnd,
    /// A space or `>`; ends an autolink.
    AutolinkEnd,
    /// `-->`.
    CommentEnd,
    /// A non-space character followed by `~~`.
    StrikeEnd,
    /// The quote, then optional whitespace and `)`.
    TitleEnd(char),
}

/// The latest search for one closer.
#[derive(Clone, Copy, Debug)]
struct Seen {
    from: usize,
    /// Start and end of the first hit at or after `from`.
    hit: Option<(usize, usize)>,
}

impl Seen {
    fn answers(&self, from: usize) -> bool {
        self.from <= from && self.hit.is_none_or(|(start, _)| start >= from)
    }
}

#[derive(Debug)]
pub(crate) struct Lookahead<'t> {
    text: &'t str,
    seen: HashMap<Closer, Seen>,
    tags: HashMap<String, Seen>,
    pairs: Option<HashMap<usize, usize>>,
}

impl<'t> Lookahead<'t> {
    pub(crate) fn new(text: &'t str) -> Self {
        Self {
            text,
            seen: HashMap::new(),
            tags: HashMap::new(),
            pairs: None,
        }
    }

    /// Byte offset of `rest` in the run. `rest` must be a suffix of it.
    fn base(&self, rest: &str) -> usize {
        debug_assert_eq!(
            self.text.as_bytes().as_ptr_range().end,
            rest.as_bytes().as_ptr_range().end,
            "lookahead queried with text outside its run"
        );
        self.text.len() - rest.len()
    }

    /// Span of the first `closer` starting at or after `start`, as indices
    /// into `rest`.
    pub(crate) fn next(
        &mut self,
        closer: Closer,
        rest: &str,
        start: usize,
    ) -> Option<(usize, usize)> {
        let base = self.base(rest);
        let from = base + start;
        let hit = match self.seen.get(&closer) {
            Some(seen) if seen.answers(from) => seen.hit,
            _ => {
                let hit = search(self.text, from, closer);
                self.seen.insert(closer, Seen { from, hit });
                hit
            }
        };
        hit.map(|(s, e)| (s - base, e - base))
    }

    /// Span of the first `</name>` at or after `start`, as indices into `rest`.
    pub(crate) fn closing_tag(
        &mut self,
        rest: &str,
        start: usize,
        name: &str,
    ) -> Option<(usize, usize)> {
        let base = self.base(rest);
        let from = base + start;
        let key = name.to_ascii_lowercase();
        let hit = match self.tags.get(&key) {
            Some(seen) if seen.answers(from) => seen.hit,
            _ => {
                let hit = self
                    .text
                    .get(from..)
                    .and_then(|tail| find_closing_tag(tail, name))
                    .map(|(s, e)| (from + s, from + e));
                self.tags.insert(key, Seen { from, hit });
                hit
            }
        };
        hit.map(|(s, e)| (s - base, e - base))
    }

    /// Index in `rest` of the `]` or `)` closing the bracket at `open`.
    ///
    /// Brackets nest and a backslash escapes the next character.
    pub(crate) fn closing_bracket(&mut self, rest: &str, open: usize) -> Option<usize> {
        let base = self.base(rest);
        let text = self.text;
        let pairs = self.pairs.get_or_insert_with(|| bracket_pairs(text));
        pairs.get(&(base + open)).map(|close| close - base)
    }
}

fn search(text: &str, from: usize, closer: Closer) -> Option<(usize, usize)> {
    let tail = text.get(from..)?;
    let (start, end) = match closer {
        Closer::Whitespace => {
            let (idx, ch) = tail.char_indices().find(|&(_, ch)| ch.is_whitespace())?;
            (idx, idx + ch.len_utf8())
        }
        Closer::AngleEnd => {
            let idx = tail.find(['>', '\n'])?;
            (idx, idx + 1)
        }
        Closer::AutolinkEnd => {
            let idx = tail.find([' ', '>'])?;
            (idx, idx + 1)
        }
        Closer::CommentEnd => {
            let idx = tail.find("-->")?;
            (idx, idx + 3)
        }
        Closer::StrikeEnd => tail.char_indices().find_map(|(idx, ch)| {
            let after = idx + ch.len_utf8();
            (!ch.is_whitespace() && tail[after..].starts_with("~~")).then_some((idx, after + 2))
        })?,
        Closer::TitleEnd(quote) => tail.match_indices(quote).find_map(|(idx, _)| {
            let after = scan_while(tail, idx + quote.len_utf8(), char::is_whitespace);
            tail[after..].starts_with(')').then_some((idx, after + 1))
        })?,
    };
    Some((from + start, from + end))
}

/// Map every `[` and `(` to the bracket of the same kind that closes it.
fn bracket_pairs(text: &str) -> HashMap<usize, usize> {
    let mut pairs = HashMap::new();
    let mut squares = Vec::new();
    let mut rounds = Vec::new();
    let mut chars = text.char_indices();
    while let Some((idx, ch)) = chars.next() {
        match ch {
            '\\' => {
                chars.next();
            }
            '[' => squares.push(idx),
            '(' => rounds.push(idx),
            ']' => {
                if let Some(open) = squares.pop() {
                    pairs.insert(open, idx);
                }
            }
            ')' => {
                if let Some(open) = rounds.pop() {
                    pairs.insert(open, idx);
                }
            }
            _ => {}
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::flat("[link](x)", 0, Some(5))]
    #[case::nested("[a [b] c](x)", 0, Some(8))]
    #[case::escaped(r"[a \] b](x)", 0, Some(7))]
    #[case::round("[a](b(c)d)", 3, Some(9))]
    #[case::stray_close("a)](b)", 3, Some(5))]
    #[case::unclosed("[never closed", 0, None)]
    fn pairs_brackets(#[case] text: &str, #[case] open: usize, #[case] expected: Option<usize>) {
        let mut ahead = Lookahead::new(text);
        assert_eq!(ahead.closing_bracket(text, open), expected);
    }

    #[test]
    fn bracket_queries_are_relative_to_the_suffix() {
        let text = "ab[c]";
        let mut ahead = Lookahead::new(text);
        assert_eq!(ahead.closing_bracket(&text[2..], 0), Some(2));
    }

    #[rstest]
    #[case::strike("~~a b~~", Closer::StrikeEnd, 2, Some((4, 7)))]
    #[case::strike_needs_text("~~a ~~", Closer::StrikeEnd, 2, None)]
    #[case::comment("<!-- x -->", Closer::CommentEnd, 4, Some((7, 10)))]
    #[case::title("\"a\" b\" )", Closer::TitleEnd('"'), 1, Some((5, 8)))]
    #[case::autolink("<a b>", Closer::AutolinkEnd, 1, Some((2, 3)))]
    #[case::angle("<a\nb>", Closer::AngleEnd, 1, Some((2, 3)))]
    fn finds_closers(
        #[case] text: &str,
        #[case] closer: Closer,
        #[case] start: usize,
        #[case] expected: Option<(usize, usize)>,
    ) {
        let mut ahead = Lookahead::new(text);
        assert_eq!(ahead.next(closer, text, start), expected);
    }

    #[test]
    fn later_queries_reuse_earlier_hits() {
        let text = "~~a ~~b ~~c d~~";
        let mut ahead = Lookahead::new(text);
        let first = ahead.next(Closer::StrikeEnd, text, 2);
        assert_eq!(first, Some((12, 15)));
        assert_eq!(ahead.next(Closer::StrikeEnd, &text[4..], 2), Some((8, 11)));
        assert_eq!(ahead.next(Closer::StrikeEnd, &text[13..], 0), None);
    }

    #[test]
    fn misses_answer_later_queries() {
        let text = "~~a ~~b ~~c ";
        let mut ahead = Lookahead::new(text);
        assert_eq!(ahead.next(Closer::StrikeEnd, text, 2), None);
        assert_eq!(ahead.next(Closer::StrikeEnd, &text[4..], 2), None);
    }

    #[test]
    fn closing_tags_are_memoised_per_name() {
        let text = "<b>x</b><i>y</I >";
        let mut ahead = Lookahead::new(text);
        assert_eq!(ahead.closing_tag(text, 3, "b"), Some((4, 8)));
        assert_eq!(ahead.closing_tag(&text[8..], 3, "i"), Some((4, 9)));
        assert_eq!(ahead.closing_tag(&text[8..], 3, "b"), None);
    }
}
