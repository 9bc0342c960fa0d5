//! Anchored patterns for every inline rule.
//!
//! Each regex starts with `^` because rules only ever match at the cursor.
//! Group numbers are part of the contract with the handlers and are listed
//! next to each pattern.

use std::sync::LazyLock;

use regex::Regex;

use super::{
    Match,
    lookahead::{Closer, Lookahead},
    scanning::{next_char_boundary, scan_while},
};

/// `\*` and friends. Group 1: the escaped character.
pub(crate) static ESCAPE: LazyLock<Regex> = lazy_regex!(
    r"^\\([\\`*{}\[\]()#+\-.!_>~|])",
    "escape pattern should compile",
);

/// `<http://…>` or `<someone@host>`. Group 1: target, group 2: `@` or `:`.
static AUTOLINK: LazyLock<Regex> =
    lazy_regex!(r"^<([^ >]+(@|:)[^ >]+)>", "autolink pattern should compile");

/// A bare `http(s)://` URL, minus trailing punctuation.
pub(crate) static URL: LazyLock<Regex> = lazy_regex!(
    r#"^https?://[^\s]*[^\s.,:;"')\]]"#,
    "bare url pattern should compile",
);

/// `_em_`. Group 1: content. Word boundaries keep `snake_case` intact.
static UNDERSCORE_EMPHASIS: LazyLock<Regex> = lazy_regex!(
    r"^\b_((?:__|[^_])+?)_\b",
    "emphasis pattern should compile",
);

/// Spaces then a newline. Only a hard break when more text follows.
pub(crate) static LINEBREAK: LazyLock<Regex> =
    lazy_regex!(r"^ *\n", "line break pattern should compile");

/// `~~gone~~`. Group 1: content, which must not start or end with whitespace.
static STRIKETHROUGH: LazyLock<Regex> = lazy_regex!(
    r"^~~(\S|\S[\s\S]*?\S)~~",
    "strikethrough pattern should compile",
);

/// Group 1: tag name, group 2: `/` when self-closing.
static OPEN_TAG: LazyLock<Regex> = lazy_regex!(
    r#"^<([A-Za-z][A-Za-z0-9-]*)(?:\s+[A-Za-z_:][-A-Za-z0-9_:.]*(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'=<>`]+))?)*\s*(/?)>"#,
    "open tag pattern should compile",
);

static CLOSE_TAG: LazyLock<Regex> =
    lazy_regex!(r"^</[A-Za-z][A-Za-z0-9-]*\s*>", "close tag pattern should compile");

/// Inline HTML: a comment, a lone closing tag, `<tag …>…</tag>` or a lone
/// opening tag. The paired form extends to the first matching close tag.
pub(crate) fn scan_inline_html<'t>(
    rest: &'t str,
    ahead: &mut Lookahead<'t>,
) -> Option<Match<'t>> {
    if rest.starts_with("<!--") {
        let (_, end) = ahead.next(Closer::CommentEnd, rest, 4)?;
        return Some(Match::new(&rest[..end], Vec::new()));
    }
    if let Some(m) = CLOSE_TAG.find(rest) {
        return Some(Match::new(&rest[..m.end()], Vec::new()));
    }
    let caps = OPEN_TAG.captures(rest)?;
    let open_end = caps.get(0)?.end();
    let name = caps.get(1)?.as_str();
    let self_closing = caps.get(2).is_some_and(|m| !m.is_empty());
    let end = if self_closing {
        open_end
    } else {
        ahead
            .closing_tag(rest, open_end, name)
            .map_or(open_end, |(_, close)| close)
    };
    Some(Match::new(&rest[..end], Vec::new()))
}

/// A backtick run closed by a run of the same length.
///
/// Group 1: the code with surrounding whitespace trimmed.
pub(crate) fn scan_code_span(rest: &str) -> Option<Match<'_>> {
    let fence_len = scan_while(rest, 0, |ch| ch == '`');
    if fence_len == 0 {
        return None;
    }
    let mut idx = fence_len;
    while idx < rest.len() {
        let run_end = scan_while(rest, idx, |ch| ch == '`');
        if run_end == idx {
            idx = next_char_boundary(rest, idx);
            continue;
        }
        if run_end - idx == fence_len {
            let code = rest[fence_len..idx].trim();
            if code.is_empty() {
                return None;
            }
            return Some(Match::new(&rest[..run_end], vec![Some(code)]));
        }
        idx = run_end;
    }
    None
}

/// `<target>` where the target holds `@` or `:` and no spaces.
pub(crate) fn scan_autolink<'t>(rest: &'t str, ahead: &mut Lookahead<'t>) -> Option<Match<'t>> {
    if !rest.starts_with('<') {
        return None;
    }
    let (_, end) = ahead.next(Closer::AutolinkEnd, rest, 1)?;
    Match::from_captures(&AUTOLINK.captures(&rest[..end])?)
}

/// `~~gone~~`, closed by the first non-space character followed by `~~`.
pub(crate) fn scan_strikethrough<'t>(
    rest: &'t str,
    ahead: &mut Lookahead<'t>,
) -> Option<Match<'t>> {
    if !rest.starts_with("~~") {
        return None;
    }
    let (_, end) = ahead.next(Closer::StrikeEnd, rest, 2)?;
    Match::from_captures(&STRIKETHROUGH.captures(&rest[..end])?)
}

/// `[text](dest "title")` or `![alt](src 'title')`.
///
/// Group 1: label, group 2: destination, group 3: optional title. Parentheses
/// inside the destination are balanced, so `(javascript:alert(1))` is read
/// whole; whitespace ends it.
pub(crate) fn scan_link<'t>(rest: &'t str, ahead: &mut Lookahead<'t>) -> Option<Match<'t>> {
    let label_start = if rest.starts_with("![") {
        2
    } else if rest.starts_with('[') {
        1
    } else {
        return None;
    };
    let label_end = ahead.closing_bracket(rest, label_start - 1)?;
    let open = label_end + 1;
    if !rest[open..].starts_with('(') {
        return None;
    }
    let mut idx = scan_while(rest, open + 1, char::is_whitespace);
    let (dest, dest_end) = parse_destination(rest, open, idx, ahead)?;
    idx = scan_while(rest, dest_end, char::is_whitespace);
    let mut title = None;
    if idx > dest_end
        && let Some((text, title_end)) = parse_title(rest, idx, ahead)
    {
        title = Some(text);
        idx = scan_while(rest, title_end, char::is_whitespace);
    }
    if !rest[idx..].starts_with(')') {
        return None;
    }
    Some(Match::new(
        &rest[..=idx],
        vec![Some(&rest[label_start..label_end]), Some(dest), title],
    ))
}

/// The destination after the `(` at `open`, starting at `start`.
fn parse_destination<'t>(
    rest: &'t str,
    open: usize,
    start: usize,
    ahead: &mut Lookahead<'t>,
) -> Option<(&'t str, usize)> {
    if rest[start..].starts_with('<') {
        let inner = start + 1;
        let (close, _) = ahead.next(Closer::AngleEnd, rest, inner)?;
        if !rest[close..].starts_with('>') {
            return None;
        }
        return Some((&rest[inner..close], close + 1));
    }
    let space = ahead.next(Closer::Whitespace, rest, start).map_or(rest.len(), |(s, _)| s);
    let paren = ahead.closing_bracket(rest, open).unwrap_or(rest.len());
    let end = space.min(paren);
    Some((&rest[start..end], end))
}

/// A quoted title whose closing quote is followed by optional space and `)`.
fn parse_title<'t>(
    rest: &'t str,
    start: usize,
    ahead: &mut Lookahead<'t>,
) -> Option<(&'t str, usize)> {
    let quote = rest[start..].chars().next().filter(|c| matches!(c, '"' | '\''))?;
    let body = start + 1;
    let (close, _) = ahead.next(Closer::TitleEnd(quote), rest, body)?;
    Some((&rest[body..close], close + 1))
}

/// `**strong**` or `__strong__`. Group 1: content.
///
/// The closing pair is the first one not followed by a third delimiter, so
/// `**a *b***` closes on the last two stars.
pub(crate) fn scan_double_emphasis(rest: &str) -> Option<Match<'_>> {
    let delim = ["**", "__"].into_iter().find(|d| rest.starts_with(d))?;
    let single = &delim[..1];
    let body = next_char_boundary(rest, 2);
    let mut search = body;
    while let Some(pos) = rest.get(search..)?.find(delim) {
        let close = search + pos;
        if !rest[close + 2..].starts_with(single) {
            return Some(Match::new(&rest[..close + 2], vec![Some(&rest[2..close])]));
        }
        search = close + 1;
    }
    None
}

/// `*em*` or `_em_`. Group 1: content.
///
/// Inside star emphasis a `**` pair is content; a lone `*` closes unless
/// another star follows it.
pub(crate) fn scan_emphasis(rest: &str) -> Option<Match<'_>> {
    if rest.starts_with('_') {
        let caps = UNDERSCORE_EMPHASIS.captures(rest)?;
        return Some(Match::new(caps.get(0)?.as_str(), vec![Some(caps.get(1)?.as_str())]));
    }
    if !rest.starts_with('*') {
        return None;
    }
    let mut idx = 1;
    while idx < rest.len() {
        let tail = &rest[idx..];
        if tail.starts_with("**") {
            idx += 2;
        } else if tail.starts_with('*') {
            if idx == 1 {
                return None;
            }
            return Some(Match::new(&rest[..=idx], vec![Some(&rest[1..idx])]));
        } else {
            idx = next_char_boundary(rest, idx);
        }
    }
    None
}

/// Characters that may begin a non-text rule.
fn is_marker(ch: char) -> bool {
    matches!(
        ch,
        '\\' | '<' | '!' | '[' | '_' | '*' | '`' | ':' | '@' | '~'
    )
}

/// The shortest run of plain text: at least one character, stopping where
/// another rule could start (a marker, a URL scheme, spaces before a newline).
pub(crate) fn scan_text(rest: &str) -> Option<Match<'_>> {
    let first = rest.chars().next()?;
    let mut idx = first.len_utf8();
    while idx < rest.len() {
        let tail = &rest[idx..];
        let Some(ch) = tail.chars().next() else {
            break;
        };
        if is_marker(ch) || ch == '\n' || tail.starts_with("http://") || tail.starts_with("https://")
        {
            break;
        }
        if ch == ' ' {
            let run_end = scan_while(rest, idx, |c| c == ' ');
            if rest[run_end..].starts_with('\n') {
                break;
            }
            idx = run_end;
            continue;
        }
        idx += ch.len_utf8();
    }
    Some(Match::new(&rest[..idx], Vec::new()))
}
