//! Character-level scanning helpers for the hand-written rule patterns.
//!
//! Rules whose shape needs a backreference (code spans, paired HTML tags)
//! cannot be expressed with the `regex` crate, so they are matched by walking
//! the text with these helpers.

/// Advance `idx` while the predicate evaluates to `true`.
///
/// Returns the byte index of the first character for which `cond` fails.
///
/// # Examples
///
/// ```rust,ignore
/// let text = "```code";
/// assert_eq!(scan_while(text, 0, |c| c == '`'), 3);
/// ```
pub(super) fn scan_while<F>(text: &str, start: usize, mut cond: F) -> usize
where
    F: FnMut(char) -> bool,
{
    let mut idx = start;
    for ch in text[start..].chars() {
        if !cond(ch) {
            break;
        }
        idx += ch.len_utf8();
    }
    idx
}

/// Byte index just past the character starting at `idx`.
pub(super) fn next_char_boundary(text: &str, idx: usize) -> usize {
    text[idx..]
        .chars()
        .next()
        .map_or(text.len(), |ch| idx + ch.len_utf8())
}

/// Find `</name>` (ASCII case-insensitive) in `text`.
///
/// Returns the index of `<` and the index just past the closing `>`.
pub(super) fn find_closing_tag(text: &str, name: &str) -> Option<(usize, usize)> {
    let mut search = 0;
    while let Some(pos) = text[search..].find("</") {
        let open = search + pos;
        let tag_start = open + 2;
        let tag_end = tag_start + name.len();
        if text
            .get(tag_start..tag_end)
            .is_some_and(|candidate| candidate.eq_ignore_ascii_case(name))
        {
            let close = scan_while(text, tag_end, char::is_whitespace);
            if text[close..].starts_with('>') {
                return Some((open, close + 1));
            }
        }
        search = tag_start;
    }
    None
}
