//! Quoting a comment in a reply.

use std::sync::LazyLock;

use regex::Regex;

/// `[poll …]` through the first `[/poll]`. Polls are not carried into quotes.
static POLL_RE: LazyLock<Regex> = lazy_regex!(
    r"(?s)\[poll(?:\s[^\]]*)?\].*?\[/poll\]",
    "poll block pattern should compile",
);

/// Wrap `text` in a blockquote attributed to `username`.
///
/// # Examples
///
/// ```
/// use inlinemark::quotify;
///
/// assert_eq!(
///     quotify("text\nnew line", "nitely"),
///     "> @nitely said:\n> text\n> new line\n\n"
/// );
/// ```
#[must_use]
pub fn quotify(text: &str, username: &str) -> String {
    let body = POLL_RE.replace_all(text, "");
    let body = body.trim_end_matches(['\n', '\r']);
    let mut out = format!("> @{username} said:\n");
    if body.is_empty() {
        out.push_str("> \n");
    }
    for line in body.lines() {
        out.push_str("> ");
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');
    out
}
