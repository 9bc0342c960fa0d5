//! HTML escaping for text nodes and attribute values.

/// Signature of the escaping function a [`Config`](crate::Config) injects
/// into every render.
pub type EscapeFn = fn(&str) -> String;

/// Escape `& < > " '` so the result is safe inside text and quoted attributes.
///
/// # Examples
///
/// ```
/// use inlinemark::escape_html;
///
/// assert_eq!(escape_html("<a href=\"x\">"), "&lt;a href=&quot;x&quot;&gt;");
/// ```
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Whether `text` holds a character that changes meaning inside markup.
///
/// `&` is deliberately excluded: query strings carry it routinely and the
/// escaping function turns it into `&amp;` anyway.
pub(crate) fn has_markup_chars(text: &str) -> bool {
    text.contains(['<', '>', '"'])
}
