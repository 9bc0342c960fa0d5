//! Helper macros used across the crate.

/// Lazily compile a [`Regex`] used by a grammar rule or detector.
///
/// The message names the pattern so a broken literal is easy to locate.
///
/// # Examples
///
/// ```
/// use std::sync::LazyLock;
///
/// use regex::Regex;
/// static SHORTCODE: LazyLock<Regex> = inlinemark::lazy_regex!(r"^:\w+:", "shortcode");
/// assert!(SHORTCODE.is_match(":smile:"));
/// ```
#[macro_export]
macro_rules! lazy_regex {
    ($pattern:expr, $msg:expr $(,)?) => {
        LazyLock::new(|| Regex::new($pattern).expect($msg))
    };
}
