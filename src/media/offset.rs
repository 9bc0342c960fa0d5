//! Start offsets for video embeds.

use std::sync::LazyLock;

use regex::Regex;

static DURATION_RE: LazyLock<Regex> = lazy_regex!(
    r"^(?:(\d+)h)?(?:(\d+)m)?(?:(\d+)s)?$",
    "duration pattern should compile",
);

/// Parse `"3698"` or a compound `"1h1m38s"` into seconds.
///
/// Each compound component is optional but at least one must be present.
///
/// # Examples
///
/// ```
/// use inlinemark::media::parse_offset;
///
/// assert_eq!(parse_offset("1h1m38s"), Some(3698));
/// assert_eq!(parse_offset("105m"), Some(6300));
/// assert_eq!(parse_offset("73"), Some(73));
/// assert_eq!(parse_offset("soon"), None);
/// ```
#[must_use]
pub fn parse_offset(value: &str) -> Option<u32> {
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        return value.parse().ok();
    }
    let caps = DURATION_RE.captures(value)?;
    if (1..=3).all(|i| caps.get(i).is_none()) {
        return None;
    }
    let part = |idx: usize, unit: u32| -> Option<u32> {
        caps.get(idx)
            .map_or(Some(0), |m| m.as_str().parse::<u32>().ok())?
            .checked_mul(unit)
    };
    part(1, 3600)?
        .checked_add(part(2, 60)?)?
        .checked_add(part(3, 1)?)
}
