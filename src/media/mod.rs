//! Recognises bare URLs that should be embedded rather than linked.
//!
//! Detectors run host-specific checks first and file extension checks last,
//! so a YouTube link to something ending in `.mp4` still becomes an iframe.

mod files;
mod hosts;
mod offset;

pub use offset::parse_offset;

use crate::escape::has_markup_chars;

/// What a bare URL turns into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Embed<'u> {
    YouTube { id: &'u str, start: Option<u32> },
    Vimeo { id: &'u str },
    Gfycat { id: &'u str },
    /// `name` is the file name without its extension.
    Image { name: &'u str },
    Video,
    Audio,
}

impl Embed<'_> {
    /// Whether the markup is a block element (iframe or media player).
    #[must_use]
    pub fn is_block(&self) -> bool { !matches!(self, Self::Image { .. }) }
}

type Detector = fn(&str) -> Option<Embed<'_>>;

const DETECTORS: [Detector; 6] = [
    hosts::youtube,
    hosts::vimeo,
    hosts::gfycat,
    files::image,
    files::video,
    files::audio,
];

/// Classify `url`, returning `None` for a plain link.
///
/// URLs containing characters that need escaping are never embedded.
///
/// # Examples
///
/// ```
/// use inlinemark::media::{Embed, detect};
///
/// assert_eq!(
///     detect("https://vimeo.com/11111111"),
///     Some(Embed::Vimeo { id: "11111111" })
/// );
/// assert_eq!(detect("http://foo.bar/<video>.mp4"), None);
/// assert_eq!(detect("http://foo.bar"), None);
/// ```
#[must_use]
pub fn detect(url: &str) -> Option<Embed<'_>> {
    if has_markup_chars(url) {
        return None;
    }
    DETECTORS.iter().find_map(|detector| detector(url))
}
