//! Direct links to image, video and audio files.

use std::sync::LazyLock;

use regex::Regex;

use super::Embed;

/// Group 1: file name without extension, used as alt text.
static IMAGE_RE: LazyLock<Regex> = lazy_regex!(
    r"(?i)^https?://\S+/([^\s/?#]+)\.(?:png|jpe?g|gif|webp)(?:[?#]\S*)?$",
    "image link pattern should compile",
);

static VIDEO_RE: LazyLock<Regex> = lazy_regex!(
    r"(?i)^https?://\S+\.(?:mp4|webm|mov|ogv|m4v)(?:[?#]\S*)?$",
    "video link pattern should compile",
);

static AUDIO_RE: LazyLock<Regex> = lazy_regex!(
    r"(?i)^https?://\S+\.(?:mp3|ogg|oga|wav|m4a|flac|opus)(?:[?#]\S*)?$",
    "audio link pattern should compile",
);

pub(super) fn image(url: &str) -> Option<Embed<'_>> {
    let caps = IMAGE_RE.captures(url)?;
    Some(Embed::Image {
        name: caps.get(1)?.as_str(),
    })
}

pub(super) fn video(url: &str) -> Option<Embed<'_>> { VIDEO_RE.is_match(url).then_some(Embed::Video) }

pub(super) fn audio(url: &str) -> Option<Embed<'_>> { AUDIO_RE.is_match(url).then_some(Embed::Audio) }
