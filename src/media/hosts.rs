//! Video hosting sites that get an `<iframe>` embed.

use std::sync::LazyLock;

use regex::Regex;

use super::{Embed, offset::parse_offset};

/// Group 1: video id, group 2: query string after the id.
static YOUTUBE_RE: LazyLock<Regex> = lazy_regex!(
    r"^https?://(?:www\.|m\.)?(?:youtube\.com/(?:watch\?(?:[^\s#]*&)?v=|embed/|v/)|youtu\.be/)([A-Za-z0-9_-]{11})(?:[?&#](\S*))?$",
    "youtube pattern should compile",
);

/// Group 1: video id.
static VIMEO_RE: LazyLock<Regex> = lazy_regex!(
    r"^https?://(?:www\.|player\.)?vimeo\.com/(?:video/|channels/(?:[^/\s]+/)?|groups/[^/\s]+/videos/|album/\d+/video/)?(\d+)/?(?:[?#]\S*)?$",
    "vimeo pattern should compile",
);

/// Group 1: clip name.
static GFYCAT_RE: LazyLock<Regex> = lazy_regex!(
    r"^https?://(?:www\.)?gfycat\.com/(?:ifr/)?([A-Za-z0-9]+)/?$",
    "gfycat pattern should compile",
);

pub(super) fn youtube(url: &str) -> Option<Embed<'_>> {
    let caps = YOUTUBE_RE.captures(url)?;
    let id = caps.get(1)?.as_str();
    let start = caps
        .get(2)
        .and_then(|query| start_param(query.as_str()))
        .filter(|&secs| secs > 0);
    Some(Embed::YouTube { id, start })
}

/// The first `t=` or `start=` parameter that parses; others are ignored.
fn start_param(query: &str) -> Option<u32> {
    query
        .split(['&', '?', '#'])
        .filter_map(|pair| pair.split_once('='))
        .filter(|(key, _)| matches!(*key, "t" | "start"))
        .find_map(|(_, value)| parse_offset(value))
}

pub(super) fn vimeo(url: &str) -> Option<Embed<'_>> {
    let caps = VIMEO_RE.captures(url)?;
    Some(Embed::Vimeo {
        id: caps.get(1)?.as_str(),
    })
}

pub(super) fn gfycat(url: &str) -> Option<Embed<'_>> {
    let caps = GFYCAT_RE.captures(url)?;
    Some(Embed::Gfycat {
        id: caps.get(1)?.as_str(),
    })
}
