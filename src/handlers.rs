//! Output handlers for the base rules.
//!
//! Each handler receives the scanner (for nested scans and per-render state)
//! and the match, and returns the fragment to append. Group numbers follow the
//! patterns in [`crate::grammar::patterns`].

use crate::{error::RenderError, grammar::Match, media, scanner::Scanner};

type Output = Result<String, RenderError>;

fn group<'t>(m: &Match<'t>, idx: usize) -> &'t str { m.group(idx).unwrap_or_default() }

pub(crate) fn text(s: &mut Scanner<'_>, m: &Match<'_>) -> Output { Ok(s.renderer().text(m.as_str())) }

pub(crate) fn escape(s: &mut Scanner<'_>, m: &Match<'_>) -> Output { Ok(s.renderer().text(group(m, 1))) }

pub(crate) fn inline_html(s: &mut Scanner<'_>, m: &Match<'_>) -> Output {
    Ok(s.renderer().inline_html(m.as_str()))
}

pub(crate) fn autolink(s: &mut Scanner<'_>, m: &Match<'_>) -> Output {
    if s.in_link() {
        return text(s, m);
    }
    Ok(s.renderer().autolink(group(m, 1), m.group(2) == Some("@")))
}

/// A bare URL embeds only when it is the whole input; elsewhere it is a link.
pub(crate) fn url(s: &mut Scanner<'_>, m: &Match<'_>) -> Output {
    let link = m.as_str();
    if s.in_link() {
        return text(s, m);
    }
    if s.is_standalone(m)
        && let Some(embed) = media::detect(link)
    {
        tracing::trace!(url = link, ?embed, "embedding media link");
        return Ok(s.renderer().embed(&embed, link));
    }
    Ok(s.renderer().autolink(link, false))
}

pub(crate) fn link(s: &mut Scanner<'_>, m: &Match<'_>) -> Output {
    let (label, dest, title) = (group(m, 1), group(m, 2), m.group(3));
    if m.as_str().starts_with('!') {
        return Ok(s.renderer().image(dest, label, title));
    }
    // Anchors cannot nest; an inner link keeps only its label.
    if s.in_link() {
        return s.scan_nested(label);
    }
    let inner = s.scan_link_text(label)?;
    Ok(s.renderer().link(dest, title, &inner))
}

pub(crate) fn double_emphasis(s: &mut Scanner<'_>, m: &Match<'_>) -> Output {
    let inner = s.scan_nested(group(m, 1))?;
    Ok(s.renderer().double_emphasis(&inner))
}

pub(crate) fn emphasis(s: &mut Scanner<'_>, m: &Match<'_>) -> Output {
    let inner = s.scan_nested(group(m, 1))?;
    Ok(s.renderer().emphasis(&inner))
}

pub(crate) fn code(s: &mut Scanner<'_>, m: &Match<'_>) -> Output { Ok(s.renderer().codespan(group(m, 1))) }

pub(crate) fn linebreak(s: &mut Scanner<'_>, _: &Match<'_>) -> Output { Ok(s.renderer().linebreak()) }

pub(crate) fn strikethrough(s: &mut Scanner<'_>, m: &Match<'_>) -> Output {
    let inner = s.scan_nested(group(m, 1))?;
    Ok(s.renderer().strikethrough(&inner))
}
