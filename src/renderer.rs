//! Token to HTML fragment functions.
//!
//! The renderer holds no state of its own; every method is a pure function of
//! its arguments and the borrowed [`Config`]. Handlers call it once the scanner
//! has decided what a span is.

use crate::{
    config::{Config, Identity},
    media::Embed,
    sanitize::sanitize_url,
};

#[derive(Clone, Copy, Debug)]
pub struct Renderer<'a> {
    config: &'a Config,
}

impl<'a> Renderer<'a> {
    #[must_use]
    pub fn new(config: &'a Config) -> Self { Self { config } }

    fn escape(&self, text: &str) -> String { (self.config.escape)(text) }

    fn rel(&self) -> &'static str {
        if self.config.no_follow {
            " rel=\"nofollow\""
        } else {
            ""
        }
    }

    #[must_use]
    pub fn text(&self, text: &str) -> String { self.escape(text) }

    /// Raw HTML from user text is never trusted; it is shown, not parsed.
    #[must_use]
    pub fn inline_html(&self, html: &str) -> String { self.escape(html) }

    /// `<http://…>` style links. Mail addresses get a `mailto:` target.
    #[must_use]
    pub fn autolink(&self, link: &str, is_email: bool) -> String {
        let target = if is_email && !link.to_ascii_lowercase().starts_with("mailto:") {
            format!("mailto:{link}")
        } else {
            link.to_string()
        };
        format!(
            "<a{} href=\"{}\">{}</a>",
            self.rel(),
            self.escape(sanitize_url(&target)),
            self.escape(link)
        )
    }

    /// `inner` is already rendered HTML.
    #[must_use]
    pub fn link(&self, dest: &str, title: Option<&str>, inner: &str) -> String {
        let title = title
            .map(|t| format!(" title=\"{}\"", self.escape(t)))
            .unwrap_or_default();
        format!(
            "<a{} href=\"{}\"{title}>{inner}</a>",
            self.rel(),
            self.escape(sanitize_url(dest))
        )
    }

    #[must_use]
    pub fn image(&self, src: &str, alt: &str, title: Option<&str>) -> String {
        let title = title
            .map(|t| format!(" title=\"{}\"", self.escape(t)))
            .unwrap_or_default();
        format!(
            "<img src=\"{}\" alt=\"{}\"{title}>",
            self.escape(sanitize_url(src)),
            self.escape(alt)
        )
    }

    #[must_use]
    pub fn emphasis(&self, inner: &str) -> String { format!("<em>{inner}</em>") }

    #[must_use]
    pub fn double_emphasis(&self, inner: &str) -> String { format!("<strong>{inner}</strong>") }

    #[must_use]
    pub fn strikethrough(&self, inner: &str) -> String { format!("<del>{inner}</del>") }

    #[must_use]
    pub fn codespan(&self, code: &str) -> String { format!("<code>{}</code>", self.escape(code)) }

    #[must_use]
    pub fn linebreak(&self) -> String { "<br>\n".to_string() }

    #[must_use]
    pub fn emoji(&self, class: &str, name: &str) -> String {
        format!(
            "<i class=\"tw tw-{}\" title=\":{}:\"></i>",
            self.escape(class),
            self.escape(name)
        )
    }

    /// `name` is the spelling from the source text, not the canonical username.
    #[must_use]
    pub fn mention(&self, name: &str, identity: &Identity) -> String {
        format!(
            "<a class=\"comment-mention\"{} href=\"{}\">@{}</a>",
            self.rel(),
            self.escape(sanitize_url(&identity.profile_url)),
            self.escape(name)
        )
    }

    /// Markup for a detected embed. `url` is the original link.
    ///
    /// The YouTube start offset is joined with `&amp;`, not a bare `&`, so the
    /// `src` attribute is valid HTML; browsers decode both to the same URL.
    #[must_use]
    pub fn embed(&self, embed: &Embed<'_>, url: &str) -> String {
        match *embed {
            Embed::YouTube { id, start } => {
                let start = start.map(|s| format!("&amp;start={s}")).unwrap_or_default();
                iframe(&format!(
                    "https://www.youtube.com/embed/{}?html5=1{start}",
                    self.escape(id)
                ))
            }
            Embed::Vimeo { id } => iframe(&format!(
                "https://player.vimeo.com/video/{}",
                self.escape(id)
            )),
            Embed::Gfycat { id } => format!(
                "<span class=\"video\"><iframe src=\"https://gfycat.com/ifr/{}\" \
                 frameborder=\"0\" scrolling=\"no\" allowfullscreen></iframe></span>",
                self.escape(id)
            ),
            Embed::Image { name } => self.image(url, name, Some(name)),
            Embed::Video => self.player("video", url),
            Embed::Audio => self.player("audio", url),
        }
    }

    fn player(&self, tag: &str, url: &str) -> String {
        format!(
            "<{tag} controls><source src=\"{}\">{}</{tag}>",
            self.escape(sanitize_url(url)),
            self.autolink(url, false)
        )
    }
}

fn iframe(src: &str) -> String {
    format!("<span class=\"video\"><iframe src=\"{src}\" allowfullscreen></iframe></span>")
}
