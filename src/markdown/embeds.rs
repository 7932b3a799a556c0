//! Media embed directives.
//!
//! Directives reuse the image shape `![kind](target)`. Each kind has its own
//! pattern, so a directive whose target does not fit (a YouTube directive
//! pointing at some other host, say) is left untouched and later renders
//! as a plain image.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static VIDEO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[video\]\(([^)]+)\)").expect("video directive pattern is valid")
});

static YOUTUBE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"!\[youtube\]\((?:https?://)?(?:www\.)?(?:youtube\.com/watch\?v=|youtu\.be/)([a-zA-Z0-9_-]+)\)",
    )
    .expect("youtube directive pattern is valid")
});

static TWITTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"!\[twitter\]\((?:https?://)?(?:www\.)?(?:twitter\.com|x\.com)/[A-Za-z0-9_]+/status/([0-9]+)\)",
    )
    .expect("twitter directive pattern is valid")
});

static INSTAGRAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[instagram\]\((?:https?://)?(?:www\.)?instagram\.com/p/([a-zA-Z0-9_-]+)\)")
        .expect("instagram directive pattern is valid")
});

static GENERIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[embed\]\(([^)]+)\)").expect("generic embed pattern is valid")
});

/// Kind of media directive.
///
/// Kinds never share a directive name, so expansion order does not affect
/// the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Embed {
    /// `![video](url)`: self hosted mp4.
    Video,
    /// `![youtube](url)`: watch or short link.
    YouTube,
    /// `![twitter](url)`: status link on twitter.com or x.com.
    Twitter,
    /// `![instagram](url)`: post permalink.
    Instagram,
    /// `![embed](url)`: anything else, as a bare iframe.
    Generic,
}

impl Embed {
    /// All directive kinds in expansion order.
    pub const ALL: [Embed; 5] = [
        Embed::Video,
        Embed::YouTube,
        Embed::Twitter,
        Embed::Instagram,
        Embed::Generic,
    ];

    fn pattern(self) -> &'static Regex {
        match self {
            Embed::Video => &*VIDEO_RE,
            Embed::YouTube => &*YOUTUBE_RE,
            Embed::Twitter => &*TWITTER_RE,
            Embed::Instagram => &*INSTAGRAM_RE,
            Embed::Generic => &*GENERIC_RE,
        }
    }

    fn template(self) -> &'static str {
        match self {
            Embed::Video => {
                r#"<video controls class="blog-video" preload="metadata"><source src="${1}" type="video/mp4"></video>"#
            }
            Embed::YouTube => {
                r#"<div class="video-embed"><iframe width="560" height="315" src="https://www.youtube.com/embed/${1}" frameborder="0" allowfullscreen loading="lazy"></iframe></div>"#
            }
            Embed::Twitter => {
                r#"<div class="twitter-embed"><blockquote class="twitter-tweet"><a href="https://twitter.com/x/status/${1}"></a></blockquote><script async src="https://platform.twitter.com/widgets.js"></script></div>"#
            }
            Embed::Instagram => {
                r#"<div class="instagram-embed"><blockquote class="instagram-media" data-instgrm-permalink="https://www.instagram.com/p/${1}/"></blockquote><script async src="https://www.instagram.com/embed.js"></script></div>"#
            }
            Embed::Generic => {
                r#"<div class="generic-embed"><iframe src="${1}" frameborder="0" allowfullscreen loading="lazy"></iframe></div>"#
            }
        }
    }

    /// Replaces every directive of this kind in `text`.
    pub fn expand<'t>(self, text: &'t str) -> Cow<'t, str> {
        self.pattern().replace_all(text, self.template())
    }
}

/// Expands every media directive in `text`.
pub fn expand_all(text: &str) -> String {
    Embed::ALL
        .iter()
        .fold(text.to_owned(), |acc, embed| embed.expand(&acc).into_owned())
}
