//! Ordered rewrite rules for the markdown dialect.
//!
//! Every rule maps a string to a string and runs exactly once per render.
//! Later rules see the HTML produced by earlier ones, so the order in
//! [`Rule::PIPELINE`] is part of the output contract.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::embeds;

// Line anchored patterns use CRLF mode so `\r\n` input behaves like `\n`.

static H3_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)^### (.+)$").expect("h3 pattern is valid"));
static H2_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)^## (.+)$").expect("h2 pattern is valid"));
static H1_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)^# (.+)$").expect("h1 pattern is valid"));

static BOLD_ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\*(.+?)\*\*\*").expect("bold italic pattern is valid"));
static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold pattern is valid"));
static ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.+?)\*").expect("italic pattern is valid"));

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern is valid"));
static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").expect("image pattern is valid"));

static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:[A-Za-z0-9_+-]*\r?\n)?(.*?)```").expect("fence pattern is valid")
});
static INLINE_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("inline code pattern is valid"));

static BULLET_STAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)^\* (.+)$").expect("star bullet pattern is valid"));
static BULLET_DASH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)^- (.+)$").expect("dash bullet pattern is valid"));
static NUMBERED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mR)^[0-9]+\. (.+)$").expect("numbered item pattern is valid")
});

static QUOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)^> (.+)$").expect("blockquote pattern is valid"));
static RULE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)^---$").expect("horizontal rule pattern is valid"));

/// One step of the rendering pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Video, YouTube, Twitter, Instagram and generic iframe directives.
    Embeds,
    /// `#`, `##` and `###` at line start.
    Headers,
    /// `***x***`, `**x**` and `*x*`, longest marker first.
    Emphasis,
    /// `[text](url)`, always opening in a new tab.
    Links,
    /// `![alt](url)`.
    Images,
    /// Fenced blocks, then inline spans.
    Code,
    /// `*`, `-` and `N.` items, wrapped in a single `<ul>`.
    Lists,
    /// `> x`, one element per line.
    Blockquotes,
    /// A line holding only `---`.
    HorizontalRules,
    /// Blank line separated runs.
    Paragraphs,
}

impl Rule {
    /// Rules in the order they are applied.
    pub const PIPELINE: [Rule; 10] = [
        Rule::Embeds,
        Rule::Headers,
        Rule::Emphasis,
        Rule::Links,
        Rule::Images,
        Rule::Code,
        Rule::Lists,
        Rule::Blockquotes,
        Rule::HorizontalRules,
        Rule::Paragraphs,
    ];

    /// Short name used in trace logs.
    pub fn name(self) -> &'static str {
        match self {
            Rule::Embeds => "embeds",
            Rule::Headers => "headers",
            Rule::Emphasis => "emphasis",
            Rule::Links => "links",
            Rule::Images => "images",
            Rule::Code => "code",
            Rule::Lists => "lists",
            Rule::Blockquotes => "blockquotes",
            Rule::HorizontalRules => "horizontal-rules",
            Rule::Paragraphs => "paragraphs",
        }
    }

    /// Applies this rule to `text`.
    pub fn apply(self, text: &str) -> String {
        match self {
            Rule::Embeds => embeds::expand_all(text),
            Rule::Headers => chain(
                text,
                &[
                    (&*H3_RE, "<h3>${1}</h3>"),
                    (&*H2_RE, "<h2>${1}</h2>"),
                    (&*H1_RE, "<h1>${1}</h1>"),
                ],
            ),
            Rule::Emphasis => chain(
                text,
                &[
                    (&*BOLD_ITALIC_RE, "<strong><em>${1}</em></strong>"),
                    (&*BOLD_RE, "<strong>${1}</strong>"),
                    (&*ITALIC_RE, "<em>${1}</em>"),
                ],
            ),
            Rule::Links => links(text),
            Rule::Images => IMAGE_RE
                .replace_all(
                    text,
                    r#"<img src="${2}" alt="${1}" class="blog-image" loading="lazy" />"#,
                )
                .into_owned(),
            Rule::Code => chain(
                text,
                &[
                    (&*FENCE_RE, "<pre><code>${1}</code></pre>"),
                    (&*INLINE_CODE_RE, "<code>${1}</code>"),
                ],
            ),
            Rule::Lists => {
                let items = chain(
                    text,
                    &[
                        (&*BULLET_STAR_RE, "<li>${1}</li>"),
                        (&*BULLET_DASH_RE, "<li>${1}</li>"),
                        (&*NUMBERED_RE, "<li>${1}</li>"),
                    ],
                );
                wrap_list_items(&items)
            }
            Rule::Blockquotes => QUOTE_RE
                .replace_all(text, "<blockquote>${1}</blockquote>")
                .into_owned(),
            Rule::HorizontalRules => RULE_RE.replace_all(text, "<hr/>").into_owned(),
            Rule::Paragraphs => paragraphs(text),
        }
    }
}

fn chain(text: &str, steps: &[(&Regex, &str)]) -> String {
    steps.iter().fold(text.to_owned(), |acc, (re, template)| {
        re.replace_all(&acc, *template).into_owned()
    })
}

/// Rewrites `[text](url)` unless the bracket belongs to image syntax.
fn links(text: &str) -> String {
    LINK_RE
        .replace_all(text, |caps: &Captures<'_>| {
            let start = caps.get(0).map_or(0, |m| m.start());
            if text[..start].ends_with('!') {
                caps[0].to_string()
            } else {
                format!(
                    r#"<a href="{}" target="_blank" rel="noopener">{}</a>"#,
                    &caps[2], &caps[1]
                )
            }
        })
        .into_owned()
}

/// Wraps the span from the first `<li>` to the last `</li>` in one `<ul>`.
///
/// Ordered and unordered items end up in the same list.
fn wrap_list_items(text: &str) -> String {
    const OPEN: &str = "<li>";
    const CLOSE: &str = "</li>";

    let (Some(start), Some(close)) = (text.find(OPEN), text.rfind(CLOSE)) else {
        return text.to_owned();
    };
    let end = close + CLOSE.len();
    if end <= start {
        return text.to_owned();
    }

    let mut out = String::with_capacity(text.len() + "<ul></ul>".len());
    out.push_str(&text[..start]);
    out.push_str("<ul>");
    out.push_str(&text[start..end]);
    out.push_str("</ul>");
    out.push_str(&text[end..]);
    out
}

fn paragraphs(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let html = text
        .replace("\r\n\r\n", "</p><p>")
        .replace("\n\n", "</p><p>");
    if html.starts_with('<') {
        html
    } else {
        format!("<p>{}</p>", html)
    }
}
