//! Blog post metadata extracted from uploaded markdown.

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

use crate::markdown::MarkdownRenderer;
use crate::slug::slugify;

/// Title used when the markdown has no level one header.
pub const UNTITLED: &str = "Untitled";

/// Author recorded when none is given.
pub const DEFAULT_AUTHOR: &str = "Admin";

/// Maximum excerpt length in characters.
pub const EXCERPT_MAX_CHARS: usize = 160;

/// Result of parsing an uploaded markdown document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedPost {
    pub title: String,
    pub slug: String,
    /// Rendered HTML.
    pub content: String,
    pub excerpt: String,
    /// Original markdown, kept for later editing.
    pub markdown: String,
}

/// Parses markdown text into post metadata and rendered content.
///
/// The title is the first `# ` header (or [`UNTITLED`]), the slug is derived
/// from the title, and the excerpt is the first non-empty line that does not
/// start with `#`, cut at [`EXCERPT_MAX_CHARS`] characters.
pub fn parse_post(markdown: &str) -> ParsedPost {
    let title = extract_title(markdown).unwrap_or(UNTITLED).to_string();
    let slug = slugify(&title);
    let content = MarkdownRenderer::new().render(markdown);
    let excerpt = extract_excerpt(markdown)
        .map(|line| truncate_chars(line, EXCERPT_MAX_CHARS))
        .unwrap_or_default();

    debug!("parsed post slug={} excerpt_chars={}", slug, excerpt.chars().count());

    ParsedPost {
        title,
        slug,
        content,
        excerpt,
        markdown: markdown.to_string(),
    }
}

/// Reads a markdown file and parses it with [`parse_post`].
///
/// # Errors
///
/// Returns error if the file cannot be read as UTF-8 text
pub fn parse_post_file(path: impl AsRef<Path>) -> Result<ParsedPost> {
    let path = path.as_ref();
    let markdown = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read markdown file: {}", path.display()))?;
    Ok(parse_post(&markdown))
}

fn extract_title(markdown: &str) -> Option<&str> {
    markdown
        .lines()
        .filter_map(|line| line.strip_prefix("# "))
        .find(|title| !title.is_empty())
}

fn extract_excerpt(markdown: &str) -> Option<&str> {
    markdown
        .lines()
        .find(|line| !line.is_empty() && !line.starts_with('#'))
}

fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

/// Splits a comma separated tag list, trimming and dropping empty entries.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

/// Validation failures for a publishable post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostError {
    MissingTitle,
    MissingSlug,
    MissingContent,
}

impl Display for PostError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "post title is required"),
            Self::MissingSlug => write!(f, "post slug is required"),
            Self::MissingContent => write!(f, "post content is required"),
        }
    }
}

impl Error for PostError {}

/// Post record as stored by the publishing backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub title: String,
    pub slug: String,
    pub author: String,
    pub category: String,
    pub excerpt: String,
    /// Rendered HTML.
    pub content: String,
    pub markdown: String,
    pub meta_description: String,
    pub tags: Vec<String>,
    pub published: bool,
}

impl BlogPost {
    /// Builds a published record from an uploaded markdown post.
    ///
    /// The author falls back to [`DEFAULT_AUTHOR`] when missing or blank,
    /// and the meta description reuses the excerpt.
    pub fn from_parsed(
        parsed: ParsedPost,
        author: Option<&str>,
        category: &str,
        tags: Vec<String>,
    ) -> Self {
        let author = author
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .unwrap_or(DEFAULT_AUTHOR)
            .to_string();

        Self {
            title: parsed.title,
            slug: parsed.slug,
            author,
            category: category.to_string(),
            meta_description: parsed.excerpt.clone(),
            excerpt: parsed.excerpt,
            content: parsed.content,
            markdown: parsed.markdown,
            tags,
            published: true,
        }
    }

    /// Checks that title, slug and content are present.
    ///
    /// # Errors
    ///
    /// Returns the first missing field, checked in that order
    pub fn validate(&self) -> Result<(), PostError> {
        if self.title.trim().is_empty() {
            return Err(PostError::MissingTitle);
        }
        if self.slug.trim().is_empty() {
            return Err(PostError::MissingSlug);
        }
        if self.content.trim().is_empty() {
            return Err(PostError::MissingContent);
        }
        Ok(())
    }

    /// Description for page metadata, falling back to the excerpt.
    pub fn description(&self) -> &str {
        if self.meta_description.is_empty() {
            &self.excerpt
        } else {
            &self.meta_description
        }
    }
}
