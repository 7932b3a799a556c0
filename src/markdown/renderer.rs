//! Markdown rendering through an ordered rule pipeline.

use anyhow::{Context, Result};
use log::{debug, trace};
use std::path::Path;

use super::Rule;

/// Renders the blog markdown dialect to HTML.
///
/// Rendering folds the input through [`Rule::PIPELINE`]: embeds, headers,
/// emphasis, links, images, code, lists, blockquotes, horizontal rules and
/// finally paragraphs. Each rule runs once and sees the output of the rules
/// before it.
///
/// The renderer does not escape HTML. Raw tags in the input pass straight
/// through, so untrusted content must be sanitized separately.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    rules: &'static [Rule],
}

impl MarkdownRenderer {
    /// Creates renderer with the full rule pipeline.
    pub fn new() -> Self {
        Self {
            rules: &Rule::PIPELINE,
        }
    }

    /// Returns the rules in the order they are applied.
    pub fn rules(&self) -> &[Rule] {
        self.rules
    }

    /// Renders markdown content to HTML string.
    ///
    /// Never fails: malformed markup degrades to literal text. Empty input
    /// renders to an empty string.
    ///
    /// # Arguments
    ///
    /// * `markdown`: Markdown content to render
    ///
    /// # Returns
    ///
    /// Rendered HTML
    pub fn render(&self, markdown: &str) -> String {
        if markdown.is_empty() {
            return String::new();
        }

        let html = self.rules.iter().fold(markdown.to_owned(), |acc, rule| {
            let next = rule.apply(&acc);
            trace!(
                "rule={} bytes_in={} bytes_out={}",
                rule.name(),
                acc.len(),
                next.len()
            );
            next
        });

        debug!(
            "rendered markdown bytes_in={} bytes_out={}",
            markdown.len(),
            html.len()
        );
        html
    }

    /// Renders optional markdown, treating `None` as empty input.
    pub fn render_opt(&self, markdown: Option<&str>) -> String {
        markdown.map(|m| self.render(m)).unwrap_or_default()
    }

    /// Renders markdown file at given path.
    ///
    /// Convenience method that reads file and renders content.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read as UTF-8 text
    pub fn render_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read markdown file: {}", path.display()))?;
        Ok(self.render(&content))
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}
