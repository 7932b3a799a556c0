//! Markdown rendering for blog posts.
//!
//! This module renders a small markdown dialect with media embed directives
//! (video, YouTube, Twitter, Instagram and generic iframes). Rendering is a
//! fixed sequence of rewrite rules rather than a parser: nested lists,
//! tables and footnotes are not supported.

mod embeds;
mod renderer;
mod rules;

pub use embeds::Embed;
pub use renderer::MarkdownRenderer;
pub use rules::Rule;

/// Renders markdown with the default renderer.
pub fn render(markdown: &str) -> String {
    MarkdownRenderer::new().render(markdown)
}

/// Renders optional markdown; `None` renders to an empty string.
pub fn render_opt(markdown: Option<&str>) -> String {
    MarkdownRenderer::new().render_opt(markdown)
}
