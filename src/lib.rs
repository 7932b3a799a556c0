//! Blog post rendering from a small markdown dialect.
//!
//! The core is a pure text pipeline: [`render`] turns markdown with media
//! embed directives into HTML, [`slugify`] derives URL slugs, and
//! [`parse_post`] extracts title, slug and excerpt from an uploaded post.
//! Rendering performs no HTML escaping; sanitize untrusted input separately.

mod assets;
mod config;
pub mod logging;
mod markdown;
pub mod page;
mod post;
mod slug;

pub use assets::write_css_assets;
pub use config::{Command, Config, PostArgs, is_stdin};
pub use logging::init_logging;
pub use markdown::{Embed, MarkdownRenderer, Rule, render, render_opt};
pub use page::post_page;
pub use post::{
    BlogPost, DEFAULT_AUTHOR, EXCERPT_MAX_CHARS, ParsedPost, PostError, UNTITLED, parse_post,
    parse_post_file, parse_tags,
};
pub use slug::slugify;
