//! Standalone article page for previewing a post.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::post::BlogPost;

/// Stylesheet path referenced by generated pages, relative to the page.
pub const STYLESHEET: &str = "assets/post.css";

/// Site name appended to page titles.
pub const SITE_NAME: &str = "CodimAi";

/// Renders a complete HTML document for a blog post.
///
/// The post content is already HTML and is inserted unescaped; title,
/// author, description and tags are escaped. The tag footer is omitted
/// when the post has no tags.
///
/// # Arguments
///
/// * `post`: Post record with rendered content
///
/// # Returns
///
/// Complete HTML document markup
pub fn post_page(post: &BlogPost) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(post.description());
                meta property="og:title" content=(post.title);
                meta property="og:description" content=(social_description(post));
                meta property="og:type" content="article";
                meta name="twitter:card" content="summary_large_image";
                meta name="twitter:title" content=(post.title);
                meta name="twitter:description" content=(social_description(post));
                title { (post.title) " - " (SITE_NAME) " Blog" }
                link rel="stylesheet" href=(STYLESHEET);
            }
            body {
                div class="container" {
                    (article(post))
                }
            }
        }
    }
}

/// Sharing cards lead with the excerpt rather than the SEO description.
fn social_description(post: &BlogPost) -> &str {
    if post.excerpt.is_empty() {
        &post.meta_description
    } else {
        &post.excerpt
    }
}

fn article(post: &BlogPost) -> Markup {
    html! {
        article class="blog-post" {
            header class="blog-post-header" {
                h1 class="blog-post-title" { (post.title) }
                div class="blog-post-meta" {
                    span class="blog-post-meta-item" { (post.author) }
                    @if !post.category.is_empty() {
                        span class="blog-post-meta-item" { (post.category) }
                    }
                }
            }
            div class="blog-post-content" {
                (PreEscaped(&post.content))
            }
            @if !post.tags.is_empty() {
                footer class="blog-tags" {
                    @for tag in &post.tags {
                        span class="blog-tag" { (tag) }
                    }
                }
            }
        }
    }
}
