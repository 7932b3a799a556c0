//! Integration tests for mdpost.
//!
//! Tests the public rendering, slug and post parsing API.

mod common;

use anyhow::Result;
use mdpost::{MarkdownRenderer, Rule, parse_post, parse_post_file, render, render_opt, slugify};

/// Tests that CRLF input renders like LF input apart from line endings.
#[test]
fn test_render_crlf_matches_lf() {
    // Arrange
    let crlf = common::SAMPLE_POST.replace('\n', "\r\n");

    // Act
    let html = render(&crlf);

    // Assert
    assert!(html.contains("<h1>Shipping Rust at Scale!</h1>"), "{}", html);
    assert!(html.contains("<hr/>"), "{}", html);
    assert_eq!(html.replace('\r', ""), render(common::SAMPLE_POST));
}

/// Tests that rendering terminates for empty and odd inputs.
#[test]
fn test_render_is_total() {
    // Arrange
    let inputs = [
        "",
        "\n",
        "\n\n\n",
        "*",
        "**",
        "[",
        "![",
        "![video](",
        "```",
        "# ",
        "> ",
        "1.",
        "<li>",
        "</li><li>",
    ];

    for input in inputs {
        // Act
        let html = render(input);

        // Assert
        assert!(
            input.is_empty() || !html.is_empty(),
            "Non-empty input {:?} should produce output",
            input
        );
    }
    assert_eq!(render(""), "");
    assert_eq!(render_opt(None), "");
}

/// Tests level one header renders exactly once.
#[test]
fn test_render_single_header() {
    // Arrange & Act
    let html = render("# Hello");

    // Assert
    assert_eq!(html.matches("<h1>Hello</h1>").count(), 1);
    assert!(!html.contains("<h2>") && !html.contains("<h3>"));
}

/// Tests bold and italic are not nested into each other.
#[test]
fn test_render_bold_and_italic() {
    // Arrange & Act
    let html = render("**bold** and *italic*");

    // Assert
    assert!(html.contains("<strong>bold</strong>"), "{}", html);
    assert!(html.contains("<em>italic</em>"), "{}", html);
    assert!(!html.contains("<strong><em>"), "Should not nest: {}", html);
}

/// Tests links always open in a new tab.
#[test]
fn test_render_link() {
    // Arrange & Act
    let html = render("[text](http://x)");

    // Assert
    assert!(
        html.contains(r#"<a href="http://x" target="_blank" rel="noopener">text</a>"#),
        "{}",
        html
    );
}

/// Tests YouTube short links become embed iframes.
#[test]
fn test_render_youtube_short_link() {
    // Arrange & Act
    let html = render("![youtube](https://youtu.be/abc123)");

    // Assert
    assert!(
        html.contains(r#"src="https://www.youtube.com/embed/abc123""#),
        "{}",
        html
    );
    assert!(!html.contains("<img"), "Should not fall back to image");
}

/// Tests list items are wrapped in a single list.
#[test]
fn test_render_list() {
    // Arrange & Act
    let html = render("* a\n* b");

    // Assert
    assert_eq!(html.matches("<ul>").count(), 1);
    assert_eq!(html.matches("<li>").count(), 2);
    assert!(html.contains("<li>a</li>"));
    assert!(html.contains("<li>b</li>"));
}

/// Tests ordered items share the unordered list wrapper.
#[test]
fn test_render_numbered_list_uses_ul() {
    // Arrange & Act
    let html = render("1. first\n2. second");

    // Assert
    assert_eq!(html, "<ul><li>first</li>\n<li>second</li></ul>");
    assert!(!html.contains("<ol>"));
}

/// Tests each directive routes to its own handler.
#[test]
fn test_render_embed_precedence() {
    // Arrange & Act
    let html = render("![embed](u1) ![youtube](https://youtu.be/x)");

    // Assert
    assert!(
        html.contains(r#"<div class="generic-embed"><iframe src="u1""#),
        "{}",
        html
    );
    assert!(
        html.contains(r#"<div class="video-embed"><iframe width="560" height="315" src="https://www.youtube.com/embed/x""#),
        "{}",
        html
    );
    assert_eq!(html.matches("<iframe").count(), 2);
}

/// Tests video directive renders a video element.
#[test]
fn test_render_video() {
    // Arrange & Act
    let html = render("![video](clip.mp4)");

    // Assert
    assert!(html.contains(r#"<source src="clip.mp4" type="video/mp4">"#));
    assert!(html.contains("controls"));
    assert!(html.contains(r#"preload="metadata""#));
}

/// Tests the full sample post renders every construct.
#[test]
fn test_render_sample_post() {
    // Arrange
    let renderer = MarkdownRenderer::new();

    // Act
    let html = renderer.render(common::SAMPLE_POST);

    // Assert
    assert!(html.starts_with("<h1>Shipping Rust at Scale!</h1>"));
    assert!(html.contains("<h2>Why Rust</h2>"));
    assert!(html.contains("<em>Rust</em>"));
    assert!(html.contains("<strong>predictable latency</strong>"));
    assert!(html.contains("<strong><em>fearless</em></strong>"));
    assert!(html.contains("https://www.youtube.com/embed/abc123"));
    assert!(html.contains(r#"<img src="img/arch.png" alt="architecture" class="blog-image" loading="lazy" />"#));
    assert!(html.contains(r#"<a href="https://doc.rust-lang.org/book/" target="_blank" rel="noopener">the book</a>"#));
    assert!(html.contains("<code>cargo test</code>"));
    assert!(html.contains("<ul><li>fast</li>\n<li>safe</li></ul>"));
    assert!(html.contains("<blockquote>Measure first.</blockquote>"));
    assert!(html.contains("<hr/>"));
    assert!(html.ends_with("Thanks for reading."));
}

/// Tests renderer exposes pipeline in documented order.
#[test]
fn test_renderer_rule_order() {
    // Arrange
    let renderer = MarkdownRenderer::default();

    // Act
    let rules = renderer.rules();

    // Assert
    assert_eq!(rules.first(), Some(&Rule::Embeds));
    assert_eq!(rules.last(), Some(&Rule::Paragraphs));
    let links = rules.iter().position(|r| *r == Rule::Links);
    let images = rules.iter().position(|r| *r == Rule::Images);
    assert!(links < images, "Links should run before images");
}

/// Tests rendering from several threads gives identical output.
#[test]
fn test_render_concurrently() {
    // Arrange
    let expected = render(common::SAMPLE_POST);

    // Act
    let outputs: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| render(common::SAMPLE_POST)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("Render thread should not panic"))
            .collect()
    });

    // Assert
    for output in outputs {
        assert_eq!(output, expected);
    }
}

/// Tests slugs are lowercase, hyphenated and idempotent.
#[test]
fn test_slugify_properties() {
    // Arrange
    let inputs = [
        "Hello, World!  Foo_Bar",
        "Shipping Rust at Scale!",
        "---already-slugged---",
        "  multiple   spaces\tand\ttabs ",
        "100% Pure & Simple?",
    ];

    for input in inputs {
        // Act
        let slug = slugify(input);

        // Assert
        assert_eq!(slug, slug.to_lowercase());
        assert!(!slug.starts_with('-') && !slug.ends_with('-'), "{:?}", slug);
        assert!(!slug.contains("--"), "{:?}", slug);
        assert!(
            slug.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_'),
            "{:?}",
            slug
        );
        assert_eq!(slugify(&slug), slug, "Should be idempotent for {:?}", input);
    }
    assert_eq!(slugify("Hello, World!  Foo_Bar"), "hello-world-foo_bar");
    assert_eq!(slugify("100% Pure & Simple?"), "100-pure-simple");
}

/// Tests post parsing extracts metadata and keeps original markdown.
#[test]
fn test_parse_post_metadata() {
    // Arrange
    let markdown = "# My Title\nSome intro text that is long.\n\nMore.";

    // Act
    let post = parse_post(markdown);

    // Assert
    assert_eq!(post.title, "My Title");
    assert_eq!(post.slug, "my-title");
    assert_eq!(post.excerpt, "Some intro text that is long.");
    assert!(post.excerpt.chars().count() <= 160);
    assert_eq!(post.markdown, markdown);
    assert_eq!(post.content, render(markdown));
}

/// Tests post parsing of the sample post.
#[test]
fn test_parse_sample_post() {
    // Arrange & Act
    let post = parse_post(common::SAMPLE_POST);

    // Assert
    assert_eq!(post.title, "Shipping Rust at Scale!");
    assert_eq!(post.slug, "shipping-rust-at-scale");
    assert_eq!(
        post.excerpt,
        "Lessons from a year of running *Rust* services in production."
    );
}

/// Tests parsing a file on disk matches parsing its contents.
#[test]
fn test_parse_post_file_matches_parse_post() -> Result<()> {
    // Arrange
    let (_dir, path) = common::write_markdown("drafts/sample.md", common::SAMPLE_POST)?;

    // Act
    let from_file = parse_post_file(&path)?;

    // Assert
    assert_eq!(from_file, parse_post(common::SAMPLE_POST));

    Ok(())
}
