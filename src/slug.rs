//! URL slug generation.

use regex::Regex;
use std::sync::LazyLock;

static DISALLOWED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9_\s-]").expect("slug filter pattern is valid"));
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));
static HYPHENS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-+").expect("hyphen run pattern is valid"));

/// Converts text to a URL slug.
///
/// Lowercases the text, drops everything except ASCII letters, digits,
/// underscores, whitespace and hyphens, turns whitespace runs into single
/// hyphens, collapses repeated hyphens and trims hyphens from both ends.
///
/// Total and idempotent: `slugify(&slugify(x)) == slugify(x)`.
///
/// # Examples
///
/// ```
/// assert_eq!(mdpost::slugify("Hello, World!"), "hello-world");
/// assert_eq!(mdpost::slugify("  -- Rust 2024 --  "), "rust-2024");
/// ```
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    let kept = DISALLOWED_RE.replace_all(&lower, "");
    let hyphenated = WHITESPACE_RE.replace_all(&kept, "-");
    let collapsed = HYPHENS_RE.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_punctuation_and_spacing() {
        // Arrange
        let input = "Hello, World!  Foo_Bar";

        // Act
        let slug = slugify(input);

        // Assert
        assert_eq!(slug, "hello-world-foo_bar");
    }

    #[test]
    fn test_slugify_trims_hyphens() {
        // Arrange & Act
        let slug = slugify(" - leading and trailing - ");

        // Assert
        assert_eq!(slug, "leading-and-trailing");
    }

    #[test]
    fn test_slugify_collapses_hyphen_runs() {
        // Arrange & Act
        let slug = slugify("a --- b -- c");

        // Assert
        assert_eq!(slug, "a-b-c");
    }

    #[test]
    fn test_slugify_drops_non_ascii_letters() {
        // Arrange & Act
        let slug = slugify("Café Résumé");

        // Assert
        assert_eq!(slug, "caf-rsum");
    }

    #[test]
    fn test_slugify_empty_and_symbol_only() {
        // Arrange & Act & Assert
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!! ??? ..."), "");
    }

    #[test]
    fn test_slugify_idempotent() {
        // Arrange
        let inputs = [
            "Hello, World!  Foo_Bar",
            "  -- spaced --  ",
            "Tabs\tand\nnewlines",
            "UPPER lower 123",
            "émoji 🚀 launch",
            "",
        ];

        for input in inputs {
            // Act
            let once = slugify(input);
            let twice = slugify(&once);

            // Assert
            assert_eq!(once, twice, "slugify should be idempotent for {:?}", input);
            assert!(!once.starts_with('-') && !once.ends_with('-'));
            assert!(!once.contains("--"), "No repeated hyphens in {:?}", once);
        }
    }
}
