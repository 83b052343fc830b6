//! Plain-text shaping applied to converted markdown before it reaches the
//! prompt.

use lazy_static::lazy_static;
use regex::Regex;

/// Word budget used when none is configured.
pub const DEFAULT_TOKEN_BUDGET: usize = 1000;

lazy_static! {
    static ref MARKDOWN_LINK: Regex =
        Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("markdown link pattern is valid");
}

/// Replaces every `[text](target)` with `text`. Other markdown is left alone.
///
/// Nested constructs like `[[a](b)](c)` unwrap over several passes, so the
/// loop runs to a fixed point to keep the function idempotent.
pub fn remove_links(markdown: &str) -> String {
    let mut text = markdown.to_string();
    while MARKDOWN_LINK.is_match(&text) {
        text = MARKDOWN_LINK.replace_all(&text, "$1").into_owned();
    }
    text
}

/// Keeps the first `max_units` whitespace-separated words, joined by single
/// spaces. A budget of zero yields an empty string.
pub fn truncate_to_budget(text: &str, max_units: usize) -> String {
    text.split_whitespace()
        .take(max_units)
        .collect::<Vec<_>>()
        .join(" ")
}
