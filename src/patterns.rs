//! Compiled regex patterns used by the heuristics.
//!
//! All patterns are compiled once on first use with `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Curated news / AI-domain keywords, matched case-insensitively as
/// substrings.
///
/// Exception: the short tokens `ai` and `llm` only match as whole words, so
/// `container` and `main` do not count, and neither does the `ai` inside
/// `OpenAI` (that text still matches through `gpt` or other keywords when
/// present).
pub static NEWS_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(news|article|story|stories|headline|post|entry|feed|blog|press|report|\bai\b|artificial[-_ ]?intelligence|machine[-_ ]?learning|deep[-_ ]?learning|\bllm\b|gpt|chatbot|neural|新闻|资讯|文章|快讯|人工智能|大模型|科技)",
    )
    .expect("NEWS_KEYWORDS regex")
});

/// Any decimal digit, ASCII or full-width.
pub static DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9０-９]").expect("DIGIT regex"));

/// True when `text` contains a domain keyword.
#[must_use]
pub fn has_news_keyword(text: &str) -> bool {
    NEWS_KEYWORDS.is_match(text)
}

/// True when `text` contains a digit.
#[must_use]
pub fn has_digit(text: &str) -> bool {
    DIGIT.is_match(text)
}
