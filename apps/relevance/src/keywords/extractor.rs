//! Text → keyword functions shared by the index builder and the boosting engine.
//!
//! Every function here is pure and total: empty input yields an empty result.
//!
//! Plural handling is a naive one-letter bridge (`get_keyword_variants`), not a
//! stemmer. It over-matches ("bus" → "buss") and under-matches ("studies" vs
//! "study"); both are known limitations.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use super::stop_words::{is_query_stop_word, is_text_stop_word};

static NON_KEYWORD_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("static regex"));
static NON_TOKEN_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w-]").expect("static regex"));
static POSSESSIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"['’]s\b").expect("static regex"));

/// Tokens this short are never keywords.
const MIN_KEYWORD_CHARS: usize = 3;

/// Lowercases, trims, strips everything but word characters and hyphens,
/// and collapses internal whitespace.
pub fn normalize_keyword(keyword: &str) -> String {
    let lowered = keyword.trim().to_lowercase();
    let stripped = NON_KEYWORD_CHARS.replace_all(&lowered, "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extracts distinct keywords from catalog prose, in first-seen order.
pub fn extract_keywords_from_text(text: &str) -> Vec<String> {
    extract_with(&text.to_lowercase(), is_text_stop_word)
}

/// Extracts distinct keywords from a natural-language search query.
///
/// Differs from [`extract_keywords_from_text`] in two ways: possessive `'s`
/// suffixes are removed first, and the question-oriented stop-word list applies.
pub fn extract_query_keywords(query: &str) -> Vec<String> {
    let lowered = query.to_lowercase();
    let without_possessives = POSSESSIVE.replace_all(&lowered, "");
    extract_with(&without_possessives, is_query_stop_word)
}

/// Returns the normalized keyword followed by its naive singular/plural counterpart.
pub fn get_keyword_variants(keyword: &str) -> Vec<String> {
    let normalized = normalize_keyword(keyword);
    if normalized.is_empty() {
        return Vec::new();
    }

    let counterpart = match normalized.strip_suffix('s') {
        Some(singular) if normalized.chars().count() > 3 => singular.to_string(),
        _ => format!("{normalized}s"),
    };

    vec![normalized, counterpart]
}

fn extract_with(lowered: &str, is_stop_word: fn(&str) -> bool) -> Vec<String> {
    let mut seen = HashSet::new();
    lowered
        .split_whitespace()
        .map(|token| NON_TOKEN_CHARS.replace_all(token, "").into_owned())
        .filter(|token| token.chars().count() >= MIN_KEYWORD_CHARS)
        .filter(|token| !is_stop_word(token))
        .filter(|token| seen.insert(token.clone()))
        .collect()
}
