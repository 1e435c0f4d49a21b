// Message preprocessor

use once_cell::sync::Lazy;
use regex::Regex;

static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"http\S+").unwrap());
static NON_ALNUM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\s]").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalize a raw message for phrase and keyword matching
///
/// Lowercases, blanks out URLs and anything outside `[a-z0-9\s]`, then
/// collapses whitespace to single spaces and trims. Never fails; empty input
/// gives an empty string.
pub fn preprocess(text: &str) -> String {
    let lowered = text.to_lowercase();
    let without_urls = URL_RE.replace_all(&lowered, " ");
    let alnum_only = NON_ALNUM_RE.replace_all(&without_urls, " ");
    WHITESPACE_RE
        .replace_all(&alnum_only, " ")
        .trim()
        .to_string()
}
