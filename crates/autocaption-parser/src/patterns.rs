//! Fixed search patterns, compiled once.

use regex::Regex;
use std::sync::LazyLock;

// All patterns below are constants; compilation cannot fail.

pub(crate) static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(19|20)\d{2}").expect("constant regex pattern is valid"));

pub(crate) static QUALITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(480p|720p|1080p|2160p|4K|8K|HD|FHD|UHD)")
        .expect("constant regex pattern is valid")
});

// `\s` is Unicode White_Space, which leaves out the ASCII information
// separators U+001C..U+001F; they are accepted between marker and number too.

pub(crate) static SEASON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(S|s|Season|season)[\s\x1C-\x1F]?\d{1,2}").expect("constant regex pattern is valid")
});

pub(crate) static EPISODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(E|e|Episode|episode)[\s\x1C-\x1F]?\d{1,3}").expect("constant regex pattern is valid")
});

pub(crate) static LANGUAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(Hindi|English|Tamil|Telugu|Malayalam|Kannada|Bengali|Marathi|Gujarati|Punjabi)",
    )
    .expect("constant regex pattern is valid")
});

/// Leftmost match of `pattern` in `haystack`, or an empty string.
pub(crate) fn find(pattern: &Regex, haystack: &str) -> String {
    pattern
        .find(haystack)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
