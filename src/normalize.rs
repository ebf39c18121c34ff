//! Search text normalization
//!
//! Turns whatever the user typed into the search box into a single path
//! segment suitable for the practice route: surrounding whitespace is
//! stripped, a pasted URL or path is reduced to its last segment, and
//! whitespace runs become underscores.

use regex::Regex;
use std::sync::LazyLock;

/// Unicode whitespace plus the byte order mark, which browsers also treat as blank
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\x{FEFF}]+").expect("whitespace pattern is valid"));

fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Normalize raw search text into a practice path segment
///
/// Steps, in order:
/// 1. trim leading and trailing whitespace
/// 2. keep only what follows the last `/` (possibly empty)
/// 3. replace every whitespace run with a single `_`
///
/// Letter case is left untouched.
pub fn normalize_search_text(raw: &str) -> String {
    let trimmed = raw.trim_matches(is_blank);

    // Only the final segment survives a pasted URL like http://host/Topic
    let segments: Vec<&str> = trimmed.split('/').collect();
    let last = segments.last().copied().unwrap_or_default();

    WHITESPACE_RUN.replace_all(last, "_").into_owned()
}
