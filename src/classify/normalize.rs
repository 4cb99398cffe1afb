use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s]").expect("static pattern"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static pattern"));

/// Canonicalize free text for keyword matching.
///
/// Lowercases, strips diacritics (`"opción"` → `"opcion"`), turns every
/// character outside `[a-z0-9]` and whitespace into a space, then collapses
/// and trims whitespace. The output is plain ASCII, so applying it twice
/// yields the same string.
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();

    let spaced = NON_WORD.replace_all(&folded, " ");
    WHITESPACE.replace_all(spaced.trim(), " ").into_owned()
}
