use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static DISALLOWED_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^A-Za-z0-9_\s-]").expect("Invalid disallowed-chars regex pattern")
});
// A whitespace run together with any hyphens touching it.
static SEPARATOR_RUNS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\s-]*\s[\s-]*").expect("Invalid separator regex pattern")
});

/// Derive the URL-safe slug for a tag title.
///
/// The title is trimmed, decomposed (NFD) so accents can be stripped, then
/// lowercased. Anything other than ASCII word characters, hyphens and
/// whitespace is dropped, and each whitespace run (with the hyphens next to
/// it) becomes a single `-`.
///
/// ```
/// use tagform::services::slug::derive_slug;
///
/// assert_eq!(derive_slug("Café Central"), "cafe-central");
/// assert_eq!(derive_slug(""), "");
/// ```
pub fn derive_slug(input: &str) -> String {
    let unaccented: String = input
        .trim()
        .nfd()
        .filter(|c| !is_combining_diacritic(*c))
        .collect();
    let lowered = unaccented.to_lowercase();
    let kept = DISALLOWED_CHARS.replace_all(&lowered, "");
    SEPARATOR_RUNS.replace_all(&kept, "-").into_owned()
}

/// Combining Diacritical Marks block, U+0300..=U+036F.
fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}
