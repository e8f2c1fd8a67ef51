use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use unicode_normalization::UnicodeNormalization;

use crate::Error;

/// Output of the slug tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlugOutput {
    pub input: String,
    pub slug: String,
    pub char_count: usize,
}

/// Best-effort mapping of arbitrary Unicode text to ASCII.
///
/// Text is NFC-normalized first so decomposed accents ("e" + U+0301) map the
/// same way as their precomposed form. Characters without a known ASCII
/// approximation are left to `deunicode`'s own policy.
pub fn transliterate(text: &str) -> String {
    let composed: String = text.nfc().collect();
    deunicode::deunicode(&composed)
}

/// Convert arbitrary text into a URL-safe slug.
///
/// 1. Transliterate to ASCII
/// 2. Lowercase
/// 3. Drop everything outside `[a-z0-9\s-]`
/// 4. Trim surrounding whitespace
/// 5. Replace whitespace runs with a single hyphen
/// 6. Collapse hyphen runs
/// 7. Trim edge hyphens
///
/// Never fails. Input with no letters or digits yields an empty string.
pub fn slugify(text: &str) -> String {
    static RE_INVALID: OnceLock<Regex> = OnceLock::new();
    let re_invalid = RE_INVALID.get_or_init(|| Regex::new(r"[^a-z0-9\s-]").unwrap());

    static RE_SPACES: OnceLock<Regex> = OnceLock::new();
    let re_spaces = RE_SPACES.get_or_init(|| Regex::new(r"\s+").unwrap());

    static RE_HYPHENS: OnceLock<Regex> = OnceLock::new();
    let re_hyphens = RE_HYPHENS.get_or_init(|| Regex::new(r"-+").unwrap());

    let lowered = transliterate(text).to_lowercase();
    let cleaned = re_invalid.replace_all(&lowered, "");
    let hyphenated = re_spaces.replace_all(cleaned.trim(), "-");
    let collapsed = re_hyphens.replace_all(&hyphenated, "-");

    let slug = collapsed.trim_matches('-').to_string();
    debug_assert!(is_slug(&slug), "{text:?} produced {slug:?}");

    slug
}

/// Run the slug tool on user input.
///
/// Blank input is rejected before any transformation happens.
pub fn slug_tool(input: &str) -> Result<SlugOutput, Error> {
    if input.trim().is_empty() {
        return Err(Error::EmptyInput);
    }

    let slug = slugify(input);
    let char_count = slug.chars().count();

    Ok(SlugOutput {
        input: input.to_string(),
        slug,
        char_count,
    })
}

/// Whether `value` satisfies the slug invariant (empty, or `[a-z0-9]+(-[a-z0-9]+)*`)
pub fn is_slug(value: &str) -> bool {
    value.is_empty()
        || value.split('-').all(|part| {
            !part.is_empty()
                && part
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        })
}
