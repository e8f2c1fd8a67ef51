//! Rewriting of internal `cday.kambria.io` redirect URLs.
//!
//! A source URL has the form `https://cday.kambria.io/<prefix>-<content>`
//! where `<prefix>` is `knth` or `cdcg`. The whole `<content>` remainder,
//! slashes and query string included, is slugified into a single path segment
//! on the prefix's own `cday.global` subdomain.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::slug::slugify;
use crate::Error;

/// Anchored source URL pattern. Case-sensitive on scheme and host.
///
/// The content may not span lines: `\r`, `\n`, U+2028 and U+2029 are all
/// line terminators here.
pub const SOURCE_PATTERN: &str =
    r"^https://cday\.kambria\.io/(knth|cdcg)-([^\r\n\x{2028}\x{2029}]*)$";

/// Domain every destination URL is built on
pub const DESTINATION_DOMAIN: &str = "cday.global";

/// Routing token that selects the destination subdomain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrefixTag {
    Knth,
    Cdcg,
}

impl PrefixTag {
    pub const ALL: [PrefixTag; 2] = [PrefixTag::Knth, PrefixTag::Cdcg];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrefixTag::Knth => "knth",
            PrefixTag::Cdcg => "cdcg",
        }
    }

    /// Host of the destination site for this prefix, e.g. `knth.cday.global`
    pub fn destination_host(&self) -> String {
        format!("{}.{}", self.as_str(), DESTINATION_DOMAIN)
    }
}

impl fmt::Display for PrefixTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrefixTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "knth" => Ok(PrefixTag::Knth),
            "cdcg" => Ok(PrefixTag::Cdcg),
            _ => Err(Error::InvalidUrlFormat),
        }
    }
}

/// A successful URL rewrite
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    /// The source URL, with surrounding whitespace removed
    pub source: String,
    pub prefix: PrefixTag,
    /// Everything after `<prefix>-`, verbatim
    pub content: String,
    pub slug: String,
    pub destination: String,
}

fn source_regex() -> &'static Regex {
    static RE_SOURCE: OnceLock<Regex> = OnceLock::new();
    RE_SOURCE.get_or_init(|| Regex::new(SOURCE_PATTERN).unwrap())
}

/// Build the destination URL for a prefix and an already slugified segment
pub fn destination_url(prefix: PrefixTag, slug: &str) -> String {
    format!("https://{}/{}", prefix.destination_host(), slug)
}

/// Rewrite a `cday.kambria.io` URL into its `cday.global` form.
///
/// Surrounding whitespace and byte order marks are ignored. Content that slugifies to nothing
/// (e.g. `knth-!!!`) is accepted and yields an empty final path segment.
///
/// # Errors
///
/// [`Error::InvalidUrlFormat`] when the trimmed input does not match
/// [`SOURCE_PATTERN`] in full.
pub fn convert_url(url: &str) -> Result<Conversion, Error> {
    let source = url.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');

    let captures = source_regex()
        .captures(source)
        .ok_or(Error::InvalidUrlFormat)?;

    let prefix: PrefixTag = captures[1].parse()?;
    let content = captures[2].to_string();
    let slug = slugify(&content);
    let destination = destination_url(prefix, &slug);

    Ok(Conversion {
        source: source.to_string(),
        prefix,
        content,
        slug,
        destination,
    })
}

/// Same as [`convert_url`], returning only the destination URL
pub fn convert_url_string(url: &str) -> Result<String, Error> {
    convert_url(url).map(|conversion| conversion.destination)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_destination(url: &str) -> bool {
        Regex::new(r"^https://(knth|cdcg)\.cday\.global/.*$")
            .unwrap()
            .is_match(url)
    }

    // ============================================================================
    // convert_url success tests
    // ============================================================================

    #[test]
    fn test_convert_url_cdcg_news() {
        assert_eq!(
            convert_url_string("https://cday.kambria.io/cdcg-news").unwrap(),
            "https://cdcg.cday.global/news"
        );
    }

    #[test]
    fn test_convert_url_knth_tin_tuc() {
        assert_eq!(
            convert_url_string("https://cday.kambria.io/knth-tin-tuc").unwrap(),
            "https://knth.cday.global/tin-tuc"
        );
    }

    #[test]
    fn test_convert_url_fields() {
        let conversion = convert_url("https://cday.kambria.io/knth-Tin Tức Mới").unwrap();
        assert_eq!(conversion.prefix, PrefixTag::Knth);
        assert_eq!(conversion.content, "Tin Tức Mới");
        assert_eq!(conversion.slug, "tin-tuc-moi");
        assert_eq!(conversion.destination, "https://knth.cday.global/tin-tuc-moi");
    }

    #[test]
    fn test_convert_url_trims_whitespace() {
        let conversion = convert_url("  https://cday.kambria.io/cdcg-news \n").unwrap();
        assert_eq!(conversion.source, "https://cday.kambria.io/cdcg-news");
        assert_eq!(conversion.destination, "https://cdcg.cday.global/news");
    }

    #[test]
    fn test_convert_url_strips_byte_order_mark() {
        let conversion = convert_url("\u{FEFF}https://cday.kambria.io/knth-news\u{FEFF}").unwrap();
        assert_eq!(conversion.source, "https://cday.kambria.io/knth-news");
        assert_eq!(conversion.destination, "https://knth.cday.global/news");
    }

    #[test]
    fn test_convert_url_flattens_path_segments() {
        let conversion = convert_url("https://cday.kambria.io/cdcg-events/2024/hanoi").unwrap();
        assert_eq!(conversion.content, "events/2024/hanoi");
        assert_eq!(conversion.destination, "https://cdcg.cday.global/events2024hanoi");
    }

    #[test]
    fn test_convert_url_keeps_query_in_content() {
        let conversion = convert_url("https://cday.kambria.io/knth-news?lang=vi").unwrap();
        assert_eq!(conversion.content, "news?lang=vi");
        assert_eq!(conversion.slug, "newslangvi");
    }

    #[test]
    fn test_convert_url_empty_content() {
        let conversion = convert_url("https://cday.kambria.io/knth-").unwrap();
        assert_eq!(conversion.content, "");
        assert_eq!(conversion.destination, "https://knth.cday.global/");
    }

    #[test]
    fn test_convert_url_punctuation_content_yields_empty_segment() {
        assert_eq!(
            convert_url_string("https://cday.kambria.io/cdcg-!!!").unwrap(),
            "https://cdcg.cday.global/"
        );
    }

    #[test]
    fn test_convert_url_prefix_repeated_in_content() {
        let conversion = convert_url("https://cday.kambria.io/knth-cdcg-news").unwrap();
        assert_eq!(conversion.prefix, PrefixTag::Knth);
        assert_eq!(conversion.destination, "https://knth.cday.global/cdcg-news");
    }

    // ============================================================================
    // convert_url rejection tests
    // ============================================================================

    #[test]
    fn test_convert_url_rejects_other_domain() {
        assert_eq!(
            convert_url("https://example.com/foo"),
            Err(Error::InvalidUrlFormat)
        );
    }

    #[test]
    fn test_convert_url_rejects_bad_inputs() {
        let inputs = [
            "",
            "   ",
            "http://cday.kambria.io/knth-news",
            "HTTPS://cday.kambria.io/knth-news",
            "https://CDAY.kambria.io/knth-news",
            "https://cday.kambria.io/KNTH-news",
            "https://cday.kambria.io/knth_news",
            "https://cday.kambria.io/knthnews",
            "https://cday.kambria.io/knth",
            "https://cday.kambria.io/other-news",
            "https://cday.kambria.io/",
            "https://cdayXkambria.io/knth-news",
            "https://cday.kambria.io.evil.com/knth-news",
            "see https://cday.kambria.io/knth-news",
            "https://cday.kambria.io/knth-news\nsecond line",
            "https://cday.kambria.io/knth-news\rmore",
            "https://cday.kambria.io/knth-news\r\nmore",
            "https://cday.kambria.io/knth-news\u{2028}more",
            "https://cday.kambria.io/cdcg-news\u{2029}more",
        ];

        for input in inputs {
            assert_eq!(
                convert_url(input),
                Err(Error::InvalidUrlFormat),
                "input: {input:?}"
            );
        }
    }

    #[test]
    fn test_convert_url_results_match_destination_pattern() {
        let inputs = [
            "https://cday.kambria.io/knth-",
            "https://cday.kambria.io/cdcg-Café Olé",
            "https://cday.kambria.io/knth-a/b/c?d=e#f",
            "https://cday.kambria.io/cdcg-こんにちは",
        ];

        for input in inputs {
            let destination = convert_url_string(input).unwrap();
            assert!(is_destination(&destination), "{input} -> {destination}");
        }
    }

    // ============================================================================
    // PrefixTag tests
    // ============================================================================

    #[test]
    fn test_prefix_tag_round_trip() {
        for prefix in PrefixTag::ALL {
            assert_eq!(prefix.as_str().parse::<PrefixTag>().unwrap(), prefix);
        }
    }

    #[test]
    fn test_prefix_tag_destination_host() {
        assert_eq!(PrefixTag::Knth.destination_host(), "knth.cday.global");
        assert_eq!(PrefixTag::Cdcg.destination_host(), "cdcg.cday.global");
    }

    #[test]
    fn test_prefix_tag_rejects_unknown() {
        assert!("KNTH".parse::<PrefixTag>().is_err());
        assert!("".parse::<PrefixTag>().is_err());
    }
}
