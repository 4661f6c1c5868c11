// src/analysis/normalize.rs
// =============================================================================
// Turns a URL (or a bare path) into a comparable path key.
//
// Redirect lists mix relative paths ("/old-page/") and absolute URLs
// ("https://example.com/Old-Page") freely, so two rows only mean the same
// page if their *paths* match. The key therefore ignores scheme, host, query
// and fragment, drops one trailing slash, and lowercases what is left.
//
// The url crate percent-encodes the path, so it is decoded again before
// lowercasing: "/Über" and "/über" must land on the same key.
//
// Examples:
//   "https://Example.com/Blog/Post/?utm=x"  ->  "/blog/post"
//   "https://example.com/%C3%9Cber"         ->  "/über"
//   "/blog/post"                            ->  "/blog/post"
//   "http://example.com"                    ->  "/"
//   ""                                      ->  "/"
// =============================================================================

use percent_encoding::percent_decode_str;
use url::{ParseError, Url};

// Relative inputs are resolved against this root so the url crate can parse
// them; only the path of the result is ever used.
const RELATIVE_ROOT: &str = "http://relative.invalid/";

/// Normalizes `raw` to a lowercase path key that always starts with `/`.
pub fn normalize(raw: &str) -> String {
    let path = parse_path(raw.trim()).unwrap_or_else(|| "/".to_string());

    // Strip exactly one trailing slash, but keep the root as "/"
    let trimmed = match path.strip_suffix('/') {
        Some(rest) if !rest.is_empty() => rest,
        _ => path.as_str(),
    };

    trimmed.to_lowercase()
}

// Extracts the path component, or None when the input has no usable path
// (empty, unparseable, or a non-hierarchical URL such as "mailto:...").
fn parse_path(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }

    let parsed = match Url::parse(raw) {
        Ok(url) => url,
        Err(ParseError::RelativeUrlWithoutBase) => Url::parse(RELATIVE_ROOT).ok()?.join(raw).ok()?,
        Err(_) => return None,
    };

    if parsed.cannot_be_a_base() {
        return None;
    }

    Some(percent_decode_str(parsed.path()).decode_utf8_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_path_matches_absolute_url() {
        assert_eq!(normalize("/foo/Bar/"), "/foo/bar");
        assert_eq!(normalize("https://example.com/foo/Bar/"), "/foo/bar");
        assert_eq!(normalize("/foo/Bar/"), normalize("http://other.org/foo/bar"));
    }

    #[test]
    fn test_root_is_preserved() {
        assert_eq!(normalize("/"), "/");
        assert_eq!(normalize("https://example.com"), "/");
        assert_eq!(normalize("https://example.com/"), "/");
    }

    #[test]
    fn test_empty_and_garbage_become_root() {
        assert_eq!(normalize(""), "/");
        assert_eq!(normalize("   "), "/");
        assert_eq!(normalize("http://"), "/");
        assert_eq!(normalize("mailto:someone@example.com"), "/");
    }

    #[test]
    fn test_query_and_fragment_are_ignored() {
        assert_eq!(normalize("/page?ref=home#top"), "/page");
        assert_eq!(normalize("https://example.com/page/?a=1"), "/page");
    }

    #[test]
    fn test_relative_without_leading_slash_is_rooted() {
        assert_eq!(normalize("not-a-url"), "/not-a-url");
        assert_eq!(normalize("Docs/Intro"), "/docs/intro");
    }

    #[test]
    fn test_non_ascii_letter_case_does_not_matter() {
        assert_eq!(normalize("/Über"), normalize("/über"));
        assert_eq!(normalize("/Über"), "/über");
        assert_eq!(normalize("https://example.com/%C3%9Cber/"), "/über");
        assert_eq!(normalize("/STRASSE/Ärger"), normalize("http://example.com/strasse/ärger/"));
    }

    #[test]
    fn test_encoded_characters_are_decoded() {
        assert_eq!(normalize("/with space/"), "/with space");
        assert_eq!(normalize("/With%20Space"), "/with space");
    }

    #[test]
    fn test_dot_segments_and_scheme_relative_inputs_resolve() {
        assert_eq!(normalize("/a/../b"), "/b");
        assert_eq!(normalize("/a/./b/"), "/a/b");
        assert_eq!(normalize("//cdn.example.com/x"), "/x");
        assert_eq!(normalize("//cdn.example.com/X/"), normalize("https://example.com/x"));
    }

    #[test]
    fn test_only_one_trailing_slash_is_stripped() {
        assert_eq!(normalize("/a//"), "/a/");
    }

    #[test]
    fn test_scheme_host_case_and_slash_do_not_matter() {
        let variants = [
            "/Old-Page",
            "/old-page/",
            "http://example.com/old-page",
            "https://www.example.com/OLD-PAGE/",
            "HTTPS://EXAMPLE.COM/Old-Page",
        ];
        for v in variants {
            assert_eq!(normalize(v), "/old-page", "input: {}", v);
        }
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "",
            "/",
            "/Foo/Bar/",
            "https://example.com/A%20B/",
            "/with space/",
            "relative/Path",
            "https://example.com/a/../b",
            "/über/Straße",
            "/Über",
            "https://example.com/%C3%9Cber/",
            "?only=query",
            "#frag",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input: {:?}", input);
            assert!(once.starts_with('/'));
        }
    }
}
