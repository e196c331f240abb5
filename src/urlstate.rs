//! URL state codec: the canonical, shareable encoding of a [`QuerySpec`].
//!
//! Canonical shape, field order fixed so observers can substring-match
//! without a full parse:
//!
//! ```text
//! /<query>?case=<bool>&regexp=<bool>&path=<substring>&
//! ```
//!
//! The query rides in the path segment (percent-encoded); the three toggles
//! are always present, even at their defaults, and every pair keeps its
//! trailing `&` separator. Decoding is total: missing or unknown parameters
//! fall back to defaults, never to an error.

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use url::form_urlencoded;

use crate::query::QuerySpec;

/// ASCII characters percent-encoded inside the query path segment. Anything
/// that would confuse the `?` split or a later percent-decode must be here.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?');

fn bool_str(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

/// Encode a spec into its canonical URL form.
#[must_use]
pub fn encode(spec: &QuerySpec) -> String {
    let mut qs = form_urlencoded::Serializer::new(String::new());
    qs.append_pair("case", bool_str(spec.case_sensitive));
    qs.append_pair("regexp", bool_str(spec.use_regexp));
    qs.append_pair("path", &spec.path_filter);

    format!(
        "/{}?{}&",
        utf8_percent_encode(&spec.query, SEGMENT),
        qs.finish()
    )
}

/// Decode a URL (path + query string) back into a spec.
///
/// Accepts partial and malformed input: absent flags default to `false`,
/// absent path to `""`, unknown parameters are ignored, and flag values
/// other than exactly `true` read as `false`.
#[must_use]
pub fn decode(url: &str) -> QuerySpec {
    let url = url.strip_prefix('/').unwrap_or(url);
    let (segment, params) = match url.split_once('?') {
        Some((s, p)) => (s, p),
        None => (url, ""),
    };

    let mut spec = QuerySpec {
        query: percent_decode_str(segment).decode_utf8_lossy().into_owned(),
        ..QuerySpec::default()
    };

    for (key, value) in form_urlencoded::parse(params.as_bytes()) {
        match key.as_ref() {
            "case" => spec.case_sensitive = value == "true",
            "regexp" => spec.use_regexp = value == "true",
            "path" => spec.path_filter = value.into_owned(),
            _ => {}
        }
    }

    spec
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_default_toggles() {
        let url = encode(&QuerySpec::literal("SimpleSearch"));
        assert_eq!(url, "/SimpleSearch?case=false&regexp=false&path=&");
    }

    #[test]
    fn test_encode_all_toggles_set() {
        let spec = QuerySpec {
            query: "PathFilter".to_string(),
            case_sensitive: true,
            use_regexp: true,
            path_filter: "Filter.cpp".to_string(),
        };
        assert_eq!(
            encode(&spec),
            "/PathFilter?case=true&regexp=true&path=Filter.cpp&"
        );
    }

    #[test]
    fn test_encoded_url_exposes_substrings() {
        // external observers pattern-match these substrings without parsing
        let spec = QuerySpec {
            path_filter: "Filter.cpp".to_string(),
            ..QuerySpec::literal("PathFilter")
        };
        let url = encode(&spec);
        assert!(url.contains("PathFilter"));
        assert!(url.contains("case=false"));
        assert!(url.contains("regexp=false"));
        assert!(url.contains("path=Filter.cpp&"));
    }

    #[test]
    fn test_query_segment_is_percent_encoded() {
        let url = encode(&QuerySpec::literal("a b?c&d"));
        assert_eq!(url, "/a%20b%3Fc%26d?case=false&regexp=false&path=&");
    }

    #[test]
    fn test_decode_full_form() {
        let spec = decode("/Simpl.Search?case=true&regexp=true&path=UITests&");
        assert_eq!(spec.query, "Simpl.Search");
        assert!(spec.case_sensitive);
        assert!(spec.use_regexp);
        assert_eq!(spec.path_filter, "UITests");
    }

    #[test]
    fn test_decode_missing_fields_take_defaults() {
        let spec = decode("/SimpleSearch");
        assert_eq!(spec.query, "SimpleSearch");
        assert!(!spec.case_sensitive);
        assert!(!spec.use_regexp);
        assert_eq!(spec.path_filter, "");
    }

    #[test]
    fn test_decode_empty_and_bare_slash() {
        assert_eq!(decode(""), QuerySpec::default());
        assert_eq!(decode("/"), QuerySpec::default());
        assert_eq!(decode("/?"), QuerySpec::default());
    }

    #[test]
    fn test_decode_non_true_flag_values_read_false() {
        let spec = decode("/q?case=TRUE&regexp=1&");
        assert!(!spec.case_sensitive);
        assert!(!spec.use_regexp);
    }

    #[test]
    fn test_decode_ignores_unknown_parameters() {
        let spec = decode("/q?case=true&utm_source=mail&regexp=false&");
        assert!(spec.case_sensitive);
        assert!(!spec.use_regexp);
    }

    #[test]
    fn test_decode_never_fails_on_garbage() {
        // total function: worst case is a spec full of odd strings
        let spec = decode("???&&&===");
        assert_eq!(spec.query, "");
        let spec = decode("/%ZZ%");
        assert_eq!(spec.query, "%ZZ%");
    }

    #[test]
    fn test_roundtrip_spot_checks() {
        for spec in [
            QuerySpec::default(),
            QuerySpec::literal("SimpleSearch"),
            QuerySpec {
                query: "Simpl.Search".to_string(),
                case_sensitive: false,
                use_regexp: true,
                path_filter: String::new(),
            },
            QuerySpec {
                query: "a+b c/d".to_string(),
                case_sensitive: true,
                use_regexp: false,
                path_filter: "dir with spaces/Filter.cpp".to_string(),
            },
        ] {
            assert_eq!(decode(&encode(&spec)), spec, "roundtrip failed for {spec:?}");
        }
    }
}
