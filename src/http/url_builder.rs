//! Pure assembly of ZAP API request URLs.
//!
//! A request URL has the shape
//! `http://<host>:<port>/<format>/<component>/<kind>/<name>?<query>`,
//! where the path segments are caller-controlled identifiers taken
//! verbatim and the query carries the percent-encoded parameters plus,
//! when configured, the API key. No network I/O happens here.

use std::collections::BTreeMap;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

/// Query parameter name the daemon reads the API key from.
pub(crate) const API_KEY_PARAM: &str = "apikey";

/// Escapes everything outside the RFC 3986 unreserved set
/// (`A-Z a-z 0-9 - _ . ~`).
const QUERY_ENCODE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encodes a single query key or value.
pub(crate) fn encode(raw: &str) -> String {
    utf8_percent_encode(raw, QUERY_ENCODE).to_string()
}

/// Builds the absolute request URL for one API call.
///
/// `params` entries are emitted in their map order, which is deterministic
/// per call; the `apikey` pair is appended last when `api_key` is
/// non-blank. The trailing `&` matches what the daemon has always been
/// sent and is tolerated on the server side.
///
/// `base` is validated at client construction, so this cannot fail.
pub(crate) fn build_api_url(
    base: &Url,
    api_key: &str,
    format: &str,
    component: &str,
    operation_kind: &str,
    operation_name: &str,
    params: &BTreeMap<String, String>,
) -> Url {
    let mut url = base.clone();
    url.set_path(&format!(
        "{format}/{component}/{operation_kind}/{operation_name}"
    ));

    let mut query = String::new();
    for (key, value) in params {
        query.push_str(&encode(key));
        query.push('=');
        query.push_str(&encode(value));
        query.push('&');
    }
    if !api_key.trim().is_empty() {
        query.push_str(&encode(API_KEY_PARAM));
        query.push('=');
        query.push_str(&encode(api_key));
        query.push('&');
    }

    url.set_query(if query.is_empty() { None } else { Some(&query) });
    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    fn base() -> Url {
        Url::parse("http://zap:80/").unwrap()
    }

    fn params(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn path_concatenates_format_and_operation_segments() {
        let url = build_api_url(
            &base(),
            "k1",
            "xml",
            "core",
            "view",
            "alerts",
            &BTreeMap::new(),
        );
        assert_eq!(url.path(), "/xml/core/view/alerts");
        assert_eq!(url.host_str(), Some("zap"));
        assert_eq!(url.scheme(), "http");
    }

    #[test]
    fn query_contains_one_pair_per_param_plus_apikey() {
        let url = build_api_url(
            &base(),
            "k1",
            "xml",
            "core",
            "view",
            "alerts",
            &params(&[("baseurl", "http://x"), ("start", "0"), ("count", "10")]),
        );
        let query = url.query().unwrap();
        let pairs: Vec<&str> = query.trim_end_matches('&').split('&').collect();
        assert_eq!(pairs.len(), 4);
        assert!(pairs.contains(&"baseurl=http%3A%2F%2Fx"));
        assert!(pairs.contains(&"start=0"));
        assert!(pairs.contains(&"count=10"));
        assert!(pairs.contains(&"apikey=k1"));
    }

    #[test]
    fn blank_api_key_is_omitted() {
        let url = build_api_url(
            &base(),
            "  ",
            "xml",
            "core",
            "view",
            "version",
            &BTreeMap::new(),
        );
        assert_eq!(url.query(), None);
    }

    #[test]
    fn reserved_and_unicode_values_round_trip() {
        let original = "a&b=c?d/é 漢";
        let encoded = encode(original);
        assert!(!encoded.contains('&'));
        assert!(!encoded.contains('='));
        assert!(!encoded.contains(' '));

        let decoded = percent_decode_str(&encoded).decode_utf8().unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn encoded_pairs_survive_url_construction() {
        let url = build_api_url(
            &base(),
            "secret key&",
            "xml",
            "search",
            "view",
            "urlsByUrlRegex",
            &params(&[("regex", "a=b&c")]),
        );
        let query = url.query().unwrap();
        assert!(query.contains("regex=a%3Db%26c"));
        assert!(query.contains("apikey=secret%20key%26"));
    }
}
