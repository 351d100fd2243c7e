//! Canonical request construction for AWS Signature Version 4.
//!
//! The canonical request is the deterministic text the signature is computed
//! over:
//!
//! ```text
//! HTTPRequestMethod\n
//! CanonicalURI\n
//! CanonicalQueryString\n
//! CanonicalHeaders\n\n
//! SignedHeaders\n
//! HashedPayload
//! ```
//!
//! On the signing side, the signed-header set is chosen here: every header
//! present on the outgoing request is signed, except the handful of hop or
//! client metadata headers that intermediaries rewrite.

use std::collections::BTreeMap;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// The set of characters that must be percent-encoded in URI path segments.
///
/// Per the SigV4 spec, everything except unreserved characters
/// (A-Z, a-z, 0-9, `-`, `_`, `.`, `~`) is encoded. Slashes between path
/// segments are preserved.
const URI_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Headers never included in the signed set.
///
/// `authorization` carries the signature itself; the rest are rewritten by
/// proxies or SDK layers between signing and transmission, so signing them
/// would invalidate the signature in flight.
const UNSIGNABLE_HEADERS: &[&str] = &["authorization", "user-agent", "expect", "x-amzn-trace-id"];

/// Select and canonicalize the headers to sign from a request's header map.
///
/// Header names are lowercased, values trimmed with internal whitespace runs
/// collapsed, duplicates merged with commas, and the result sorted by name.
/// Headers in [`UNSIGNABLE_HEADERS`] and headers with non-UTF-8 values are
/// skipped.
#[must_use]
pub fn signable_headers(headers: &http::HeaderMap) -> Vec<(String, String)> {
    let mut canonical: BTreeMap<String, String> = BTreeMap::new();

    for (name, value) in headers {
        let name = name.as_str().to_lowercase();
        if UNSIGNABLE_HEADERS.contains(&name.as_str()) {
            continue;
        }
        let Ok(value) = value.to_str() else {
            continue;
        };
        let value = collapse_whitespace(value.trim());
        canonical
            .entry(name)
            .and_modify(|existing| {
                existing.push(',');
                existing.push_str(&value);
            })
            .or_insert(value);
    }

    canonical.into_iter().collect()
}

/// Build the full canonical request string.
///
/// `headers` must already be canonicalized and sorted (see
/// [`signable_headers`]).
///
/// # Examples
///
/// ```
/// use stowage_auth::canonical::build_canonical_request;
///
/// let canonical = build_canonical_request(
///     "GET",
///     "/test.txt",
///     "",
///     &[("host".to_owned(), "examplebucket.s3.amazonaws.com".to_owned())],
///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
/// );
/// assert!(canonical.starts_with("GET\n/test.txt\n"));
/// ```
#[must_use]
pub fn build_canonical_request(
    method: &str,
    path: &str,
    query: &str,
    headers: &[(String, String)],
    payload_hash: &str,
) -> String {
    let canonical_uri = build_canonical_uri(path);
    let canonical_query = build_canonical_query_string(query);
    let canonical_headers = headers
        .iter()
        .map(|(name, value)| format!("{name}:{value}"))
        .collect::<Vec<_>>()
        .join("\n");
    let signed_headers = signed_headers_string(headers);

    format!(
        "{method}\n{canonical_uri}\n{canonical_query}\n{canonical_headers}\n\n{signed_headers}\n{payload_hash}"
    )
}

/// Build the semicolon-separated signed-headers list for a canonical header
/// set.
#[must_use]
pub fn signed_headers_string(headers: &[(String, String)]) -> String {
    headers
        .iter()
        .map(|(name, _)| name.as_str())
        .collect::<Vec<_>>()
        .join(";")
}

/// Build the canonical URI by percent-encoding each path segment.
///
/// Empty paths normalize to `/`. Segments are decoded first so an
/// already-encoded path produces the same canonical form as a raw one.
#[must_use]
pub fn build_canonical_uri(path: &str) -> String {
    if path.is_empty() || path == "/" {
        return "/".to_owned();
    }

    path.split('/')
        .map(|segment| {
            let decoded = percent_decode_str(segment).decode_utf8_lossy();
            utf8_percent_encode(&decoded, URI_ENCODE_SET).to_string()
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Build the canonical query string by sorting parameters by key, then value.
///
/// Parameter values are taken as they appear in the request URI; the encoding
/// the client chose is the encoding that gets signed.
#[must_use]
pub fn build_canonical_query_string(query: &str) -> String {
    if query.is_empty() {
        return String::new();
    }

    let mut params: Vec<(&str, &str)> = query
        .split('&')
        .filter(|s| !s.is_empty())
        .map(|param| param.split_once('=').unwrap_or((param, "")))
        .collect();

    params.sort_unstable();

    params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Collapse consecutive whitespace characters to a single space.
fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_was_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                result.push(' ');
                prev_was_space = true;
            }
        } else {
            result.push(ch);
            prev_was_space = false;
        }
    }
    result
}
