//! URL assembly and response-body helpers shared by every endpoint.

#[cfg(feature = "test-mode")]
use std::env;

use url::form_urlencoded::byte_serialize;

use crate::core::params::is_unfiltered;

/// Joins a base URL, path parts and a query string.
///
/// Exactly one `/` separates `prefix` from the path. A single leading `/` is
/// stripped from each part before the parts are concatenated as-is. A non-empty
/// `query_string` is appended after a `?`, which is only added when the caller
/// did not supply one.
///
/// No escaping is performed; parts and query must already be URL-safe.
///
/// ```
/// use newsapi_rs::core::net::url_join;
/// assert_eq!(url_join("https://x.com", &["a", "/b"], "k=v"), "https://x.com/ab?k=v");
/// ```
pub fn url_join(prefix: &str, parts: &[&str], query_string: &str) -> String {
    let mut out = String::from(prefix);
    if !out.ends_with('/') {
        out.push('/');
    }
    for part in parts {
        out.push_str(part.strip_prefix('/').unwrap_or(part));
    }
    if !query_string.is_empty() {
        if !query_string.starts_with('?') {
            out.push('?');
        }
        out.push_str(query_string);
    }
    out
}

/// Percent-encodes a single query value.
pub(crate) fn encode_value(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}

/// Serializes parameters into `name=value` pairs joined by `&`.
///
/// Pairs whose value is `None`, empty or [`ALL`](crate::ALL) are skipped. Values are
/// percent-encoded; names are written verbatim.
///
/// ```
/// use newsapi_rs::{ALL, core::net::encode_query};
/// let q = encode_query([("country", Some(ALL)), ("category", Some("general"))]);
/// assert_eq!(q, "category=general");
/// ```
pub fn encode_query<I, K, V>(params: I) -> String
where
    I: IntoIterator<Item = (K, Option<V>)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    params
        .into_iter()
        .filter_map(|(name, value)| {
            let value: Option<&str> = value.as_ref().map(|v| v.as_ref());
            match value {
                Some(v) if !is_unfiltered(value) => {
                    Some(format!("{}={}", name.as_ref(), encode_value(v)))
                }
                _ => None,
            }
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Replaces the value of the `apikey` query parameter so URLs can be logged.
pub(crate) fn redact_api_key(url: &str) -> String {
    let Some((head, query)) = url.split_once('?') else {
        return url.to_string();
    };
    let query = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((name, _)) if name.eq_ignore_ascii_case("apikey") => format!("{name}=***"),
            _ => pair.to_string(),
        })
        .collect::<Vec<_>>()
        .join("&");
    format!("{head}?{query}")
}

/// Read the response body as text.
/// In `test-mode`, if `NEWSAPI_RECORD=1`, the body is saved as a fixture.
pub(crate) fn get_text(
    resp: reqwest::blocking::Response,
    _endpoint: &str,
    _tag: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text()?;

    #[cfg(feature = "test-mode")]
    {
        if env::var("NEWSAPI_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_endpoint, _tag, "json", &text)
        {
            tracing::warn!("NEWSAPI_RECORD: failed to write fixture for {_endpoint}: {e}");
        }
    }

    Ok(text)
}
