// Query-string and host helpers for store URLs
use std::collections::HashMap;

/// Query parameters of a URL. A pair without `=` maps to `None`.
pub type QueryParamMap = HashMap<String, Option<String>>;

/// Splits the query string of `url` into a map. Values are percent-decoded,
/// keys are kept verbatim and the last duplicate wins.
pub fn parse_query_params(url: &str) -> QueryParamMap {
    let mut result = QueryParamMap::new();
    let query = match url.split_once('?') {
        Some((_, q)) if !q.is_empty() => q,
        _ => return result,
    };

    for pair in query.split('&') {
        match pair.split_once('=') {
            Some((key, value)) => {
                result.insert(key.to_string(), Some(decode_component(value)));
            }
            None => {
                result.insert(pair.to_string(), None);
            }
        }
    }
    result
}

/// Percent-decodes a query value; malformed escapes leave the raw text.
fn decode_component(value: &str) -> String {
    urlencoding::decode(value)
        .map(|v| v.into_owned())
        .unwrap_or_else(|_| value.to_string())
}

/// Returns the host part of a URL.
///
/// Best effort only: the text between `://` and the next `/`. Credentials and
/// ports are not stripped.
pub fn extract_host(url: &str) -> Option<&str> {
    if url.is_empty() {
        return None;
    }
    let start = url.find("://").map(|i| i + 3).unwrap_or(0);
    let rest = &url[start..];
    let end = rest.find('/').unwrap_or(rest.len());
    Some(&rest[..end])
}
