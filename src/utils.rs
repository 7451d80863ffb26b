// Utility functions
use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

static TRAILING_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".*/id(\d+)(\?.*|$)").expect("valid id regex"));

/// Parses an RFC 3339 string into `DateTime<Utc>`, if possible.
pub fn parse_datetime(date_str: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(date_str)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Pulls the numeric id out of a store link such as
/// `https://itunes.apple.com/us/album/x/id123?uo=2`.
/// Links that don't match come back unchanged.
pub fn extract_trailing_id(link: &str) -> String {
    TRAILING_ID_REGEX.replace(link, "$1").into_owned()
}

/// Treats empty strings as missing.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
