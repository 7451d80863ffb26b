// Core structs: AffiliateData, DisplayEntry, error types
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Identifier of an affiliate network. The remote side sends it either as a
/// JSON string or as a number, so both deserialize into the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawPartnerId", into = "String")]
pub struct PartnerId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPartnerId {
    Text(String),
    Number(i64),
}

impl From<RawPartnerId> for PartnerId {
    fn from(raw: RawPartnerId) -> Self {
        match raw {
            RawPartnerId::Text(s) => PartnerId(s),
            RawPartnerId::Number(n) => PartnerId(n.to_string()),
        }
    }
}

impl From<PartnerId> for String {
    fn from(id: PartnerId) -> Self {
        id.0
    }
}

impl From<&str> for PartnerId {
    fn from(s: &str) -> Self {
        PartnerId(s.to_string())
    }
}

impl From<String> for PartnerId {
    fn from(s: String) -> Self {
        PartnerId(s)
    }
}

impl From<i32> for PartnerId {
    fn from(n: i32) -> Self {
        PartnerId(n.to_string())
    }
}

impl PartnerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Empty and zero ids mean "no affiliation".
    pub fn is_active(&self) -> bool {
        !self.0.is_empty() && self.0 != "0"
    }
}

impl fmt::Display for PartnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Affiliate metadata attached to outbound links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AffiliateData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<PartnerId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliate_token: Option<String>,
}

impl AffiliateData {
    pub fn with_partner(partner_id: impl Into<PartnerId>) -> Self {
        Self {
            partner_id: Some(partner_id.into()),
            ..Self::default()
        }
    }

    pub fn url_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.url_prefix = Some(prefix.into());
        self
    }

    pub fn affiliate_token(mut self, token: impl Into<String>) -> Self {
        self.affiliate_token = Some(token.into());
        self
    }

    /// The partner id, if it is set and not falsy.
    pub fn active_partner(&self) -> Option<&PartnerId> {
        self.partner_id.as_ref().filter(|id| id.is_active())
    }
}

/// UI-ready record produced from one feed entry or one search result.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artwork_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    HttpError(String),
    #[error("request timed out")]
    Timeout,
    #[error("unexpected response status {0}")]
    InvalidResponse(u16),
    #[error("response body is not valid JSON: {0}")]
    DecodeError(String),
}

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("entry {index} could not be parsed: {reason}")]
    InvalidEntry { index: usize, reason: String },
    #[error("missing field `{0}`")]
    MissingField(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}
