use crate::model::{AffiliateData, ConfigError};
use serde::Deserialize;
use std::fs;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub search_url: String,
    pub lookup_url: String,
    pub storefront_url: String,
    pub country: String,
    /// Number of results requested from the search endpoint.
    pub limit: u32,
    /// Number of entries kept after collapsing albums.
    pub max_results: usize,
    /// Number of songs requested per album lookup (the album itself included).
    pub lookup_limit: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            search_url: "https://itunes.apple.com/search".to_string(),
            lookup_url: "https://itunes.apple.com/lookup".to_string(),
            storefront_url: "https://itunes.apple.com/WebObjects/MZSearch.woa/wa/search".to_string(),
            country: "US".to_string(),
            limit: 50,
            max_results: 10,
            lookup_limit: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: "catalog-linker/0.1".to_string(),
            timeout_seconds: 10,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub affiliate: AffiliateData,
    pub feed_url: String,
    #[serde(default)]
    pub search_term: Option<String>,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = serde_json::from_str(content)?;
    Ok(config)
}
