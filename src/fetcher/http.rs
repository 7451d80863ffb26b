use crate::config::HttpConfig;
use crate::fetcher::JsonFetcher;
use crate::model::FetchError;

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &HttpConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| FetchError::HttpError(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl JsonFetcher for HttpFetcher {
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::HttpError(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::InvalidResponse(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::DecodeError(e.to_string()))
    }
}
