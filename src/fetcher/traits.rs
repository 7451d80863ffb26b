use crate::model::FetchError;
use serde_json::Value;

/// Capability to GET a URL and hand back its parsed JSON body.
#[async_trait::async_trait]
pub trait JsonFetcher: Send + Sync {
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError>;
}
