// Async entry points: fetch through a JsonFetcher, then normalize.
use crate::config::SearchConfig;
use crate::fetcher::JsonFetcher;
use crate::model::{AffiliateData, DisplayEntry};
use crate::normalizer::{normalize_feed, normalize_search};
use crate::parser::parse_search;
use tracing::{info, warn};
use urlencoding::encode;

/// A search request as typed into the search box.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub term: String,
    pub media: Option<String>,
    pub entity: Option<String>,
}

impl SearchQuery {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            ..Self::default()
        }
    }

    fn query_string(&self) -> String {
        let mut query = format!("term={}", encode(&self.term));
        if let Some(media) = &self.media {
            query.push_str(&format!("&media={}", encode(media)));
        }
        if let Some(entity) = &self.entity {
            query.push_str(&format!("&entity={}", encode(entity)));
        }
        query
    }
}

/// URL of the search API call for `query`.
pub fn search_url(config: &SearchConfig, query: &SearchQuery) -> String {
    format!(
        "{}?{}&limit={}&country={}",
        config.search_url,
        query.query_string(),
        config.limit,
        encode(&config.country)
    )
}

/// URL of the store's own results page for `query` ("see all results").
pub fn storefront_search_url(config: &SearchConfig, query: &SearchQuery) -> String {
    format!("{}?{}", config.storefront_url, query.query_string())
}

fn lookup_url(config: &SearchConfig, collection_id: &str) -> String {
    format!(
        "{}?entity=song&limit={}&sort=popularity&id={}",
        config.lookup_url,
        config.lookup_limit,
        encode(collection_id)
    )
}

/// Fetches a feed and returns its entries, each passed through `transform`.
/// A failed fetch yields an empty list.
pub async fn get_simplified_feed<T>(
    fetcher: &dyn JsonFetcher,
    feed_url: &str,
    affiliate: Option<&AffiliateData>,
    transform: impl FnMut(DisplayEntry) -> T,
) -> Vec<T> {
    info!("Fetching feed {}", feed_url);
    match fetcher.fetch_json(feed_url).await {
        Ok(data) => normalize_feed(&data, affiliate, transform),
        Err(e) => {
            warn!("Feed fetch failed for {}: {}", feed_url, e);
            Vec::new()
        }
    }
}

/// Runs a search and returns at most `config.max_results` entries, one per album.
pub async fn search(
    fetcher: &dyn JsonFetcher,
    config: &SearchConfig,
    query: &SearchQuery,
    affiliate: Option<&AffiliateData>,
) -> Vec<DisplayEntry> {
    let url = search_url(config, query);
    info!("Searching for '{}'", query.term);
    match fetcher.fetch_json(&url).await {
        Ok(data) => normalize_search(&data, affiliate, config.max_results),
        Err(e) => {
            warn!("Search failed for '{}': {}", query.term, e);
            Vec::new()
        }
    }
}

/// Names of the most popular songs on an album. The lookup returns the album
/// itself first, which is skipped.
pub async fn lookup_top_songs(
    fetcher: &dyn JsonFetcher,
    config: &SearchConfig,
    collection_id: &str,
) -> Vec<String> {
    let url = lookup_url(config, collection_id);
    let data = match fetcher.fetch_json(&url).await {
        Ok(data) => data,
        Err(e) => {
            warn!("Lookup failed for {}: {}", collection_id, e);
            return Vec::new();
        }
    };

    match parse_search(&data) {
        Ok(parsed) => parsed
            .items
            .into_iter()
            .skip(1)
            .filter_map(|song| song.track_censored_name)
            .collect(),
        Err(e) => {
            warn!("Lookup for {} returned no songs: {}", collection_id, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FetchError;
    use serde_json::{Value, json};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Serves canned JSON by URL prefix and records what was requested.
    #[derive(Default)]
    struct FakeFetcher {
        responses: HashMap<&'static str, Value>,
        requested: Mutex<Vec<String>>,
    }

    impl FakeFetcher {
        fn with(mut self, prefix: &'static str, body: Value) -> Self {
            self.responses.insert(prefix, body);
            self
        }

        fn requested(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl JsonFetcher for FakeFetcher {
        async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
            self.requested.lock().unwrap().push(url.to_string());
            self.responses
                .iter()
                .find(|(prefix, _)| url.starts_with(**prefix))
                .map(|(_, body)| body.clone())
                .ok_or(FetchError::InvalidResponse(404))
        }
    }

    fn config() -> SearchConfig {
        SearchConfig {
            search_url: "http://api/search".to_string(),
            lookup_url: "http://api/lookup".to_string(),
            storefront_url: "http://store/search".to_string(),
            max_results: 2,
            ..SearchConfig::default()
        }
    }

    #[test]
    fn builds_search_urls() {
        let query = SearchQuery {
            term: "jack johnson".to_string(),
            media: Some("music".to_string()),
            entity: None,
        };
        assert_eq!(
            search_url(&config(), &query),
            "http://api/search?term=jack%20johnson&media=music&limit=50&country=US"
        );
        assert_eq!(
            storefront_search_url(&config(), &query),
            "http://store/search?term=jack%20johnson&media=music"
        );
    }

    #[tokio::test]
    async fn feed_is_fetched_and_normalized() {
        let fetcher = FakeFetcher::default().with(
            "http://feed",
            json!({ "feed": { "entry": [
                { "id": { "label": "http://x/album/id1" }, "im:name": { "label": "One" } },
                { "id": { "label": "http://x/album/id2" }, "im:name": { "label": "Two" } }
            ]}}),
        );
        let affiliate = AffiliateData::with_partner(1002).affiliate_token("tok");

        let entries = get_simplified_feed(&fetcher, "http://feed/top", Some(&affiliate), |e| e).await;
        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[1].url.as_deref(),
            Some("http://x/album/id2?partnerId=1002&affToken=tok")
        );
        assert_eq!(entries[1].content_title.as_deref(), Some("Two"));
    }

    #[tokio::test]
    async fn failed_fetch_yields_empty_results() {
        let fetcher = FakeFetcher::default();
        let feed = get_simplified_feed(&fetcher, "http://feed/top", None, |e| e).await;
        assert!(feed.is_empty());

        let results = search(&fetcher, &config(), &SearchQuery::new("x"), None).await;
        assert!(results.is_empty());

        assert!(lookup_top_songs(&fetcher, &config(), "1").await.is_empty());
        assert_eq!(fetcher.requested().len(), 3);
    }

    #[tokio::test]
    async fn search_caps_after_collapsing_albums() {
        let fetcher = FakeFetcher::default().with(
            "http://api/search",
            json!({ "resultCount": 4, "results": [
                { "collectionId": 1, "collectionCensoredName": "A", "trackCensoredName": "a1" },
                { "collectionId": 1, "collectionCensoredName": "A", "trackCensoredName": "a2" },
                { "trackCensoredName": "single" },
                { "collectionId": 2, "collectionCensoredName": "B" }
            ]}),
        );

        let results = search(&fetcher, &config(), &SearchQuery::new("band"), None).await;
        let titles: Vec<_> = results.into_iter().filter_map(|e| e.title).collect();
        assert_eq!(titles, vec!["A - a1", "single"]);
        assert!(fetcher.requested()[0].contains("term=band"));
    }

    #[tokio::test]
    async fn lookup_skips_the_album_row() {
        let fetcher = FakeFetcher::default().with(
            "http://api/lookup",
            json!({ "resultCount": 3, "results": [
                { "wrapperType": "collection", "collectionId": 7 },
                { "wrapperType": "track", "trackCensoredName": "Hit" },
                { "wrapperType": "track", "trackCensoredName": "B-Side" }
            ]}),
        );

        let songs = lookup_top_songs(&fetcher, &config(), "7").await;
        assert_eq!(songs, vec!["Hit", "B-Side"]);
        assert_eq!(
            fetcher.requested(),
            vec!["http://api/lookup?entity=song&limit=5&sort=popularity&id=7"]
        );
    }
}
