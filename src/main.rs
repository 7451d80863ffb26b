use catalog_linker::catalog::{self, SearchQuery};
use catalog_linker::config::{AppConfig, load_config};
use catalog_linker::fetcher::HttpFetcher;
use catalog_linker::model::DisplayEntry;
use futures::future::join_all;
use std::env;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config_path = env::args().nth(1).unwrap_or_else(|| "config.json".to_string());
    let config: AppConfig = match load_config(&config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    let fetcher = match HttpFetcher::new(&config.http) {
        Ok(f) => f,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            return;
        }
    };

    let affiliate = Some(&config.affiliate);
    let query = config.search_term.as_deref().map(SearchQuery::new);

    // Feed and search don't depend on each other
    let feed = catalog::get_simplified_feed(&fetcher, &config.feed_url, affiliate, |e| e);
    let results = async {
        match &query {
            Some(q) => catalog::search(&fetcher, &config.search, q, affiliate).await,
            None => Vec::new(),
        }
    };
    let (feed, results) = futures::join!(feed, results);

    info!("Feed: {} entries", feed.len());
    let (fetcher_ref, search_cfg) = (&fetcher, &config.search);
    let song_lists = join_all(feed.iter().map(|entry| async move {
        match &entry.id {
            Some(id) => catalog::lookup_top_songs(fetcher_ref, search_cfg, id).await,
            None => Vec::new(),
        }
    }))
    .await;
    for (entry, songs) in feed.iter().zip(song_lists) {
        render(entry);
        if !songs.is_empty() {
            info!("  top songs: {}", songs.join(", "));
        }
    }

    if let Some(q) = &query {
        info!("Search '{}': {} results", q.term, results.len());
        for entry in &results {
            render(entry);
        }
        info!(
            "More results: {}",
            catalog::storefront_search_url(&config.search, q)
        );
    }
}

/// Prints one entry as JSON, the shape a page script would consume.
fn render(entry: &DisplayEntry) {
    match serde_json::to_string(entry) {
        Ok(json) => println!("{}", json),
        Err(e) => warn!("Failed to serialize entry: {}", e),
    }
}
