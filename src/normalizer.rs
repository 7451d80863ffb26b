use crate::affiliate::rewrite_url;
use crate::model::{AffiliateData, DisplayEntry};
use crate::parser::{RawFeedEntry, RawSearchItem, parse_feed, parse_search};
use crate::utils::{extract_trailing_id, non_empty, parse_datetime};
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Normalizes every entry of a feed response and passes each one through
/// `transform`. Entries that fail to parse are logged and left out.
pub fn normalize_feed<T>(
    response: &Value,
    affiliate: Option<&AffiliateData>,
    mut transform: impl FnMut(DisplayEntry) -> T,
) -> Vec<T> {
    let parsed = match parse_feed(response) {
        Ok(p) => p,
        Err(e) => {
            warn!("No entries in feed: {}", e);
            return Vec::new();
        }
    };
    debug!(
        "Feed parsed: {} entries, {} skipped",
        parsed.items.len(),
        parsed.skipped.len()
    );

    parsed
        .items
        .iter()
        .map(|raw| transform(normalize_feed_entry(raw, affiliate)))
        .collect()
}

pub fn normalize_feed_entry(raw: &RawFeedEntry, affiliate: Option<&AffiliateData>) -> DisplayEntry {
    let link = raw.link();
    DisplayEntry {
        url: link.map(|l| rewrite_url(l, affiliate)),
        id: link.map(extract_trailing_id),
        artwork_url: raw.artwork().map(str::to_string),
        title: raw.title().map(str::to_string),
        content_title: raw.name().map(str::to_string),
        artist_name: raw.artist_name().map(str::to_string),
        artist_id: raw.artist_link().map(extract_trailing_id),
        artist_url: None,
        release_date: raw.release_date().and_then(parse_datetime),
    }
}

/// Normalizes a search response: one entry per collection, first seen wins,
/// at most `limit` entries.
pub fn normalize_search(
    response: &Value,
    affiliate: Option<&AffiliateData>,
    limit: usize,
) -> Vec<DisplayEntry> {
    let parsed = match parse_search(response) {
        Ok(p) => p,
        Err(e) => {
            warn!("No results in search response: {}", e);
            return Vec::new();
        }
    };

    dedup_by_collection(parsed.items)
        .iter()
        .take(limit)
        .map(|item| normalize_search_result(item, affiliate))
        .collect()
}

/// Keeps the first item of each collection. Items without a collection id
/// are always kept.
pub fn dedup_by_collection(items: Vec<RawSearchItem>) -> Vec<RawSearchItem> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| match item.collection_id {
            Some(id) => seen.insert(id),
            None => true,
        })
        .collect()
}

pub fn normalize_search_result(
    item: &RawSearchItem,
    affiliate: Option<&AffiliateData>,
) -> DisplayEntry {
    let link = non_empty(item.collection_view_url.as_deref())
        .or_else(|| non_empty(item.track_view_url.as_deref()));

    DisplayEntry {
        url: link.map(|l| rewrite_url(l, affiliate)),
        id: item.collection_id.or(item.track_id).map(|id| id.to_string()),
        artwork_url: item.artwork_url_100.clone(),
        title: search_title(item),
        artist_name: item.artist_name.clone(),
        artist_url: item.artist_view_url.clone(),
        ..DisplayEntry::default()
    }
}

fn search_title(item: &RawSearchItem) -> Option<String> {
    match (
        item.collection_censored_name.as_deref(),
        item.track_censored_name.as_deref(),
    ) {
        (Some(collection), Some(track)) => Some(format!("{collection} - {track}")),
        (Some(collection), None) => Some(collection.to_string()),
        (None, track) => track.map(str::to_string),
    }
}
