// Parser module: turns raw JSON payloads into typed records, one item at a time.

pub mod feed_parser;
pub mod search_parser;

pub use feed_parser::{RawFeedEntry, parse_feed};
pub use search_parser::{RawSearchItem, parse_search};

use crate::model::ParserError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

/// Items that parsed, plus the reasons the others did not.
#[derive(Debug)]
pub struct Parsed<T> {
    pub items: Vec<T>,
    pub skipped: Vec<ParserError>,
}

/// Deserializes every element on its own so that one corrupt item only drops
/// that item.
fn parse_each<T: DeserializeOwned>(values: &[Value]) -> Parsed<T> {
    let mut items = Vec::with_capacity(values.len());
    let mut skipped = Vec::new();

    for (index, value) in values.iter().enumerate() {
        match T::deserialize(value) {
            Ok(item) => items.push(item),
            Err(e) => {
                let err = ParserError::InvalidEntry {
                    index,
                    reason: e.to_string(),
                };
                warn!("Skipping item: {}", err);
                skipped.push(err);
            }
        }
    }

    Parsed { items, skipped }
}
