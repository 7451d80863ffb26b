// Typed view of search and lookup results
use crate::model::ParserError;
use crate::parser::{Parsed, parse_each};
use serde::Deserialize;
use serde_json::Value;

/// One item of a search or lookup response.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawSearchItem {
    pub collection_id: Option<i64>,
    pub track_id: Option<i64>,
    pub collection_view_url: Option<String>,
    pub track_view_url: Option<String>,
    pub collection_censored_name: Option<String>,
    pub track_censored_name: Option<String>,
    pub artist_name: Option<String>,
    pub artist_view_url: Option<String>,
    #[serde(rename = "artworkUrl100")]
    pub artwork_url_100: Option<String>,
}

/// Parses the flat `results` array shared by the search and lookup endpoints.
pub fn parse_search(response: &Value) -> Result<Parsed<RawSearchItem>, ParserError> {
    let results = response
        .get("results")
        .and_then(Value::as_array)
        .ok_or_else(|| ParserError::MissingField("results".to_string()))?;
    Ok(parse_each(results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_camel_case_fields() {
        let response = json!({ "resultCount": 1, "results": [{
            "wrapperType": "track",
            "collectionId": 11,
            "trackId": 12,
            "collectionCensoredName": "Album",
            "artworkUrl100": "http://img/100.jpg"
        }]});
        let item = &parse_search(&response).unwrap().items[0];
        assert_eq!(item.collection_id, Some(11));
        assert_eq!(item.track_id, Some(12));
        assert_eq!(item.collection_censored_name.as_deref(), Some("Album"));
        assert_eq!(item.artwork_url_100.as_deref(), Some("http://img/100.jpg"));
    }

    #[test]
    fn missing_results_is_an_error() {
        assert!(parse_search(&json!({ "resultCount": 0 })).is_err());
        assert!(parse_search(&json!({ "results": {} })).is_err());
    }

    #[test]
    fn bad_item_does_not_hide_the_rest() {
        let response = json!({ "results": [
            { "collectionId": "eleven" },
            { "collectionId": 2 }
        ]});
        let parsed = parse_search(&response).unwrap();
        assert_eq!(parsed.items.len(), 1);
        assert_eq!(parsed.items[0].collection_id, Some(2));
        assert!(matches!(parsed.skipped[0], ParserError::InvalidEntry { index: 0, .. }));
    }
}
