// Typed view of catalog feed entries
use crate::model::ParserError;
use crate::parser::{Parsed, parse_each};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Label {
    pub label: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LinkAttributes {
    pub href: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ArtistLabel {
    pub label: Option<String>,
    pub attributes: Option<LinkAttributes>,
}

/// One entry of a feed. Every field may be missing.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawFeedEntry {
    pub id: Option<Label>,
    #[serde(rename = "im:image")]
    pub images: Option<Vec<Label>>,
    pub title: Option<Label>,
    #[serde(rename = "im:name")]
    pub name: Option<Label>,
    #[serde(rename = "im:artist")]
    pub artist: Option<ArtistLabel>,
    #[serde(rename = "im:releaseDate")]
    pub release_date: Option<Label>,
}

fn label(field: &Option<Label>) -> Option<&str> {
    field.as_ref().and_then(|l| l.label.as_deref())
}

impl RawFeedEntry {
    /// Canonical store link of the item.
    pub fn link(&self) -> Option<&str> {
        label(&self.id)
    }

    /// The feed lists artwork smallest first; the third size is the one shown.
    pub fn artwork(&self) -> Option<&str> {
        self.images
            .as_ref()
            .and_then(|images| images.get(2))
            .and_then(|image| image.label.as_deref())
    }

    pub fn title(&self) -> Option<&str> {
        label(&self.title)
    }

    pub fn name(&self) -> Option<&str> {
        label(&self.name)
    }

    pub fn artist_name(&self) -> Option<&str> {
        self.artist.as_ref().and_then(|a| a.label.as_deref())
    }

    pub fn artist_link(&self) -> Option<&str> {
        self.artist
            .as_ref()
            .and_then(|a| a.attributes.as_ref())
            .and_then(|attrs| attrs.href.as_deref())
    }

    pub fn release_date(&self) -> Option<&str> {
        label(&self.release_date)
    }
}

/// Parses `feed.entry` of a feed response. A feed with a single item sends
/// the entry as an object instead of an array.
pub fn parse_feed(response: &Value) -> Result<Parsed<RawFeedEntry>, ParserError> {
    let entries = response
        .get("feed")
        .and_then(|feed| feed.get("entry"))
        .filter(|entry| !entry.is_null())
        .ok_or_else(|| ParserError::MissingField("feed.entry".to_string()))?;

    let parsed = match entries {
        Value::Array(items) => parse_each(items),
        single => parse_each(std::slice::from_ref(single)),
    };
    Ok(parsed)
}
