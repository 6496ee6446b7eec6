use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{cursor::PageCursor, error::FeedError};

/// One unit of feed content.
///
/// Items are identified by `id` alone; `kind` only drives height estimation
/// and rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub created_at: i64,
    #[serde(flatten)]
    pub kind: ItemKind,
}

/// Closed set of content kinds a feed can carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ItemKind {
    /// Image pin. `aspect_ratio` is height divided by width.
    #[serde(rename_all = "camelCase")]
    Image {
        #[serde(default)]
        aspect_ratio: Option<f32>,
        #[serde(default)]
        has_caption: bool,
    },
    /// Link preview, optionally with a secondary media block.
    #[serde(rename_all = "camelCase")]
    Link {
        #[serde(default)]
        has_secondary_media: bool,
    },
    StatusCard,
    Resource,
}

impl ItemKind {
    /// Wire tag of the kind, as used in JSON and filter keys.
    pub fn tag(&self) -> &'static str {
        match self {
            ItemKind::Image { .. } => "image",
            ItemKind::Link { .. } => "link",
            ItemKind::StatusCard => "statusCard",
            ItemKind::Resource => "resource",
        }
    }
}

impl Item {
    pub fn new(id: impl Into<String>, created_at: i64, kind: ItemKind) -> Self {
        Self {
            id: id.into(),
            created_at,
            kind,
        }
    }

    pub fn image(id: impl Into<String>, created_at: i64, aspect_ratio: f32) -> Self {
        Self::new(
            id,
            created_at,
            ItemKind::Image {
                aspect_ratio: Some(aspect_ratio),
                has_caption: false,
            },
        )
    }

    pub fn link(id: impl Into<String>, created_at: i64, has_secondary_media: bool) -> Self {
        Self::new(id, created_at, ItemKind::Link { has_secondary_media })
    }

    pub fn status_card(id: impl Into<String>, created_at: i64) -> Self {
        Self::new(id, created_at, ItemKind::StatusCard)
    }

    pub fn resource(id: impl Into<String>, created_at: i64) -> Self {
        Self::new(id, created_at, ItemKind::Resource)
    }

    /// Marks an image item as captioned. No effect on other kinds.
    pub fn with_caption(mut self) -> Self {
        if let ItemKind::Image { has_caption, .. } = &mut self.kind {
            *has_caption = true;
        }
        self
    }

    /// Cursor pointing at this item's position in the feed.
    pub fn position(&self) -> PageCursor {
        PageCursor::new(self.created_at, self.id.clone())
    }

    /// Whether this item sorts strictly after `cursor` in `(created_at desc, id desc)` order.
    pub fn is_after(&self, cursor: &PageCursor) -> bool {
        (self.created_at, self.id.as_str()) < (cursor.created_at, cursor.id.as_str())
    }
}

/// Canonical key of the active filter parameters.
///
/// Two keys compare equal exactly when they name the same parameters with the
/// same values, regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterKey(BTreeMap<String, String>);

impl FilterKey {
    /// Key for the unfiltered feed.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_unfiltered(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("*");
        }
        let mut first = true;
        for (name, value) in &self.0 {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{name}={value}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for FilterKey {
    type Err = FeedError;

    /// Parses `name=value` pairs separated by commas. `*` and the empty
    /// string both mean "unfiltered".
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        if raw.is_empty() || raw == "*" {
            return Ok(Self::all());
        }
        raw.split(',').try_fold(Self::all(), |key, pair| {
            let Some((name, value)) = pair.split_once('=') else {
                return Err(FeedError::InvalidConfig(format!(
                    "filter `{pair}` is not of the form name=value"
                )));
            };
            let name = name.trim();
            if name.is_empty() {
                return Err(FeedError::InvalidConfig(format!(
                    "filter `{pair}` has an empty name"
                )));
            }
            Ok(key.with(name, value.trim()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_json_uses_kind_tag_and_camel_case() {
        let item = Item::image("p1", 100, 1.5).with_caption();
        let json = serde_json::to_value(&item).expect("serialize");
        assert_eq!(json["kind"], "image");
        assert_eq!(json["createdAt"], 100);
        assert_eq!(json["aspectRatio"], 1.5);
        assert_eq!(json["hasCaption"], true);

        let card = serde_json::to_value(Item::status_card("s1", 5)).expect("serialize");
        assert_eq!(card["kind"], "statusCard");
    }

    #[test]
    fn item_json_fills_missing_optional_fields() {
        let raw = r#"[
            {"id": "a", "createdAt": 3, "kind": "image"},
            {"id": "b", "createdAt": 2, "kind": "link", "hasSecondaryMedia": true},
            {"id": "c", "createdAt": 1, "kind": "resource"}
        ]"#;
        let items: Vec<Item> = serde_json::from_str(raw).expect("parse");
        assert_eq!(
            items[0].kind,
            ItemKind::Image {
                aspect_ratio: None,
                has_caption: false
            }
        );
        assert_eq!(
            items[1].kind,
            ItemKind::Link {
                has_secondary_media: true
            }
        );
        assert_eq!(items[2].kind, ItemKind::Resource);
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let raw = r#"{"id": "a", "createdAt": 3, "kind": "video"}"#;
        assert!(serde_json::from_str::<Item>(raw).is_err());
    }

    #[test]
    fn is_after_breaks_timestamp_ties_by_id() {
        let cursor = PageCursor::new(90, "b");
        assert!(Item::status_card("c", 80).is_after(&cursor));
        assert!(Item::status_card("a", 90).is_after(&cursor));
        assert!(!Item::status_card("b", 90).is_after(&cursor));
        assert!(!Item::status_card("c", 90).is_after(&cursor));
        assert!(!Item::status_card("a", 100).is_after(&cursor));
    }

    #[test]
    fn with_caption_ignores_non_images() {
        let link = Item::link("l", 1, false).with_caption();
        assert_eq!(
            link.kind,
            ItemKind::Link {
                has_secondary_media: false
            }
        );
    }

    #[test]
    fn filter_key_is_order_independent() {
        let a = FilterKey::all().with("kind", "image").with("category", "fitness");
        let b = FilterKey::all().with("category", "fitness").with("kind", "image");
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "category=fitness,kind=image");
    }

    #[test]
    fn filter_key_parses_pairs() {
        let key: FilterKey = "kind=link, category = travel".parse().expect("parse");
        assert_eq!(key.get("kind"), Some("link"));
        assert_eq!(key.get("category"), Some("travel"));
        assert!("*".parse::<FilterKey>().expect("parse").is_unfiltered());
        assert!("kind".parse::<FilterKey>().is_err());
        assert!("=x".parse::<FilterKey>().is_err());
    }
}
