#[path = "cursor/wire.rs"]
mod wire;

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::{
    error::FeedError,
    item::{FilterKey, Item},
};

/// Position in the ordered feed: the `(created_at, id)` of the last item a
/// page ended on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageCursor {
    pub created_at: i64,
    pub id: String,
}

impl PageCursor {
    pub fn new(created_at: i64, id: impl Into<String>) -> Self {
        Self {
            created_at,
            id: id.into(),
        }
    }
}

impl fmt::Display for PageCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.created_at, self.id)
    }
}

/// A request for one page of the feed.
///
/// No cursor asks for the first page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "wire::WireRequest", into = "wire::WireRequest")]
pub struct PageRequest {
    pub cursor: Option<PageCursor>,
    pub limit: NonZeroU32,
    pub filters: FilterKey,
}

impl PageRequest {
    pub fn first(limit: NonZeroU32, filters: FilterKey) -> Self {
        Self {
            cursor: None,
            limit,
            filters,
        }
    }

    pub fn after(cursor: PageCursor, limit: NonZeroU32, filters: FilterKey) -> Self {
        Self {
            cursor: Some(cursor),
            limit,
            filters,
        }
    }

    pub fn is_first(&self) -> bool {
        self.cursor.is_none()
    }
}

/// One page returned by the query layer.
///
/// A missing `next_cursor` marks the end of the feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "wire::WirePage", into = "wire::WirePage")]
pub struct Page {
    pub items: Vec<Item>,
    pub next_cursor: Option<PageCursor>,
}

impl Page {
    pub fn new(items: Vec<Item>, next_cursor: Option<PageCursor>) -> Self {
        Self { items, next_cursor }
    }

    /// Final page of a feed.
    pub fn last(items: Vec<Item>) -> Self {
        Self::new(items, None)
    }

    /// Page whose continuation cursor points at its own last item.
    pub fn continued(items: Vec<Item>) -> Self {
        let next_cursor = items.last().map(Item::position);
        Self::new(items, next_cursor)
    }

    pub fn is_last(&self) -> bool {
        self.next_cursor.is_none()
    }

    /// Parses a page in the query layer's wire format.
    pub fn from_json(raw: &str) -> Result<Self, FeedError> {
        let wire: wire::WirePage = serde_json::from_str(raw)?;
        Page::try_from(wire)
    }
}
