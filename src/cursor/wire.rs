use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::{
    error::FeedError,
    item::{FilterKey, Item},
};

use super::{Page, PageCursor, PageRequest};

/// Page as the query endpoint sends it: the cursor is split into a timestamp
/// and an id tie-breaker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WirePage {
    #[serde(default)]
    items: Vec<Item>,
    #[serde(default)]
    next_cursor: Option<i64>,
    #[serde(default)]
    next_cursor_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireRequest {
    #[serde(default)]
    cursor: Option<i64>,
    #[serde(default)]
    cursor_id: Option<String>,
    limit: u32,
    #[serde(default)]
    filters: FilterKey,
}

fn join_cursor(
    created_at: Option<i64>,
    id: Option<String>,
    field: &str,
) -> Result<Option<PageCursor>, FeedError> {
    match (created_at, id) {
        (Some(created_at), Some(id)) => Ok(Some(PageCursor::new(created_at, id))),
        (None, None) => Ok(None),
        (Some(_), None) => Err(FeedError::MalformedPage(format!(
            "{field} timestamp present without its id"
        ))),
        (None, Some(_)) => Err(FeedError::MalformedPage(format!(
            "{field} id present without its timestamp"
        ))),
    }
}

fn split_cursor(cursor: Option<PageCursor>) -> (Option<i64>, Option<String>) {
    match cursor {
        Some(cursor) => (Some(cursor.created_at), Some(cursor.id)),
        None => (None, None),
    }
}

impl TryFrom<WirePage> for Page {
    type Error = FeedError;

    fn try_from(wire: WirePage) -> Result<Self, Self::Error> {
        let next_cursor = join_cursor(wire.next_cursor, wire.next_cursor_id, "nextCursor")?;
        Ok(Page::new(wire.items, next_cursor))
    }
}

impl From<Page> for WirePage {
    fn from(page: Page) -> Self {
        let (next_cursor, next_cursor_id) = split_cursor(page.next_cursor);
        Self {
            items: page.items,
            next_cursor,
            next_cursor_id,
        }
    }
}

impl TryFrom<WireRequest> for PageRequest {
    type Error = FeedError;

    fn try_from(wire: WireRequest) -> Result<Self, Self::Error> {
        let cursor = join_cursor(wire.cursor, wire.cursor_id, "cursor")?;
        let Some(limit) = NonZeroU32::new(wire.limit) else {
            return Err(FeedError::InvalidConfig(
                "page limit must be greater than 0".to_string(),
            ));
        };
        Ok(PageRequest {
            cursor,
            limit,
            filters: wire.filters,
        })
    }
}

impl From<PageRequest> for WireRequest {
    fn from(request: PageRequest) -> Self {
        let (cursor, cursor_id) = split_cursor(request.cursor);
        Self {
            cursor,
            cursor_id,
            limit: request.limit.get(),
            filters: request.filters,
        }
    }
}
