use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    cursor::{Page, PageRequest},
    error::FeedError,
    item::{FilterKey, Item},
};

use super::traits::PageSource;

/// In-process page source serving a fixed item list.
///
/// Only the `kind` filter parameter constrains results; other parameters are
/// accepted and ignored. Can simulate a server that re-sends the cursor item
/// at the head of each continuation page, injected transient failures, and
/// response latency.
pub struct MemoryPageSource {
    items: Vec<Item>,
    resend_cursor_item: bool,
    latency: Option<Duration>,
    pending_failures: AtomicUsize,
    requests: Mutex<Vec<PageRequest>>,
}

impl MemoryPageSource {
    /// Creates a source over `items`, sorted into feed order.
    pub fn new(mut items: Vec<Item>) -> Self {
        items.sort_by(|a, b| (b.created_at, &b.id).cmp(&(a.created_at, &a.id)));
        Self {
            items,
            resend_cursor_item: false,
            latency: None,
            pending_failures: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Re-send the item a cursor points at as the first item of the next page.
    pub fn resend_cursor_item(mut self, enable: bool) -> Self {
        self.resend_cursor_item = enable;
        self
    }

    /// Delay every response by `latency`.
    pub fn latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Fail the next `count` requests with a transient error.
    pub fn fail_next(&self, count: usize) {
        self.pending_failures.store(count, Ordering::SeqCst);
    }

    /// All items in feed order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Requests received so far, failed ones included.
    pub async fn requests(&self) -> Vec<PageRequest> {
        self.requests.lock().await.clone()
    }

    fn take_failure(&self) -> bool {
        self.pending_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }

    fn page_for(&self, request: &PageRequest) -> Page {
        let matching: Vec<&Item> = self
            .items
            .iter()
            .filter(|item| matches_filters(item, &request.filters))
            .collect();

        let (resent, remaining): (Option<&Item>, Vec<&Item>) = match &request.cursor {
            None => (None, matching),
            Some(cursor) => {
                let resent = self
                    .resend_cursor_item
                    .then(|| matching.iter().copied().find(|item| item.id == cursor.id))
                    .flatten();
                let remaining = matching
                    .into_iter()
                    .filter(|item| item.is_after(cursor))
                    .collect();
                (resent, remaining)
            }
        };

        let limit = request.limit.get() as usize;
        let has_more = remaining.len() > limit;
        let page: Vec<Item> = remaining.into_iter().take(limit).cloned().collect();
        let next_cursor = if has_more {
            page.last().map(Item::position)
        } else {
            None
        };

        let mut items = Vec::with_capacity(page.len() + 1);
        items.extend(resent.cloned());
        items.extend(page);
        Page::new(items, next_cursor)
    }
}

fn matches_filters(item: &Item, filters: &FilterKey) -> bool {
    filters
        .get("kind")
        .map_or(true, |kind| item.kind.tag() == kind)
}

#[async_trait]
impl PageSource for MemoryPageSource {
    async fn fetch_page(&self, request: &PageRequest) -> Result<Page, FeedError> {
        self.requests.lock().await.push(request.clone());
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if self.take_failure() {
            log::debug!("memory source failing request at {:?}", request.cursor);
            return Err(FeedError::Fetch("injected transient failure".to_string()));
        }
        Ok(self.page_for(request))
    }
}
