use std::collections::HashSet;

use crate::{
    cursor::{Page, PageCursor},
    item::{FilterKey, Item},
};

/// Counts reported by a single merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Items added to the list
    pub appended: usize,
    /// Items dropped because their id was already present
    pub duplicates: usize,
    /// Whether the merged page was the last one
    pub exhausted: bool,
}

/// The logical, deduplicated item list for one filter.
///
/// Items stay in the order the query layer produced them; merges only append
/// or drop duplicates, never reorder.
#[derive(Debug, Clone, Default)]
pub struct FeedAccumulator {
    pub(super) filter_key: FilterKey,
    pub(super) items: Vec<Item>,
    pub(super) ids: HashSet<String>,
    pub(super) cursor: Option<PageCursor>,
    pub(super) exhausted: bool,
    pub(super) epoch: u64,
}

impl FeedAccumulator {
    /// Creates an empty accumulator browsing `filter_key`.
    pub fn new(filter_key: FilterKey) -> Self {
        Self {
            filter_key,
            ..Self::default()
        }
    }

    /// Drops every item and the cursor, and starts over for `filter_key`.
    pub fn reset(&mut self, filter_key: FilterKey) {
        log::debug!(
            "resetting feed from `{}` to `{}` ({} items dropped)",
            self.filter_key,
            filter_key,
            self.items.len()
        );
        self.filter_key = filter_key;
        self.items.clear();
        self.ids.clear();
        self.cursor = None;
        self.exhausted = false;
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Resets only if `filter_key` differs from the current key.
    ///
    /// Returns whether a reset happened.
    pub fn sync_filter(&mut self, filter_key: FilterKey) -> bool {
        if self.filter_key == filter_key {
            return false;
        }
        self.reset(filter_key);
        true
    }

    /// Replaces the list with the first page of the current filter.
    pub fn merge_first_page(&mut self, page: Page) -> MergeStats {
        self.items.clear();
        self.ids.clear();
        self.absorb(page)
    }

    /// Appends the items of a continuation page that are not already present.
    pub fn merge_next_page(&mut self, page: Page) -> MergeStats {
        self.absorb(page)
    }

    /// Merges `page` as a first or continuation page depending on whether a
    /// cursor is held. Once exhausted, pages only append.
    pub fn merge(&mut self, page: Page) -> MergeStats {
        if self.cursor.is_none() && !self.exhausted {
            self.merge_first_page(page)
        } else {
            self.merge_next_page(page)
        }
    }

    fn absorb(&mut self, page: Page) -> MergeStats {
        let mut stats = MergeStats::default();
        self.items.reserve(page.items.len());
        for item in page.items {
            if self.ids.contains(&item.id) {
                stats.duplicates += 1;
                continue;
            }
            self.ids.insert(item.id.clone());
            self.items.push(item);
            stats.appended += 1;
        }
        self.exhausted = page.next_cursor.is_none();
        self.cursor = page.next_cursor;
        stats.exhausted = self.exhausted;
        log::debug!(
            "merged page for `{}`: {} appended, {} duplicates, {} total{}",
            self.filter_key,
            stats.appended,
            stats.duplicates,
            self.items.len(),
            if stats.exhausted { ", end of feed" } else { "" }
        );
        stats
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn cursor(&self) -> Option<&PageCursor> {
        self.cursor.as_ref()
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn filter_key(&self) -> &FilterKey {
        &self.filter_key
    }

    /// Number of resets since construction.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }
}
