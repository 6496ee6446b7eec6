use crate::{
    cursor::{Page, PageCursor},
    item::FilterKey,
};

use super::state::{FeedAccumulator, MergeStats};

/// What a page request was issued for.
///
/// A response is only merged while the accumulator is still at the epoch,
/// filter and cursor recorded here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTicket {
    epoch: u64,
    filter_key: FilterKey,
    cursor: Option<PageCursor>,
}

impl PageTicket {
    pub fn filter_key(&self) -> &FilterKey {
        &self.filter_key
    }

    pub fn cursor(&self) -> Option<&PageCursor> {
        self.cursor.as_ref()
    }

    pub fn is_first_page(&self) -> bool {
        self.cursor.is_none()
    }
}

/// Result of offering a page to the accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    Merged(MergeStats),
    /// The page was for an abandoned filter or position and was dropped.
    Stale,
}

impl FeedAccumulator {
    /// Tags a request for the accumulator's current position.
    pub fn ticket(&self) -> PageTicket {
        PageTicket {
            epoch: self.epoch,
            filter_key: self.filter_key.clone(),
            cursor: self.cursor.clone(),
        }
    }

    /// Whether a response issued under `ticket` may still be merged.
    ///
    /// Nothing is current once the feed is exhausted.
    pub fn is_current(&self, ticket: &PageTicket) -> bool {
        !self.exhausted
            && ticket.epoch == self.epoch
            && ticket.filter_key == self.filter_key
            && ticket.cursor == self.cursor
    }

    /// Merges `page` if `ticket` is still current, otherwise drops it.
    pub fn accept(&mut self, ticket: &PageTicket, page: Page) -> MergeOutcome {
        if !self.is_current(ticket) {
            log::debug!(
                "dropping stale page for `{}` at {:?} ({} items)",
                ticket.filter_key,
                ticket.cursor,
                page.items.len()
            );
            return MergeOutcome::Stale;
        }
        let stats = if ticket.is_first_page() {
            self.merge_first_page(page)
        } else {
            self.merge_next_page(page)
        };
        MergeOutcome::Merged(stats)
    }
}
