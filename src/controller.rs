use std::num::NonZeroU32;

use crate::{
    accumulator::{FeedAccumulator, MergeOutcome, MergeStats, PageTicket},
    cursor::{Page, PageRequest},
    error::FeedError,
};

/// Load gate state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    /// A request tagged with this ticket is in flight.
    Loading(PageTicket),
}

/// A request the host must issue, and the ticket to resolve it with.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingLoad {
    pub request: PageRequest,
    pub ticket: PageTicket,
}

/// What happened in response to a near-end signal or a resolved page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The page was merged into the feed.
    Merged(MergeStats),
    /// The response belonged to an abandoned request and was dropped.
    Stale,
    /// No request was issued: not near the end, already loading, or exhausted.
    Skipped,
}

/// Gates page requests so at most one is in flight per accumulator.
#[derive(Debug, Clone)]
pub struct LoadMoreController {
    state: LoadState,
    limit: NonZeroU32,
}

impl LoadMoreController {
    pub fn new(limit: NonZeroU32) -> Self {
        Self {
            state: LoadState::Idle,
            limit,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading(_))
    }

    pub fn limit(&self) -> NonZeroU32 {
        self.limit
    }

    /// Reacts to the host's near-end signal.
    ///
    /// Moves to `Loading` and returns the request to issue only when idle,
    /// near the end, and the feed is not exhausted.
    pub fn on_near_end(
        &mut self,
        accumulator: &FeedAccumulator,
        near_end: bool,
    ) -> Option<PendingLoad> {
        if !near_end || self.is_loading() || accumulator.is_exhausted() {
            return None;
        }
        let ticket = accumulator.ticket();
        let request = PageRequest {
            cursor: ticket.cursor().cloned(),
            limit: self.limit,
            filters: ticket.filter_key().clone(),
        };
        log::debug!(
            "loading page for `{}` after {:?}",
            request.filters,
            request.cursor
        );
        self.state = LoadState::Loading(ticket.clone());
        Some(PendingLoad { request, ticket })
    }

    /// Applies the outcome of the request issued under `ticket`.
    ///
    /// The controller returns to `Idle` if `ticket` is the one in flight.
    /// Responses for any other ticket, or for a position the accumulator has
    /// moved away from, are dropped as stale whether they succeeded or not.
    /// A failure leaves the accumulator untouched and is returned to the
    /// caller so the next signal can retry.
    pub fn resolve(
        &mut self,
        accumulator: &mut FeedAccumulator,
        ticket: &PageTicket,
        result: Result<Page, FeedError>,
    ) -> Result<LoadOutcome, FeedError> {
        let in_flight = matches!(&self.state, LoadState::Loading(current) if current == ticket);
        if in_flight {
            self.state = LoadState::Idle;
        }
        if !in_flight || !accumulator.is_current(ticket) {
            log::debug!(
                "ignoring response for `{}` at {:?}",
                ticket.filter_key(),
                ticket.cursor()
            );
            return Ok(LoadOutcome::Stale);
        }
        let page = match result {
            Ok(page) => page,
            Err(err) => {
                log::warn!(
                    "page load for `{}` failed, will retry on next signal: {err}",
                    ticket.filter_key()
                );
                return Err(err);
            }
        };
        match accumulator.accept(ticket, page) {
            MergeOutcome::Merged(stats) => Ok(LoadOutcome::Merged(stats)),
            MergeOutcome::Stale => Ok(LoadOutcome::Stale),
        }
    }

    /// Abandons any in-flight request.
    pub fn cancel(&mut self) {
        if let LoadState::Loading(ticket) = &self.state {
            log::debug!("abandoning in-flight load for `{}`", ticket.filter_key());
        }
        self.state = LoadState::Idle;
    }
}
