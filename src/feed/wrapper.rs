use crate::{
    accumulator::{FeedAccumulator, PageTicket},
    config::FeedConfig,
    controller::{LoadMoreController, LoadOutcome, PendingLoad},
    cursor::Page,
    error::FeedError,
    estimator::HeightEstimator,
    item::{FilterKey, Item},
    layout::{column_width_for, ColumnBalancer, Columns},
    scroll::ScrollMetrics,
    source::PageSource,
};

/// A paginated, deduplicated feed bound to a page source, with masonry
/// layout over whatever has loaded so far.
pub struct Feed<S> {
    pub(super) source: S,
    pub(super) accumulator: FeedAccumulator,
    pub(super) controller: LoadMoreController,
    pub(super) balancer: ColumnBalancer<HeightEstimator>,
    pub(super) proximity_threshold: f32,
}

impl<S: PageSource> Feed<S> {
    /// Creates an empty feed browsing `filter_key`.
    pub fn new(source: S, config: &FeedConfig, filter_key: FilterKey) -> Result<Self, FeedError> {
        config.validate()?;
        let balancer = ColumnBalancer::new(HeightEstimator::new(config.estimator.clone()))
            .with_gap(config.column_gap);
        Ok(Self {
            source,
            accumulator: FeedAccumulator::new(filter_key),
            controller: LoadMoreController::new(config.page_limit()?),
            balancer,
            proximity_threshold: config.proximity_threshold,
        })
    }

    /// Switches to `filter_key`, discarding loaded items if it changed.
    ///
    /// Any in-flight request is abandoned; its response will be dropped.
    pub fn set_filter(&mut self, filter_key: FilterKey) -> bool {
        if !self.accumulator.sync_filter(filter_key) {
            return false;
        }
        self.controller.cancel();
        true
    }

    /// Loads the next page if `near_end` is set and nothing is in flight.
    ///
    /// The fetch is awaited before returning. A failed fetch leaves the feed
    /// unchanged and is returned as the error.
    pub async fn on_near_end(&mut self, near_end: bool) -> Result<LoadOutcome, FeedError> {
        let Some(pending) = self.controller.on_near_end(&self.accumulator, near_end) else {
            return Ok(LoadOutcome::Skipped);
        };
        let result = self.source.fetch_page(&pending.request).await;
        self.controller.resolve(&mut self.accumulator, &pending.ticket, result)
    }

    /// Like [`Feed::on_near_end`], deciding proximity from raw scroll numbers.
    pub async fn on_scroll(&mut self, metrics: ScrollMetrics) -> Result<LoadOutcome, FeedError> {
        let near_end = metrics.is_near_end(self.proximity_threshold);
        self.on_near_end(near_end).await
    }

    /// Requests the first page for the current filter, or the next one if
    /// some are already loaded.
    pub async fn load_more(&mut self) -> Result<LoadOutcome, FeedError> {
        self.on_near_end(true).await
    }

    /// Starts a load without fetching, for hosts that drive the query layer
    /// themselves. Pair with [`Feed::complete_load`].
    pub fn begin_load(&mut self, near_end: bool) -> Option<PendingLoad> {
        self.controller.on_near_end(&self.accumulator, near_end)
    }

    /// Resolves a load started with [`Feed::begin_load`].
    pub fn complete_load(
        &mut self,
        ticket: &PageTicket,
        result: Result<Page, FeedError>,
    ) -> Result<LoadOutcome, FeedError> {
        self.controller.resolve(&mut self.accumulator, ticket, result)
    }

    /// Column assignment of the loaded items for a known column width.
    pub fn layout(&self, column_width: f32) -> Columns<'_> {
        self.balancer.layout(self.accumulator.items(), column_width)
    }

    /// Column assignment for a container split into two columns.
    pub fn layout_for_container(&self, container_width: f32) -> Columns<'_> {
        self.layout(column_width_for(container_width, self.balancer.gap()))
    }

    pub fn items(&self) -> &[Item] {
        self.accumulator.items()
    }

    pub fn accumulator(&self) -> &FeedAccumulator {
        &self.accumulator
    }

    pub fn controller(&self) -> &LoadMoreController {
        &self.controller
    }

    pub fn filter_key(&self) -> &FilterKey {
        self.accumulator.filter_key()
    }

    pub fn is_exhausted(&self) -> bool {
        self.accumulator.is_exhausted()
    }

    pub fn is_loading(&self) -> bool {
        self.controller.is_loading()
    }

    pub fn proximity_threshold(&self) -> f32 {
        self.proximity_threshold
    }

    /// Access the wrapped page source.
    pub fn source(&self) -> &S {
        &self.source
    }
}
