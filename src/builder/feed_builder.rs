use crate::{
    config::FeedConfig,
    error::FeedError,
    estimator::EstimatorConfig,
    feed::Feed,
    item::FilterKey,
    source::PageSource,
};

use super::state::BuilderState;

/// Builder for configuring and instantiating a [`Feed`].
pub struct FeedBuilder<S> {
    pub(super) state: BuilderState<S>,
}

impl<S> Default for FeedBuilder<S> {
    fn default() -> Self {
        Self {
            state: BuilderState::new(),
        }
    }
}

impl<S: PageSource> FeedBuilder<S> {
    /// Creates a new empty builder instance with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page source the feed reads from.
    pub fn source(mut self, source: S) -> Self {
        self.state.source = Some(source);
        self
    }

    /// Starts from a full configuration. Individual setters override it.
    pub fn config(mut self, config: FeedConfig) -> Self {
        self.state.config = Some(config);
        self
    }

    /// Sets the initial filter. Defaults to the unfiltered feed.
    pub fn filter(mut self, filter: FilterKey) -> Self {
        self.state.filter = Some(filter);
        self
    }

    /// Sets the number of items requested per page.
    pub fn page_limit(mut self, page_limit: u32) -> Self {
        self.state.page_limit = Some(page_limit);
        self
    }

    /// Sets the vertical gap below each card.
    pub fn column_gap(mut self, gap: f32) -> Self {
        self.state.column_gap = Some(gap);
        self
    }

    /// Sets the distance from the end of content that triggers a load.
    pub fn proximity_threshold(mut self, threshold: f32) -> Self {
        self.state.proximity_threshold = Some(threshold);
        self
    }

    /// Sets the card dimensions used for height estimation.
    pub fn estimator(mut self, estimator: EstimatorConfig) -> Self {
        self.state.estimator = Some(estimator);
        self
    }

    /// Builds the feed, validating the resolved configuration.
    pub fn build(self) -> Result<Feed<S>, FeedError> {
        let config = self.state.resolved_config();
        let filter = self.state.filter.unwrap_or_default();
        let Some(source) = self.state.source else {
            return Err(FeedError::InvalidConfig(
                "a page source is required".to_string(),
            ));
        };
        Feed::new(source, &config, filter)
    }
}
