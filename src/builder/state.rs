use crate::{config::FeedConfig, estimator::EstimatorConfig, item::FilterKey};

pub(crate) struct BuilderState<S> {
    pub(crate) source: Option<S>,
    pub(crate) config: Option<FeedConfig>,
    pub(crate) filter: Option<FilterKey>,
    pub(crate) page_limit: Option<u32>,
    pub(crate) column_gap: Option<f32>,
    pub(crate) proximity_threshold: Option<f32>,
    pub(crate) estimator: Option<EstimatorConfig>,
}

impl<S> BuilderState<S> {
    pub(crate) fn new() -> Self {
        Self {
            source: None,
            config: None,
            filter: None,
            page_limit: None,
            column_gap: None,
            proximity_threshold: None,
            estimator: None,
        }
    }

    /// Base config with individual overrides applied on top.
    pub(crate) fn resolved_config(&self) -> FeedConfig {
        let mut config = self.config.clone().unwrap_or_default();
        if let Some(page_limit) = self.page_limit {
            config.page_limit = page_limit;
        }
        if let Some(column_gap) = self.column_gap {
            config.column_gap = column_gap;
        }
        if let Some(threshold) = self.proximity_threshold {
            config.proximity_threshold = threshold;
        }
        if let Some(estimator) = &self.estimator {
            config.estimator = estimator.clone();
        }
        config
    }
}
