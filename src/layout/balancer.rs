use crate::{
    estimator::{EstimateHeight, HeightEstimator},
    item::Item,
};

use super::columns::Columns;

/// Greedy two-column masonry balancer.
///
/// Every call lays out the whole list from scratch; nothing is carried over
/// between calls, so an insertion can move every later item to the other
/// column.
#[derive(Debug, Clone, Default)]
pub struct ColumnBalancer<E = HeightEstimator> {
    estimator: E,
    gap: f32,
}

impl<E: EstimateHeight> ColumnBalancer<E> {
    pub fn new(estimator: E) -> Self {
        Self { estimator, gap: 0.0 }
    }

    /// Vertical space added below every card. Negative or non-finite gaps
    /// are treated as zero.
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = sanitize_gap(gap);
        self
    }

    pub fn gap(&self) -> f32 {
        self.gap
    }

    pub fn estimator(&self) -> &E {
        &self.estimator
    }

    /// Assigns every item to a column.
    ///
    /// Returns two empty columns while the width is unknown (zero, negative
    /// or non-finite).
    pub fn layout<'a>(&self, items: &'a [Item], column_width: f32) -> Columns<'a> {
        if !column_width.is_finite() || column_width <= 0.0 {
            return Columns::empty(column_width.max(0.0));
        }
        let mut columns = Columns::empty(column_width);
        for (index, item) in items.iter().enumerate() {
            let height = self.estimator.estimate(item, column_width).max(0.0);
            columns.push(index, item, height, self.gap);
        }
        columns
    }
}

fn sanitize_gap(gap: f32) -> f32 {
    if gap.is_finite() && gap >= 0.0 {
        gap
    } else {
        log::warn!("ignoring invalid column gap {gap}");
        0.0
    }
}

/// Lays out `items` with the default estimator and no gap.
pub fn layout_columns(items: &[Item], column_width: f32) -> Columns<'_> {
    ColumnBalancer::new(HeightEstimator::default()).layout(items, column_width)
}

/// Width of each column when a container is split in two around `gap`.
///
/// Zero for containers that are not measured yet or too narrow.
pub fn column_width_for(container_width: f32, gap: f32) -> f32 {
    let width = (container_width - sanitize_gap(gap)) / 2.0;
    if width.is_finite() && width > 0.0 {
        width
    } else {
        0.0
    }
}
