/// Raw scroll position along the feed's main axis, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Distance scrolled from the top of the content
    pub offset: f32,
    /// Visible extent of the scroll container
    pub viewport_extent: f32,
    /// Total extent of the laid-out content
    pub content_extent: f32,
}

impl ScrollMetrics {
    pub fn new(offset: f32, viewport_extent: f32, content_extent: f32) -> Self {
        Self {
            offset,
            viewport_extent,
            content_extent,
        }
    }

    /// Content left below the viewport's bottom edge.
    pub fn remaining(&self) -> f32 {
        (self.content_extent - (self.offset + self.viewport_extent)).max(0.0)
    }

    /// Whether the viewport is within `threshold` of the end of the content.
    ///
    /// Content shorter than the viewport is always near its end.
    pub fn is_near_end(&self, threshold: f32) -> bool {
        self.remaining() <= threshold.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::ScrollMetrics;

    #[test]
    fn near_end_within_threshold() {
        let metrics = ScrollMetrics::new(1_000.0, 800.0, 2_300.0);
        assert_eq!(metrics.remaining(), 500.0);
        assert!(metrics.is_near_end(600.0));
        assert!(!metrics.is_near_end(400.0));
    }

    #[test]
    fn short_content_is_near_end() {
        let metrics = ScrollMetrics::new(0.0, 800.0, 300.0);
        assert_eq!(metrics.remaining(), 0.0);
        assert!(metrics.is_near_end(0.0));
    }

    #[test]
    fn overscroll_counts_as_end() {
        let metrics = ScrollMetrics::new(2_000.0, 800.0, 2_300.0);
        assert!(metrics.is_near_end(0.0));
    }
}
