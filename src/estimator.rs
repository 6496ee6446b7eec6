use serde::{Deserialize, Serialize};

use crate::item::{Item, ItemKind};

const DEFAULT_CAPTION_HEIGHT: f32 = 28.0;
const DEFAULT_LINK_CHROME_HEIGHT: f32 = 64.0;
const DEFAULT_LINK_COMPACT_HEIGHT: f32 = 88.0;
const DEFAULT_COMPACT_HEIGHT: f32 = 120.0;
const DEFAULT_SECONDARY_MEDIA_RATIO: f32 = 0.6;
const DEFAULT_ASPECT_RATIO: f32 = 1.0;

/// A-priori height model used to pick a column before anything is rendered.
pub trait EstimateHeight {
    /// Estimated height of `item` in a column `column_width` wide.
    fn estimate(&self, item: &Item, column_width: f32) -> f32;
}

impl<T: EstimateHeight + ?Sized> EstimateHeight for &T {
    fn estimate(&self, item: &Item, column_width: f32) -> f32 {
        (**self).estimate(item, column_width)
    }
}

/// Fixed card dimensions used by [`HeightEstimator`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Height added below a captioned image
    pub caption_height: f32,
    /// Title and domain rows of a link card with media
    pub link_chrome_height: f32,
    /// Link card without secondary media
    pub link_compact_height: f32,
    /// Status cards and resources
    pub compact_height: f32,
    /// Media height of a link card as a fraction of column width
    pub secondary_media_ratio: f32,
    /// Used for images with a missing or unusable aspect ratio
    pub default_aspect_ratio: f32,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            caption_height: DEFAULT_CAPTION_HEIGHT,
            link_chrome_height: DEFAULT_LINK_CHROME_HEIGHT,
            link_compact_height: DEFAULT_LINK_COMPACT_HEIGHT,
            compact_height: DEFAULT_COMPACT_HEIGHT,
            secondary_media_ratio: DEFAULT_SECONDARY_MEDIA_RATIO,
            default_aspect_ratio: DEFAULT_ASPECT_RATIO,
        }
    }
}

impl EstimatorConfig {
    /// Names of fields holding negative or non-finite values.
    pub(crate) fn invalid_fields(&self) -> Vec<&'static str> {
        let fields = [
            ("caption_height", self.caption_height),
            ("link_chrome_height", self.link_chrome_height),
            ("link_compact_height", self.link_compact_height),
            ("compact_height", self.compact_height),
            ("secondary_media_ratio", self.secondary_media_ratio),
            ("default_aspect_ratio", self.default_aspect_ratio),
        ];
        fields
            .into_iter()
            .filter(|(_, value)| !value.is_finite() || *value < 0.0)
            .map(|(name, _)| name)
            .collect()
    }
}

/// Default height model, driven purely by item kind and metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeightEstimator {
    config: EstimatorConfig,
}

impl HeightEstimator {
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    fn aspect_ratio(&self, item: &Item, aspect_ratio: Option<f32>) -> f32 {
        match aspect_ratio {
            Some(ratio) if ratio.is_finite() && ratio > 0.0 => ratio,
            Some(ratio) => {
                log::debug!("image `{}` has unusable aspect ratio {ratio}", item.id);
                self.config.default_aspect_ratio
            }
            None => self.config.default_aspect_ratio,
        }
    }
}

impl EstimateHeight for HeightEstimator {
    fn estimate(&self, item: &Item, column_width: f32) -> f32 {
        let cfg = &self.config;
        let height = match item.kind {
            ItemKind::Image {
                aspect_ratio,
                has_caption,
            } => {
                let caption = if has_caption { cfg.caption_height } else { 0.0 };
                self.aspect_ratio(item, aspect_ratio) * column_width + caption
            }
            ItemKind::Link {
                has_secondary_media: true,
            } => column_width * cfg.secondary_media_ratio + cfg.link_chrome_height,
            ItemKind::Link {
                has_secondary_media: false,
            } => cfg.link_compact_height,
            ItemKind::StatusCard | ItemKind::Resource => cfg.compact_height,
        };
        height.max(0.0)
    }
}

/// Estimates with the default card dimensions.
pub fn estimate(item: &Item, column_width: f32) -> f32 {
    HeightEstimator::default().estimate(item, column_width)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn image(aspect_ratio: Option<f32>, has_caption: bool) -> Item {
        Item::new(
            "img",
            1,
            ItemKind::Image {
                aspect_ratio,
                has_caption,
            },
        )
    }

    #[rstest]
    #[case::portrait(image(Some(1.5), false), 200.0, 300.0)]
    #[case::captioned(image(Some(0.5), true), 200.0, 128.0)]
    #[case::missing_ratio(image(None, false), 150.0, 150.0)]
    #[case::zero_ratio(image(Some(0.0), false), 150.0, 150.0)]
    #[case::nan_ratio(image(Some(f32::NAN), true), 100.0, 128.0)]
    #[case::rich_link(Item::link("l", 1, true), 200.0, 184.0)]
    #[case::compact_link(Item::link("l", 1, false), 200.0, 88.0)]
    #[case::status(Item::status_card("s", 1), 200.0, 120.0)]
    #[case::resource(Item::resource("r", 1), 10.0, 120.0)]
    fn estimates_by_kind(#[case] item: Item, #[case] width: f32, #[case] expected: f32) {
        let height = estimate(&item, width);
        assert!(
            (height - expected).abs() < 1e-3,
            "expected {expected}, got {height}"
        );
    }

    #[test]
    fn custom_dimensions_are_used() {
        let estimator = HeightEstimator::new(EstimatorConfig {
            compact_height: 42.0,
            ..EstimatorConfig::default()
        });
        assert_eq!(estimator.estimate(&Item::resource("r", 1), 300.0), 42.0);
    }

    #[test]
    fn estimate_is_never_negative() {
        assert_eq!(estimate(&image(Some(2.0), false), -50.0), 0.0);
    }

    #[test]
    fn invalid_fields_are_reported() {
        let cfg = EstimatorConfig {
            compact_height: -1.0,
            caption_height: f32::INFINITY,
            ..EstimatorConfig::default()
        };
        assert_eq!(cfg.invalid_fields(), vec!["caption_height", "compact_height"]);
    }
}
