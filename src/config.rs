#[path = "config/error.rs"]
mod error;

use std::fs;
use std::num::NonZeroU32;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{error::FeedError, estimator::EstimatorConfig};

pub use error::ConfigError;

const DEFAULT_PAGE_LIMIT: u32 = 20;
const DEFAULT_COLUMN_GAP: f32 = 8.0;
const DEFAULT_PROXIMITY_THRESHOLD: f32 = 600.0;

/// Tunables for paging and layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Items requested per page
    pub page_limit: u32,
    /// Vertical gap below each card, in pixels
    pub column_gap: f32,
    /// Distance from the end of content that counts as "near end", in pixels
    pub proximity_threshold: f32,
    pub estimator: EstimatorConfig,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            page_limit: DEFAULT_PAGE_LIMIT,
            column_gap: DEFAULT_COLUMN_GAP,
            proximity_threshold: DEFAULT_PROXIMITY_THRESHOLD,
            estimator: EstimatorConfig::default(),
        }
    }
}

impl FeedConfig {
    /// Parses a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Reads a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn page_limit(&self) -> Result<NonZeroU32, FeedError> {
        NonZeroU32::new(self.page_limit).ok_or_else(|| {
            FeedError::InvalidConfig("page_limit must be greater than 0".to_string())
        })
    }

    pub fn validate(&self) -> Result<(), FeedError> {
        self.page_limit()?;
        if !self.column_gap.is_finite() || self.column_gap < 0.0 {
            return Err(FeedError::InvalidConfig(format!(
                "column_gap must be a non-negative number, got {}",
                self.column_gap
            )));
        }
        if !self.proximity_threshold.is_finite() || self.proximity_threshold < 0.0 {
            return Err(FeedError::InvalidConfig(format!(
                "proximity_threshold must be a non-negative number, got {}",
                self.proximity_threshold
            )));
        }
        let invalid = self.estimator.invalid_fields();
        if !invalid.is_empty() {
            return Err(FeedError::InvalidConfig(format!(
                "estimator values must be non-negative numbers: {}",
                invalid.join(", ")
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg = FeedConfig::from_toml_str(
            r#"
            page_limit = 30

            [estimator]
            compact_height = 96.0
            "#,
        )
        .expect("parse");
        assert_eq!(cfg.page_limit, 30);
        assert_eq!(cfg.column_gap, DEFAULT_COLUMN_GAP);
        assert_eq!(cfg.estimator.compact_height, 96.0);
        assert_eq!(
            cfg.estimator.caption_height,
            EstimatorConfig::default().caption_height
        );
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_limit_is_invalid() {
        let cfg = FeedConfig {
            page_limit: 0,
            ..FeedConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(FeedError::InvalidConfig(_))));
    }

    #[test]
    fn negative_gap_and_heights_are_invalid() {
        let cfg = FeedConfig {
            column_gap: -1.0,
            ..FeedConfig::default()
        };
        assert!(cfg.validate().is_err());

        let mut cfg = FeedConfig::default();
        cfg.estimator.link_compact_height = -3.0;
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("link_compact_height"));
    }

    #[test]
    fn bad_toml_is_a_parse_error() {
        let err = FeedConfig::from_toml_str("page_limit = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn load_reads_file_and_round_trips() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        let original = FeedConfig {
            page_limit: 12,
            proximity_threshold: 250.0,
            ..FeedConfig::default()
        };
        let text = original.to_toml_string().expect("serialize");
        file.write_all(text.as_bytes()).expect("write");

        let loaded = FeedConfig::load(file.path()).expect("load");
        assert_eq!(loaded, original);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = FeedConfig::load("/nonexistent/pinfeed.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
