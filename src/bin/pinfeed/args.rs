use clap::Parser;
use std::path::PathBuf;

use pinfeed::{error::FeedError, item::FilterKey};

/// Command line arguments for the pinfeed CLI
#[derive(Parser, Debug)]
#[command(
    name = "pinfeed",
    about = "Page through a feed fixture and print its two-column masonry layout"
)]
pub struct CliArgs {
    /// JSON file holding an array of feed items
    #[arg(long, short = 'f')]
    pub fixture: PathBuf,
    /// TOML feed configuration
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
    /// Filter parameter as name=value; repeatable
    #[arg(long = "filter")]
    pub filters: Vec<String>,
    /// Container width in pixels
    #[arg(long, default_value_t = 360.0)]
    pub width: f32,
    /// Maximum number of pages to load
    #[arg(long, default_value_t = 1)]
    pub pages: usize,
    /// Items per page, overriding the config
    #[arg(long)]
    pub page_limit: Option<u32>,
    /// Simulate a server that re-sends the cursor item on every page
    #[arg(long)]
    pub resend_cursor_item: bool,
    /// Default log filter when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    pub log_level: String,
    /// Output the layout as JSON
    #[arg(long)]
    pub json: bool,
}

impl CliArgs {
    /// Each `--filter` is one `name=value` pair; values may contain commas.
    pub fn filter_key(&self) -> Result<FilterKey, FeedError> {
        self.filters.iter().try_fold(FilterKey::all(), |key, pair| {
            let Some((name, value)) = pair.split_once('=') else {
                return Err(FeedError::InvalidConfig(format!(
                    "filter `{pair}` is not of the form name=value"
                )));
            };
            let name = name.trim();
            if name.is_empty() {
                return Err(FeedError::InvalidConfig(format!(
                    "filter `{pair}` has an empty name"
                )));
            }
            Ok(key.with(name, value.trim()))
        })
    }
}
