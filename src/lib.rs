//! Incremental, deduplicating feed pagination with a two-column masonry
//! layout for heterogeneous content cards.
//!
//! Pages flow one way: a [`source::PageSource`] answers cursor-based
//! requests, the [`accumulator::FeedAccumulator`] merges them into a single
//! ordered, duplicate-free list, and the [`layout::ColumnBalancer`] assigns
//! that list to two columns using estimated card heights. The
//! [`controller::LoadMoreController`] is the only thing that starts a
//! request, and only one request per feed is ever in flight.
//!
//! [`feed::Feed`] ties the pieces together:
//!
//! ```no_run
//! use pinfeed::{builder::FeedBuilder, item::FilterKey, source::MemoryPageSource};
//!
//! # async fn demo() -> Result<(), pinfeed::error::FeedError> {
//! let mut feed = FeedBuilder::new()
//!     .source(MemoryPageSource::new(Vec::new()))
//!     .filter(FilterKey::all().with("kind", "image"))
//!     .page_limit(20)
//!     .build()?;
//!
//! feed.on_near_end(true).await?;
//! let columns = feed.layout_for_container(360.0);
//! println!("{} left, {} right", columns.left.len(), columns.right.len());
//! # Ok(())
//! # }
//! ```

pub mod accumulator;
pub mod builder;
pub mod config;
pub mod controller;
pub mod cursor;
pub mod error;
pub mod estimator;
pub mod feed;
pub mod item;
pub mod layout;
pub mod scroll;
pub mod source;

pub use accumulator::{FeedAccumulator, MergeOutcome, MergeStats, PageTicket};
pub use config::FeedConfig;
pub use controller::{LoadMoreController, LoadOutcome, LoadState, PendingLoad};
pub use cursor::{Page, PageCursor, PageRequest};
pub use error::FeedError;
pub use estimator::{EstimateHeight, EstimatorConfig, HeightEstimator};
pub use feed::Feed;
pub use item::{FilterKey, Item, ItemKind};
pub use layout::{layout_columns, ColumnBalancer, Columns};
pub use source::PageSource;
