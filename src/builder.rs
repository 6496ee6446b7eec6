#[path = "builder/state.rs"]
mod state;

#[path = "builder/feed_builder.rs"]
mod feed_builder;

pub use feed_builder::FeedBuilder;
