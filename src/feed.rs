#[path = "feed/wrapper.rs"]
mod wrapper;

pub use wrapper::Feed;
