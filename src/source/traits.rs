use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cursor::{Page, PageRequest},
    error::FeedError,
};

/// The paginated query endpoint the feed reads from.
///
/// Implementations must return items strictly after `request.cursor` in
/// `(created_at desc, id desc)` order, sorted the same way. A cursor that no
/// longer names an existing item still marks a valid position. Retry policy,
/// if any, lives in the implementation.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, request: &PageRequest) -> Result<Page, FeedError>;
}

#[async_trait]
impl<T: PageSource + ?Sized> PageSource for Box<T> {
    async fn fetch_page(&self, request: &PageRequest) -> Result<Page, FeedError> {
        (**self).fetch_page(request).await
    }
}

#[async_trait]
impl<T: PageSource + ?Sized> PageSource for Arc<T> {
    async fn fetch_page(&self, request: &PageRequest) -> Result<Page, FeedError> {
        (**self).fetch_page(request).await
    }
}
