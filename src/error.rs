use thiserror::Error;

/// Error types that can occur while paging through and laying out a feed.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Transient failure reported by the page source
    #[error("Fetch error: {0}")]
    Fetch(String),
    /// Page payload that cannot be interpreted
    #[error("Malformed page: {0}")]
    MalformedPage(String),
    /// Invalid builder or configuration values
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    /// JSON serialization/deserialization errors
    #[error("JSON parse error: {0}")]
    JsonError(String),
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::JsonError(format!(
            "{} at line {} column {}",
            err,
            err.line(),
            err.column()
        ))
    }
}
