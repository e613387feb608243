//! Feed sink port trait

use async_trait::async_trait;

use crate::domain::entities::Feed;
use crate::error::SinkError;

/// Sink collaborator: serializes and persists a feed
#[async_trait]
pub trait FeedSink: Send + Sync {
    /// Write `feed` under `target` (a repository id) and return where it went
    async fn write_feed(&self, target: &str, feed: &Feed) -> Result<String, SinkError>;
}
