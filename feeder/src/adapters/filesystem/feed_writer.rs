//! File-backed feed sink

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::entities::Feed;
use crate::domain::ports::FeedSink;
use crate::error::SinkError;
use crate::feed::FeedFormat;

/// Writes each feed to `<output_dir>/<target>.xml`
pub struct FileFeedSink {
    output_dir: PathBuf,
    format: FeedFormat,
}

impl FileFeedSink {
    pub fn new(output_dir: impl Into<PathBuf>, format: FeedFormat) -> Self {
        Self {
            output_dir: output_dir.into(),
            format,
        }
    }

    fn path_for(&self, target: &str) -> PathBuf {
        self.output_dir.join(format!("{}.xml", target))
    }
}

#[async_trait]
impl FeedSink for FileFeedSink {
    async fn write_feed(&self, target: &str, feed: &Feed) -> Result<String, SinkError> {
        let bytes = self.format.render(feed)?;
        let path = self.path_for(target);

        tokio::fs::create_dir_all(&self.output_dir).await?;
        tracing::debug!(filename = %path.display(), format = %self.format, "Writing feed file");
        tokio::fs::write(&path, bytes).await?;

        Ok(path.display().to_string())
    }
}
