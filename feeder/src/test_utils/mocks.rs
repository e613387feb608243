//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::Feed;
use crate::domain::ports::{FeedSink, GithubClient, RawReference};
use crate::error::{GithubError, SinkError};

// ============================================================================
// Mock GitHub Client
// ============================================================================

#[derive(Default)]
pub struct MockGithubClient {
    refs: Arc<RwLock<HashMap<String, RawReference>>>,
    requests: Arc<RwLock<Vec<(String, String, u32)>>>,
}

impl MockGithubClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the tag refs returned for `owner/name`
    pub fn with_refs(self, owner: &str, name: &str, raw: RawReference) -> Self {
        self.refs
            .write()
            .unwrap()
            .insert(format!("{}/{}", owner, name), raw);
        self
    }

    /// Every `(owner/name, ref_prefix, count)` requested so far
    pub fn requests(&self) -> Vec<(String, String, u32)> {
        self.requests.read().unwrap().clone()
    }
}

#[async_trait]
impl GithubClient for MockGithubClient {
    async fn list_tag_refs(
        &self,
        owner: &str,
        name: &str,
        ref_prefix: &str,
        count: u32,
    ) -> Result<RawReference, GithubError> {
        let key = format!("{}/{}", owner, name);
        self.requests
            .write()
            .unwrap()
            .push((key.clone(), ref_prefix.to_string(), count));

        self.refs
            .read()
            .unwrap()
            .get(&key)
            .cloned()
            .ok_or_else(|| GithubError::RepoNotFound {
                owner: owner.to_string(),
                repo: name.to_string(),
            })
    }
}

// ============================================================================
// In-Memory Feed Sink
// ============================================================================

#[derive(Default)]
pub struct InMemoryFeedSink {
    feeds: Arc<RwLock<HashMap<String, Feed>>>,
    order: Arc<RwLock<Vec<String>>>,
    fail: bool,
}

impl InMemoryFeedSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose writes always fail
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn feed(&self, target: &str) -> Option<Feed> {
        self.feeds.read().unwrap().get(target).cloned()
    }

    /// Targets in the order they were written
    pub fn written(&self) -> Vec<String> {
        self.order.read().unwrap().clone()
    }
}

#[async_trait]
impl FeedSink for InMemoryFeedSink {
    async fn write_feed(&self, target: &str, feed: &Feed) -> Result<String, SinkError> {
        if self.fail {
            return Err(SinkError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only sink",
            )));
        }

        self.feeds
            .write()
            .unwrap()
            .insert(target.to_string(), feed.clone());
        self.order.write().unwrap().push(target.to_string());

        Ok(format!("memory://{}", target))
    }
}
