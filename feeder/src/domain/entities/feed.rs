//! Feed entity
//!
//! A syndication document independent of its serialized encoding.
//! Renderers in `crate::feed` turn it into Atom or RSS.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A release feed for one tracked repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    pub title: String,
    pub link_href: String,
    pub description: String,
    /// Shared by every feed built in the same run
    pub created_at: DateTime<Utc>,
    /// Newest first, in the order the API returned the tags
    pub items: Vec<FeedItem>,
}

/// One release entry in a feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub title: String,
    pub link_href: String,
    pub created_at: DateTime<Utc>,
}
