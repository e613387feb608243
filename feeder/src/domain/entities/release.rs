//! Release record entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single release derived from one tag reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseRecord {
    /// Tag/release label
    pub name: String,
    /// Tagger date, or the commit date when the tag has none
    pub timestamp: DateTime<Utc>,
    /// `<repository url>/releases/tag/<name>`
    pub url: String,
}
