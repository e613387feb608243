//! GitHub client port trait
//!
//! Defines the interface for querying a repository's tag references,
//! and the raw, API-shaped result the extractor consumes.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::GithubError;

/// Ref prefix selecting tag references
pub const TAG_REF_PREFIX: &str = "refs/tags/";

/// Unprocessed result of asking for a repository's tag references
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawReference {
    /// Repository web URL as returned by the API (e.g. `https://github.com/acme/widget`)
    pub repository_url: String,
    /// Descending by tag-commit date, as ordered by the API
    pub entries: Vec<RawRefEntry>,
}

/// One tag reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRefEntry {
    /// Name on the outer ref node (absent in the tag-name query shape)
    pub name: Option<String>,
    /// `None` when the API returned no target or an object kind we don't handle
    pub target: Option<RefTarget>,
}

/// The object a tag reference points to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefTarget {
    AnnotatedTag(AnnotatedTag),
    Commit(CommitTarget),
}

/// An annotated tag object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedTag {
    /// Tag name carried on the tag object itself
    pub name: Option<String>,
    pub tagger_date: Option<DateTime<Utc>>,
    /// Committed date of the commit the tag peels to
    pub commit_date: Option<DateTime<Utc>>,
}

/// A commit pointed to directly by a lightweight tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitTarget {
    pub committed_date: DateTime<Utc>,
}

#[cfg(test)]
impl RawRefEntry {
    pub fn annotated(name: &str, tagger_date: DateTime<Utc>) -> Self {
        Self {
            name: Some(name.to_string()),
            target: Some(RefTarget::AnnotatedTag(AnnotatedTag {
                name: None,
                tagger_date: Some(tagger_date),
                commit_date: None,
            })),
        }
    }

    pub fn lightweight(name: &str, committed_date: DateTime<Utc>) -> Self {
        Self {
            name: Some(name.to_string()),
            target: Some(RefTarget::Commit(CommitTarget { committed_date })),
        }
    }
}

/// Query collaborator: fetches tag references for one repository
#[async_trait]
pub trait GithubClient: Send + Sync {
    /// List up to `count` refs under `ref_prefix`, newest tag-commit date first
    async fn list_tag_refs(
        &self,
        owner: &str,
        name: &str,
        ref_prefix: &str,
        count: u32,
    ) -> Result<RawReference, GithubError>;
}
