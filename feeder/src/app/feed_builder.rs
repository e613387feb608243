//! Feed builder
//!
//! Shapes release records into a format-independent feed.

use chrono::{DateTime, Utc};

use super::release_extractor::normalize_base_url;
use crate::domain::entities::{Feed, FeedItem, ReleaseRecord, RepositorySpec};
use crate::error::DomainError;

/// Build the feed for one repository.
///
/// `created_at` is supplied by the caller so that identical inputs always
/// produce identical feeds.
pub fn build_feed(
    spec: &RepositorySpec,
    base_url: &str,
    records: &[ReleaseRecord],
    created_at: DateTime<Utc>,
) -> Result<Feed, DomainError> {
    if spec.id.trim().is_empty() {
        return Err(DomainError::ContractViolation(
            "repository id must not be empty".to_string(),
        ));
    }
    if spec.display_language.trim().is_empty() {
        return Err(DomainError::ContractViolation(format!(
            "repository {} has no display language",
            spec.id
        )));
    }
    let base_url = normalize_base_url(base_url)?;

    let title = format!("{} releases", spec.display_language);

    Ok(Feed {
        description: title.clone(),
        title,
        link_href: format!("{}/tags", base_url),
        created_at,
        items: records.iter().map(feed_item).collect(),
    })
}

fn feed_item(record: &ReleaseRecord) -> FeedItem {
    FeedItem {
        title: record.name.clone(),
        link_href: record.url.clone(),
        created_at: record.timestamp,
    }
}
