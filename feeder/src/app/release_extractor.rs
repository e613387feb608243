//! Release extractor
//!
//! Turns the raw tag references of one repository into release records.
//! Entries map one-to-one onto records in input order; nothing is sorted,
//! filtered or deduplicated here.

use chrono::{DateTime, Utc};

use crate::domain::entities::ReleaseRecord;
use crate::domain::ports::{RawRefEntry, RawReference, RefTarget};
use crate::error::DomainError;

/// Extract one release record per raw entry
pub fn extract_releases(raw: &RawReference) -> Result<Vec<ReleaseRecord>, DomainError> {
    let base_url = normalize_base_url(&raw.repository_url)?;

    raw.entries
        .iter()
        .enumerate()
        .map(|(index, entry)| extract_release(base_url, index, entry))
        .collect()
}

fn extract_release(
    base_url: &str,
    index: usize,
    entry: &RawRefEntry,
) -> Result<ReleaseRecord, DomainError> {
    let name = release_name(index, entry)?;
    let timestamp = release_timestamp(index, entry)?;

    Ok(ReleaseRecord {
        url: release_url(base_url, &name),
        name,
        timestamp,
    })
}

/// The tag object's own name wins over the ref name
fn release_name(index: usize, entry: &RawRefEntry) -> Result<String, DomainError> {
    let tag_name = match &entry.target {
        Some(RefTarget::AnnotatedTag(tag)) => non_empty(tag.name.as_deref()),
        _ => None,
    };

    tag_name
        .or_else(|| non_empty(entry.name.as_deref()))
        .map(str::to_string)
        .ok_or_else(|| DomainError::extraction(index, "neither ref nor tag carries a name"))
}

fn release_timestamp(index: usize, entry: &RawRefEntry) -> Result<DateTime<Utc>, DomainError> {
    match &entry.target {
        Some(RefTarget::AnnotatedTag(tag)) => match tag.tagger_date.filter(|d| !is_zero(d)) {
            Some(tagger_date) => Ok(tagger_date),
            // Tags created by automation sometimes lack tagger metadata
            None => tag.commit_date.filter(|d| !is_zero(d)).ok_or_else(|| {
                DomainError::extraction(index, "annotated tag has neither tagger nor commit date")
            }),
        },
        Some(RefTarget::Commit(commit)) => Ok(commit.committed_date),
        None => Err(DomainError::extraction(
            index,
            "target is neither an annotated tag nor a commit",
        )),
    }
}

/// Absent dates come back from the API as year 1 or the Unix epoch
fn is_zero(date: &DateTime<Utc>) -> bool {
    date.timestamp() <= 0
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Validate a repository base URL and strip any trailing slash
pub(crate) fn normalize_base_url(url: &str) -> Result<&str, DomainError> {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.starts_with("https://") || trimmed.starts_with("http://") {
        Ok(trimmed)
    } else {
        Err(DomainError::ContractViolation(format!(
            "invalid repository base url: {:?}",
            url
        )))
    }
}

pub(crate) fn release_url(base_url: &str, name: &str) -> String {
    format!("{}/releases/tag/{}", base_url, name)
}
