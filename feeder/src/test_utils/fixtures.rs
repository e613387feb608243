//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{DateTime, Utc};

use crate::domain::entities::{Feed, FeedItem, ReleaseRecord, RepositorySpec};
use crate::domain::ports::{RawRefEntry, RawReference};

/// Parse an RFC 3339 timestamp into UTC
pub fn date(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .unwrap_or_else(|e| panic!("bad test date {s}: {e}"))
        .with_timezone(&Utc)
}

/// The `acme/widget` repository
pub fn test_repository() -> RepositorySpec {
    RepositorySpec::new("widget", "Widget", "acme", "widget")
}

/// One annotated and one lightweight tag, newest first
pub fn test_raw_reference() -> RawReference {
    RawReference {
        repository_url: "https://github.com/acme/widget".to_string(),
        entries: vec![
            RawRefEntry::annotated("v2.0.0", date("2024-01-10T00:00:00Z")),
            RawRefEntry::lightweight("v1.9.0", date("2023-11-05T00:00:00Z")),
        ],
    }
}

/// A release of `acme/widget`
pub fn test_record(name: &str, timestamp: &str) -> ReleaseRecord {
    ReleaseRecord {
        name: name.to_string(),
        timestamp: date(timestamp),
        url: format!("https://github.com/acme/widget/releases/tag/{}", name),
    }
}

/// The feed built from `test_raw_reference`
pub fn test_feed() -> Feed {
    Feed {
        title: "Widget releases".to_string(),
        link_href: "https://github.com/acme/widget/tags".to_string(),
        description: "Widget releases".to_string(),
        created_at: date("2024-02-01T00:00:00Z"),
        items: vec![
            FeedItem {
                title: "v2.0.0".to_string(),
                link_href: "https://github.com/acme/widget/releases/tag/v2.0.0".to_string(),
                created_at: date("2024-01-10T00:00:00Z"),
            },
            FeedItem {
                title: "v1.9.0".to_string(),
                link_href: "https://github.com/acme/widget/releases/tag/v1.9.0".to_string(),
                created_at: date("2023-11-05T00:00:00Z"),
            },
        ],
    }
}
