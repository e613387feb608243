//! Feed module
//!
//! Syndication rendering of the format-independent `Feed` model.

pub mod atom;
pub mod rss;
mod xml;

use crate::domain::entities::Feed;
use crate::error::SinkError;

pub use atom::render_atom;
pub use rss::render_rss;

/// Output encoding for written feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedFormat {
    #[default]
    Atom,
    Rss,
}

impl FeedFormat {
    /// Render `feed` in this format
    pub fn render(self, feed: &Feed) -> Result<Vec<u8>, SinkError> {
        match self {
            FeedFormat::Atom => render_atom(feed),
            FeedFormat::Rss => render_rss(feed),
        }
    }
}

impl std::fmt::Display for FeedFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedFormat::Atom => write!(f, "atom"),
            FeedFormat::Rss => write!(f, "rss"),
        }
    }
}

impl std::str::FromStr for FeedFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "atom" => Ok(FeedFormat::Atom),
            "rss" => Ok(FeedFormat::Rss),
            _ => Err(format!("Unknown feed format: {}", s)),
        }
    }
}
