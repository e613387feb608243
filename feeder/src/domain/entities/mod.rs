//! Domain entities
//!
//! Canonical models produced by the extraction/build core.

pub mod feed;
pub mod release;
pub mod repository;

pub use feed::{Feed, FeedItem};
pub use release::ReleaseRecord;
pub use repository::{default_repositories, RepositorySpec};
