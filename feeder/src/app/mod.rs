//! Application layer
//!
//! Contains the pure extraction/build core and the service that
//! orchestrates it against the query and sink collaborators.

pub mod feed_builder;
pub mod feed_service;
pub mod release_extractor;

pub use feed_builder::build_feed;
pub use feed_service::{FeedService, RepoOutcome, RunReport};
pub use release_extractor::extract_releases;
