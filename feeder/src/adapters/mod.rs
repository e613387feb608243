//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod filesystem;
pub mod github;

pub use filesystem::FileFeedSink;
pub use github::GithubClientImpl;
