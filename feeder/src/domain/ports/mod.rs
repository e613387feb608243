//! Domain ports (traits)
//!
//! Port traits define interfaces that the core requires.
//! Adapters provide concrete implementations of these traits.

pub mod github;
pub mod sink;

pub use github::{
    AnnotatedTag, CommitTarget, GithubClient, RawRefEntry, RawReference, RefTarget,
    TAG_REF_PREFIX,
};
pub use sink::FeedSink;
