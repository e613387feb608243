//! Domain layer
//!
//! Contains pure release/feed models with no external dependencies.
//! - `entities`: Domain models representing tracked repositories, releases and feeds
//! - `ports`: Trait definitions for the query and sink collaborators

pub mod entities;
pub mod ports;
