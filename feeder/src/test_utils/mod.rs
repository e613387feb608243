//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! Mocks are plain in-memory structs so tests control exactly what the
//! query and sink collaborators return.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
