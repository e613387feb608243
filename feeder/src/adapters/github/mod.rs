//! GitHub adapter
//!
//! Implementation of the tag-reference query against the GitHub GraphQL API.

pub mod client;

pub use client::GithubClientImpl;
