//! Filesystem adapter
//!
//! Writes rendered feeds to a local output directory.

pub mod feed_writer;

pub use feed_writer::FileFeedSink;
