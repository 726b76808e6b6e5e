//! Commits adapter
//!
//! Reads push payloads stored as JSON, implementing the `CommitExpander` port.

pub mod push;

pub use push::JsonCommitExpander;
