//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod commits;
pub mod locale;
pub mod markup;

pub use commits::JsonCommitExpander;
pub use locale::LocaleCatalog;
pub use markup::MarkdownRenderer;
