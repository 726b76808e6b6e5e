//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod commits;
pub mod markup;
pub mod translator;

pub use commits::{CommitExpander, PushCommits};
pub use markup::{MarkupRenderer, RenderContext};
pub use translator::Translator;
