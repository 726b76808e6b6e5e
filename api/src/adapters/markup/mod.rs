//! Markup adapter
//!
//! CommonMark rendering implementing the `MarkupRenderer` port.

pub mod markdown;

pub use markdown::MarkdownRenderer;
