//! Feed module
//!
//! Stateless helpers shared by feed generation: link building, HTML
//! escaping, and detecting which syndication format a request wants.

pub mod format;
pub mod html;
pub mod links;

pub use format::{detect_feed_type_from_headers, FeedFormat};
pub use html::escape_html;
