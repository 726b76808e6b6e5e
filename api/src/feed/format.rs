//! Feed format detection
//!
//! A request asks for a feed either by suffixing the resource name with
//! `.rss` / `.atom` or by sending the matching MIME type in `Accept`.

use axum::http::{header, HeaderMap};
use serde::Serialize;

const RSS_SUFFIX: &str = ".rss";
const ATOM_SUFFIX: &str = ".atom";
const RSS_MIME: &str = "application/rss+xml";
const ATOM_MIME: &str = "application/atom+xml";

/// Syndication encodings a feed can be served in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedFormat {
    Rss,
    Atom,
}

impl FeedFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            FeedFormat::Rss => "rss",
            FeedFormat::Atom => "atom",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            FeedFormat::Rss => "application/rss+xml;charset=utf-8",
            FeedFormat::Atom => "application/atom+xml;charset=utf-8",
        }
    }
}

impl std::fmt::Display for FeedFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of format detection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRequest {
    /// Resource name with any format suffix removed
    pub name: String,
    pub format: Option<FeedFormat>,
}

impl FeedRequest {
    pub fn is_feed(&self) -> bool {
        self.format.is_some()
    }
}

/// Decide whether `name` + `accept` ask for a feed. Suffixes and MIME types
/// are matched literally; RSS is checked before Atom.
pub fn detect_feed_type(name: &str, accept: &str) -> FeedRequest {
    if let Some(stripped) = name.strip_suffix(RSS_SUFFIX) {
        return FeedRequest {
            name: stripped.to_string(),
            format: Some(FeedFormat::Rss),
        };
    }
    if accept.contains(RSS_MIME) {
        return FeedRequest {
            name: name.to_string(),
            format: Some(FeedFormat::Rss),
        };
    }
    if let Some(stripped) = name.strip_suffix(ATOM_SUFFIX) {
        return FeedRequest {
            name: stripped.to_string(),
            format: Some(FeedFormat::Atom),
        };
    }
    if accept.contains(ATOM_MIME) {
        return FeedRequest {
            name: name.to_string(),
            format: Some(FeedFormat::Atom),
        };
    }
    FeedRequest {
        name: name.to_string(),
        format: None,
    }
}

/// Format detection against a request's `Accept` header
pub fn detect_feed_type_from_headers(name: &str, headers: &HeaderMap) -> FeedRequest {
    let accept = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    detect_feed_type(name, accept)
}
