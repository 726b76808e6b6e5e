//! Feed item entity
//!
//! One syndication entry built from one action. Titles, descriptions and
//! content are already HTML-safe; the serializer writes them as-is.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedAuthor {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    /// Decimal id of the source action
    pub id: String,
    pub title: String,
    pub link: String,
    pub author: FeedAuthor,
    pub description: String,
    pub content: String,
    pub created: DateTime<Utc>,
}
