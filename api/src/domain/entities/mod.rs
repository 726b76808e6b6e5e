//! Domain entities
//!
//! Activity records coming in, feed items going out.

pub mod action;
pub mod actor;
pub mod feed_item;
pub mod repo;

pub use action::{Action, ActionKind, ActionRecord, IssueComment, IssueRef};
pub use actor::ActUser;
pub use feed_item::{FeedAuthor, FeedItem};
pub use repo::RepoRef;
