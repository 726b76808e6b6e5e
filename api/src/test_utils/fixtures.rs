//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use std::sync::Arc;

use chrono::{TimeZone, Utc};

use crate::adapters::{JsonCommitExpander, LocaleCatalog, MarkdownRenderer};
use crate::app::{FeedService, FeedSettings};
use crate::domain::entities::action::OpType;
use crate::domain::entities::{ActUser, ActionRecord, RepoRef};
use crate::AppState;

/// Create a test user with a public email
pub fn test_user() -> ActUser {
    ActUser {
        name: "alice".to_string(),
        full_name: None,
        email: "alice@example.com".to_string(),
        keep_email_private: false,
    }
}

/// Create a test repository reference
pub fn test_repo() -> RepoRef {
    RepoRef::new("alice", "demo")
}

/// Create a record of the given type on `alice/demo`'s `main` branch.
/// Content is empty; set it for types that read positional fields.
pub fn test_record(op: OpType) -> ActionRecord {
    ActionRecord {
        id: 1,
        op_type: op.code(),
        act_user: test_user(),
        repo: test_repo(),
        ref_name: "refs/heads/main".to_string(),
        content: String::new(),
        comment_link: None,
        issue: None,
        created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
    }
}

/// Application state wired with the real adapters and no sub-path
pub fn test_state() -> AppState {
    AppState {
        feed_service: Arc::new(FeedService::new(
            Arc::new(LocaleCatalog::english()),
            Arc::new(MarkdownRenderer::default()),
            Arc::new(JsonCommitExpander),
            FeedSettings {
                app_sub_url: String::new(),
                no_reply_domain: "noreply.localhost".to_string(),
            },
        )),
    }
}
