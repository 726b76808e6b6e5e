//! Action domain entity
//!
//! An action is one row of a repository's activity log. Records arrive in
//! their stored shape (`ActionRecord`) and are decoded once into a typed
//! `Action` whose `ActionKind` carries only the fields that kind of activity
//! defines. Nothing downstream indexes the raw positional content.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ActUser, RepoRef};
use crate::error::FeedError;

const BRANCH_PREFIX: &str = "refs/heads/";
const TAG_PREFIX: &str = "refs/tags/";

/// Title and body of the issue or pull request an action points at
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueSummary {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// An activity record in its stored shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRecord {
    pub id: i64,
    pub op_type: i64,
    pub act_user: ActUser,
    pub repo: RepoRef,
    /// Raw git reference (`refs/heads/main`, `refs/tags/v1.0`, or a bare name)
    #[serde(default)]
    pub ref_name: String,
    /// Op-dependent payload: `number|title|extra` for issue activity,
    /// push JSON for commits, the old name for renames
    #[serde(default)]
    pub content: String,
    /// Link to the comment that produced this action, if there is one
    #[serde(default)]
    pub comment_link: Option<String>,
    /// Issue or pull request referenced by the action, loaded by the caller
    #[serde(default)]
    pub issue: Option<IssueSummary>,
    pub created_at: DateTime<Utc>,
}

impl ActionRecord {
    /// Branch name with any `refs/heads/` prefix removed
    pub fn branch(&self) -> &str {
        self.ref_name
            .strip_prefix(BRANCH_PREFIX)
            .unwrap_or(&self.ref_name)
    }

    /// Tag name with any `refs/tags/` prefix removed
    pub fn tag(&self) -> &str {
        self.ref_name.strip_prefix(TAG_PREFIX).unwrap_or(&self.ref_name)
    }

    /// Positional issue fields packed into `content`, at most three
    pub fn issue_infos(&self) -> Vec<&str> {
        self.content.splitn(3, '|').collect()
    }

    fn issue_title(&self) -> String {
        self.issue
            .as_ref()
            .map(|i| i.title.clone())
            .unwrap_or_default()
    }

    fn issue_content(&self) -> String {
        self.issue
            .as_ref()
            .map(|i| i.content.clone())
            .unwrap_or_default()
    }
}

/// Activity type codes as they appear in stored records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpType {
    CreateRepo,
    RenameRepo,
    StarRepo,
    WatchRepo,
    CommitRepo,
    CreateIssue,
    CreatePullRequest,
    TransferRepo,
    PushTag,
    CommentIssue,
    MergePullRequest,
    CloseIssue,
    ReopenIssue,
    ClosePullRequest,
    ReopenPullRequest,
    DeleteTag,
    DeleteBranch,
    MirrorSyncPush,
    MirrorSyncCreate,
    MirrorSyncDelete,
    ApprovePullRequest,
    RejectPullRequest,
    CommentPull,
    PublishRelease,
    PullReviewDismissed,
}

#[cfg(test)]
impl OpType {
    pub fn code(self) -> i64 {
        match self {
            OpType::CreateRepo => 1,
            OpType::RenameRepo => 2,
            OpType::StarRepo => 3,
            OpType::WatchRepo => 4,
            OpType::CommitRepo => 5,
            OpType::CreateIssue => 6,
            OpType::CreatePullRequest => 7,
            OpType::TransferRepo => 8,
            OpType::PushTag => 9,
            OpType::CommentIssue => 10,
            OpType::MergePullRequest => 11,
            OpType::CloseIssue => 12,
            OpType::ReopenIssue => 13,
            OpType::ClosePullRequest => 14,
            OpType::ReopenPullRequest => 15,
            OpType::DeleteTag => 16,
            OpType::DeleteBranch => 17,
            OpType::MirrorSyncPush => 18,
            OpType::MirrorSyncCreate => 19,
            OpType::MirrorSyncDelete => 20,
            OpType::ApprovePullRequest => 21,
            OpType::RejectPullRequest => 22,
            OpType::CommentPull => 23,
            OpType::PublishRelease => 24,
            OpType::PullReviewDismissed => 25,
        }
    }
}

impl TryFrom<i64> for OpType {
    type Error = FeedError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        let op = match code {
            1 => OpType::CreateRepo,
            2 => OpType::RenameRepo,
            3 => OpType::StarRepo,
            4 => OpType::WatchRepo,
            5 => OpType::CommitRepo,
            6 => OpType::CreateIssue,
            7 => OpType::CreatePullRequest,
            8 => OpType::TransferRepo,
            9 => OpType::PushTag,
            10 => OpType::CommentIssue,
            11 => OpType::MergePullRequest,
            12 => OpType::CloseIssue,
            13 => OpType::ReopenIssue,
            14 => OpType::ClosePullRequest,
            15 => OpType::ReopenPullRequest,
            16 => OpType::DeleteTag,
            17 => OpType::DeleteBranch,
            18 => OpType::MirrorSyncPush,
            19 => OpType::MirrorSyncCreate,
            20 => OpType::MirrorSyncDelete,
            21 => OpType::ApprovePullRequest,
            22 => OpType::RejectPullRequest,
            23 => OpType::CommentPull,
            24 => OpType::PublishRelease,
            25 => OpType::PullReviewDismissed,
            other => return Err(FeedError::UnknownActionType(other)),
        };
        Ok(op)
    }
}

/// An issue or pull request by number and title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRef {
    pub number: String,
    pub title: String,
}

/// A comment-like activity on an issue or pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueComment {
    pub number: String,
    pub issue_title: String,
    /// Markdown body; empty when the activity carried no text
    pub body: String,
}

/// What happened, with exactly the data each kind of activity defines
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionKind {
    CreateRepo,
    RenameRepo { old_name: String },
    StarRepo,
    WatchRepo,
    /// `push` is the raw push payload; empty means a branch was created
    CommitRepo { branch: String, push: String },
    /// `summary` is every stored info field joined with `#`
    CreateIssue {
        issue: IssueRef,
        summary: String,
        body: String,
    },
    CreatePullRequest {
        issue: IssueRef,
        summary: String,
        body: String,
    },
    TransferRepo { old_path: String },
    PushTag { tag: String },
    CommentIssue(IssueComment),
    MergePullRequest { number: String, reference: String },
    CloseIssue(IssueRef),
    ReopenIssue(IssueRef),
    ClosePullRequest(IssueRef),
    ReopenPullRequest(IssueRef),
    DeleteTag { tag: String },
    DeleteBranch { branch: String },
    MirrorSyncPush { branch: String, push: String },
    MirrorSyncCreate { branch: String },
    MirrorSyncDelete { branch: String },
    ApprovePullRequest(IssueComment),
    RejectPullRequest(IssueComment),
    CommentPull(IssueComment),
    PublishRelease { tag: String, title: String },
    PullReviewDismissed {
        number: String,
        reviewer: String,
        reason: String,
    },
}

/// A decoded activity record
#[derive(Debug, Clone)]
pub struct Action {
    pub id: i64,
    pub act_user: ActUser,
    pub repo: RepoRef,
    pub comment_link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub kind: ActionKind,
}

/// Positional field `index` of the issue infos, or a decode error naming it
fn info(record: &ActionRecord, infos: &[&str], index: usize) -> Result<String, FeedError> {
    infos
        .get(index)
        .map(|s| s.to_string())
        .ok_or_else(|| FeedError::MalformedAction {
            id: record.id,
            reason: format!("missing issue info field {}", index),
        })
}

impl TryFrom<&ActionRecord> for Action {
    type Error = FeedError;

    fn try_from(record: &ActionRecord) -> Result<Self, Self::Error> {
        let op = OpType::try_from(record.op_type)?;
        let infos = record.issue_infos();

        let issue_ref = || -> Result<IssueRef, FeedError> {
            Ok(IssueRef {
                number: info(record, &infos, 0)?,
                title: record.issue_title(),
            })
        };
        let comment = || -> Result<IssueComment, FeedError> {
            Ok(IssueComment {
                number: info(record, &infos, 0)?,
                issue_title: record.issue_title(),
                body: info(record, &infos, 1)?,
            })
        };

        let kind = match op {
            OpType::CreateRepo => ActionKind::CreateRepo,
            OpType::RenameRepo => ActionKind::RenameRepo {
                old_name: record.content.clone(),
            },
            OpType::StarRepo => ActionKind::StarRepo,
            OpType::WatchRepo => ActionKind::WatchRepo,
            OpType::CommitRepo => ActionKind::CommitRepo {
                branch: record.branch().to_string(),
                push: record.content.clone(),
            },
            OpType::CreateIssue => ActionKind::CreateIssue {
                issue: issue_ref()?,
                summary: infos.join("#"),
                body: record.issue_content(),
            },
            OpType::CreatePullRequest => ActionKind::CreatePullRequest {
                issue: issue_ref()?,
                summary: infos.join("#"),
                body: record.issue_content(),
            },
            OpType::TransferRepo => ActionKind::TransferRepo {
                old_path: record.content.clone(),
            },
            OpType::PushTag => ActionKind::PushTag {
                tag: record.tag().to_string(),
            },
            OpType::CommentIssue => ActionKind::CommentIssue(comment()?),
            OpType::MergePullRequest => ActionKind::MergePullRequest {
                number: info(record, &infos, 0)?,
                reference: info(record, &infos, 1)?,
            },
            OpType::CloseIssue => ActionKind::CloseIssue(issue_ref()?),
            OpType::ReopenIssue => ActionKind::ReopenIssue(issue_ref()?),
            OpType::ClosePullRequest => ActionKind::ClosePullRequest(issue_ref()?),
            OpType::ReopenPullRequest => ActionKind::ReopenPullRequest(issue_ref()?),
            OpType::DeleteTag => ActionKind::DeleteTag {
                tag: record.tag().to_string(),
            },
            OpType::DeleteBranch => ActionKind::DeleteBranch {
                branch: record.branch().to_string(),
            },
            OpType::MirrorSyncPush => ActionKind::MirrorSyncPush {
                branch: record.branch().to_string(),
                push: record.content.clone(),
            },
            OpType::MirrorSyncCreate => ActionKind::MirrorSyncCreate {
                branch: record.branch().to_string(),
            },
            OpType::MirrorSyncDelete => ActionKind::MirrorSyncDelete {
                branch: record.branch().to_string(),
            },
            OpType::ApprovePullRequest => ActionKind::ApprovePullRequest(comment()?),
            OpType::RejectPullRequest => ActionKind::RejectPullRequest(comment()?),
            OpType::CommentPull => ActionKind::CommentPull(comment()?),
            // Releases are stored against the tag ref, with the release title as content
            OpType::PublishRelease => ActionKind::PublishRelease {
                tag: record.branch().to_string(),
                title: record.content.clone(),
            },
            OpType::PullReviewDismissed => ActionKind::PullReviewDismissed {
                number: info(record, &infos, 0)?,
                reviewer: info(record, &infos, 1)?,
                reason: info(record, &infos, 2)?,
            },
        };

        Ok(Action {
            id: record.id,
            act_user: record.act_user.clone(),
            repo: record.repo.clone(),
            comment_link: record.comment_link.clone(),
            created_at: record.created_at,
            kind,
        })
    }
}
