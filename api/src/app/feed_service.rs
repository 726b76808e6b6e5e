//! Feed service
//!
//! Turns a repository activity log into syndication feed items. Each action
//! gets a link, a localized title, and a description/content pair built
//! according to what kind of activity it is.

use std::sync::Arc;

use crate::domain::entities::{
    Action, ActionKind, ActionRecord, FeedAuthor, FeedItem, IssueComment, IssueRef,
};
use crate::domain::ports::{CommitExpander, MarkupRenderer, RenderContext, Translator};
use crate::error::FeedError;
use crate::feed::{escape_html, links};

const REVIEW_DISMISSED_REASON_KEY: &str = "action.review_dismissed_reason";

/// Instance-wide settings that shape links and author addresses
#[derive(Debug, Clone, Default)]
pub struct FeedSettings {
    /// Path prefix the application is served under, without a trailing slash
    pub app_sub_url: String,
    /// Domain for placeholder addresses of users hiding their email
    pub no_reply_domain: String,
}

/// Service for converting actions into feed items
pub struct FeedService<T, R, C>
where
    T: Translator,
    R: MarkupRenderer,
    C: CommitExpander,
{
    translator: Arc<T>,
    renderer: Arc<R>,
    commits: Arc<C>,
    settings: FeedSettings,
}

/// Per-action values every derivation step needs
struct ActionContext<'a> {
    action: &'a Action,
    repo_link: String,
    short_path: String,
}

impl<T, R, C> FeedService<T, R, C>
where
    T: Translator,
    R: MarkupRenderer,
    C: CommitExpander,
{
    pub fn new(
        translator: Arc<T>,
        renderer: Arc<R>,
        commits: Arc<C>,
        settings: FeedSettings,
    ) -> Self {
        Self {
            translator,
            renderer,
            commits,
            settings,
        }
    }

    /// Convert activity records into feed items, preserving order.
    ///
    /// Records are all decoded before any item is built, so an unknown or
    /// malformed record fails the whole batch without doing partial work.
    pub fn actions_to_items(&self, records: &[ActionRecord]) -> Result<Vec<FeedItem>, FeedError> {
        let actions = records
            .iter()
            .map(Action::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let items: Vec<FeedItem> = actions.iter().map(|a| self.action_to_item(a)).collect();
        tracing::debug!(count = items.len(), "Converted actions to feed items");
        Ok(items)
    }

    fn action_to_item(&self, action: &Action) -> FeedItem {
        let ctx = ActionContext {
            action,
            repo_link: action.repo.link(&self.settings.app_sub_url),
            short_path: action.repo.short_path(),
        };

        let mut link = action.comment_link.clone();
        let title = format!(
            "{} {}",
            action.act_user.display_name(),
            self.title(&ctx, &mut link)
        );
        let (description, content) = self.describe(&ctx, &mut link);

        FeedItem {
            id: action.id.to_string(),
            title,
            link: link.unwrap_or_default(),
            author: FeedAuthor {
                name: action.act_user.display_name().to_string(),
                email: action
                    .act_user
                    .email_for_feed(&self.settings.no_reply_domain),
            },
            description,
            content,
            created: action.created_at,
        }
    }

    /// Localized title body, deriving the item link along the way
    fn title(&self, ctx: &ActionContext<'_>, link: &mut Option<String>) -> String {
        let repo_link = ctx.repo_link.as_str();
        let short_path = ctx.short_path.as_str();

        match &ctx.action.kind {
            ActionKind::CreateRepo => {
                *link = Some(repo_link.to_string());
                self.tr("action.create_repo", &[repo_link, short_path])
            }
            ActionKind::RenameRepo { old_name } => {
                *link = Some(repo_link.to_string());
                self.tr("action.rename_repo", &[old_name, repo_link, short_path])
            }
            ActionKind::StarRepo => {
                *link = Some(repo_link.to_string());
                let full_path = ctx.action.repo.full_path();
                self.tr("action.starred_repo", &[repo_link, &full_path])
            }
            ActionKind::WatchRepo => {
                *link = Some(repo_link.to_string());
                let full_path = ctx.action.repo.full_path();
                self.tr("action.watched_repo", &[repo_link, &full_path])
            }
            ActionKind::CommitRepo { branch, push } => {
                let branch_link = links::branch_link(repo_link, branch);
                let key = if push.is_empty() {
                    "action.create_branch"
                } else {
                    "action.commit_repo"
                };
                let title = self.tr(key, &[repo_link, &branch_link, branch, short_path]);
                *link = Some(branch_link);
                title
            }
            ActionKind::CreateIssue { issue, .. } => {
                let issue_link = links::issue_link(repo_link, &issue.number);
                let title = self.tr(
                    "action.create_issue",
                    &[&issue_link, &issue.number, short_path],
                );
                *link = Some(issue_link);
                title
            }
            ActionKind::CreatePullRequest { issue, .. } => {
                let pull_link = links::pull_link(repo_link, &issue.number);
                let title = self.tr(
                    "action.create_pull_request",
                    &[&pull_link, &issue.number, short_path],
                );
                *link = Some(pull_link);
                title
            }
            ActionKind::TransferRepo { old_path } => {
                *link = Some(repo_link.to_string());
                self.tr("action.transfer_repo", &[old_path, repo_link, short_path])
            }
            ActionKind::PushTag { tag } => {
                let tag_link = links::tag_link(repo_link, tag);
                let title = self.tr("action.push_tag", &[repo_link, &tag_link, tag, short_path]);
                *link = Some(tag_link);
                title
            }
            ActionKind::CommentIssue(comment) => {
                self.issue_title("action.comment_issue", ctx, &comment.number, link)
            }
            ActionKind::CloseIssue(issue) => {
                self.issue_title("action.close_issue", ctx, &issue.number, link)
            }
            ActionKind::ReopenIssue(issue) => {
                self.issue_title("action.reopen_issue", ctx, &issue.number, link)
            }
            ActionKind::MergePullRequest { number, .. } => {
                self.pull_title("action.merge_pull_request", ctx, number, link)
            }
            ActionKind::ClosePullRequest(issue) => {
                self.pull_title("action.close_pull_request", ctx, &issue.number, link)
            }
            ActionKind::ReopenPullRequest(issue) => {
                self.pull_title("action.reopen_pull_request", ctx, &issue.number, link)
            }
            ActionKind::ApprovePullRequest(comment) => {
                self.pull_title("action.approve_pull_request", ctx, &comment.number, link)
            }
            ActionKind::RejectPullRequest(comment) => {
                self.pull_title("action.reject_pull_request", ctx, &comment.number, link)
            }
            ActionKind::CommentPull(comment) => {
                self.pull_title("action.comment_pull", ctx, &comment.number, link)
            }
            ActionKind::DeleteTag { tag } => {
                *link = Some(repo_link.to_string());
                self.tr("action.delete_tag", &[repo_link, tag, short_path])
            }
            ActionKind::DeleteBranch { branch } => {
                *link = Some(repo_link.to_string());
                self.tr("action.delete_branch", &[repo_link, branch, short_path])
            }
            ActionKind::MirrorSyncPush { branch, .. } => {
                let src_link = links::src_link(repo_link, branch);
                let title = self.tr(
                    "action.mirror_sync_push",
                    &[repo_link, &src_link, branch, short_path],
                );
                fill_link(link, src_link);
                title
            }
            ActionKind::MirrorSyncCreate { branch } => {
                let src_link = links::src_link(repo_link, branch);
                let title = self.tr(
                    "action.mirror_sync_create",
                    &[repo_link, &src_link, branch, short_path],
                );
                fill_link(link, src_link);
                title
            }
            ActionKind::MirrorSyncDelete { branch } => {
                *link = Some(repo_link.to_string());
                self.tr("action.mirror_sync_delete", &[repo_link, branch, short_path])
            }
            ActionKind::PublishRelease { tag, title } => {
                let release_link = links::release_link(repo_link, tag);
                let localized = self.tr(
                    "action.publish_release",
                    &[repo_link, &release_link, short_path, title],
                );
                fill_link(link, release_link);
                localized
            }
            ActionKind::PullReviewDismissed {
                number, reviewer, ..
            } => {
                let pull_link = links::pull_link(repo_link, number);
                let title = self.tr(
                    "action.review_dismissed",
                    &[&pull_link, number, short_path, reviewer],
                );
                fill_link(link, pull_link);
                title
            }
        }
    }

    /// Description and content. Content falls back to the description.
    fn describe(&self, ctx: &ActionContext<'_>, link: &mut Option<String>) -> (String, String) {
        let mut content = String::new();

        let description = match &ctx.action.kind {
            ActionKind::CommitRepo { push, .. } | ActionKind::MirrorSyncPush { push, .. } => {
                self.describe_push(ctx, push, link)
            }
            ActionKind::CreateIssue { summary, body, .. }
            | ActionKind::CreatePullRequest { summary, body, .. } => {
                if !body.is_empty() {
                    content = self.render_markdown(ctx, body);
                }
                summary.clone()
            }
            ActionKind::CommentIssue(comment)
            | ActionKind::ApprovePullRequest(comment)
            | ActionKind::RejectPullRequest(comment)
            | ActionKind::CommentPull(comment) => self.describe_comment(ctx, comment),
            ActionKind::MergePullRequest { reference, .. } => reference.clone(),
            ActionKind::CloseIssue(IssueRef { title, .. })
            | ActionKind::ReopenIssue(IssueRef { title, .. })
            | ActionKind::ClosePullRequest(IssueRef { title, .. })
            | ActionKind::ReopenPullRequest(IssueRef { title, .. }) => title.clone(),
            ActionKind::PullReviewDismissed { reason, .. } => format!(
                "{}\n\n{}",
                self.translator.localize_plain(REVIEW_DISMISSED_REASON_KEY),
                reason
            ),
            // Repository-level activity is fully described by its title
            ActionKind::CreateRepo
            | ActionKind::RenameRepo { .. }
            | ActionKind::StarRepo
            | ActionKind::WatchRepo
            | ActionKind::TransferRepo { .. }
            | ActionKind::PushTag { .. }
            | ActionKind::DeleteTag { .. }
            | ActionKind::DeleteBranch { .. }
            | ActionKind::MirrorSyncCreate { .. }
            | ActionKind::MirrorSyncDelete { .. }
            | ActionKind::PublishRelease { .. } => String::new(),
        };

        if content.is_empty() {
            content = description.clone();
        }
        (description, content)
    }

    /// One entry per commit; the link moves to the commit or the compare view
    fn describe_push(
        &self,
        ctx: &ActionContext<'_>,
        payload: &str,
        link: &mut Option<String>,
    ) -> String {
        let push = self.commits.expand(payload);
        let render_ctx = RenderContext::for_repo(&ctx.action.repo, &ctx.repo_link);

        let description = push
            .commits
            .iter()
            .map(|commit| {
                format!(
                    "<a href=\"{}\">{}</a>\n{}",
                    escape_html(&links::commit_link(&ctx.repo_link, &commit.sha)),
                    commit.sha,
                    self.renderer
                        .render_commit_message(&commit.message, &render_ctx)
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        if push.len > 1 {
            *link = Some(links::compare_link(
                &self.settings.app_sub_url,
                &push.compare_url,
            ));
        } else if push.len == 1 {
            if let Some(first) = push.commits.first() {
                *link = Some(links::commit_link(&ctx.repo_link, &first.sha));
            }
        }

        description
    }

    fn describe_comment(&self, ctx: &ActionContext<'_>, comment: &IssueComment) -> String {
        let mut description = comment.issue_title.clone();
        if !comment.body.is_empty() {
            description.push_str("\n\n");
            description.push_str(&self.render_markdown(ctx, &comment.body));
        }
        description
    }

    fn issue_title(
        &self,
        key: &str,
        ctx: &ActionContext<'_>,
        number: &str,
        link: &mut Option<String>,
    ) -> String {
        let issue_link = links::issue_link(&ctx.repo_link, number);
        let title = self.tr(key, &[&issue_link, number, &ctx.short_path]);
        fill_link(link, issue_link);
        title
    }

    fn pull_title(
        &self,
        key: &str,
        ctx: &ActionContext<'_>,
        number: &str,
        link: &mut Option<String>,
    ) -> String {
        let pull_link = links::pull_link(&ctx.repo_link, number);
        let title = self.tr(key, &[&pull_link, number, &ctx.short_path]);
        fill_link(link, pull_link);
        title
    }

    /// Render markdown, falling back to the source text if rendering fails
    fn render_markdown(&self, ctx: &ActionContext<'_>, source: &str) -> String {
        let render_ctx = RenderContext::for_repo(&ctx.action.repo, &ctx.repo_link);
        match self.renderer.render(source, &render_ctx) {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!(
                    action_id = ctx.action.id,
                    "Markup rendering failed, using raw text: {}",
                    e
                );
                source.to_string()
            }
        }
    }

    fn tr(&self, key: &str, args: &[&str]) -> String {
        self.translator.localize(key, args)
    }
}

/// Use `derived` only when the action carried no link of its own
fn fill_link(link: &mut Option<String>, derived: String) {
    if link.is_none() {
        *link = Some(derived);
    }
}
