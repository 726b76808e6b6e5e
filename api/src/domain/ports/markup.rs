//! Markup renderer port
//!
//! Renders user-authored markdown (issue bodies, comments, commit messages)
//! to HTML in the context of a repository.

use crate::domain::entities::RepoRef;
use crate::error::RenderError;
use crate::feed::escape_html;

/// Where rendered markup lives, for resolving relative links and references
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    pub url_prefix: String,
    pub owner: String,
    pub repo: String,
}

impl RenderContext {
    pub fn for_repo(repo: &RepoRef, repo_link: &str) -> Self {
        Self {
            url_prefix: repo_link.to_string(),
            owner: repo.owner.clone(),
            repo: repo.name.clone(),
        }
    }
}

pub trait MarkupRenderer: Send + Sync {
    /// Render markdown to HTML. Callers fall back to the raw source on error.
    fn render(&self, source: &str, ctx: &RenderContext) -> Result<String, RenderError>;

    /// Render the summary line of a commit message
    fn render_commit_message(&self, message: &str, _ctx: &RenderContext) -> String {
        escape_html(message.lines().next().unwrap_or_default())
    }
}
