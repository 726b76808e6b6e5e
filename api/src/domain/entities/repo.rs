//! Repository reference
//!
//! Enough of a repository to build links and display paths for it.

use serde::{Deserialize, Serialize};

const SHORT_OWNER_LEN: usize = 20;
const SHORT_NAME_LEN: usize = 33;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Base URL of the repository under the given sub-path
    pub fn link(&self, app_sub_url: &str) -> String {
        format!(
            "{}/{}/{}",
            app_sub_url,
            urlencoding::encode(&self.owner),
            urlencoding::encode(&self.name)
        )
    }

    /// `owner/name` in full
    pub fn full_path(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// `owner/name` with long components shortened for titles
    pub fn short_path(&self) -> String {
        format!(
            "{}/{}",
            ellipsis(&self.owner, SHORT_OWNER_LEN),
            ellipsis(&self.name, SHORT_NAME_LEN)
        )
    }
}

/// Truncate to `max` characters, marking the cut with `...`
fn ellipsis(s: &str, max: usize) -> String {
    if max <= 3 {
        return "...".to_string();
    }
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max - 3).collect();
    format!("{}...", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_escapes_path_components() {
        let repo = RepoRef::new("my org", "repo");
        assert_eq!(repo.link(""), "/my%20org/repo");
        assert_eq!(repo.link("/git"), "/git/my%20org/repo");
    }

    #[test]
    fn short_path_keeps_short_names() {
        let repo = RepoRef::new("alice", "demo");
        assert_eq!(repo.short_path(), "alice/demo");
        assert_eq!(repo.full_path(), "alice/demo");
    }

    #[test]
    fn short_path_truncates_long_owner() {
        let repo = RepoRef::new("a-very-long-organisation-name", "demo");
        assert_eq!(repo.short_path(), "a-very-long-organ.../demo");
        assert_eq!(repo.full_path(), "a-very-long-organisation-name/demo");
    }

    #[test]
    fn ellipsis_counts_characters_not_bytes() {
        assert_eq!(ellipsis("ééééé", 5), "ééééé");
        assert_eq!(ellipsis("éééééé", 5), "éé...");
    }
}
