//! Push payload expansion
//!
//! Push actions store `{"Commits": [...], "Len": n, "CompareURL": "..."}`.

use crate::domain::ports::{CommitExpander, PushCommits};

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCommitExpander;

impl CommitExpander for JsonCommitExpander {
    fn expand(&self, content: &str) -> PushCommits {
        if content.is_empty() {
            return PushCommits::default();
        }
        match serde_json::from_str::<PushCommits>(content) {
            Ok(push) => push,
            Err(e) => {
                tracing::warn!("Failed to parse push commits: {}", e);
                PushCommits::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commits_in_order() {
        let content = r#"{
            "Commits": [
                {"Sha1": "bbb", "Message": "second\n\nbody", "AuthorEmail": "a@example.com"},
                {"Sha1": "aaa", "Message": "first"}
            ],
            "HeadCommit": {"Sha1": "bbb", "Message": "second"},
            "CompareURL": "alice/demo/compare/000...bbb",
            "Len": 2
        }"#;

        let push = JsonCommitExpander.expand(content);

        assert_eq!(push.len, 2);
        assert_eq!(push.compare_url, "alice/demo/compare/000...bbb");
        let shas: Vec<_> = push.commits.iter().map(|c| c.sha.as_str()).collect();
        assert_eq!(shas, vec!["bbb", "aaa"]);
        assert_eq!(push.commits[0].message, "second\n\nbody");
    }

    #[test]
    fn null_commits_expand_to_empty() {
        let push = JsonCommitExpander.expand(r#"{"Commits": null, "Len": 0}"#);
        assert!(push.commits.is_empty());
        assert_eq!(push.len, 0);
    }

    #[test]
    fn len_may_exceed_listed_commits() {
        let push = JsonCommitExpander
            .expand(r#"{"Commits": [{"Sha1": "ccc", "Message": "x"}], "Len": 12}"#);
        assert_eq!(push.commits.len(), 1);
        assert_eq!(push.len, 12);
    }

    #[test]
    fn malformed_content_expands_to_empty() {
        assert_eq!(JsonCommitExpander.expand("not json"), PushCommits::default());
        assert_eq!(JsonCommitExpander.expand(""), PushCommits::default());
    }
}
