//! Commit expander port
//!
//! Push actions store their commits as an opaque payload. An expander turns
//! that payload back into the ordered commit list.

use serde::{Deserialize, Deserializer, Serialize};

/// Helper to deserialize null as default (empty vec, etc.)
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// One pushed commit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushCommit {
    #[serde(rename = "Sha1")]
    pub sha: String,
    #[serde(rename = "Message", default)]
    pub message: String,
}

/// The commits of one push, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushCommits {
    /// May be a truncated prefix of the push; `len` is the full count
    #[serde(rename = "Commits", default, deserialize_with = "deserialize_null_default")]
    pub commits: Vec<PushCommit>,
    #[serde(rename = "Len", default)]
    pub len: usize,
    /// Compare path relative to the application root, `owner/repo/compare/a...b`
    #[serde(rename = "CompareURL", default)]
    pub compare_url: String,
}

pub trait CommitExpander: Send + Sync {
    /// Expand a push payload. Payloads that cannot be read expand to no commits.
    fn expand(&self, content: &str) -> PushCommits;
}
