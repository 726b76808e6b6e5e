//! Link builders
//!
//! Pure functions deriving feed item links from a repository link.

/// Percent-encode each `/`-separated segment, keeping the separators
pub fn escape_segments(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

pub fn branch_link(repo_link: &str, branch: &str) -> String {
    format!("{}/src/branch/{}", repo_link, escape_segments(branch))
}

pub fn tag_link(repo_link: &str, tag: &str) -> String {
    format!("{}/src/tag/{}", repo_link, escape_segments(tag))
}

/// Source link for a ref that may be either a branch or a tag (mirror syncs)
pub fn src_link(repo_link: &str, reference: &str) -> String {
    format!("{}/src/{}", repo_link, escape_segments(reference))
}

pub fn release_link(repo_link: &str, tag: &str) -> String {
    format!("{}/releases/tag/{}", repo_link, escape_segments(tag))
}

pub fn issue_link(repo_link: &str, number: &str) -> String {
    format!("{}/issues/{}", repo_link, urlencoding::encode(number))
}

pub fn pull_link(repo_link: &str, number: &str) -> String {
    format!("{}/pulls/{}", repo_link, urlencoding::encode(number))
}

pub fn commit_link(repo_link: &str, sha: &str) -> String {
    format!("{}/commit/{}", repo_link, sha)
}

/// Compare URLs are stored relative to the application root
pub fn compare_link(app_sub_url: &str, compare_url: &str) -> String {
    format!("{}/{}", app_sub_url, compare_url)
}
