//! Markdown renderer
//!
//! Renders CommonMark with pulldown-cmark. Raw HTML in the source is shown
//! as text rather than passed through, and relative links resolve against
//! the repository link.

use std::sync::LazyLock;

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};
use regex::{Captures, Regex};

use crate::domain::ports::{MarkupRenderer, RenderContext};
use crate::error::RenderError;
use crate::feed::escape_html;

/// Default cap on markup size, 1 MiB
pub const DEFAULT_MAX_BYTES: usize = 1024 * 1024;

/// `#123` preceded by start of text, whitespace, or an opening parenthesis
static ISSUE_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[\s(])#(\d+)\b").expect("issue reference pattern is valid"));

pub struct MarkdownRenderer {
    max_bytes: usize,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_BYTES)
    }
}

impl MarkdownRenderer {
    pub fn new(max_bytes: usize) -> Self {
        Self { max_bytes }
    }
}

/// Absolute, root-relative, fragment and mailto links are left alone
fn resolve_link<'a>(dest: CowStr<'a>, ctx: &RenderContext) -> CowStr<'a> {
    let keep = dest.is_empty()
        || dest.contains("://")
        || dest.starts_with('/')
        || dest.starts_with('#')
        || dest.starts_with("mailto:");
    if keep {
        dest
    } else {
        CowStr::from(format!("{}/{}", ctx.url_prefix, dest))
    }
}

impl MarkupRenderer for MarkdownRenderer {
    fn render(&self, source: &str, ctx: &RenderContext) -> Result<String, RenderError> {
        if source.len() > self.max_bytes {
            tracing::debug!(
                "Markup in {}/{} exceeds {} bytes",
                ctx.owner,
                ctx.repo,
                self.max_bytes
            );
            return Err(RenderError::TooLarge {
                size: source.len(),
                limit: self.max_bytes,
            });
        }

        let options = Options::ENABLE_TABLES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS;
        let events = Parser::new_ext(source, options).map(|event| match event {
            Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
            Event::Start(Tag::Link {
                link_type,
                dest_url,
                title,
                id,
            }) => Event::Start(Tag::Link {
                link_type,
                dest_url: resolve_link(dest_url, ctx),
                title,
                id,
            }),
            other => other,
        });

        let mut out = String::with_capacity(source.len() * 3 / 2);
        html::push_html(&mut out, events);
        Ok(out)
    }

    /// Escaped summary line with `#123` references linked to issues
    fn render_commit_message(&self, message: &str, ctx: &RenderContext) -> String {
        let summary = escape_html(message.lines().next().unwrap_or_default());
        ISSUE_REF
            .replace_all(&summary, |caps: &Captures<'_>| {
                format!(
                    "{}<a href=\"{}/issues/{}\" class=\"ref-issue\">#{}</a>",
                    &caps[1], ctx.url_prefix, &caps[2], &caps[2]
                )
            })
            .into_owned()
    }
}
