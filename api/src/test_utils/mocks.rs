//! Mock implementations of port traits
//!
//! Deterministic stand-ins so tests can assert exactly which keys and
//! arguments reached the translator and what the renderer produced.

use crate::domain::ports::{
    CommitExpander, MarkupRenderer, PushCommits, RenderContext, Translator,
};
use crate::error::RenderError;

// ============================================================================
// Translator
// ============================================================================

/// Renders `key(arg1|arg2|...)` so tests can check argument order.
/// Arguments are not escaped.
pub struct MockTranslator;

impl Translator for MockTranslator {
    fn localize(&self, key: &str, args: &[&str]) -> String {
        format!("{}({})", key, args.join("|"))
    }

    fn localize_plain(&self, key: &str) -> String {
        key.to_string()
    }
}

// ============================================================================
// Markup renderers
// ============================================================================

/// Wraps the source in a paragraph without interpreting it
pub struct EchoRenderer;

impl MarkupRenderer for EchoRenderer {
    fn render(&self, source: &str, _ctx: &RenderContext) -> Result<String, RenderError> {
        Ok(format!("<p>{}</p>", source))
    }
}

/// Fails every render
pub struct FailingRenderer;

impl MarkupRenderer for FailingRenderer {
    fn render(&self, source: &str, _ctx: &RenderContext) -> Result<String, RenderError> {
        Err(RenderError::TooLarge {
            size: source.len(),
            limit: 0,
        })
    }
}

// ============================================================================
// Commit expander
// ============================================================================

/// Returns the same push for every payload
pub struct StaticCommitExpander {
    push: PushCommits,
}

impl StaticCommitExpander {
    pub fn new(push: PushCommits) -> Self {
        Self { push }
    }
}

impl CommitExpander for StaticCommitExpander {
    fn expand(&self, _content: &str) -> PushCommits {
        self.push.clone()
    }
}
