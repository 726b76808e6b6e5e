//! Translator port
//!
//! Turns message keys into localized, HTML-safe strings.

pub trait Translator: Send + Sync {
    /// Localize `key`, interpolating `args` in order. Arguments are
    /// HTML-escaped by the implementation; the result is used verbatim.
    fn localize(&self, key: &str, args: &[&str]) -> String;

    /// Localize a fixed phrase that takes no arguments
    fn localize_plain(&self, key: &str) -> String;
}
