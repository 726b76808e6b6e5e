//! Message catalog
//!
//! Messages use printf-style placeholders: `%s` takes the next argument,
//! `%[n]s` takes argument `n` (1-based) and continues from `n + 1`, `%%` is
//! a literal percent sign. Missing arguments render as `%!s(MISSING)` so a
//! broken translation is visible instead of silently dropping text.

use std::collections::HashMap;
use std::iter::Peekable;
use std::path::Path;
use std::str::Chars;

use super::messages::EN_US;
use crate::domain::ports::Translator;
use crate::error::LocaleError;
use crate::feed::escape_html;

/// Key → message template lookup
#[derive(Debug, Clone)]
pub struct LocaleCatalog {
    messages: HashMap<String, String>,
}

impl Default for LocaleCatalog {
    fn default() -> Self {
        Self::english()
    }
}

impl LocaleCatalog {
    /// The built-in English catalog
    pub fn english() -> Self {
        let messages = EN_US
            .iter()
            .map(|(key, msg)| (key.to_string(), msg.to_string()))
            .collect();
        Self { messages }
    }

    /// English messages overridden by a JSON object of `key: template` pairs
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LocaleError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let overrides: HashMap<String, String> = serde_json::from_str(&raw)?;
        tracing::info!(
            "Loaded {} locale overrides from {}",
            overrides.len(),
            path.as_ref().display()
        );
        Ok(Self::english().with_messages(overrides))
    }

    pub fn with_messages(mut self, messages: impl IntoIterator<Item = (String, String)>) -> Self {
        self.messages.extend(messages);
        self
    }

    /// Unknown keys translate to themselves
    fn template<'a>(&'a self, key: &'a str) -> &'a str {
        match self.messages.get(key) {
            Some(msg) => msg.as_str(),
            None => {
                tracing::debug!("Missing locale key: {}", key);
                key
            }
        }
    }
}

impl Translator for LocaleCatalog {
    fn localize(&self, key: &str, args: &[&str]) -> String {
        let escaped: Vec<String> = args.iter().map(|a| escape_html(a)).collect();
        format_message(self.template(key), &escaped)
    }

    fn localize_plain(&self, key: &str) -> String {
        self.template(key).to_string()
    }
}

/// Expand placeholders in `template` with `args`
fn format_message(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    let mut next_arg = 0usize;

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some('[') => {
                chars.next();
                match explicit_index(&mut chars) {
                    Some(index) => {
                        let verb = chars.next();
                        next_arg = index;
                        push_arg(&mut out, args, next_arg, verb);
                        next_arg += 1;
                    }
                    None => out.push_str("%!(BADINDEX)"),
                }
            }
            Some(_) => {
                let verb = chars.next();
                push_arg(&mut out, args, next_arg, verb);
                next_arg += 1;
            }
            None => out.push_str("%!(NOVERB)"),
        }
    }

    out
}

/// Parse the `n]` of `%[n]s`, returning the zero-based index
fn explicit_index(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    let mut digits = String::new();
    while let Some(d) = chars.next_if(|c| c.is_ascii_digit()) {
        digits.push(d);
    }
    chars.next_if_eq(&']')?;
    match digits.parse::<usize>() {
        Ok(n) if n >= 1 => Some(n - 1),
        _ => None,
    }
}

fn push_arg(out: &mut String, args: &[String], index: usize, verb: Option<char>) {
    let verb = verb.unwrap_or('s');
    match args.get(index) {
        Some(arg) => out.push_str(arg),
        None => {
            out.push_str("%!");
            out.push(verb);
            out.push_str("(MISSING)");
        }
    }
}
