//! Locale adapter
//!
//! Message catalog implementing the `Translator` port.

pub mod catalog;
mod messages;

pub use catalog::LocaleCatalog;
