use std::env;

use crate::adapters::markup::markdown::DEFAULT_MAX_BYTES;

#[derive(Clone)]
pub struct Config {
    /// Path prefix the service is mounted under (e.g. `/git`), no trailing slash
    pub app_sub_url: String,
    /// Domain for placeholder author addresses
    pub no_reply_address: String,
    /// Optional JSON file overriding built-in messages
    pub locale_path: Option<String>,
    /// Markup larger than this is shown raw instead of rendered
    pub markup_max_bytes: usize,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            app_sub_url: var("APP_SUB_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_default(),
            no_reply_address: var("NO_REPLY_ADDRESS")
                .unwrap_or_else(|| "noreply.localhost".to_string()),
            locale_path: var("LOCALE_PATH"),
            markup_max_bytes: var("MARKUP_MAX_BYTES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_BYTES),
            port: var("PORT").and_then(|p| p.parse().ok()).unwrap_or(8080),
        }
    }
}
