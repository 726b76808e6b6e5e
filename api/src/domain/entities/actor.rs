//! Actor entity
//!
//! The user who performed an action, as resolved by the caller.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActUser {
    /// Login name
    pub name: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub keep_email_private: bool,
}

impl ActUser {
    /// Full name when set, otherwise the login name
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref().map(str::trim) {
            Some(full) if !full.is_empty() => full,
            _ => &self.name,
        }
    }

    /// Address shown as the feed author. Users who keep their email private
    /// get a placeholder on the no-reply domain instead.
    pub fn email_for_feed(&self, no_reply_domain: &str) -> String {
        if self.keep_email_private {
            format!("{}@{}", self.name.to_lowercase(), no_reply_domain)
        } else {
            self.email.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_user;

    #[test]
    fn display_name_prefers_trimmed_full_name() {
        let mut user = test_user();
        user.full_name = Some("  Alice Liddell ".to_string());
        assert_eq!(user.display_name(), "Alice Liddell");
    }

    #[test]
    fn display_name_falls_back_to_login() {
        let mut user = test_user();
        user.full_name = Some("   ".to_string());
        assert_eq!(user.display_name(), "alice");

        user.full_name = None;
        assert_eq!(user.display_name(), "alice");
    }

    #[test]
    fn private_email_uses_placeholder() {
        let mut user = test_user();
        user.name = "Alice".to_string();
        user.keep_email_private = true;
        assert_eq!(
            user.email_for_feed("noreply.example.org"),
            "alice@noreply.example.org"
        );
    }

    #[test]
    fn public_email_is_returned_as_is() {
        let user = test_user();
        assert_eq!(user.email_for_feed("noreply.example.org"), "alice@example.com");
    }
}
