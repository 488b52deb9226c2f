use std::fmt;

use super::{account::AccountId, reset_token::UrlSafeToken};

pub const RESET_PASSWORD_PATH: &str = "/pages/authentication/reset-password";

/// Link to the reset-password page carrying the account id and encoded token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetLink(String);

impl ResetLink {
    pub fn new(application_url: &str, account_id: &AccountId, token: &UrlSafeToken) -> Self {
        let base = application_url.trim_end_matches('/');
        Self(format!(
            "{base}{RESET_PASSWORD_PATH}?userid={account_id}&token={}",
            token.as_str()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ResetLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
