use std::collections::BTreeMap;

use serde::Serialize;

/// Template and variable names of the password recovery email.
pub mod recovery_password {
    pub const TEMPLATE_NAME: &str = "_recoverypassword";
    pub const SUBJECT: &str = "Verify your recovery email";

    pub const REQUEST_URL: &str = "RequestUrl";
    pub const APP_NAME: &str = "AppName";
    pub const COMPANY: &str = "Company";
    pub const USER_NAME: &str = "UserName";
    pub const EMAIL: &str = "Email";
}

/// Variables handed to a mail template, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TemplateModel(BTreeMap<String, String>);

impl TemplateModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}
