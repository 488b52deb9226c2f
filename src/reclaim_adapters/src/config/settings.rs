use std::path::{Path, PathBuf};
use std::time::Duration;

use axum::http::HeaderValue;
use config::{Config, ConfigError, Environment, File};
use reclaim_application::ApplicationInfo;
use reclaim_core::{Email, EmailError};
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{DEFAULT_CONFIG_DIR, DEFAULT_ENVIRONMENT, env};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
    pub identity: IdentitySettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
    /// Public base URL of the web application the reset link points at
    pub application_url: String,
    pub app_name: String,
    pub company: String,
    #[serde(default)]
    pub allowed_origins: AllowedOrigins,
}

/// Origins allowed to call the service from a browser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn new(origins: Vec<String>) -> Self {
        Self(origins)
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        origin
            .to_str()
            .map(|origin| self.0.iter().any(|allowed| allowed == origin))
            .unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn application_info(&self) -> ApplicationInfo {
        ApplicationInfo {
            application_url: self.application_url.clone(),
            app_name: self.app_name.clone(),
            company: self.company.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MailProvider {
    /// Deliver through the Postmark HTTP API
    Postmark,
    /// Keep messages in memory and only log them
    Mock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailClientSettings {
    pub provider: MailProvider,
    pub base_url: String,
    pub sender: String,
    pub auth_token: Secret<String>,
    pub timeout_in_millis: u64,
}

impl EmailClientSettings {
    pub fn sender(&self) -> Result<Email, EmailError> {
        Email::try_from(self.sender.as_str())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_in_millis)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdentitySettings {
    pub reset_token_lifetime_in_minutes: i64,
}

impl IdentitySettings {
    pub fn reset_token_lifetime(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.reset_token_lifetime_in_minutes)
    }
}

impl Settings {
    /// Loads settings for the environment named by `APP_ENVIRONMENT`.
    ///
    /// Sources, later ones overriding earlier ones:
    /// * `.env` file (via dotenvy)
    /// * `{config_dir}/base.json`
    /// * `{config_dir}/{environment}.json`
    /// * `RECLAIM_*` environment variables, `__` separating nested keys
    ///   (e.g. `RECLAIM_EMAIL_CLIENT__AUTH_TOKEN`). Lists such as
    ///   `RECLAIM_APPLICATION__ALLOWED_ORIGINS` are comma separated.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config_dir = std::env::var(env::CONFIG_DIR_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_DIR));
        let environment = std::env::var(env::APP_ENVIRONMENT_ENV_VAR)
            .unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());

        Self::load_from(&config_dir, &environment)
    }

    pub fn load_from(config_dir: &Path, environment: &str) -> Result<Self, ConfigError> {
        Self::load_with(config_dir, environment, environment_overrides())
    }

    fn load_with(
        config_dir: &Path,
        environment: &str,
        overrides: Environment,
    ) -> Result<Self, ConfigError> {
        tracing::debug!(?config_dir, environment, "Loading settings");

        Config::builder()
            .add_source(File::from(config_dir.join("base.json")).required(true))
            .add_source(File::from(config_dir.join(format!("{environment}.json"))).required(false))
            .add_source(overrides)
            .build()?
            .try_deserialize()
    }
}

/// `RECLAIM_*` variables; list-valued keys take comma separated values.
fn environment_overrides() -> Environment {
    Environment::with_prefix(env::SETTINGS_ENV_PREFIX)
        .prefix_separator("_")
        .separator(env::SETTINGS_ENV_SEPARATOR)
        .try_parsing(true)
        .list_separator(env::SETTINGS_LIST_SEPARATOR)
        .with_list_parse_key("application.allowed_origins")
}
