pub mod env {
    pub const APP_ENVIRONMENT_ENV_VAR: &str = "APP_ENVIRONMENT";
    pub const CONFIG_DIR_ENV_VAR: &str = "RECLAIM_CONFIG_DIR";
    pub const SETTINGS_ENV_PREFIX: &str = "RECLAIM";
    pub const SETTINGS_ENV_SEPARATOR: &str = "__";
    pub const SETTINGS_LIST_SEPARATOR: &str = ",";
}

pub const DEFAULT_ENVIRONMENT: &str = "local";
pub const DEFAULT_CONFIG_DIR: &str = "config";

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub mod email_client {
        use std::time::Duration;

        pub const SENDER: &str = "test@email.com";
        pub const TIMEOUT: Duration = std::time::Duration::from_millis(200);
    }
}
