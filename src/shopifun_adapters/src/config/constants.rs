pub mod env {
    pub const APP_ENVIRONMENT_ENV_VAR: &str = "APP_ENVIRONMENT";
    pub const SETTINGS_ENV_PREFIX: &str = "IDENTITY";
}

pub const CONFIG_DIR: &str = "config";
pub const BASE_CONFIG_FILE: &str = "base";
pub const DEFAULT_ENVIRONMENT: &str = "local";
