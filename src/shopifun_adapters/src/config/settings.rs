use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use shopifun_core::{OAuthUrlError, TokenError};

use super::constants::{BASE_CONFIG_FILE, CONFIG_DIR, DEFAULT_ENVIRONMENT, env};
use crate::{
    hashing::{Argon2PasswordHasher, HashingParams},
    oauth::{GoogleOAuthConfig, GoogleOAuthUrlProvider},
    token::{JwtConfig, JwtTokenIssuer},
};

#[derive(Clone, Deserialize)]
pub struct Settings {
    pub auth: AuthSettings,
    pub oauth: OAuthSettings,
}

#[derive(Clone, Deserialize)]
pub struct AuthSettings {
    pub jwt: JwtConfig,
    #[serde(default)]
    pub hashing: HashingParams,
}

#[derive(Clone, Deserialize)]
pub struct OAuthSettings {
    pub google: GoogleOAuthConfig,
}

impl Settings {
    /// Load settings from files and environment variables
    ///
    /// Later sources override earlier ones:
    /// 1. `config/base.*` (optional)
    /// 2. `config/<APP_ENVIRONMENT>.*` (optional, `local` by default)
    /// 3. `IDENTITY_*` environment variables, nested with `__`,
    ///    e.g. `IDENTITY_AUTH__JWT__SECRET`
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = std::env::var(env::APP_ENVIRONMENT_ENV_VAR)
            .unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());

        let config = Config::builder()
            .add_source(File::with_name(&format!("{CONFIG_DIR}/{BASE_CONFIG_FILE}")).required(false))
            .add_source(File::with_name(&format!("{CONFIG_DIR}/{environment}")).required(false))
            .add_source(Self::environment())
            .build()?;

        Self::from_config(config)
    }

    /// `IDENTITY_` prefix, `__` between nested keys.
    fn environment() -> Environment {
        Environment::with_prefix(env::SETTINGS_ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
    }

    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        config.try_deserialize()
    }

    pub fn password_hasher(&self) -> Argon2PasswordHasher {
        Argon2PasswordHasher::new(self.auth.hashing)
    }

    pub fn token_issuer(&self) -> Result<JwtTokenIssuer, TokenError> {
        JwtTokenIssuer::new(&self.auth.jwt)
    }

    pub fn oauth_provider(&self) -> Result<GoogleOAuthUrlProvider, OAuthUrlError> {
        GoogleOAuthUrlProvider::new(&self.oauth.google)
    }
}
