use async_trait::async_trait;
use oauth2::{
    AuthUrl, ClientId, ClientSecret, CsrfToken, RedirectUrl, Scope, TokenUrl, basic::BasicClient,
};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use shopifun_core::{OAuthState, OAuthUrlError, OAuthUrlProvider};

fn default_auth_url() -> String {
    "https://accounts.google.com/o/oauth2/v2/auth".to_string()
}

fn default_token_url() -> String {
    "https://oauth2.googleapis.com/token".to_string()
}

fn default_scopes() -> Vec<String> {
    vec![
        "openid".to_string(),
        "email".to_string(),
        "profile".to_string(),
    ]
}

#[derive(Clone, Deserialize)]
pub struct GoogleOAuthConfig {
    pub client_id: String,
    pub client_secret: Secret<String>,
    pub redirect_url: String,
    #[serde(default = "default_auth_url")]
    pub auth_url: String,
    #[serde(default = "default_token_url")]
    pub token_url: String,
    #[serde(default = "default_scopes")]
    pub scopes: Vec<String>,
}

impl GoogleOAuthConfig {
    pub fn new(client_id: String, client_secret: Secret<String>, redirect_url: String) -> Self {
        Self {
            client_id,
            client_secret,
            redirect_url,
            auth_url: default_auth_url(),
            token_url: default_token_url(),
            scopes: default_scopes(),
        }
    }
}

/// Builds Google consent-screen URLs for the sign-in flow.
pub struct GoogleOAuthUrlProvider {
    client: BasicClient,
    scopes: Vec<Scope>,
}

impl GoogleOAuthUrlProvider {
    /// Create a new provider
    ///
    /// # Arguments
    /// * `config` - OAuth client credentials and endpoints from Google Cloud Console
    ///
    /// # Errors
    /// `OAuthUrlError::InvalidConfiguration` if an endpoint is not a valid URL
    /// or the client id is empty
    pub fn new(config: &GoogleOAuthConfig) -> Result<Self, OAuthUrlError> {
        if config.client_id.trim().is_empty() {
            return Err(OAuthUrlError::InvalidConfiguration(
                "client id must not be empty".to_string(),
            ));
        }

        let auth_url = AuthUrl::new(config.auth_url.clone())
            .map_err(|e| OAuthUrlError::InvalidConfiguration(format!("auth URL: {e}")))?;
        let token_url = TokenUrl::new(config.token_url.clone())
            .map_err(|e| OAuthUrlError::InvalidConfiguration(format!("token URL: {e}")))?;
        let redirect_url = RedirectUrl::new(config.redirect_url.clone())
            .map_err(|e| OAuthUrlError::InvalidConfiguration(format!("redirect URL: {e}")))?;

        let client = BasicClient::new(
            ClientId::new(config.client_id.clone()),
            Some(ClientSecret::new(
                config.client_secret.expose_secret().clone(),
            )),
            auth_url,
            Some(token_url),
        )
        .set_redirect_uri(redirect_url);

        Ok(Self {
            client,
            scopes: config.scopes.iter().cloned().map(Scope::new).collect(),
        })
    }
}

#[async_trait]
impl OAuthUrlProvider for GoogleOAuthUrlProvider {
    #[tracing::instrument(name = "Building Google authorization URL", skip_all)]
    async fn authorization_url(&self, state: &OAuthState) -> Result<String, OAuthUrlError> {
        let state = CsrfToken::new(state.as_str().to_owned());

        let (url, _) = self
            .client
            .authorize_url(|| state)
            .add_scopes(self.scopes.iter().cloned())
            .add_extra_param("access_type", "online")
            .url();

        Ok(url.to_string())
    }
}
