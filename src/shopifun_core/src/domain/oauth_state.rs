use std::fmt;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::Serialize;

/// Opaque anti-forgery value bound to one OAuth sign-in attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OAuthState(String);

impl OAuthState {
    /// Fresh unguessable state for a new sign-in attempt: 32 random bytes,
    /// URL-safe base64 without padding.
    pub fn generate() -> Self {
        let bytes: [u8; 32] = rand::random();
        Self(URL_SAFE_NO_PAD.encode(bytes))
    }

    pub fn new(state: impl Into<String>) -> Self {
        Self(state.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OAuthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where to send the browser, and the state the callback must echo back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OAuthRedirect {
    pub url: String,
    pub state: OAuthState,
}
