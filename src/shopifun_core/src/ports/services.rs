use async_trait::async_trait;
use chrono::Duration;
use thiserror::Error;

use crate::domain::{
    oauth_state::OAuthState, password::Password, password_hash::PasswordHash,
    session::SessionClaims,
};

#[derive(Debug, Error)]
pub enum HashingError {
    #[error("Failed to hash password: {0}")]
    HashingFailed(String),
}

/// One-way, salted password hashing.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash with a fresh random salt, so equal inputs give different outputs.
    async fn hash(&self, password: &Password) -> Result<PasswordHash, HashingError>;

    /// Recompute with the salt embedded in `hash` and compare in constant time.
    ///
    /// A malformed `hash` verifies as `false`.
    async fn verify(&self, hash: &PasswordHash, password: &Password) -> bool;

    /// Hash of no real password, carrying the same work factor as fresh hashes.
    ///
    /// Verifying against it costs as much as verifying a stored hash and never succeeds.
    fn dummy_hash(&self) -> PasswordHash;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token has expired")]
    Expired,
    #[error("Unexpected token error: {0}")]
    UnexpectedError(String),
}

/// Signs and verifies self-contained session tokens.
///
/// The signing key belongs to the issuer instance and is only read after
/// construction, so one issuer can be shared across concurrent requests.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, claims: &SessionClaims) -> Result<String, TokenError>;

    /// Rejects a bad signature with `InvalidToken` and an elapsed expiry with `Expired`.
    fn verify(&self, token: &str) -> Result<SessionClaims, TokenError>;

    /// Lifetime given to tokens issued at login.
    fn session_ttl(&self) -> Duration;
}

#[derive(Debug, Error)]
pub enum OAuthUrlError {
    #[error("Invalid OAuth configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Unexpected OAuth error: {0}")]
    UnexpectedError(String),
}

/// Third-party identity provider that starts a consent flow.
#[async_trait]
pub trait OAuthUrlProvider: Send + Sync {
    /// Fully formed consent-screen URL carrying `state` as its `state` query parameter.
    async fn authorization_url(&self, state: &OAuthState) -> Result<String, OAuthUrlError>;
}
