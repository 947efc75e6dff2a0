//! Hand-rolled port doubles shared by the use case tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Duration};
use secrecy::{ExposeSecret, Secret};
use shopifun_core::{
    Email, HashingError, LoginRequest, NewUser, OAuthState, OAuthUrlError, OAuthUrlProvider,
    Password, PasswordHash, PasswordHasher, RegisterRequest, Role, SessionClaims, TokenError,
    TokenIssuer, User, UserId, UserProfile, UserRepository, UserRepositoryError,
};
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Email, User>>>,
}

#[async_trait::async_trait]
impl UserRepository for MockUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.email) {
            return Err(UserRepositoryError::UserAlreadyExists);
        }
        let user = User::register(user);
        users.insert(user.email().clone(), user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> Result<User, UserRepositoryError> {
        let users = self.users.read().await;
        users
            .get(email)
            .cloned()
            .ok_or(UserRepositoryError::UserNotFound)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<UserProfile, UserRepositoryError> {
        let users = self.users.read().await;
        users
            .values()
            .find(|user| user.id() == *id)
            .map(User::profile)
            .ok_or(UserRepositoryError::UserNotFound)
    }
}

/// Repository whose backing store is down.
#[derive(Clone, Default)]
pub struct UnavailableUserRepository;

#[async_trait::async_trait]
impl UserRepository for UnavailableUserRepository {
    async fn create(&self, _user: NewUser) -> Result<User, UserRepositoryError> {
        Err(UserRepositoryError::UnexpectedError("connection refused".into()))
    }

    async fn find_by_email(&self, _email: &Email) -> Result<User, UserRepositoryError> {
        Err(UserRepositoryError::UnexpectedError("connection refused".into()))
    }

    async fn find_by_id(&self, _id: &UserId) -> Result<UserProfile, UserRepositoryError> {
        Err(UserRepositoryError::UnexpectedError("connection refused".into()))
    }
}

/// Reversible "hash" so tests can run without argon2 cost.
#[derive(Clone, Default)]
pub struct MockPasswordHasher;

#[async_trait::async_trait]
impl PasswordHasher for MockPasswordHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, HashingError> {
        Ok(PasswordHash::from(format!(
            "mock${}",
            password.as_ref().expose_secret()
        )))
    }

    async fn verify(&self, hash: &PasswordHash, password: &Password) -> bool {
        hash.as_ref()
            .expose_secret()
            .strip_prefix("mock$")
            .is_some_and(|plain| plain == password.as_ref().expose_secret())
    }

    fn dummy_hash(&self) -> PasswordHash {
        PasswordHash::from("mock$".to_owned())
    }
}

/// Records how many verifications ran, delegating to `MockPasswordHasher`.
#[derive(Clone, Default)]
pub struct CountingPasswordHasher {
    verifications: Arc<AtomicUsize>,
}

impl CountingPasswordHasher {
    pub fn verifications(&self) -> usize {
        self.verifications.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl PasswordHasher for CountingPasswordHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, HashingError> {
        MockPasswordHasher.hash(password).await
    }

    async fn verify(&self, hash: &PasswordHash, password: &Password) -> bool {
        self.verifications.fetch_add(1, Ordering::SeqCst);
        MockPasswordHasher.verify(hash, password).await
    }

    fn dummy_hash(&self) -> PasswordHash {
        MockPasswordHasher.dummy_hash()
    }
}

#[derive(Clone, Default)]
pub struct BrokenPasswordHasher;

#[async_trait::async_trait]
impl PasswordHasher for BrokenPasswordHasher {
    async fn hash(&self, _password: &Password) -> Result<PasswordHash, HashingError> {
        Err(HashingError::HashingFailed("out of memory".into()))
    }

    async fn verify(&self, _hash: &PasswordHash, _password: &Password) -> bool {
        false
    }

    fn dummy_hash(&self) -> PasswordHash {
        PasswordHash::from(String::new())
    }
}

/// Token format: `subject|role|expiry-timestamp`, unsigned.
#[derive(Clone)]
pub struct MockTokenIssuer {
    pub ttl: Duration,
}

impl Default for MockTokenIssuer {
    fn default() -> Self {
        Self {
            ttl: Duration::hours(24),
        }
    }
}

impl TokenIssuer for MockTokenIssuer {
    fn issue(&self, claims: &SessionClaims) -> Result<String, TokenError> {
        Ok(format!(
            "{}|{}|{}",
            claims.subject,
            claims.role,
            claims.expires_at.timestamp()
        ))
    }

    fn verify(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let mut parts = token.split('|');
        let (Some(subject), Some(role), Some(exp), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(TokenError::InvalidToken);
        };

        let subject = UserId::parse(subject).map_err(|_| TokenError::InvalidToken)?;
        let role = match role {
            "user" => Role::User,
            "seller" => Role::Seller,
            "admin" => Role::Admin,
            _ => return Err(TokenError::InvalidToken),
        };
        let expires_at = exp
            .parse::<i64>()
            .ok()
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
            .ok_or(TokenError::InvalidToken)?;

        let claims = SessionClaims::new(subject, role, expires_at);
        if claims.is_expired_at(chrono::Utc::now()) {
            return Err(TokenError::Expired);
        }
        Ok(claims)
    }

    fn session_ttl(&self) -> Duration {
        self.ttl
    }
}

#[derive(Clone, Default)]
pub struct MockOAuthUrlProvider;

#[async_trait::async_trait]
impl OAuthUrlProvider for MockOAuthUrlProvider {
    async fn authorization_url(&self, state: &OAuthState) -> Result<String, OAuthUrlError> {
        Ok(format!(
            "https://accounts.example.com/o/oauth2/auth?client_id=shopifun&state={state}"
        ))
    }
}

#[derive(Clone, Default)]
pub struct BrokenOAuthUrlProvider;

#[async_trait::async_trait]
impl OAuthUrlProvider for BrokenOAuthUrlProvider {
    async fn authorization_url(&self, _state: &OAuthState) -> Result<String, OAuthUrlError> {
        Err(OAuthUrlError::InvalidConfiguration("missing client id".into()))
    }
}

pub fn register_request(email: &str, password: &str) -> RegisterRequest {
    RegisterRequest::parse(
        Secret::from(email.to_owned()),
        Secret::from(password.to_owned()),
        "Test User",
    )
    .unwrap()
}

pub fn login_request(email: &str, password: &str) -> LoginRequest {
    LoginRequest::parse(
        Secret::from(email.to_owned()),
        Secret::from(password.to_owned()),
    )
    .unwrap()
}
