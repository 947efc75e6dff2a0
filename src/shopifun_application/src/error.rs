use http::StatusCode;
use shopifun_core::{HashingError, OAuthUrlError, TokenError, UserRepositoryError, ValidationError};
use thiserror::Error;

/// Failure categories surfaced by the identity use cases.
///
/// Messages never contain the submitted password, the stored hash, or a token.
#[derive(Debug, Error, PartialEq)]
pub enum IdentityError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// Shared by "no such user" and "wrong password" so the two are indistinguishable.
    #[error("Invalid email or password")]
    Unauthorized,

    #[error("User not found")]
    NotFound,

    #[error("User already exists")]
    Conflict,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IdentityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            IdentityError::Validation(_) => StatusCode::BAD_REQUEST,
            IdentityError::Unauthorized => StatusCode::UNAUTHORIZED,
            IdentityError::NotFound => StatusCode::NOT_FOUND,
            IdentityError::Conflict => StatusCode::CONFLICT,
            IdentityError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<UserRepositoryError> for IdentityError {
    fn from(error: UserRepositoryError) -> Self {
        match error {
            UserRepositoryError::UserAlreadyExists => IdentityError::Conflict,
            UserRepositoryError::UserNotFound => IdentityError::NotFound,
            UserRepositoryError::UnexpectedError(e) => IdentityError::Internal(e),
        }
    }
}

impl From<HashingError> for IdentityError {
    fn from(error: HashingError) -> Self {
        IdentityError::Internal(error.to_string())
    }
}

impl From<TokenError> for IdentityError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::InvalidToken | TokenError::Expired => IdentityError::Unauthorized,
            TokenError::UnexpectedError(e) => IdentityError::Internal(e),
        }
    }
}

impl From<OAuthUrlError> for IdentityError {
    fn from(error: OAuthUrlError) -> Self {
        IdentityError::Internal(error.to_string())
    }
}
