use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    email::Email,
    user::{NewUser, User, UserId, UserProfile},
};

// UserRepository port trait and errors
#[derive(Debug, Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserRepositoryError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UserNotFound, Self::UserNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Persistence for user credentials.
///
/// Implementations own their transaction and isolation discipline: a call
/// that is dropped before completion must not leave a partial record behind.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user. Fails with `UserAlreadyExists` when the email is taken.
    async fn create(&self, user: NewUser) -> Result<User, UserRepositoryError>;
    async fn find_by_email(&self, email: &Email) -> Result<User, UserRepositoryError>;
    async fn find_by_id(&self, id: &UserId) -> Result<UserProfile, UserRepositoryError>;
}
