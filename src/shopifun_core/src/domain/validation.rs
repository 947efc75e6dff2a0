use thiserror::Error;

/// Input rejected before it reaches any collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
    #[error("Password must be at most {max} characters")]
    PasswordTooLong { max: usize },
    #[error("Full name must not be empty")]
    EmptyFullName,
    #[error("Full name must be at most {max} characters")]
    FullNameTooLong { max: usize },
    #[error("Invalid user id")]
    InvalidUserId,
}
