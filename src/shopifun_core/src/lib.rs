pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    email::Email,
    oauth_state::{OAuthRedirect, OAuthState},
    password::Password,
    password_hash::PasswordHash,
    requests::{LoginRequest, ProfileRequest, RegisterRequest},
    responses::{LoginResponse, RegisterResponse},
    session::SessionClaims,
    user::{FullName, NewUser, Role, User, UserId, UserProfile},
    validation::ValidationError,
};

pub use ports::{
    repositories::{UserRepository, UserRepositoryError},
    services::{
        HashingError, OAuthUrlError, OAuthUrlProvider, PasswordHasher, TokenError, TokenIssuer,
    },
};
