pub mod config;
pub mod hashing;
pub mod oauth;
pub mod persistence;
pub mod telemetry;
pub mod token;

pub use crate::config::Settings;
pub use hashing::{Argon2PasswordHasher, HashingParams};
pub use oauth::{GoogleOAuthConfig, GoogleOAuthUrlProvider};
pub use persistence::HashMapUserRepository;
pub use token::{JwtConfig, JwtTokenIssuer};
