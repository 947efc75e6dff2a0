pub mod error;
pub mod service;
pub mod use_cases;

pub use error::IdentityError;
pub use service::{AuthenticationService, IdentityService};
pub use use_cases::{
    AuthenticateUseCase, LoginUseCase, OAuthUrlUseCase, ProfileUseCase, RegisterUseCase,
};
