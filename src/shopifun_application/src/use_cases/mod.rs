pub mod authenticate;
pub mod login;
pub mod oauth_url;
pub mod profile;
pub mod register;

#[cfg(test)]
pub(crate) mod mocks;

pub use authenticate::AuthenticateUseCase;
pub use login::LoginUseCase;
pub use oauth_url::OAuthUrlUseCase;
pub use profile::ProfileUseCase;
pub use register::RegisterUseCase;
