use async_trait::async_trait;
use shopifun_core::{
    LoginRequest, LoginResponse, OAuthRedirect, OAuthUrlProvider, PasswordHasher, ProfileRequest,
    RegisterRequest, RegisterResponse, SessionClaims, TokenIssuer, UserProfile, UserRepository,
};

use crate::{
    error::IdentityError,
    use_cases::{
        AuthenticateUseCase, LoginUseCase, OAuthUrlUseCase, ProfileUseCase, RegisterUseCase,
    },
};

/// Identity operations exposed to a request layer.
#[async_trait]
pub trait IdentityService: Send + Sync {
    async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, IdentityError>;

    async fn login(&self, request: LoginRequest) -> Result<LoginResponse, IdentityError>;

    async fn profile(&self, request: ProfileRequest) -> Result<UserProfile, IdentityError>;

    /// Profile of whoever holds the bearer token in `authorization`.
    async fn current_profile(&self, authorization: &str) -> Result<UserProfile, IdentityError>;

    fn authenticate(&self, authorization: &str) -> Result<SessionClaims, IdentityError>;

    async fn oauth_url(&self) -> Result<OAuthRedirect, IdentityError>;
}

/// Default `IdentityService`, wiring the use cases to one set of collaborators.
pub struct AuthenticationService<R, H, T, O> {
    user_repository: R,
    password_hasher: H,
    token_issuer: T,
    oauth_provider: O,
}

impl<R, H, T, O> AuthenticationService<R, H, T, O>
where
    R: UserRepository,
    H: PasswordHasher,
    T: TokenIssuer,
    O: OAuthUrlProvider,
{
    pub fn new(user_repository: R, password_hasher: H, token_issuer: T, oauth_provider: O) -> Self {
        Self {
            user_repository,
            password_hasher,
            token_issuer,
            oauth_provider,
        }
    }

    pub fn token_issuer(&self) -> &T {
        &self.token_issuer
    }
}

#[async_trait]
impl<R, H, T, O> IdentityService for AuthenticationService<R, H, T, O>
where
    R: UserRepository,
    H: PasswordHasher,
    T: TokenIssuer,
    O: OAuthUrlProvider,
{
    async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, IdentityError> {
        RegisterUseCase::new(&self.user_repository, &self.password_hasher)
            .execute(request)
            .await
    }

    async fn login(&self, request: LoginRequest) -> Result<LoginResponse, IdentityError> {
        LoginUseCase::new(
            &self.user_repository,
            &self.password_hasher,
            &self.token_issuer,
        )
        .execute(request)
        .await
    }

    async fn profile(&self, request: ProfileRequest) -> Result<UserProfile, IdentityError> {
        ProfileUseCase::new(&self.user_repository)
            .execute(request)
            .await
    }

    async fn current_profile(&self, authorization: &str) -> Result<UserProfile, IdentityError> {
        let claims = self.authenticate(authorization)?;
        self.profile(ProfileRequest::from(claims.subject)).await
    }

    fn authenticate(&self, authorization: &str) -> Result<SessionClaims, IdentityError> {
        AuthenticateUseCase::new(&self.token_issuer).execute(authorization)
    }

    async fn oauth_url(&self) -> Result<OAuthRedirect, IdentityError> {
        OAuthUrlUseCase::new(&self.oauth_provider).execute().await
    }
}
