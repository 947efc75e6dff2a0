use shopifun_core::{
    LoginRequest, LoginResponse, PasswordHasher, SessionClaims, TokenIssuer, UserRepository,
    UserRepositoryError,
};

use crate::error::IdentityError;

/// Login use case - checks credentials and issues a session token
pub struct LoginUseCase<'a, R, H, T>
where
    R: UserRepository,
    H: PasswordHasher,
    T: TokenIssuer,
{
    user_repository: &'a R,
    password_hasher: &'a H,
    token_issuer: &'a T,
}

impl<'a, R, H, T> LoginUseCase<'a, R, H, T>
where
    R: UserRepository,
    H: PasswordHasher,
    T: TokenIssuer,
{
    pub fn new(user_repository: &'a R, password_hasher: &'a H, token_issuer: &'a T) -> Self {
        Self {
            user_repository,
            password_hasher,
            token_issuer,
        }
    }

    /// Execute the login use case
    ///
    /// An unknown email and a wrong password both end in the same
    /// `IdentityError::Unauthorized`, after the same amount of hashing work.
    #[tracing::instrument(name = "LoginUseCase::execute", skip_all)]
    pub async fn execute(&self, request: LoginRequest) -> Result<LoginResponse, IdentityError> {
        let user = match self.user_repository.find_by_email(&request.email).await {
            Ok(user) => user,
            Err(UserRepositoryError::UserNotFound) => {
                self.password_hasher
                    .verify(&self.password_hasher.dummy_hash(), &request.password)
                    .await;
                tracing::warn!("Login attempt for unknown email");
                return Err(IdentityError::Unauthorized);
            }
            Err(e) => return Err(e.into()),
        };

        if !self
            .password_hasher
            .verify(user.password_hash(), &request.password)
            .await
        {
            tracing::warn!(user_id = %user.id(), "Password does not match");
            return Err(IdentityError::Unauthorized);
        }

        let claims =
            SessionClaims::expiring_in(user.id(), user.role(), self.token_issuer.session_ttl())
                .ok_or_else(|| {
                    tracing::error!("Session expiry is out of range");
                    IdentityError::Internal("Session expiry is out of range".to_string())
                })?;

        // Issuer failures surface as internal errors
        let token = self
            .token_issuer
            .issue(&claims)
            .map_err(|e| IdentityError::Internal(e.to_string()))?;

        Ok(LoginResponse {
            token,
            expires_at: claims.expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::{
        RegisterUseCase,
        mocks::{
            CountingPasswordHasher, MockPasswordHasher, MockTokenIssuer, MockUserRepository,
            UnavailableUserRepository, login_request, register_request,
        },
    };
    use chrono::{Duration, Utc};
    use shopifun_core::Role;

    async fn registered_repository() -> (MockUserRepository, shopifun_core::UserId) {
        let repository = MockUserRepository::default();
        let response = RegisterUseCase::new(&repository, &MockPasswordHasher)
            .execute(register_request("a@x.com", "Secret123"))
            .await
            .unwrap();
        (repository, response.id)
    }

    #[tokio::test]
    async fn test_login_issues_token_for_subject() {
        let (repository, user_id) = registered_repository().await;
        let issuer = MockTokenIssuer::default();
        let use_case = LoginUseCase::new(&repository, &MockPasswordHasher, &issuer);

        let response = use_case
            .execute(login_request("a@x.com", "Secret123"))
            .await
            .unwrap();

        assert!(!response.token.is_empty());
        let claims = issuer.verify(&response.token).unwrap();
        assert_eq!(claims.subject, user_id);
        assert_eq!(claims.role, Role::User);
        assert!(response.expires_at > Utc::now() + Duration::hours(23));
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let (repository, _) = registered_repository().await;
        let issuer = MockTokenIssuer::default();
        let use_case = LoginUseCase::new(&repository, &MockPasswordHasher, &issuer);

        let unknown_email = use_case
            .execute(login_request("nobody@x.com", "Secret123"))
            .await
            .unwrap_err();
        let wrong_password = use_case
            .execute(login_request("a@x.com", "Wrong1234"))
            .await
            .unwrap_err();

        assert_eq!(unknown_email, IdentityError::Unauthorized);
        assert_eq!(unknown_email, wrong_password);
        assert_eq!(unknown_email.to_string(), wrong_password.to_string());
    }

    #[tokio::test]
    async fn test_login_email_is_case_sensitive() {
        let (repository, _) = registered_repository().await;
        let issuer = MockTokenIssuer::default();
        let use_case = LoginUseCase::new(&repository, &MockPasswordHasher, &issuer);

        let result = use_case
            .execute(login_request("A@x.com", "Secret123"))
            .await;

        assert_eq!(result, Err(IdentityError::Unauthorized));
    }

    #[tokio::test]
    async fn test_login_repository_outage_is_not_unauthorized() {
        let issuer = MockTokenIssuer::default();
        let use_case = LoginUseCase::new(&UnavailableUserRepository, &MockPasswordHasher, &issuer);

        let result = use_case
            .execute(login_request("a@x.com", "Secret123"))
            .await;

        assert!(matches!(result, Err(IdentityError::Internal(_))));
    }

    #[tokio::test]
    async fn test_unknown_email_costs_one_verification_like_wrong_password() {
        let (repository, _) = registered_repository().await;
        let issuer = MockTokenIssuer::default();

        let unknown_hasher = CountingPasswordHasher::default();
        let result = LoginUseCase::new(&repository, &unknown_hasher, &issuer)
            .execute(login_request("nobody@x.com", "Secret123"))
            .await;
        assert_eq!(result, Err(IdentityError::Unauthorized));

        let wrong_hasher = CountingPasswordHasher::default();
        let result = LoginUseCase::new(&repository, &wrong_hasher, &issuer)
            .execute(login_request("a@x.com", "Wrong1234"))
            .await;
        assert_eq!(result, Err(IdentityError::Unauthorized));

        assert_eq!(unknown_hasher.verifications(), 1);
        assert_eq!(wrong_hasher.verifications(), 1);
    }

    #[tokio::test]
    async fn test_login_expiry_matches_token_expiry() {
        let (repository, _) = registered_repository().await;
        let issuer = MockTokenIssuer::default();
        let use_case = LoginUseCase::new(&repository, &MockPasswordHasher, &issuer);

        let response = use_case
            .execute(login_request("a@x.com", "Secret123"))
            .await
            .unwrap();

        let claims = issuer.verify(&response.token).unwrap();
        assert_eq!(claims.expires_at, response.expires_at);
    }

    #[tokio::test]
    async fn test_login_with_unrepresentable_expiry_is_internal() {
        let (repository, _) = registered_repository().await;
        let issuer = MockTokenIssuer {
            ttl: Duration::seconds(9_000_000_000_000),
        };
        let use_case = LoginUseCase::new(&repository, &MockPasswordHasher, &issuer);

        let result = use_case
            .execute(login_request("a@x.com", "Secret123"))
            .await;

        assert!(matches!(result, Err(IdentityError::Internal(_))));
    }
}
