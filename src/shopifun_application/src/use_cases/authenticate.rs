use shopifun_core::{SessionClaims, TokenIssuer};

use crate::error::IdentityError;

const BEARER_SCHEME: &str = "Bearer";

/// Authenticate use case - turns an `Authorization: Bearer <token>` value into claims
pub struct AuthenticateUseCase<'a, T>
where
    T: TokenIssuer,
{
    token_issuer: &'a T,
}

impl<'a, T> AuthenticateUseCase<'a, T>
where
    T: TokenIssuer,
{
    pub fn new(token_issuer: &'a T) -> Self {
        Self { token_issuer }
    }

    /// Execute the authenticate use case
    ///
    /// # Arguments
    /// * `authorization` - Raw value of the `Authorization` header
    ///
    /// # Returns
    /// The verified claims, or `IdentityError::Unauthorized` for a missing,
    /// malformed, forged or expired token
    #[tracing::instrument(name = "AuthenticateUseCase::execute", skip_all)]
    pub fn execute(&self, authorization: &str) -> Result<SessionClaims, IdentityError> {
        let token = extract_bearer_token(authorization).ok_or(IdentityError::Unauthorized)?;

        self.token_issuer.verify(token).map_err(|e| {
            tracing::debug!(reason = %e, "Rejected session token");
            IdentityError::from(e)
        })
    }
}

fn extract_bearer_token(authorization: &str) -> Option<&str> {
    let (scheme, token) = authorization.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
