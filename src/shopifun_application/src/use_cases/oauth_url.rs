use shopifun_core::{OAuthRedirect, OAuthState, OAuthUrlProvider};

use crate::error::IdentityError;

/// OAuth URL use case - asks the identity provider for a consent-screen URL
pub struct OAuthUrlUseCase<'a, O>
where
    O: OAuthUrlProvider,
{
    oauth_provider: &'a O,
}

impl<'a, O> OAuthUrlUseCase<'a, O>
where
    O: OAuthUrlProvider,
{
    pub fn new(oauth_provider: &'a O) -> Self {
        Self { oauth_provider }
    }

    /// Start a sign-in attempt with a freshly generated state.
    ///
    /// The caller keeps the returned state and compares it with the one the
    /// provider echoes back on the callback.
    pub async fn execute(&self) -> Result<OAuthRedirect, IdentityError> {
        self.execute_with_state(OAuthState::generate()).await
    }

    #[tracing::instrument(name = "OAuthUrlUseCase::execute", skip_all)]
    pub async fn execute_with_state(
        &self,
        state: OAuthState,
    ) -> Result<OAuthRedirect, IdentityError> {
        let url = self
            .oauth_provider
            .authorization_url(&state)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "OAuth provider failed to build authorization URL");
                IdentityError::from(e)
            })?;

        Ok(OAuthRedirect { url, state })
    }
}
