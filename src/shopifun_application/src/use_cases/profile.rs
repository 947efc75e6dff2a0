use shopifun_core::{ProfileRequest, UserProfile, UserRepository};

use crate::error::IdentityError;

/// Profile use case - looks a user up by id
pub struct ProfileUseCase<'a, R>
where
    R: UserRepository,
{
    user_repository: &'a R,
}

impl<'a, R> ProfileUseCase<'a, R>
where
    R: UserRepository,
{
    pub fn new(user_repository: &'a R) -> Self {
        Self { user_repository }
    }

    #[tracing::instrument(name = "ProfileUseCase::execute", skip(self))]
    pub async fn execute(&self, request: ProfileRequest) -> Result<UserProfile, IdentityError> {
        let profile = self.user_repository.find_by_id(&request.user_id).await?;
        Ok(profile)
    }
}
