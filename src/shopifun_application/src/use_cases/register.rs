use shopifun_core::{
    NewUser, PasswordHasher, RegisterRequest, RegisterResponse, Role, UserRepository,
};

use crate::error::IdentityError;

/// Register use case - hashes the password and stores the new user
pub struct RegisterUseCase<'a, R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    user_repository: &'a R,
    password_hasher: &'a H,
}

impl<'a, R, H> RegisterUseCase<'a, R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    pub fn new(user_repository: &'a R, password_hasher: &'a H) -> Self {
        Self {
            user_repository,
            password_hasher,
        }
    }

    /// Execute the register use case
    ///
    /// # Returns
    /// Summary of the created user, `IdentityError::Conflict` if the email is
    /// already registered, or `IdentityError::Internal` if hashing fails
    #[tracing::instrument(name = "RegisterUseCase::execute", skip_all)]
    pub async fn execute(&self, request: RegisterRequest) -> Result<RegisterResponse, IdentityError> {
        let password_hash = self
            .password_hasher
            .hash(&request.password)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to hash password");
                IdentityError::from(e)
            })?;

        let user = self
            .user_repository
            .create(NewUser {
                email: request.email,
                full_name: request.full_name,
                password_hash,
                role: Role::default(),
            })
            .await?;

        tracing::info!(user_id = %user.id(), "User registered");

        Ok(RegisterResponse::from(&user))
    }
}
