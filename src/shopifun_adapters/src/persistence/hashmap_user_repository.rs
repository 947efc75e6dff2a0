use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use shopifun_core::{
    Email, NewUser, User, UserId, UserProfile, UserRepository, UserRepositoryError,
};

/// In-process user repository. Clones share the same map.
#[derive(Default, Clone)]
pub struct HashMapUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl HashMapUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl UserRepository for HashMapUserRepository {
    #[tracing::instrument(name = "Adding user to in-memory repository", skip_all)]
    async fn create(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        // Uniqueness check and insert share one write lock
        let mut users = self.users.write().await;
        if users.values().any(|existing| existing.email() == &user.email) {
            return Err(UserRepositoryError::UserAlreadyExists);
        }

        let user = User::register(user);
        users.insert(user.id(), user.clone());
        Ok(user)
    }

    #[tracing::instrument(name = "Retrieving user by email", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<User, UserRepositoryError> {
        let users = self.users.read().await;
        users
            .values()
            .find(|user| user.email() == email)
            .cloned()
            .ok_or(UserRepositoryError::UserNotFound)
    }

    #[tracing::instrument(name = "Retrieving user by id", skip(self))]
    async fn find_by_id(&self, id: &UserId) -> Result<UserProfile, UserRepositoryError> {
        let users = self.users.read().await;
        users
            .get(id)
            .map(User::profile)
            .ok_or(UserRepositoryError::UserNotFound)
    }
}
