use chrono::{DateTime, Utc};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use super::user::{Role, User, UserId};

/// Summary of a freshly created account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub id: UserId,
    pub email: String,
    pub full_name: String,
    pub role: Role,
}

impl From<&User> for RegisterResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            email: user.email().as_ref().expose_secret().clone(),
            full_name: user.full_name().as_str().to_owned(),
            role: user.role(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}
