use secrecy::Secret;

use super::{
    email::Email,
    password::Password,
    user::{FullName, UserId},
    validation::ValidationError,
};

#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub email: Email,
    pub password: Password,
    pub full_name: FullName,
}

impl RegisterRequest {
    pub fn parse(
        email: Secret<String>,
        password: Secret<String>,
        full_name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            email: Email::try_from(email)?,
            password: Password::try_from(password)?,
            full_name: FullName::parse(full_name)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub email: Email,
    pub password: Password,
}

impl LoginRequest {
    pub fn parse(email: Secret<String>, password: Secret<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            email: Email::try_from(email)?,
            password: Password::try_from(password)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileRequest {
    pub user_id: UserId,
}

impl ProfileRequest {
    pub fn parse(user_id: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            user_id: UserId::parse(user_id)?,
        })
    }
}

impl From<UserId> for ProfileRequest {
    fn from(user_id: UserId) -> Self {
        Self { user_id }
    }
}
