use secrecy::{ExposeSecret, Secret};

use super::validation::ValidationError;

/// A plaintext password that passed length checks. Never stored, never logged.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub const MIN_LENGTH: usize = 8;
    pub const MAX_LENGTH: usize = 128;

    pub fn parse(password: Secret<String>) -> Result<Self, ValidationError> {
        let length = password.expose_secret().chars().count();

        if length < Self::MIN_LENGTH {
            return Err(ValidationError::PasswordTooShort {
                min: Self::MIN_LENGTH,
            });
        }
        if length > Self::MAX_LENGTH {
            return Err(ValidationError::PasswordTooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(password))
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = ValidationError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
