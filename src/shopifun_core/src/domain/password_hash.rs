use secrecy::Secret;

/// Output of the one-way password hash, in whatever encoded form the hasher
/// produces (PHC string for argon2). Comparison against a plaintext only ever
/// happens through `PasswordHasher::verify`.
#[derive(Debug, Clone)]
pub struct PasswordHash(Secret<String>);

impl PasswordHash {
    pub fn new(encoded: Secret<String>) -> Self {
        Self(encoded)
    }
}

impl AsRef<Secret<String>> for PasswordHash {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl From<String> for PasswordHash {
    fn from(encoded: String) -> Self {
        Self(Secret::from(encoded))
    }
}

