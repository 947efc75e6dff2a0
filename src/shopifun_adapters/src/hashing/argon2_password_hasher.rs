use argon2::{
    Algorithm, Argon2, Params, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher as _, SaltString, rand_core::OsRng},
};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::Deserialize;
use shopifun_core::{HashingError, Password, PasswordHash, PasswordHasher};

fn default_memory_kib() -> u32 {
    15000
}

fn default_iterations() -> u32 {
    2
}

fn default_parallelism() -> u32 {
    1
}

/// Argon2id work factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct HashingParams {
    #[serde(default = "default_memory_kib")]
    pub memory_kib: u32,
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

impl Default for HashingParams {
    fn default() -> Self {
        Self {
            memory_kib: default_memory_kib(),
            iterations: default_iterations(),
            parallelism: default_parallelism(),
        }
    }
}

impl HashingParams {
    fn hasher(&self) -> Result<Argon2<'static>, HashingError> {
        let params = Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| HashingError::HashingFailed(e.to_string()))?;

        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

#[derive(Debug, Clone)]
pub struct Argon2PasswordHasher {
    params: HashingParams,
    dummy_hash: PasswordHash,
}

impl Argon2PasswordHasher {
    /// Builds the hasher and its dummy hash, which costs one argon2 run.
    ///
    /// The dummy hash is taken over random bytes that are discarded.
    pub fn new(params: HashingParams) -> Self {
        let unknowable = SaltString::generate(&mut OsRng);
        let dummy_hash = hash_bytes(&params, unknowable.as_str().as_bytes()).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to compute dummy password hash");
            PasswordHash::from(String::new())
        });

        Self { params, dummy_hash }
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self::new(HashingParams::default())
    }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: &Password) -> Result<PasswordHash, HashingError> {
        let current_span: tracing::Span = tracing::Span::current();
        let params = self.params;
        let password = password.clone();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| compute_password_hash(&params, &password))
        })
        .await
        .map_err(|e| HashingError::HashingFailed(e.to_string()))?
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(&self, hash: &PasswordHash, password: &Password) -> bool {
        let current_span: tracing::Span = tracing::Span::current();
        let hash = hash.clone();
        let password = password.clone();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| verify_password_hash(&hash, &password))
        })
        .await
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "Password verification task failed");
            false
        })
    }

    fn dummy_hash(&self) -> PasswordHash {
        self.dummy_hash.clone()
    }
}

fn compute_password_hash(
    params: &HashingParams,
    password: &Password,
) -> Result<PasswordHash, HashingError> {
    hash_bytes(params, password.as_ref().expose_secret().as_bytes())
}

fn hash_bytes(params: &HashingParams, raw: &[u8]) -> Result<PasswordHash, HashingError> {
    let salt = SaltString::generate(&mut OsRng);

    params
        .hasher()?
        .hash_password(raw, &salt)
        .map(|hash| PasswordHash::from(hash.to_string()))
        .map_err(|e| HashingError::HashingFailed(e.to_string()))
}

// Work factor and salt are read from the encoded hash
fn verify_password_hash(expected: &PasswordHash, candidate: &Password) -> bool {
    let Ok(expected) = password_hash::PasswordHash::new(expected.as_ref().expose_secret()) else {
        tracing::warn!("Stored password hash is malformed");
        return false;
    };

    Argon2::default()
        .verify_password(candidate.as_ref().expose_secret().as_bytes(), &expected)
        .is_ok()
}
