use chrono::{DateTime, Duration};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use shopifun_core::{Role, SessionClaims, TokenError, TokenIssuer, UserId};

fn default_token_ttl_in_seconds() -> i64 {
    24 * 60 * 60
}

const MAX_TOKEN_TTL_IN_SECONDS: i64 = 365 * 24 * 60 * 60;

#[derive(Clone, Deserialize)]
pub struct JwtConfig {
    #[serde(rename = "secret")]
    pub jwt_secret: Secret<String>,
    #[serde(rename = "time_to_live", default = "default_token_ttl_in_seconds")]
    pub token_ttl_in_seconds: i64,
}

impl JwtConfig {
    pub fn new(jwt_secret: Secret<String>) -> Self {
        Self {
            jwt_secret,
            token_ttl_in_seconds: default_token_ttl_in_seconds(),
        }
    }
}

/// HS256 session tokens.
///
/// Keys are derived once from the configured secret and kept for the
/// lifetime of the issuer; nothing is shared through globals.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    session_ttl: Duration,
}

impl JwtTokenIssuer {
    pub fn new(config: &JwtConfig) -> Result<Self, TokenError> {
        let secret = config.jwt_secret.expose_secret().as_bytes();
        if secret.is_empty() {
            return Err(TokenError::UnexpectedError(
                "JWT secret must not be empty".to_string(),
            ));
        }

        let session_ttl = Some(config.token_ttl_in_seconds)
            .filter(|ttl| (1..=MAX_TOKEN_TTL_IN_SECONDS).contains(ttl))
            .and_then(Duration::try_seconds)
            .ok_or(TokenError::UnexpectedError(
                "Invalid token time to live".to_string(),
            ))?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            session_ttl,
        })
    }
}

impl TokenIssuer for JwtTokenIssuer {
    #[tracing::instrument(name = "Issuing session token", skip_all, fields(sub = %claims.subject))]
    fn issue(&self, claims: &SessionClaims) -> Result<String, TokenError> {
        let exp: u64 = claims.expires_at.timestamp().try_into().map_err(|_| {
            TokenError::UnexpectedError("Expiration precedes the epoch".to_string())
        })?;

        let claims = Claims {
            sub: claims.subject.to_string(),
            role: claims.role,
            exp,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::UnexpectedError(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::InvalidToken,
            })?;

        let subject = UserId::parse(&claims.sub).map_err(|_| TokenError::InvalidToken)?;
        let expires_at = i64::try_from(claims.exp)
            .ok()
            .and_then(|exp| DateTime::from_timestamp(exp, 0))
            .ok_or(TokenError::InvalidToken)?;

        Ok(SessionClaims::new(subject, claims.role, expires_at))
    }

    fn session_ttl(&self) -> Duration {
        self.session_ttl
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Claims {
    sub: String,
    role: Role,
    exp: u64,
}
