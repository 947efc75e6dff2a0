use chrono::{DateTime, Duration, SubsecRound, Utc};

use super::user::{Role, UserId};

/// Identity facts carried inside a signed session token.
///
/// Never persisted: created at login and reconstructed only by verifying the
/// token that embeds them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    pub subject: UserId,
    pub role: Role,
    pub expires_at: DateTime<Utc>,
}

impl SessionClaims {
    pub fn new(subject: UserId, role: Role, expires_at: DateTime<Utc>) -> Self {
        Self {
            subject,
            role,
            expires_at,
        }
    }

    /// Claims expiring `ttl` from now, on a whole second.
    ///
    /// Returns `None` when the expiry falls outside the representable range.
    pub fn expiring_in(subject: UserId, role: Role, ttl: Duration) -> Option<Self> {
        let expires_at = Utc::now().trunc_subsecs(0).checked_add_signed(ttl)?;
        Some(Self::new(subject, role, expires_at))
    }

    pub fn is_expired_at(&self, instant: DateTime<Utc>) -> bool {
        self.expires_at < instant
    }
}
