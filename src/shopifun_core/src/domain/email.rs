use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, Secret};

use super::validation::ValidationError;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// A syntactically valid email address.
///
/// Stored and compared exactly as given: `A@x.com` and `a@x.com` are
/// different accounts.
#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

impl Email {
    pub fn parse(email: Secret<String>) -> Result<Self, ValidationError> {
        if EMAIL_PATTERN.is_match(email.expose_secret()) {
            Ok(Self(email))
        } else {
            Err(ValidationError::InvalidEmail)
        }
    }
}

impl TryFrom<Secret<String>> for Email {
    type Error = ValidationError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn email(raw: &str) -> Result<Email, ValidationError> {
        Email::try_from(Secret::from(raw.to_owned()))
    }

    #[test]
    fn accepts_well_formed_addresses() {
        assert!(email("a@x.com").is_ok());
        assert!(email("first.last+tag@shop.example.org").is_ok());
    }

    #[test]
    fn rejects_malformed_addresses() {
        for raw in ["", "plainaddress", "@x.com", "a@", "a@x", "a b@x.com", "a@@x.com"] {
            assert_eq!(email(raw), Err(ValidationError::InvalidEmail), "{raw}");
        }
    }

    #[test]
    fn comparison_is_case_sensitive() {
        assert_ne!(email("A@x.com").unwrap(), email("a@x.com").unwrap());
    }

    #[quickcheck]
    fn strings_without_at_sign_are_rejected(raw: String) -> bool {
        raw.contains('@') || email(&raw).is_err()
    }
}
