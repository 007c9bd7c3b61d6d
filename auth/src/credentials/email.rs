use std::fmt;

use super::errors::EmailError;

/// Email address value type.
///
/// Accepts the standard local@domain.tld shape: non-empty local part and
/// domain with no whitespace or stray `@`, and at least one dot-separated
/// label after the `@`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not match the local@domain.tld shape
    pub fn new(email: String) -> Result<Self, EmailError> {
        if Self::is_valid(&email) {
            Ok(Self(email))
        } else {
            Err(EmailError::InvalidFormat)
        }
    }

    fn is_valid(email: &str) -> bool {
        if email.chars().any(char::is_whitespace) {
            return false;
        }

        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };

        // A second `@` anywhere invalidates the address.
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return false;
        }

        // The domain needs at least one dot with a non-empty label on
        // each side of the final one.
        match domain.rsplit_once('.') {
            Some((name, tld)) => !name.is_empty() && !tld.is_empty(),
            None => false,
        }
    }

    /// Get the email as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
