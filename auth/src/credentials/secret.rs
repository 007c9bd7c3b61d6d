use std::fmt;

use super::errors::SecretError;

/// Raw secret value type.
///
/// Ensures the secret is at least 8 characters and contains at least one
/// lowercase letter, one uppercase letter, and one digit. There is no
/// symbol requirement; symbols are simply allowed.
///
/// The wrapped value is never persisted and is redacted from `Debug`
/// output so it cannot leak through logging.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    const MIN_LENGTH: usize = 8;

    /// Create a new secret after checking the composition policy.
    ///
    /// Rules are applied in order and the first failure wins.
    ///
    /// # Errors
    /// * `TooShort` - Fewer than 8 characters
    /// * `MissingLowercase` - No lowercase letter
    /// * `MissingUppercase` - No uppercase letter
    /// * `MissingDigit` - No digit
    pub fn new(secret: String) -> Result<Self, SecretError> {
        if secret.chars().count() < Self::MIN_LENGTH {
            return Err(SecretError::TooShort {
                min: Self::MIN_LENGTH,
            });
        }
        if !secret.chars().any(|c| c.is_ascii_lowercase()) {
            return Err(SecretError::MissingLowercase);
        }
        if !secret.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(SecretError::MissingUppercase);
        }
        if !secret.chars().any(|c| c.is_ascii_digit()) {
            return Err(SecretError::MissingDigit);
        }
        Ok(Self(secret))
    }

    /// Get the raw secret as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_compliant_secret() {
        assert!(Secret::new("Passw0rd".to_string()).is_ok());
    }

    #[test]
    fn test_symbols_are_permitted() {
        // Policy requires length and three character classes; anything
        // else, symbols included, is allowed.
        assert!(Secret::new("P@ssw0rd!".to_string()).is_ok());
    }

    #[test]
    fn test_rejects_short_secret() {
        assert_eq!(
            Secret::new("short1".to_string()),
            Err(SecretError::TooShort { min: 8 })
        );
    }

    #[test]
    fn test_rejects_missing_lowercase() {
        assert_eq!(
            Secret::new("PASSW0RD".to_string()),
            Err(SecretError::MissingLowercase)
        );
    }

    #[test]
    fn test_rejects_missing_uppercase() {
        assert_eq!(
            Secret::new("passw0rd".to_string()),
            Err(SecretError::MissingUppercase)
        );
    }

    #[test]
    fn test_rejects_missing_digit() {
        assert_eq!(
            Secret::new("Password".to_string()),
            Err(SecretError::MissingDigit)
        );
    }

    #[test]
    fn test_debug_redacts_value() {
        let secret = Secret::new("Passw0rd".to_string()).unwrap();
        assert_eq!(format!("{:?}", secret), "Secret(<redacted>)");
    }
}
