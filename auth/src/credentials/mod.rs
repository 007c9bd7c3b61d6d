pub mod email;
pub mod errors;
pub mod secret;

pub use email::EmailAddress;
pub use errors::EmailError;
pub use errors::SecretError;
pub use errors::ValidationError;
pub use secret::Secret;

/// A validated email/secret pair.
///
/// Transient by design: it exists only for the duration of one
/// registration or authentication call and is never persisted.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: EmailAddress,
    pub secret: Secret,
}

impl Credentials {
    /// Validate a raw email/secret pair.
    ///
    /// Rules are applied in order and the first failure wins: the email
    /// format is checked before the secret strength policy, and nothing
    /// here touches storage or hashing.
    ///
    /// # Errors
    /// * `InvalidEmail` - Email does not match the local@domain.tld shape
    /// * `WeakSecret` - Secret fails the composition policy
    pub fn parse(email: String, secret: String) -> Result<Self, ValidationError> {
        let email = EmailAddress::new(email)?;
        let secret = Secret::new(secret)?;
        Ok(Self { email, secret })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_pair() {
        let credentials =
            Credentials::parse("user@test.com".to_string(), "Passw0rd".to_string())
                .expect("Failed to parse credentials");
        assert_eq!(credentials.email.as_str(), "user@test.com");
        assert_eq!(credentials.secret.as_str(), "Passw0rd");
    }

    #[test]
    fn test_parse_invalid_email() {
        let result = Credentials::parse("not-an-email".to_string(), "Abcdefg1".to_string());
        assert!(matches!(result, Err(ValidationError::InvalidEmail(_))));
    }

    #[test]
    fn test_parse_weak_secret() {
        let result = Credentials::parse("a@b.com".to_string(), "short1".to_string());
        assert!(matches!(result, Err(ValidationError::WeakSecret(_))));
    }

    #[test]
    fn test_email_checked_before_secret() {
        // Both fields are bad; the email failure must win.
        let result = Credentials::parse("nope".to_string(), "short".to_string());
        assert!(matches!(result, Err(ValidationError::InvalidEmail(_))));
    }
}
