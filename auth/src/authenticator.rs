use crate::credentials::Secret;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::Claims;
use crate::token::TokenError;
use crate::token::TokenIssuer;

/// Authentication coordinator combining secret verification and token
/// issuance.
///
/// Holds the only process-wide state of the core: the read-only signing
/// key inside the issuer. Safe to share across concurrent requests.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `signing_key` - Process-wide secret key for token signing
    pub fn new(signing_key: &[u8]) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_issuer: TokenIssuer::new(signing_key),
        }
    }

    /// Hash a secret for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_secret(&self, secret: &Secret) -> Result<String, PasswordError> {
        self.password_hasher.hash(secret)
    }

    /// Verify a secret against a stored digest and mint a session token.
    ///
    /// # Arguments
    /// * `secret` - Secret to verify
    /// * `stored_digest` - Digest persisted at registration
    /// * `subject` - Identity claim bound into the token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Secret does not match the digest
    /// * `Token` - Token issuance failed
    pub fn authenticate(
        &self,
        secret: &Secret,
        stored_digest: &str,
        subject: &str,
    ) -> Result<String, AuthenticationError> {
        if !self.password_hasher.verify(secret, stored_digest) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.token_issuer.issue(subject)?)
    }

    /// Mint a session token without secret verification.
    ///
    /// Used at registration, where the secret was just hashed and stored.
    ///
    /// # Errors
    /// * `IssuanceFailed` - Token encoding failed
    pub fn issue_token(&self, subject: &str) -> Result<String, TokenError> {
        self.token_issuer.issue(subject)
    }

    /// Verify a presented token and return its claims.
    ///
    /// # Errors
    /// * `Invalid` - Signature mismatch, malformed token, or expired
    pub fn verify_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.token_issuer.verify(token)
    }
}
