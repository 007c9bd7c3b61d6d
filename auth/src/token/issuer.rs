use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Issues and verifies signed, expiring session tokens.
///
/// Tokens are JWTs signed with HS256 (HMAC-SHA256) under a process-wide
/// secret key. The key must remain constant for the lifetime of any token
/// it signed; rotation invalidates outstanding tokens.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenIssuer {
    /// Create a new issuer from the process signing key.
    ///
    /// # Security Notes
    /// - The key should be at least 256 bits (32 bytes) for HS256
    /// - Store it in environment variables or a vault, never in code
    pub fn new(signing_key: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(signing_key),
            decoding_key: DecodingKey::from_secret(signing_key),
            algorithm: Algorithm::HS256,
        }
    }

    /// Mint a token for a subject, valid for the fixed one-hour window.
    ///
    /// # Errors
    /// * `IssuanceFailed` - Token encoding failed
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        self.encode(&Claims::for_subject(subject))
    }

    fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::IssuanceFailed(e.to_string()))
    }

    /// Verify a presented token and return its claims.
    ///
    /// The signature is checked before any claim is inspected, so a forged
    /// payload is rejected without being read. Expiry is then checked with
    /// zero leeway against the current clock. All failure modes map to the
    /// same `Invalid` error; the caller learns nothing about the cause.
    ///
    /// # Errors
    /// * `Invalid` - Signature mismatch, malformed token, or expired
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| TokenError::Invalid)
    }
}
