use crate::credentials::Secret;

use super::errors::PasswordError;

/// Secret hashing implementation.
///
/// One-way, salted, adaptive transform (internally bcrypt). A fresh random
/// salt is generated per call, so two digests of the same secret differ and
/// are only comparable through [`PasswordHasher::verify`].
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Work factor of 2^10 rounds: resists brute force while keeping
    /// hashing latency bounded.
    const COST: u32 = 10;

    /// Create a new password hasher with the fixed cost factor.
    pub fn new() -> Self {
        Self { cost: Self::COST }
    }

    /// Hash a secret for storage.
    ///
    /// # Arguments
    /// * `secret` - Validated secret to hash
    ///
    /// # Returns
    /// Digest string embedding algorithm, cost, and salt
    ///
    /// # Errors
    /// * `HashingFailed` - The hashing operation itself failed
    pub fn hash(&self, secret: &Secret) -> Result<String, PasswordError> {
        bcrypt::hash(secret.as_str(), self.cost)
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a secret against a stored digest.
    ///
    /// Recomputes using the salt embedded in `digest`; the comparison is
    /// constant time with respect to the secret. A malformed digest never
    /// raises: it verifies as `false`.
    ///
    /// # Arguments
    /// * `secret` - Secret to verify
    /// * `digest` - Stored digest
    pub fn verify(&self, secret: &Secret, digest: &str) -> bool {
        bcrypt::verify(secret.as_str(), digest).unwrap_or(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
