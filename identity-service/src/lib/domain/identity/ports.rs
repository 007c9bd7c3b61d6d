use async_trait::async_trait;
use auth::Credentials;
use auth::EmailAddress;

use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::models::Identity;

/// Port for identity domain service operations.
#[async_trait]
pub trait IdentityServicePort: Send + Sync + 'static {
    /// Register a new identity and mint its first session token.
    ///
    /// # Arguments
    /// * `credentials` - Validated email/secret pair
    ///
    /// # Returns
    /// Signed session token for the new identity
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Store operation failed
    async fn register(&self, credentials: Credentials) -> Result<String, IdentityError>;

    /// Authenticate stored credentials and mint a session token.
    ///
    /// # Arguments
    /// * `credentials` - Validated email/secret pair
    ///
    /// # Returns
    /// Signed session token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong secret, indistinguishably
    /// * `DatabaseError` - Store operation failed
    async fn authenticate(&self, credentials: Credentials) -> Result<String, IdentityError>;
}

/// Persistence operations for the identity aggregate.
///
/// The store enforces email uniqueness: `create` is an atomic
/// insert-if-absent, so no application-level lock guards the
/// check-then-insert sequence.
#[async_trait]
pub trait IdentityRepository: Send + Sync + 'static {
    /// Persist a new identity.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - An identity with this email exists (distinguishable)
    /// * `DatabaseError` - Store operation failed
    async fn create(&self, identity: Identity) -> Result<Identity, IdentityError>;

    /// Retrieve an identity by email.
    ///
    /// # Returns
    /// Optional identity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_email(&self, email: &EmailAddress)
        -> Result<Option<Identity>, IdentityError>;
}
