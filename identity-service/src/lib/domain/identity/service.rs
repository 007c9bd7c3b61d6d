use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::Credentials;
use chrono::Utc;

use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::models::Identity;
use crate::domain::identity::ports::IdentityRepository;
use crate::domain::identity::ports::IdentityServicePort;

/// Domain service implementation for identity operations.
///
/// Composes the store collaborator with the credential core. bcrypt
/// hashing and verification are CPU-bound, so both run on the blocking
/// thread pool; the async executor keeps servicing unrelated requests
/// while a hash is in flight.
pub struct IdentityService<IR>
where
    IR: IdentityRepository,
{
    repository: Arc<IR>,
    authenticator: Arc<Authenticator>,
}

impl<IR> IdentityService<IR>
where
    IR: IdentityRepository,
{
    /// Create a new identity service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Identity persistence implementation
    /// * `authenticator` - Shared credential core holding the signing key
    pub fn new(repository: Arc<IR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<IR> IdentityServicePort for IdentityService<IR>
where
    IR: IdentityRepository,
{
    async fn register(&self, credentials: Credentials) -> Result<String, IdentityError> {
        let Credentials { email, secret } = credentials;

        let authenticator = Arc::clone(&self.authenticator);
        let secret_hash = tokio::task::spawn_blocking(move || authenticator.hash_secret(&secret))
            .await
            .map_err(|e| IdentityError::Unknown(format!("Hashing task failed: {}", e)))??;

        let identity = Identity {
            email,
            secret_hash,
            created_at: Utc::now(),
        };

        // The store rejects a duplicate email atomically; no lock guards
        // the check-then-insert.
        let created = self.repository.create(identity).await?;

        let token = self.authenticator.issue_token(created.email.as_str())?;

        tracing::info!(email = %created.email, "Identity registered");

        Ok(token)
    }

    async fn authenticate(&self, credentials: Credentials) -> Result<String, IdentityError> {
        let Credentials { email, secret } = credentials;

        // Unknown email and wrong secret must be indistinguishable to the
        // caller, so both collapse into InvalidCredentials here.
        let identity = self
            .repository
            .find_by_email(&email)
            .await?
            .ok_or(IdentityError::InvalidCredentials)?;

        let authenticator = Arc::clone(&self.authenticator);
        let token = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&secret, &identity.secret_hash, identity.email.as_str())
        })
        .await
        .map_err(|e| IdentityError::Unknown(format!("Verification task failed: {}", e)))?
        .map_err(|e| match e {
            AuthenticationError::InvalidCredentials => IdentityError::InvalidCredentials,
            AuthenticationError::Password(err) => IdentityError::Password(err),
            AuthenticationError::Token(err) => IdentityError::Token(err),
        })?;

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use auth::EmailAddress;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;

    mock! {
        pub TestIdentityRepository {}

        #[async_trait]
        impl IdentityRepository for TestIdentityRepository {
            async fn create(&self, identity: Identity) -> Result<Identity, IdentityError>;
            async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Identity>, IdentityError>;
        }
    }

    const KEY: &[u8] = b"test_signing_key_at_least_32_bytes!";

    fn credentials(email: &str, secret: &str) -> Credentials {
        Credentials::parse(email.to_string(), secret.to_string())
            .expect("test credentials fail validation")
    }

    #[tokio::test]
    async fn test_register_success() {
        let mut repository = MockTestIdentityRepository::new();

        repository
            .expect_create()
            .withf(|identity| {
                identity.email.as_str() == "user@test.com"
                    && identity.secret_hash.starts_with("$2")
                    && identity.secret_hash != "Passw0rd"
            })
            .times(1)
            .returning(|identity| Ok(identity));

        let authenticator = Arc::new(Authenticator::new(KEY));
        let service = IdentityService::new(Arc::new(repository), Arc::clone(&authenticator));

        let token = service
            .register(credentials("user@test.com", "Passw0rd"))
            .await
            .expect("Registration failed");

        let claims = authenticator
            .verify_token(&token)
            .expect("Issued token failed verification");
        assert_eq!(claims.sub, "user@test.com");
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let mut repository = MockTestIdentityRepository::new();

        repository
            .expect_create()
            .times(1)
            .returning(|_| Err(IdentityError::EmailAlreadyExists));

        let service = IdentityService::new(
            Arc::new(repository),
            Arc::new(Authenticator::new(KEY)),
        );

        let result = service
            .register(credentials("user@test.com", "Passw0rd"))
            .await;
        assert!(matches!(result, Err(IdentityError::EmailAlreadyExists)));
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let authenticator = Arc::new(Authenticator::new(KEY));

        let secret = auth::Secret::new("Passw0rd".to_string()).unwrap();
        let secret_hash = authenticator.hash_secret(&secret).unwrap();

        let mut repository = MockTestIdentityRepository::new();
        repository
            .expect_find_by_email()
            .withf(|email| email.as_str() == "user@test.com")
            .times(1)
            .returning(move |email| {
                Ok(Some(Identity {
                    email: email.clone(),
                    secret_hash: secret_hash.clone(),
                    created_at: Utc::now(),
                }))
            });

        let service = IdentityService::new(Arc::new(repository), Arc::clone(&authenticator));

        let token = service
            .authenticate(credentials("user@test.com", "Passw0rd"))
            .await
            .expect("Authentication failed");

        let claims = authenticator.verify_token(&token).unwrap();
        assert_eq!(claims.sub, "user@test.com");
    }

    #[tokio::test]
    async fn test_authenticate_wrong_secret() {
        let authenticator = Arc::new(Authenticator::new(KEY));

        let secret = auth::Secret::new("Passw0rd".to_string()).unwrap();
        let secret_hash = authenticator.hash_secret(&secret).unwrap();

        let mut repository = MockTestIdentityRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(move |email| {
                Ok(Some(Identity {
                    email: email.clone(),
                    secret_hash: secret_hash.clone(),
                    created_at: Utc::now(),
                }))
            });

        let service = IdentityService::new(Arc::new(repository), authenticator);

        let result = service
            .authenticate(credentials("user@test.com", "Wr0ngPass"))
            .await;
        assert!(matches!(result, Err(IdentityError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_authenticate_unknown_email() {
        let mut repository = MockTestIdentityRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));

        let service = IdentityService::new(
            Arc::new(repository),
            Arc::new(Authenticator::new(KEY)),
        );

        let result = service
            .authenticate(credentials("ghost@test.com", "Passw0rd"))
            .await;
        assert!(matches!(result, Err(IdentityError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_failure_messages_are_identical() {
        // Unknown email and wrong secret must produce the exact same
        // user-visible message.
        let unknown = IdentityError::InvalidCredentials.to_string();
        let mismatch = IdentityError::InvalidCredentials.to_string();
        assert_eq!(unknown, mismatch);
        assert_eq!(unknown, "Invalid credentials");
    }
}
