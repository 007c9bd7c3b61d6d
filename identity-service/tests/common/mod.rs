use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::EmailAddress;
use identity_service::domain::identity::errors::IdentityError;
use identity_service::domain::identity::models::Identity;
use identity_service::domain::identity::ports::IdentityRepository;
use identity_service::domain::identity::service::IdentityService;
use identity_service::inbound::http::router::create_router;

pub const TEST_SIGNING_KEY: &[u8] = b"test-signing-key-for-tokens-at-least-32-bytes";

/// In-memory identity store for integration tests.
///
/// A single lock around the map makes the check-then-insert atomic,
/// matching the duplicate-rejection guarantee the real store provides.
pub struct InMemoryIdentityRepository {
    identities: Mutex<HashMap<String, Identity>>,
}

impl InMemoryIdentityRepository {
    pub fn new() -> Self {
        Self {
            identities: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl IdentityRepository for InMemoryIdentityRepository {
    async fn create(&self, identity: Identity) -> Result<Identity, IdentityError> {
        let mut identities = self.identities.lock().unwrap();
        if identities.contains_key(identity.email.as_str()) {
            return Err(IdentityError::EmailAlreadyExists);
        }
        identities.insert(identity.email.as_str().to_string(), identity.clone());
        Ok(identity)
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Identity>, IdentityError> {
        let identities = self.identities.lock().unwrap();
        Ok(identities.get(email.as_str()).cloned())
    }
}

/// Test application that spawns a real server on a random port
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub authenticator: Arc<Authenticator>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let repository = Arc::new(InMemoryIdentityRepository::new());
        let authenticator = Arc::new(Authenticator::new(TEST_SIGNING_KEY));

        let identity_service = Arc::new(IdentityService::new(
            repository,
            Arc::clone(&authenticator),
        ));

        let router = create_router(identity_service, Arc::clone(&authenticator));

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            authenticator,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }
}
