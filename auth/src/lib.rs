//! Credential-issuance core library
//!
//! Provides the three building blocks of the authentication engine:
//! - Credential validation (email format and secret strength policy)
//! - Secret hashing (salted, adaptive bcrypt)
//! - Signed, time-bounded session tokens (HS256 JWT)
//!
//! The service crate composes these per request; nothing in here touches
//! storage or holds mutable state, so every piece can be tested in isolation
//! with its own signing key.
//!
//! # Examples
//!
//! ## Credential Validation
//! ```
//! use auth::Credentials;
//!
//! let credentials = Credentials::parse(
//!     "user@test.com".to_string(),
//!     "Passw0rd".to_string(),
//! ).unwrap();
//! assert_eq!(credentials.email.as_str(), "user@test.com");
//! ```
//!
//! ## Secret Hashing
//! ```
//! use auth::{PasswordHasher, Secret};
//!
//! let hasher = PasswordHasher::new();
//! let secret = Secret::new("Passw0rd".to_string()).unwrap();
//! let digest = hasher.hash(&secret).unwrap();
//! assert!(hasher.verify(&secret, &digest));
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, Secret};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash secret
//! let secret = Secret::new("Passw0rd".to_string()).unwrap();
//! let digest = auth.hash_secret(&secret).unwrap();
//!
//! // Login: verify and issue token
//! let token = auth.authenticate(&secret, &digest, "user@test.com").unwrap();
//!
//! // Later: verify the token independently
//! let claims = auth.verify_token(&token).unwrap();
//! assert_eq!(claims.sub, "user@test.com");
//! ```

pub mod authenticator;
pub mod credentials;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use credentials::Credentials;
pub use credentials::EmailAddress;
pub use credentials::EmailError;
pub use credentials::Secret;
pub use credentials::SecretError;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenIssuer;
