use auth::EmailError;
use auth::PasswordError;
use auth::SecretError;
use auth::TokenError;
use thiserror::Error;

/// Top-level error for all identity operations.
#[derive(Debug, Clone, Error)]
pub enum IdentityError {
    // Credential validation errors (automatically converted via #[from])
    #[error("{0}")]
    InvalidEmail(#[from] EmailError),

    #[error("{0}")]
    WeakSecret(#[from] SecretError),

    // Domain-level errors
    #[error("Email already exists")]
    EmailAlreadyExists,

    /// Unified failure for both unknown email and wrong secret. The two
    /// cases are deliberately indistinguishable to prevent user
    /// enumeration; do not split this variant.
    #[error("Invalid credentials")]
    InvalidCredentials,

    // Infrastructure errors
    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<auth::credentials::ValidationError> for IdentityError {
    fn from(err: auth::credentials::ValidationError) -> Self {
        match err {
            auth::credentials::ValidationError::InvalidEmail(e) => IdentityError::InvalidEmail(e),
            auth::credentials::ValidationError::WeakSecret(e) => IdentityError::WeakSecret(e),
        }
    }
}

impl From<anyhow::Error> for IdentityError {
    fn from(err: anyhow::Error) -> Self {
        IdentityError::Unknown(err.to_string())
    }
}
