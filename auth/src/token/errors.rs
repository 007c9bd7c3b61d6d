use thiserror::Error;

/// Error type for token operations.
///
/// Verification failures collapse into the single `Invalid` variant:
/// callers are deliberately not told whether a token was tampered with,
/// malformed, or expired.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Failed to issue token: {0}")]
    IssuanceFailed(String),

    #[error("Invalid or expired token")]
    Invalid,
}
