use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Tokens expire a fixed hour after issuance.
pub const TOKEN_TTL_SECS: i64 = 3600;

/// Claim set carried by a session token.
///
/// Self-contained: validity is fully determined by the signature and the
/// `exp` timestamp, with no server-side session state behind it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (the identity's email)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a subject, issued now and expiring after the
    /// fixed token window.
    pub fn for_subject(subject: impl Into<String>) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::seconds(TOKEN_TTL_SECS);

        Self {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }
}
