use auth::EmailAddress;
use chrono::DateTime;
use chrono::Utc;

/// Identity aggregate entity.
///
/// One registered account, keyed by email. Created on successful
/// registration and immutable thereafter; the store owns it exclusively.
/// `secret_hash` is the one-way digest of the secret: it is never the raw
/// secret, and it is never logged or returned to any caller.
#[derive(Debug, Clone)]
pub struct Identity {
    pub email: EmailAddress,
    pub secret_hash: String,
    pub created_at: DateTime<Utc>,
}
