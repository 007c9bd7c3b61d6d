use async_trait::async_trait;
use auth::EmailAddress;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::models::Identity;
use crate::domain::identity::ports::IdentityRepository;

/// PostgreSQL-backed identity store.
///
/// One row per identity, keyed by email. The primary key supplies the
/// atomic insert-if-absent guarantee: a duplicate insert fails with a
/// unique violation instead of needing an application-level lock.
pub struct PostgresIdentityRepository {
    pool: PgPool,
}

impl PostgresIdentityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityRepository for PostgresIdentityRepository {
    async fn create(&self, identity: Identity) -> Result<Identity, IdentityError> {
        sqlx::query(
            r#"
            INSERT INTO identities (email, secret_hash, created_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(identity.email.as_str())
        .bind(&identity.secret_hash)
        .bind(identity.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return IdentityError::EmailAlreadyExists;
                }
            }
            IdentityError::DatabaseError(e.to_string())
        })?;

        Ok(identity)
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<Identity>, IdentityError> {
        let row = sqlx::query(
            r#"
            SELECT email, secret_hash, created_at
            FROM identities
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| IdentityError::DatabaseError(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(Identity {
                email: EmailAddress::new(r.get("email"))?,
                secret_hash: r.get("secret_hash"),
                created_at: r.get("created_at"),
            })),
            None => Ok(None),
        }
    }
}
