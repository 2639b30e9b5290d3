//! Credential repository
//!
//! Login only ever reads from `usuarios`; the table is provisioned and
//! maintained outside this service.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

/// Credential record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CredentialRecord {
    pub id: i64,
    pub username: String,
    /// bcrypt or argon2 hash of the password
    #[sqlx(rename = "password")]
    pub password_hash: String,
    /// Empty when the row has no role
    pub rol: String,
}

/// Read-only lookup of stored credentials
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Find a credential record by its unique username
    async fn find_by_username(&self, username: &str) -> Result<Option<CredentialRecord>>;
}

/// Postgres-backed credential store
#[derive(Clone)]
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<CredentialRecord>> {
        let record = sqlx::query_as::<_, CredentialRecord>(
            r#"
            SELECT id::int8 AS id, username, password, COALESCE(rol, '') AS rol
            FROM usuarios
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }
}
