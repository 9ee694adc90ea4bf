use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::{error, info};

use capstone_core::domain::{Account, AccountChanges};
use capstone_core::error::DomainError;
use capstone_core::repositories::AccountRepository;

pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct AccountRow {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub password: String,
    pub role: String,
    pub creation_date: String,
    pub is_approved: bool,
    pub is_deleted: bool,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Account {
            id: row.id,
            name: row.name,
            username: row.username,
            password: row.password,
            role: row.role,
            creation_date: row.creation_date,
            is_approved: row.is_approved,
            is_deleted: row.is_deleted,
        }
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn insert(&self, account: &Account) -> Result<Account, DomainError> {
        info!("Creating account with username: {}", account.username);

        let row: AccountRow = sqlx::query_as(
            r#"
            INSERT INTO accounts (name, username, password, role, creation_date, is_approved, is_deleted)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, username, password, role, creation_date, is_approved, is_deleted
            "#,
        )
        .bind(&account.name)
        .bind(&account.username)
        .bind(&account.password)
        .bind(&account.role)
        .bind(&account.creation_date)
        .bind(account.is_approved)
        .bind(account.is_deleted)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating account: {}", e);
            let msg = e.to_string();
            if msg.contains("unique") || msg.contains("duplicate") {
                DomainError::UsernameAlreadyExists(account.username.clone())
            } else {
                DomainError::DatabaseError(msg)
            }
        })?;

        info!("Account created with id {}", row.id);
        Ok(row.into())
    }

    async fn find_by_credentials(
        &self,
        username: &str,
        password_digest: &str,
    ) -> Result<Option<Account>, DomainError> {
        let row: Option<AccountRow> = sqlx::query_as(
            r#"
            SELECT id, name, username, password, role, creation_date, is_approved, is_deleted
            FROM accounts
            WHERE username = $1 AND password = $2 AND is_deleted = false
            "#,
        )
        .bind(username)
        .bind(password_digest)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding account by credentials: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn username_taken(&self, username: &str) -> Result<bool, DomainError> {
        // Deliberately no is_deleted filter: a soft-deleted row keeps its
        // username reserved.
        let existing: Option<String> =
            sqlx::query_scalar("SELECT username FROM accounts WHERE username = $1")
                .bind(username)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e: sqlx::Error| {
                    error!("Database error checking username: {}", e);
                    DomainError::DatabaseError(e.to_string())
                })?;

        Ok(existing.is_some())
    }

    async fn list_active(&self) -> Result<Vec<Account>, DomainError> {
        let rows: Vec<AccountRow> = sqlx::query_as(
            r#"
            SELECT id, name, username, password, role, creation_date, is_approved, is_deleted
            FROM accounts
            WHERE is_deleted = false
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing accounts: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn update(
        &self,
        id: i64,
        changes: &AccountChanges,
    ) -> Result<Option<Account>, DomainError> {
        let row: Option<AccountRow> = sqlx::query_as(
            r#"
            UPDATE accounts
            SET name = $2, role = $3, is_approved = $4
            WHERE id = $1 AND is_deleted = false
            RETURNING id, name, username, password, role, creation_date, is_approved, is_deleted
            "#,
        )
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.role)
        .bind(changes.is_approved)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating account {}: {}", id, e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn soft_delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE accounts
            SET is_deleted = true
            WHERE id = $1 AND is_deleted = false
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error deleting account {}: {}", id, e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(result.rows_affected() > 0)
    }
}
