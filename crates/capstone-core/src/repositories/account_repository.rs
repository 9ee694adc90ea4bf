//! Account repository trait (port)

use async_trait::async_trait;

use crate::domain::{Account, AccountChanges};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Insert a new account; the store assigns the id. A unique-violation on
    /// the username maps to `DomainError::UsernameAlreadyExists`.
    async fn insert(&self, account: &Account) -> Result<Account, DomainError>;

    /// Single combined credential lookup: username, digest, and not deleted.
    async fn find_by_credentials(
        &self,
        username: &str,
        password_digest: &str,
    ) -> Result<Option<Account>, DomainError>;

    /// Whether any row holds the username. Soft-deleted rows count: a
    /// deleted account keeps its username reserved.
    async fn username_taken(&self, username: &str) -> Result<bool, DomainError>;

    /// All non-deleted accounts, ordered by id.
    async fn list_active(&self) -> Result<Vec<Account>, DomainError>;

    /// Apply changes to a non-deleted account; `None` if no live row matched.
    async fn update(
        &self,
        id: i64,
        changes: &AccountChanges,
    ) -> Result<Option<Account>, DomainError>;

    /// Flip the deletion flag; `false` if no live row matched.
    async fn soft_delete(&self, id: i64) -> Result<bool, DomainError>;
}
