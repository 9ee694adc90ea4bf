//! Account service: registration, listing, update, soft delete

use std::sync::Arc;

use tracing::{info, warn};

use capstone_security::password_digest;

use crate::domain::{Account, AccountChanges};
use crate::error::DomainError;
use crate::repositories::AccountRepository;
use crate::services::creation_stamp;

pub struct AccountService<R: AccountRepository> {
    accounts: Arc<R>,
}

impl<R: AccountRepository> AccountService<R> {
    pub fn new(accounts: Arc<R>) -> Self {
        Self { accounts }
    }

    /// Register a new account.
    ///
    /// The submitted password is digested before it is stored; approval and
    /// deletion flags are forced false regardless of what the caller sent.
    /// A username held by any existing row, soft-deleted or not, is taken.
    pub async fn register(
        &self,
        name: &str,
        username: &str,
        password: &str,
        role: &str,
    ) -> Result<Account, DomainError> {
        info!("Registration attempt for username: {}", username);

        if self.accounts.username_taken(username).await? {
            warn!("Registration failed: username already exists: {}", username);
            return Err(DomainError::UsernameAlreadyExists(username.to_string()));
        }

        let account = Account {
            id: 0,
            name: name.to_string(),
            username: username.to_string(),
            password: password_digest(password),
            role: role.to_string(),
            creation_date: creation_stamp(),
            is_approved: false,
            is_deleted: false,
        };

        // The pre-check above is not atomic with this insert; the unique
        // constraint on username settles races, surfacing as the same
        // conflict error.
        let created = self.accounts.insert(&account).await?;

        info!("Registration successful for: {}", created.username);
        Ok(created)
    }

    pub async fn list(&self) -> Result<Vec<Account>, DomainError> {
        self.accounts.list_active().await
    }

    pub async fn update(&self, id: i64, changes: AccountChanges) -> Result<Account, DomainError> {
        self.accounts
            .update(id, &changes)
            .await?
            .ok_or(DomainError::AccountNotFound)
    }

    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        if self.accounts.soft_delete(id).await? {
            info!("Account {} soft-deleted", id);
            Ok(())
        } else {
            Err(DomainError::AccountNotFound)
        }
    }
}
