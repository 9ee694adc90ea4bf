//! Record repository trait (port)

use async_trait::async_trait;

use crate::domain::{Record, RecordChanges, RecordFilter};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Insert a new record; the store assigns the id.
    async fn insert(&self, record: &Record) -> Result<Record, DomainError>;

    /// Non-deleted records matching the filter, ordered by id.
    async fn list(&self, filter: &RecordFilter) -> Result<Vec<Record>, DomainError>;

    /// Apply changes to a non-deleted record; `None` if no live row matched.
    async fn update(
        &self,
        id: i64,
        changes: &RecordChanges,
    ) -> Result<Option<Record>, DomainError>;

    /// Flip the deletion flag; `false` if no live row matched.
    async fn soft_delete(&self, id: i64) -> Result<bool, DomainError>;
}
