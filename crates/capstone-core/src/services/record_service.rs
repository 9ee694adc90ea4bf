//! Record service: create, filtered listing, update, soft delete

use std::sync::Arc;

use tracing::info;

use crate::domain::{NewRecord, Record, RecordChanges, RecordFilter};
use crate::error::DomainError;
use crate::repositories::RecordRepository;
use crate::services::creation_stamp;

pub struct RecordService<R: RecordRepository> {
    records: Arc<R>,
}

impl<R: RecordRepository> RecordService<R> {
    pub fn new(records: Arc<R>) -> Self {
        Self { records }
    }

    /// Create a record. No uniqueness constraint applies; the service stamps
    /// the creation date and clears the deletion flag.
    pub async fn create(&self, new: NewRecord) -> Result<Record, DomainError> {
        let record = Record {
            id: 0,
            account_id: new.account_id,
            contact_role: new.contact_role,
            student_count: new.student_count,
            acad_year: new.acad_year,
            title: new.title,
            company_name: new.company_name,
            company_poc: new.company_poc,
            description: new.description,
            creation_date: creation_stamp(),
            is_deleted: false,
        };

        let created = self.records.insert(&record).await?;
        info!("Record {} created for account {}", created.id, created.account_id);
        Ok(created)
    }

    /// Non-deleted records matching the filter. An empty result is an empty
    /// list, not an error.
    pub async fn list(&self, filter: RecordFilter) -> Result<Vec<Record>, DomainError> {
        self.records.list(&filter).await
    }

    pub async fn update(&self, id: i64, changes: RecordChanges) -> Result<Record, DomainError> {
        self.records
            .update(id, &changes)
            .await?
            .ok_or(DomainError::RecordNotFound)
    }

    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        if self.records.soft_delete(id).await? {
            info!("Record {} soft-deleted", id);
            Ok(())
        } else {
            Err(DomainError::RecordNotFound)
        }
    }
}
