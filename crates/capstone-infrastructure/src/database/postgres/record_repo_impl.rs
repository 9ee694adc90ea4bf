use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::{debug, error, info};

use capstone_core::domain::{Record, RecordChanges, RecordFilter};
use capstone_core::error::DomainError;
use capstone_core::repositories::RecordRepository;

pub struct PgRecordRepository {
    pool: PgPool,
}

impl PgRecordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct RecordRow {
    pub id: i64,
    pub account_id: i64,
    pub contact_role: String,
    pub student_count: i32,
    pub acad_year: String,
    pub title: String,
    pub company_name: String,
    pub company_poc: String,
    pub description: String,
    pub creation_date: String,
    pub is_deleted: bool,
}

impl From<RecordRow> for Record {
    fn from(row: RecordRow) -> Self {
        Record {
            id: row.id,
            account_id: row.account_id,
            contact_role: row.contact_role,
            student_count: row.student_count,
            acad_year: row.acad_year,
            title: row.title,
            company_name: row.company_name,
            company_poc: row.company_poc,
            description: row.description,
            creation_date: row.creation_date,
            is_deleted: row.is_deleted,
        }
    }
}

#[async_trait]
impl RecordRepository for PgRecordRepository {
    async fn insert(&self, record: &Record) -> Result<Record, DomainError> {
        info!("Creating record for account {}", record.account_id);

        let row: RecordRow = sqlx::query_as(
            r#"
            INSERT INTO records (account_id, contact_role, student_count, acad_year, title,
                                 company_name, company_poc, description, creation_date, is_deleted)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, account_id, contact_role, student_count, acad_year, title,
                      company_name, company_poc, description, creation_date, is_deleted
            "#,
        )
        .bind(record.account_id)
        .bind(&record.contact_role)
        .bind(record.student_count)
        .bind(&record.acad_year)
        .bind(&record.title)
        .bind(&record.company_name)
        .bind(&record.company_poc)
        .bind(&record.description)
        .bind(&record.creation_date)
        .bind(record.is_deleted)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error creating record: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.into())
    }

    async fn list(&self, filter: &RecordFilter) -> Result<Vec<Record>, DomainError> {
        let query = match (&filter.acad_year, &filter.title) {
            (None, None) => sqlx::query_as(
                r#"
                SELECT id, account_id, contact_role, student_count, acad_year, title,
                       company_name, company_poc, description, creation_date, is_deleted
                FROM records
                WHERE is_deleted = false
                ORDER BY id
                "#,
            ),
            (Some(acad_year), None) => sqlx::query_as(
                r#"
                SELECT id, account_id, contact_role, student_count, acad_year, title,
                       company_name, company_poc, description, creation_date, is_deleted
                FROM records
                WHERE acad_year = $1 AND is_deleted = false
                ORDER BY id
                "#,
            )
            .bind(acad_year),
            (None, Some(title)) => sqlx::query_as(
                r#"
                SELECT id, account_id, contact_role, student_count, acad_year, title,
                       company_name, company_poc, description, creation_date, is_deleted
                FROM records
                WHERE title LIKE $1 AND is_deleted = false
                ORDER BY id
                "#,
            )
            .bind(format!("%{}%", title)),
            (Some(acad_year), Some(title)) => sqlx::query_as(
                r#"
                SELECT id, account_id, contact_role, student_count, acad_year, title,
                       company_name, company_poc, description, creation_date, is_deleted
                FROM records
                WHERE acad_year = $1 AND title LIKE $2 AND is_deleted = false
                ORDER BY id
                "#,
            )
            .bind(acad_year)
            .bind(format!("%{}%", title)),
        };

        let rows: Vec<RecordRow> = query.fetch_all(&self.pool).await.map_err(|e: sqlx::Error| {
            error!("Database error listing records: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        debug!("Listed {} records", rows.len());
        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn update(
        &self,
        id: i64,
        changes: &RecordChanges,
    ) -> Result<Option<Record>, DomainError> {
        let row: Option<RecordRow> = sqlx::query_as(
            r#"
            UPDATE records
            SET contact_role = $2, student_count = $3, acad_year = $4, title = $5,
                company_name = $6, company_poc = $7, description = $8
            WHERE id = $1 AND is_deleted = false
            RETURNING id, account_id, contact_role, student_count, acad_year, title,
                      company_name, company_poc, description, creation_date, is_deleted
            "#,
        )
        .bind(id)
        .bind(&changes.contact_role)
        .bind(changes.student_count)
        .bind(&changes.acad_year)
        .bind(&changes.title)
        .bind(&changes.company_name)
        .bind(&changes.company_poc)
        .bind(&changes.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error updating record {}: {}", id, e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn soft_delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE records
            SET is_deleted = true
            WHERE id = $1 AND is_deleted = false
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error deleting record {}: {}", id, e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(result.rows_affected() > 0)
    }
}
