//! Record HTTP handlers (create, filtered listing, update, soft delete)

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use capstone_core::domain::{NewRecord, Record, RecordChanges, RecordFilter};
use capstone_core::repositories::RecordRepository;
use capstone_core::services::RecordService;

use crate::error::ApiError;

/// Listing query parameters. An empty value means the filter is absent,
/// matching how browsers send `?ay=&title=foo`.
#[derive(Debug, Deserialize)]
pub struct RecordListQuery {
    pub ay: Option<String>,
    pub title: Option<String>,
}

impl From<RecordListQuery> for RecordFilter {
    fn from(query: RecordListQuery) -> Self {
        RecordFilter {
            acad_year: query.ay.filter(|s| !s.is_empty()),
            title: query.title.filter(|s| !s.is_empty()),
        }
    }
}

/// Create handler - POST /api/records
pub async fn create_record<R: RecordRepository + 'static>(
    State(service): State<Arc<RecordService<R>>>,
    payload: Result<Json<NewRecord>, JsonRejection>,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    let Json(new) = payload.map_err(|_| ApiError::BadRequest("Invalid JSON payload".to_string()))?;

    let created = service.create(new).await?;
    Ok((StatusCode::ACCEPTED, Json(created)))
}

/// List handler - GET /api/records
pub async fn list_records<R: RecordRepository + 'static>(
    State(service): State<Arc<RecordService<R>>>,
    Query(query): Query<RecordListQuery>,
) -> Result<(StatusCode, Json<Vec<Record>>), ApiError> {
    let records = service.list(query.into()).await?;
    Ok((StatusCode::ACCEPTED, Json(records)))
}

/// Update handler - PUT /api/records/{id}
pub async fn update_record<R: RecordRepository + 'static>(
    State(service): State<Arc<RecordService<R>>>,
    Path(id): Path<i64>,
    payload: Result<Json<RecordChanges>, JsonRejection>,
) -> Result<(StatusCode, Json<Record>), ApiError> {
    let Json(changes) =
        payload.map_err(|_| ApiError::BadRequest("Invalid JSON payload".to_string()))?;

    let updated = service.update(id, changes).await?;
    Ok((StatusCode::ACCEPTED, Json(updated)))
}

/// Soft-delete handler - DELETE /api/records/{id}
pub async fn delete_record<R: RecordRepository + 'static>(
    State(service): State<Arc<RecordService<R>>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    service.delete(id).await?;
    Ok(StatusCode::ACCEPTED)
}
