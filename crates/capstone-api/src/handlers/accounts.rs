//! Account HTTP handlers (register, list, update, soft delete)

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use capstone_core::domain::{Account, AccountChanges};
use capstone_core::repositories::AccountRepository;
use capstone_core::services::AccountService;

use crate::error::ApiError;

/// Registration request payload. Unknown or missing fields default to empty;
/// approval and deletion flags are ignored even if submitted.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateAccountRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role: String,
}

/// Register handler - POST /api/accounts
pub async fn create_account<R: AccountRepository + 'static>(
    State(service): State<Arc<AccountService<R>>>,
    payload: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Account>), ApiError> {
    let Json(request) =
        payload.map_err(|_| ApiError::BadRequest("Invalid JSON payload".to_string()))?;

    let created = service
        .register(
            &request.name,
            &request.username,
            &request.password,
            &request.role,
        )
        .await?;

    Ok((StatusCode::ACCEPTED, Json(created)))
}

/// List handler - GET /api/accounts
pub async fn list_accounts<R: AccountRepository + 'static>(
    State(service): State<Arc<AccountService<R>>>,
) -> Result<(StatusCode, Json<Vec<Account>>), ApiError> {
    let accounts = service.list().await?;
    Ok((StatusCode::ACCEPTED, Json(accounts)))
}

/// Update handler - PUT /api/accounts/{id}
pub async fn update_account<R: AccountRepository + 'static>(
    State(service): State<Arc<AccountService<R>>>,
    Path(id): Path<i64>,
    payload: Result<Json<AccountChanges>, JsonRejection>,
) -> Result<(StatusCode, Json<Account>), ApiError> {
    let Json(changes) =
        payload.map_err(|_| ApiError::BadRequest("Invalid JSON payload".to_string()))?;

    let updated = service.update(id, changes).await?;
    Ok((StatusCode::ACCEPTED, Json(updated)))
}

/// Soft-delete handler - DELETE /api/accounts/{id}
pub async fn delete_account<R: AccountRepository + 'static>(
    State(service): State<Arc<AccountService<R>>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    service.delete(id).await?;
    Ok(StatusCode::ACCEPTED)
}
