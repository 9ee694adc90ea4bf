//! Authentication HTTP handler (login)

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use capstone_core::repositories::AccountRepository;
use capstone_core::services::AuthService;
use capstone_shared::constants::AUTH_COOKIE;

use crate::error::ApiError;

/// Login request payload
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Login handler - POST /api/auth
///
/// On success the token travels back as an HTTP-only cookie and the body
/// echoes the stored account row.
pub async fn login<R: AccountRepository + 'static>(
    State(service): State<Arc<AuthService<R>>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(credentials) =
        payload.map_err(|_| ApiError::BadRequest("Invalid JSON payload".to_string()))?;

    let (account, token) = service
        .login(&credentials.username, &credentials.password)
        .await?;

    let cookie = format!("{AUTH_COOKIE}={token}; HttpOnly; Path=/");

    Ok((
        StatusCode::ACCEPTED,
        [(header::SET_COOKIE, cookie)],
        Json(account),
    )
        .into_response())
}
