//! Router builders, one per service process.

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use capstone_core::repositories::{AccountRepository, RecordRepository};
use capstone_core::services::{AccountService, AuthService, RecordService};

use crate::handlers::{accounts, auth, health, records};

pub fn auth_router<R: AccountRepository + 'static>(service: Arc<AuthService<R>>) -> Router {
    Router::new()
        .route("/api/auth", post(auth::login::<R>))
        .route("/health", get(health::health_check))
        .with_state(service)
}

pub fn accounts_router<R: AccountRepository + 'static>(service: Arc<AccountService<R>>) -> Router {
    Router::new()
        .route(
            "/api/accounts",
            post(accounts::create_account::<R>).get(accounts::list_accounts::<R>),
        )
        .route(
            "/api/accounts/{id}",
            put(accounts::update_account::<R>).delete(accounts::delete_account::<R>),
        )
        .route("/health", get(health::health_check))
        .with_state(service)
}

pub fn records_router<R: RecordRepository + 'static>(service: Arc<RecordService<R>>) -> Router {
    Router::new()
        .route(
            "/api/records",
            post(records::create_record::<R>).get(records::list_records::<R>),
        )
        .route(
            "/api/records/{id}",
            put(records::update_record::<R>).delete(records::delete_record::<R>),
        )
        .route("/health", get(health::health_check))
        .with_state(service)
}
