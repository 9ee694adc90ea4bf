//! In-memory repository doubles and request helpers for router tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use capstone_core::domain::{Account, AccountChanges, Record, RecordChanges, RecordFilter};
use capstone_core::error::DomainError;
use capstone_core::repositories::{AccountRepository, RecordRepository};
use capstone_core::services::{AccountService, AuthService, RecordService};
use capstone_security::TokenIssuer;
use capstone_shared::constants::TOKEN_TTL_SECONDS;

pub const TEST_SECRET: &str = "router-test-secret";

#[derive(Default)]
pub struct MemoryAccounts {
    rows: Mutex<Vec<Account>>,
}

#[async_trait]
impl AccountRepository for MemoryAccounts {
    async fn insert(&self, account: &Account) -> Result<Account, DomainError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|a| a.username == account.username) {
            return Err(DomainError::UsernameAlreadyExists(account.username.clone()));
        }
        let mut stored = account.clone();
        stored.id = rows.len() as i64 + 1;
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_credentials(
        &self,
        username: &str,
        password_digest: &str,
    ) -> Result<Option<Account>, DomainError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.username == username && a.password == password_digest && !a.is_deleted)
            .cloned())
    }

    async fn username_taken(&self, username: &str) -> Result<bool, DomainError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|a| a.username == username))
    }

    async fn list_active(&self) -> Result<Vec<Account>, DomainError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|a| !a.is_deleted)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: i64,
        changes: &AccountChanges,
    ) -> Result<Option<Account>, DomainError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|a| a.id == id && !a.is_deleted) {
            Some(account) => {
                account.name = changes.name.clone();
                account.role = changes.role.clone();
                account.is_approved = changes.is_approved;
                Ok(Some(account.clone()))
            }
            None => Ok(None),
        }
    }

    async fn soft_delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|a| a.id == id && !a.is_deleted) {
            Some(account) => {
                account.is_deleted = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Repository that fails every call, for the store-error paths.
pub struct BrokenAccounts;

#[async_trait]
impl AccountRepository for BrokenAccounts {
    async fn insert(&self, _account: &Account) -> Result<Account, DomainError> {
        Err(DomainError::DatabaseError("connection refused".into()))
    }

    async fn find_by_credentials(
        &self,
        _username: &str,
        _password_digest: &str,
    ) -> Result<Option<Account>, DomainError> {
        Err(DomainError::DatabaseError("connection refused".into()))
    }

    async fn username_taken(&self, _username: &str) -> Result<bool, DomainError> {
        Err(DomainError::DatabaseError("connection refused".into()))
    }

    async fn list_active(&self) -> Result<Vec<Account>, DomainError> {
        Err(DomainError::DatabaseError("connection refused".into()))
    }

    async fn update(
        &self,
        _id: i64,
        _changes: &AccountChanges,
    ) -> Result<Option<Account>, DomainError> {
        Err(DomainError::DatabaseError("connection refused".into()))
    }

    async fn soft_delete(&self, _id: i64) -> Result<bool, DomainError> {
        Err(DomainError::DatabaseError("connection refused".into()))
    }
}

#[derive(Default)]
pub struct MemoryRecords {
    rows: Mutex<Vec<Record>>,
}

#[async_trait]
impl RecordRepository for MemoryRecords {
    async fn insert(&self, record: &Record) -> Result<Record, DomainError> {
        let mut rows = self.rows.lock().unwrap();
        let mut stored = record.clone();
        stored.id = rows.len() as i64 + 1;
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn list(&self, filter: &RecordFilter) -> Result<Vec<Record>, DomainError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| !r.is_deleted)
            .filter(|r| match &filter.acad_year {
                Some(ay) => &r.acad_year == ay,
                None => true,
            })
            .filter(|r| match &filter.title {
                Some(title) => r.title.contains(title.as_str()),
                None => true,
            })
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: i64,
        changes: &RecordChanges,
    ) -> Result<Option<Record>, DomainError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|r| r.id == id && !r.is_deleted) {
            Some(record) => {
                record.contact_role = changes.contact_role.clone();
                record.student_count = changes.student_count;
                record.acad_year = changes.acad_year.clone();
                record.title = changes.title.clone();
                record.company_name = changes.company_name.clone();
                record.company_poc = changes.company_poc.clone();
                record.description = changes.description.clone();
                Ok(Some(record.clone()))
            }
            None => Ok(None),
        }
    }

    async fn soft_delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|r| r.id == id && !r.is_deleted) {
            Some(record) => {
                record.is_deleted = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Auth and accounts apps sharing one store, so a registered account can log
/// in.
pub fn auth_and_accounts_apps() -> (Router, Router) {
    let repo = Arc::new(MemoryAccounts::default());
    let auth = capstone_api::auth_router(Arc::new(AuthService::new(
        repo.clone(),
        TokenIssuer::new(TEST_SECRET, TOKEN_TTL_SECONDS),
    )));
    let accounts = capstone_api::accounts_router(Arc::new(AccountService::new(repo)));
    (auth, accounts)
}

pub fn accounts_app() -> Router {
    capstone_api::accounts_router(Arc::new(AccountService::new(Arc::new(
        MemoryAccounts::default(),
    ))))
}

pub fn records_app() -> Router {
    capstone_api::records_router(Arc::new(RecordService::new(Arc::new(
        MemoryRecords::default(),
    ))))
}

pub async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: &Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn send_empty(app: &Router, method: Method, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
