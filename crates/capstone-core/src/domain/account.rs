//! Account domain entity

use serde::{Deserialize, Serialize};

/// An authenticatable principal. Rows are soft-deleted only; `is_deleted`
/// rows stay in the store and keep their username reserved.
///
/// JSON field names keep the historical PascalCase tags so existing clients
/// keep working.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Account {
    #[serde(rename = "ID", default)]
    pub id: i64,
    pub name: String,
    pub username: String,
    /// Stored digest, not plaintext. 64 hex chars.
    pub password: String,
    pub role: String,
    pub creation_date: String,
    pub is_approved: bool,
    pub is_deleted: bool,
}

/// Mutable account fields accepted by the update operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccountChanges {
    pub name: String,
    pub role: String,
    pub is_approved: bool,
}
