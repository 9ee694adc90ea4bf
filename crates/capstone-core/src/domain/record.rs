//! Capstone record domain entity

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Record {
    #[serde(rename = "ID", default)]
    pub id: i64,
    #[serde(rename = "AccountID")]
    pub account_id: i64,
    pub contact_role: String,
    pub student_count: i32,
    pub acad_year: String,
    pub title: String,
    pub company_name: String,
    #[serde(rename = "CompanyPOC")]
    pub company_poc: String,
    pub description: String,
    pub creation_date: String,
    pub is_deleted: bool,
}

/// Fields supplied by the caller when creating a record; the service stamps
/// the creation date and clears the deletion flag.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewRecord {
    #[serde(rename = "AccountID", default)]
    pub account_id: i64,
    #[serde(default)]
    pub contact_role: String,
    #[serde(default)]
    pub student_count: i32,
    #[serde(default)]
    pub acad_year: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(rename = "CompanyPOC", default)]
    pub company_poc: String,
    #[serde(default)]
    pub description: String,
}

/// Mutable record fields accepted by the update operation. The owning
/// account never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecordChanges {
    pub contact_role: String,
    pub student_count: i32,
    pub acad_year: String,
    pub title: String,
    pub company_name: String,
    #[serde(rename = "CompanyPOC")]
    pub company_poc: String,
    pub description: String,
}

/// Optional listing filters, AND-combined when both are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    /// Exact match on the academic year.
    pub acad_year: Option<String>,
    /// Substring match on the title.
    pub title: Option<String>,
}
