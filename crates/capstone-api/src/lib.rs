//! # Capstone API
//!
//! HTTP handlers, DTOs, routers, and the error-kind-to-status mapping.

pub mod cors;
pub mod error;
pub mod handlers;
pub mod routes;

pub use error::ApiError;
pub use routes::{accounts_router, auth_router, records_router};
