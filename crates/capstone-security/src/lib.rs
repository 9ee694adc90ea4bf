//! # Capstone Security
//!
//! Security utilities: password digest and session token issuance.

pub mod digest;
pub mod token;

pub use digest::password_digest;
pub use token::{Claims, TokenError, TokenIssuer};
