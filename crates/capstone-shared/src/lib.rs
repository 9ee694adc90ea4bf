//! # Capstone Shared
//!
//! Shared configuration, constants, and telemetry for the capstone services.

pub mod config;
pub mod constants;
pub mod telemetry;

pub use config::{load_signing_secret, ConfigError};
