//! Configuration loading
//!
//! Each service is configured entirely from its command line; the auth
//! service additionally reads its signing secret from an environment-style
//! key/value file before it starts serving. The secret is handed to the
//! token issuer at construction rather than left in ambient process state.

use std::path::Path;

use thiserror::Error;

use crate::constants::SECRET_KEY_VAR;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read env file {path}: {source}")]
    EnvFile {
        path: String,
        source: dotenvy::Error,
    },

    #[error("SECRET_KEY missing or empty in env file")]
    MissingSecret,
}

/// Load the token signing secret from an env-style file.
///
/// Serving without a secret would silently disable token signing, so callers
/// treat any error here as fatal and stop the process.
pub fn load_signing_secret(path: &Path) -> Result<String, ConfigError> {
    let entries = dotenvy::from_path_iter(path).map_err(|source| ConfigError::EnvFile {
        path: path.display().to_string(),
        source,
    })?;

    for entry in entries {
        let (key, value) = entry.map_err(|source| ConfigError::EnvFile {
            path: path.display().to_string(),
            source,
        })?;
        if key == SECRET_KEY_VAR && !value.is_empty() {
            return Ok(value);
        }
    }

    Err(ConfigError::MissingSecret)
}
