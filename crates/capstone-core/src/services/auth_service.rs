//! Authentication service: credential check and token issuance

use std::sync::Arc;

use tracing::{info, warn};

use capstone_security::{password_digest, TokenIssuer};

use crate::domain::Account;
use crate::error::DomainError;
use crate::repositories::AccountRepository;

pub struct AuthService<R: AccountRepository> {
    accounts: Arc<R>,
    issuer: TokenIssuer,
}

impl<R: AccountRepository> AuthService<R> {
    pub fn new(accounts: Arc<R>, issuer: TokenIssuer) -> Self {
        Self { accounts, issuer }
    }

    /// Validate submitted credentials and issue a session token.
    ///
    /// The lookup is a single read matching username, digest, and the
    /// deletion flag; a miss never distinguishes unknown username from wrong
    /// password.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(Account, String), DomainError> {
        info!("Login attempt for username: {}", username);

        let digest = password_digest(password);

        let account = self
            .accounts
            .find_by_credentials(username, &digest)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: no matching credentials for: {}", username);
                DomainError::InvalidCredentials
            })?;

        let token = self
            .issuer
            .issue(&account.username)
            .map_err(|e| DomainError::TokenGenerationError(e.to_string()))?;

        info!("Login successful for: {}", username);

        Ok((account, token))
    }
}
