use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::modules::auth::application::ports::outgoing::{
    TokenBlacklistRepository, TokenProvider,
};

#[derive(Debug, Clone)]
pub struct LogoutRequest {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutError {
    #[error("Invalid token")]
    InvalidToken,

    #[error("Blacklist error: {0}")]
    BlacklistError(String),
}

#[async_trait]
pub trait LogoutAdminUseCase: Send + Sync {
    async fn execute(&self, request: LogoutRequest) -> Result<(), LogoutError>;
}

/// Revokes both tokens by blacklisting them for their remaining lifetime.
/// A token that is already expired needs no blacklist entry.
pub struct LogoutAdminService<B>
where
    B: TokenBlacklistRepository,
{
    blacklist: B,
    token_provider: Arc<dyn TokenProvider>,
}

impl<B> LogoutAdminService<B>
where
    B: TokenBlacklistRepository,
{
    pub fn new(blacklist: B, token_provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            blacklist,
            token_provider,
        }
    }

    async fn revoke(&self, token: &str) -> Result<(), LogoutError> {
        let claims = match self.token_provider.verify_token(token) {
            Ok(claims) => claims,
            // Expired means already unusable
            Err(crate::modules::auth::application::ports::outgoing::TokenError::TokenExpired) => {
                return Ok(())
            }
            Err(_) => return Err(LogoutError::InvalidToken),
        };

        let remaining = claims.exp - Utc::now().timestamp();
        if remaining <= 0 {
            return Ok(());
        }

        self.blacklist
            .blacklist_token(token, remaining as u64)
            .await
            .map_err(LogoutError::BlacklistError)
    }
}

#[async_trait]
impl<B> LogoutAdminUseCase for LogoutAdminService<B>
where
    B: TokenBlacklistRepository + Send + Sync,
{
    async fn execute(&self, request: LogoutRequest) -> Result<(), LogoutError> {
        self.revoke(&request.access_token).await?;
        self.revoke(&request.refresh_token).await
    }
}
