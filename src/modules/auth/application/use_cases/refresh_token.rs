use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::auth::application::ports::outgoing::{
    TokenBlacklistRepository, TokenProvider,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum RefreshError {
    #[error("Invalid or expired refresh token")]
    InvalidToken,

    #[error("Refresh token has been revoked")]
    Revoked,

    #[error("Blacklist error: {0}")]
    BlacklistError(String),
}

#[async_trait]
pub trait RefreshTokenUseCase: Send + Sync {
    async fn execute(&self, refresh_token: &str) -> Result<String, RefreshError>;
}

/// Mints a new access token from a refresh token, unless the refresh token
/// was revoked by a logout.
pub struct RefreshTokenService<B>
where
    B: TokenBlacklistRepository,
{
    blacklist: B,
    token_provider: Arc<dyn TokenProvider>,
}

impl<B> RefreshTokenService<B>
where
    B: TokenBlacklistRepository,
{
    pub fn new(blacklist: B, token_provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            blacklist,
            token_provider,
        }
    }
}

#[async_trait]
impl<B> RefreshTokenUseCase for RefreshTokenService<B>
where
    B: TokenBlacklistRepository + Send + Sync,
{
    async fn execute(&self, refresh_token: &str) -> Result<String, RefreshError> {
        let revoked = self
            .blacklist
            .is_token_blacklisted(refresh_token)
            .await
            .map_err(RefreshError::BlacklistError)?;
        if revoked {
            return Err(RefreshError::Revoked);
        }

        self.token_provider
            .refresh_access_token(refresh_token)
            .map_err(|_| RefreshError::InvalidToken)
    }
}
