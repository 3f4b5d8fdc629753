use async_trait::async_trait;

/// Revoked-token store. Logout pushes both tokens here with a TTL matching
/// their remaining lifetime; the refresh flow consults it before minting a
/// new access token.
#[async_trait]
pub trait TokenBlacklistRepository: Send + Sync {
    async fn blacklist_token(&self, token: &str, ttl_seconds: u64) -> Result<(), String>;
    async fn is_token_blacklisted(&self, token: &str) -> Result<bool, String>;
}
