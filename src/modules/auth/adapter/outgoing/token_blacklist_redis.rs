use std::sync::Arc;

use async_trait::async_trait;
use deadpool_redis::redis::AsyncCommands;
use deadpool_redis::Pool;
use sha2::{Digest, Sha256};

use crate::modules::auth::application::ports::outgoing::token_blacklist_repository::TokenBlacklistRepository;

#[derive(Clone)]
pub struct RedisTokenBlacklist {
    pool: Arc<Pool>,
}

impl RedisTokenBlacklist {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }
}

/// Keys are the SHA-256 of the token, not the token itself, so a Redis dump
/// never leaks usable credentials.
fn token_key(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    format!("revoked_token:{:x}", digest)
}

#[async_trait]
impl TokenBlacklistRepository for RedisTokenBlacklist {
    async fn blacklist_token(&self, token: &str, ttl_seconds: u64) -> Result<(), String> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| format!("Redis connection error: {e}"))?;

        let _: () = conn
            .set_ex(token_key(token), "1", ttl_seconds)
            .await
            .map_err(|e| format!("Failed to blacklist token: {e}"))?;

        Ok(())
    }

    async fn is_token_blacklisted(&self, token: &str) -> Result<bool, String> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| format!("Redis connection error: {e}"))?;

        conn.exists(token_key(token))
            .await
            .map_err(|e| format!("Failed to check token status: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_stable_for_same_token() {
        assert_eq!(token_key("abc"), token_key("abc"));
    }

    #[test]
    fn test_key_never_contains_the_token() {
        let key = token_key("eyJhbGciOi.secret.payload");
        assert!(!key.contains("secret"));
        assert!(key.starts_with("revoked_token:"));
    }

    #[test]
    fn test_distinct_tokens_get_distinct_keys() {
        assert_ne!(token_key("a"), token_key("b"));
    }
}
