use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::modules::auth::application::ports::outgoing::TokenProvider;

pub fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        issuer: "folio-test".to_string(),
        secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
        access_token_expiry: 3600,
        refresh_token_expiry: 86400,
    })
}

pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(test_jwt_service())
}

/// "Bearer <access token>" header value for the given admin id.
pub fn bearer_token(admin_id: Uuid) -> String {
    let token = test_jwt_service()
        .generate_access_token(admin_id)
        .expect("token generation cannot fail with a fixed config");
    format!("Bearer {token}")
}
