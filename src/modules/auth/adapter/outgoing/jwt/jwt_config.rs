use std::env;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub issuer: String,
    pub secret_key: String,
    /// Seconds
    pub access_token_expiry: i64,
    /// Seconds
    pub refresh_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let secret_key = env::var("JWT_SECRET").expect("JWT_SECRET is not set in .env file");
        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "folio".to_string());

        let access_token_expiry = env::var("JWT_ACCESS_EXPIRY_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(900); // 15 minutes

        let refresh_token_expiry = env::var("JWT_REFRESH_EXPIRY_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(7 * 24 * 3600); // 7 days

        Self {
            issuer,
            secret_key,
            access_token_expiry,
            refresh_token_expiry,
        }
    }
}
