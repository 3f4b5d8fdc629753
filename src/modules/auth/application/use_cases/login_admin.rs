use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};

use email_address::EmailAddress;

use crate::modules::auth::application::ports::outgoing::{
    AdminQuery, AdminQueryError, PasswordHasher, TokenProvider,
};

// ========================= Login Request =========================

/// Validated login request - invalid input never reaches the use case.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, LoginRequestError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(LoginRequestError::EmptyEmail);
        }
        if !EmailAddress::is_valid(&email) {
            return Err(LoginRequestError::InvalidEmailFormat);
        }

        if password.trim().is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self {
            email,
            password: password.trim().to_string(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// Validate while deserializing so handlers can take the request directly
impl<'de> Deserialize<'de> for LoginRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct LoginRequestHelper {
            email: String,
            password: String,
        }

        let helper = LoginRequestHelper::deserialize(deserializer)?;
        LoginRequest::new(helper.email, helper.password).map_err(serde::de::Error::custom)
    }
}

// ========================= Login Error ===========================

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

// ========================= Login Response ========================

#[derive(Debug, Clone, Serialize)]
pub struct AdminInfo {
    pub id: uuid::Uuid,
    pub email: String,
    pub display_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginAdminResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub admin: AdminInfo,
}

// ========================= Use Case ==============================

#[async_trait]
pub trait LoginAdminUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginAdminResponse, LoginError>;
}

pub struct LoginAdminService<Q>
where
    Q: AdminQuery,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider>,
}

impl<Q> LoginAdminService<Q>
where
    Q: AdminQuery,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> LoginAdminUseCase for LoginAdminService<Q>
where
    Q: AdminQuery + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginAdminResponse, LoginError> {
        let admin = match self.query.find_by_email(request.email()).await {
            Ok(admin) => admin,
            // Unknown email and wrong password are indistinguishable to the caller
            Err(AdminQueryError::NotFound) => return Err(LoginError::InvalidCredentials),
            Err(AdminQueryError::DatabaseError(msg)) => return Err(LoginError::QueryError(msg)),
        };

        let matches = self
            .password_hasher
            .verify_password(request.password(), &admin.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !matches {
            return Err(LoginError::InvalidCredentials);
        }

        let access_token = self
            .token_provider
            .generate_access_token(admin.id)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;
        let refresh_token = self
            .token_provider
            .generate_refresh_token(admin.id)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginAdminResponse {
            access_token,
            refresh_token,
            admin: AdminInfo {
                id: admin.id,
                email: admin.email,
                display_name: admin.display_name,
            },
        })
    }
}
