use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::Admin;

#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub email: String,
    pub display_name: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminRepositoryError {
    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn insert_admin(&self, admin: NewAdmin) -> Result<Admin, AdminRepositoryError>;
}
