use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Admin;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminQueryError {
    #[error("Admin not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdminQuery: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Admin, AdminQueryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Admin, AdminQueryError>;
    async fn count(&self) -> Result<u64, AdminQueryError>;
}
