use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::{AdminQuery, AdminQueryError};
use crate::modules::auth::application::use_cases::login_admin::AdminInfo;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchSessionError {
    #[error("Admin not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

/// Resolves the authenticated admin's info for the session endpoint.
#[async_trait]
pub trait FetchSessionUseCase: Send + Sync {
    async fn execute(&self, admin_id: Uuid) -> Result<AdminInfo, FetchSessionError>;
}

pub struct FetchSessionService<Q>
where
    Q: AdminQuery,
{
    query: Q,
}

impl<Q> FetchSessionService<Q>
where
    Q: AdminQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> FetchSessionUseCase for FetchSessionService<Q>
where
    Q: AdminQuery + Send + Sync,
{
    async fn execute(&self, admin_id: Uuid) -> Result<AdminInfo, FetchSessionError> {
        let admin = self.query.find_by_id(admin_id).await.map_err(|e| match e {
            AdminQueryError::NotFound => FetchSessionError::NotFound,
            AdminQueryError::DatabaseError(msg) => FetchSessionError::QueryError(msg),
        })?;

        Ok(AdminInfo {
            id: admin.id,
            email: admin.email,
            display_name: admin.display_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::Admin;
    use crate::modules::auth::application::ports::outgoing::admin_query::MockAdminQuery;
    use chrono::Utc;

    #[tokio::test]
    async fn test_fetch_session_returns_admin_info() {
        let id = Uuid::new_v4();
        let mut query = MockAdminQuery::new();
        query.expect_find_by_id().returning(move |id| {
            Ok(Admin {
                id,
                email: "admin@example.com".to_string(),
                display_name: "Admin".to_string(),
                password_hash: "hash".to_string(),
                created_at: Utc::now(),
            })
        });

        let service = FetchSessionService::new(query);
        let info = service.execute(id).await.unwrap();
        assert_eq!(info.id, id);
        assert_eq!(info.email, "admin@example.com");
    }

    #[tokio::test]
    async fn test_missing_admin_is_not_found() {
        let mut query = MockAdminQuery::new();
        query
            .expect_find_by_id()
            .returning(|_| Err(AdminQueryError::NotFound));

        let service = FetchSessionService::new(query);
        let err = service.execute(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, FetchSessionError::NotFound));
    }
}
