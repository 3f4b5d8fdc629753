use std::sync::Arc;

use tracing::info;

use crate::modules::auth::application::ports::outgoing::{
    AdminQuery, AdminRepository, NewAdmin, PasswordHasher,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum BootstrapError {
    #[error("Bootstrap credentials missing: set ADMIN_EMAIL and ADMIN_PASSWORD")]
    CredentialsMissing,

    #[error("Hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// First-start provisioning: when the admins table is empty, create the
/// single operator account from the environment. Subsequent starts are a
/// no-op, so rotating the env variables never overwrites a live password.
pub struct BootstrapAdminService<Q, R>
where
    Q: AdminQuery,
    R: AdminRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<Q, R> BootstrapAdminService<Q, R>
where
    Q: AdminQuery,
    R: AdminRepository,
{
    pub fn new(query: Q, repository: R, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }

    pub async fn run(
        &self,
        email: Option<String>,
        password: Option<String>,
        display_name: Option<String>,
    ) -> Result<(), BootstrapError> {
        let existing = self
            .query
            .count()
            .await
            .map_err(|e| BootstrapError::RepositoryError(e.to_string()))?;
        if existing > 0 {
            return Ok(());
        }

        let (email, password) = match (email, password) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                (email, password)
            }
            _ => return Err(BootstrapError::CredentialsMissing),
        };

        let password_hash = self
            .password_hasher
            .hash_password(&password)
            .await
            .map_err(|e| BootstrapError::HashingFailed(e.to_string()))?;

        let admin = self
            .repository
            .insert_admin(NewAdmin {
                email: email.trim().to_lowercase(),
                display_name: display_name.unwrap_or_else(|| "Admin".to_string()),
                password_hash,
            })
            .await
            .map_err(|e| BootstrapError::RepositoryError(e.to_string()))?;

        info!(email = %admin.email, "bootstrapped admin account");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::Admin;
    use crate::modules::auth::application::ports::outgoing::{
        AdminQueryError, AdminRepositoryError, HashError,
    };
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;
    use uuid::Uuid;

    struct StubQuery {
        existing: u64,
    }

    #[async_trait]
    impl AdminQuery for StubQuery {
        async fn find_by_email(&self, _email: &str) -> Result<Admin, AdminQueryError> {
            Err(AdminQueryError::NotFound)
        }

        async fn find_by_id(&self, _id: Uuid) -> Result<Admin, AdminQueryError> {
            Err(AdminQueryError::NotFound)
        }

        async fn count(&self) -> Result<u64, AdminQueryError> {
            Ok(self.existing)
        }
    }

    struct RecordingRepository {
        inserted: Mutex<Vec<NewAdmin>>,
    }

    #[async_trait]
    impl AdminRepository for RecordingRepository {
        async fn insert_admin(&self, admin: NewAdmin) -> Result<Admin, AdminRepositoryError> {
            self.inserted.lock().unwrap().push(admin.clone());
            Ok(Admin {
                id: Uuid::new_v4(),
                email: admin.email,
                display_name: admin.display_name,
                password_hash: admin.password_hash,
                created_at: Utc::now(),
            })
        }
    }

    struct StubHasher;

    #[async_trait]
    impl PasswordHasher for StubHasher {
        async fn hash_password(&self, password: &str) -> Result<String, HashError> {
            Ok(format!("hashed:{password}"))
        }

        async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
            Ok(true)
        }
    }

    #[tokio::test]
    async fn test_bootstrap_creates_admin_when_table_empty() {
        let service = BootstrapAdminService::new(
            StubQuery { existing: 0 },
            RecordingRepository {
                inserted: Mutex::new(Vec::new()),
            },
            Arc::new(StubHasher),
        );

        service
            .run(
                Some("Admin@Example.com".to_string()),
                Some("secret".to_string()),
                None,
            )
            .await
            .unwrap();

        let inserted = service.repository.inserted.lock().unwrap();
        assert_eq!(inserted.len(), 1);
        assert_eq!(inserted[0].email, "admin@example.com");
        assert_eq!(inserted[0].password_hash, "hashed:secret");
    }

    #[tokio::test]
    async fn test_bootstrap_is_noop_when_admin_exists() {
        let service = BootstrapAdminService::new(
            StubQuery { existing: 1 },
            RecordingRepository {
                inserted: Mutex::new(Vec::new()),
            },
            Arc::new(StubHasher),
        );

        service.run(None, None, None).await.unwrap();
        assert!(service.repository.inserted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_bootstrap_requires_credentials_on_empty_table() {
        let service = BootstrapAdminService::new(
            StubQuery { existing: 0 },
            RecordingRepository {
                inserted: Mutex::new(Vec::new()),
            },
            Arc::new(StubHasher),
        );

        let err = service.run(None, None, None).await.unwrap_err();
        assert!(matches!(err, BootstrapError::CredentialsMissing));
    }
}
