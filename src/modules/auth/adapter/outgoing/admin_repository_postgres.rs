use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::admins::ActiveModel;
use crate::modules::auth::application::domain::entities::Admin;
use crate::modules::auth::application::ports::outgoing::admin_repository::{
    AdminRepository, AdminRepositoryError, NewAdmin,
};

#[derive(Clone)]
pub struct AdminRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AdminRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AdminRepository for AdminRepositoryPostgres {
    async fn insert_admin(&self, admin: NewAdmin) -> Result<Admin, AdminRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(admin.email.trim().to_lowercase()),
            password_hash: Set(admin.password_hash),
            display_name: Set(admin.display_name),
            ..Default::default()
        };

        let inserted = model.insert(&*self.db).await.map_err(map_insert_err)?;

        Ok(Admin {
            id: inserted.id,
            email: inserted.email,
            display_name: inserted.display_name,
            password_hash: inserted.password_hash,
            created_at: inserted.created_at.into(),
        })
    }
}

fn map_insert_err(e: DbErr) -> AdminRepositoryError {
    let msg = e.to_string().to_lowercase();
    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("email")
    {
        AdminRepositoryError::EmailAlreadyExists
    } else {
        AdminRepositoryError::DatabaseError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::adapter::outgoing::sea_orm_entity::admins::Model;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_insert_admin_returns_stored_row() {
        let id = Uuid::new_v4();
        let now = Utc::now().fixed_offset();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![Model {
                id,
                email: "admin@example.com".to_string(),
                password_hash: "$argon2id$stub".to_string(),
                display_name: "Admin".to_string(),
                created_at: now,
                updated_at: now,
            }]])
            .into_connection();

        let repo = AdminRepositoryPostgres::new(Arc::new(db));
        let admin = repo
            .insert_admin(NewAdmin {
                email: "Admin@Example.com".to_string(),
                display_name: "Admin".to_string(),
                password_hash: "$argon2id$stub".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(admin.id, id);
    }

    #[tokio::test]
    async fn test_duplicate_email_maps_to_conflict() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                "duplicate key value violates unique constraint \"idx_admins_email_lower\""
                    .to_string(),
            )])
            .into_connection();

        let repo = AdminRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .insert_admin(NewAdmin {
                email: "admin@example.com".to_string(),
                display_name: "Admin".to_string(),
                password_hash: "hash".to_string(),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            AdminRepositoryError::EmailAlreadyExists
        ));
    }
}
