use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::admins::{Column, Entity, Model};
use crate::modules::auth::application::domain::entities::Admin;
use crate::modules::auth::application::ports::outgoing::admin_query::{
    AdminQuery, AdminQueryError,
};

#[derive(Clone)]
pub struct AdminQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AdminQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AdminQuery for AdminQueryPostgres {
    async fn find_by_email(&self, email: &str) -> Result<Admin, AdminQueryError> {
        let normalized = email.trim().to_lowercase();

        let model = Entity::find()
            .filter(Column::Email.eq(&normalized))
            .one(&*self.db)
            .await
            .map_err(|e| AdminQueryError::DatabaseError(e.to_string()))?
            .ok_or(AdminQueryError::NotFound)?;

        Ok(model_to_admin(model))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Admin, AdminQueryError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| AdminQueryError::DatabaseError(e.to_string()))?
            .ok_or(AdminQueryError::NotFound)?;

        Ok(model_to_admin(model))
    }

    async fn count(&self) -> Result<u64, AdminQueryError> {
        Entity::find()
            .count(&*self.db)
            .await
            .map_err(|e| AdminQueryError::DatabaseError(e.to_string()))
    }
}

fn model_to_admin(model: Model) -> Admin {
    Admin {
        id: model.id,
        email: model.email,
        display_name: model.display_name,
        password_hash: model.password_hash,
        created_at: model.created_at.into(),
    }
}
