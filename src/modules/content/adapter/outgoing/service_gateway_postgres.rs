use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::modules::content::adapter::outgoing::sea_orm_entity::services::{
    ActiveModel, Column, Entity, Model,
};
use crate::modules::content::application::ports::outgoing::gateway::{
    GatewayError, ResourceGateway,
};
use crate::modules::content::domain::identity::Identity;
use crate::modules::content::domain::records::ServiceOffering;

#[derive(Clone)]
pub struct ServiceGatewayPostgres {
    db: Arc<DatabaseConnection>,
}

impl ServiceGatewayPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResourceGateway<ServiceOffering> for ServiceGatewayPostgres {
    async fn list(&self) -> Vec<ServiceOffering> {
        match Entity::find()
            .order_by_asc(Column::DisplayOrder)
            .all(&*self.db)
            .await
        {
            Ok(models) => models.into_iter().map(model_to_record).collect(),
            Err(e) => {
                error!(error = %e, "failed to list services, degrading to empty");
                Vec::new()
            }
        }
    }

    async fn save(&self, record: ServiceOffering) -> Result<ServiceOffering, GatewayError> {
        let model = match record.id.persisted_id() {
            None => {
                let model = ActiveModel {
                    id: Set(Uuid::new_v4()),
                    title: Set(record.title.trim().to_string()),
                    description: Set(record.description),
                    icon: Set(record.icon.trim().to_string()),
                    display_order: Set(record.display_order),
                    ..Default::default()
                };
                model.insert(&*self.db).await.map_err(map_db_err)?
            }
            Some(id) => {
                let model = ActiveModel {
                    id: Set(id),
                    title: Set(record.title.trim().to_string()),
                    description: Set(record.description),
                    icon: Set(record.icon.trim().to_string()),
                    display_order: Set(record.display_order),
                    ..Default::default()
                };
                model.update(&*self.db).await.map_err(map_update_err)?
            }
        };

        Ok(model_to_record(model))
    }

    async fn delete(&self, id: Uuid) -> Result<(), GatewayError> {
        // Deleting an already-gone row is fine; rows_affected == 0 is not an error.
        Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(())
    }
}

fn model_to_record(model: Model) -> ServiceOffering {
    ServiceOffering {
        id: Identity::persisted(model.id),
        title: model.title,
        description: model.description,
        icon: model.icon,
        display_order: model.display_order,
    }
}

fn map_db_err(e: DbErr) -> GatewayError {
    GatewayError::Database(e.to_string())
}

fn map_update_err(e: DbErr) -> GatewayError {
    match e {
        DbErr::RecordNotUpdated => GatewayError::NotFound,
        other => GatewayError::Database(other.to_string()),
    }
}
