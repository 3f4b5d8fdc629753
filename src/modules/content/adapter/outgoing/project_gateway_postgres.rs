use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::modules::content::adapter::outgoing::sea_orm_entity::projects::{
    ActiveModel, Column, Entity, Model,
};
use crate::modules::content::application::ports::outgoing::gateway::{
    GatewayError, ResourceGateway,
};
use crate::modules::content::domain::identity::Identity;
use crate::modules::content::domain::records::PortfolioProject;

#[derive(Clone)]
pub struct ProjectGatewayPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectGatewayPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResourceGateway<PortfolioProject> for ProjectGatewayPostgres {
    async fn list(&self) -> Vec<PortfolioProject> {
        // Creation order
        match Entity::find()
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
        {
            Ok(models) => models.into_iter().map(model_to_record).collect(),
            Err(e) => {
                error!(error = %e, "failed to list projects, degrading to empty");
                Vec::new()
            }
        }
    }

    async fn save(&self, record: PortfolioProject) -> Result<PortfolioProject, GatewayError> {
        let model = match record.id.persisted_id() {
            None => {
                let model = ActiveModel {
                    id: Set(Uuid::new_v4()),
                    title: Set(record.title.trim().to_string()),
                    role: Set(record.role),
                    description: Set(record.description),
                    technologies: Set(record.technologies),
                    github_url: Set(record.github_url),
                    live_url: Set(record.live_url),
                    image_url: Set(record.image_url),
                    ..Default::default()
                };
                model.insert(&*self.db).await.map_err(map_db_err)?
            }
            Some(id) => {
                let model = ActiveModel {
                    id: Set(id),
                    title: Set(record.title.trim().to_string()),
                    role: Set(record.role),
                    description: Set(record.description),
                    technologies: Set(record.technologies),
                    github_url: Set(record.github_url),
                    live_url: Set(record.live_url),
                    image_url: Set(record.image_url),
                    ..Default::default()
                };
                model.update(&*self.db).await.map_err(map_update_err)?
            }
        };

        Ok(model_to_record(model))
    }

    async fn delete(&self, id: Uuid) -> Result<(), GatewayError> {
        Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(())
    }
}

fn model_to_record(model: Model) -> PortfolioProject {
    PortfolioProject {
        id: Identity::persisted(model.id),
        title: model.title,
        role: model.role,
        description: model.description,
        technologies: model.technologies,
        github_url: model.github_url,
        live_url: model.live_url,
        image_url: model.image_url,
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
