use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::modules::content::adapter::outgoing::sea_orm_entity::profile::{
    ActiveModel, Entity, Model,
};
use crate::modules::content::application::ports::outgoing::gateway::{
    GatewayError, ResourceGateway,
};
use crate::modules::content::domain::identity::Identity;
use crate::modules::content::domain::records::Profile;

/// Gateway over the singleton profile row. The same uniform contract as the
/// other collections; `list` simply never yields more than one record (the
/// table carries a unique-on-constant index).
#[derive(Clone)]
pub struct ProfileGatewayPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileGatewayPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResourceGateway<Profile> for ProfileGatewayPostgres {
    async fn list(&self) -> Vec<Profile> {
        match Entity::find().all(&*self.db).await {
            Ok(models) => models.into_iter().map(model_to_record).collect(),
            Err(e) => {
                error!(error = %e, "failed to load profile, degrading to empty");
                Vec::new()
            }
        }
    }

    async fn save(&self, record: Profile) -> Result<Profile, GatewayError> {
        let model = match record.id.persisted_id() {
            None => {
                let model = ActiveModel {
                    id: Set(Uuid::new_v4()),
                    display_name: Set(record.display_name.trim().to_string()),
                    headline: Set(record.headline.trim().to_string()),
                    bio: Set(record.bio),
                    contact_phone: Set(record.contact_phone.trim().to_string()),
                    contact_email: Set(record.contact_email.trim().to_lowercase()),
                    linkedin_url: Set(record.linkedin_url),
                    ..Default::default()
                };
                model.insert(&*self.db).await.map_err(map_db_err)?
            }
            Some(id) => {
                let model = ActiveModel {
                    id: Set(id),
                    display_name: Set(record.display_name.trim().to_string()),
                    headline: Set(record.headline.trim().to_string()),
                    bio: Set(record.bio),
                    contact_phone: Set(record.contact_phone.trim().to_string()),
                    contact_email: Set(record.contact_email.trim().to_lowercase()),
                    linkedin_url: Set(record.linkedin_url),
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

fn model_to_record(model: Model) -> Profile {
    Profile {
        id: Identity::persisted(model.id),
        display_name: model.display_name,
        headline: model.headline,
        bio: model.bio,
        contact_phone: model.contact_phone,
        contact_email: model.contact_email,
        linkedin_url: model.linkedin_url,
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
