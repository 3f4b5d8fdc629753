use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use serde_json::Value;
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::modules::content::adapter::outgoing::sea_orm_entity::submissions::{
    ActiveModel, Column, Entity, Model,
};
use crate::modules::content::application::ports::outgoing::gateway::{
    GatewayError, ResourceGateway,
};
use crate::modules::content::domain::identity::Identity;
use crate::modules::content::domain::records::Submission;

#[derive(Clone)]
pub struct SubmissionGatewayPostgres {
    db: Arc<DatabaseConnection>,
}

impl SubmissionGatewayPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResourceGateway<Submission> for SubmissionGatewayPostgres {
    async fn list(&self) -> Vec<Submission> {
        // Newest first
        match Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
        {
            Ok(models) => models
                .into_iter()
                .filter_map(|model| match model_to_record(model) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        error!(error = %e, "skipping malformed submission row");
                        None
                    }
                })
                .collect(),
            Err(e) => {
                error!(error = %e, "failed to list submissions, degrading to empty");
                Vec::new()
            }
        }
    }

    async fn save(&self, record: Submission) -> Result<Submission, GatewayError> {
        let answers = Value::Object(record.answers.clone());

        let model = match record.id.persisted_id() {
            None => {
                let model = ActiveModel {
                    id: Set(Uuid::new_v4()),
                    requester_name: Set(record.requester_name.trim().to_string()),
                    requester_email: Set(record.requester_email.trim().to_lowercase()),
                    requester_phone: Set(record.requester_phone.trim().to_string()),
                    is_whatsapp: Set(record.is_whatsapp),
                    answers: Set(answers),
                    status: Set(record.status.as_str().to_string()),
                    ..Default::default()
                };
                model.insert(&*self.db).await.map_err(map_db_err)?
            }
            Some(id) => {
                let model = ActiveModel {
                    id: Set(id),
                    requester_name: Set(record.requester_name.trim().to_string()),
                    requester_email: Set(record.requester_email.trim().to_lowercase()),
                    requester_phone: Set(record.requester_phone.trim().to_string()),
                    is_whatsapp: Set(record.is_whatsapp),
                    answers: Set(answers),
                    status: Set(record.status.as_str().to_string()),
                    ..Default::default()
                };
                model.update(&*self.db).await.map_err(map_update_err)?
            }
        };

        model_to_record(model)
    }

    async fn delete(&self, id: Uuid) -> Result<(), GatewayError> {
        Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(())
    }
}

fn model_to_record(model: Model) -> Result<Submission, GatewayError> {
    let answers = match model.answers {
        Value::Object(map) => map,
        other => {
            return Err(GatewayError::Serialization(format!(
                "answers column holds {other:?}, expected an object"
            )))
        }
    };

    let status = model
        .status
        .parse()
        .map_err(|e: crate::modules::content::domain::records::ParseEnumError| {
            GatewayError::Serialization(e.to_string())
        })?;

    Ok(Submission {
        id: Identity::persisted(model.id),
        requester_name: model.requester_name,
        requester_email: model.requester_email,
        requester_phone: model.requester_phone,
        is_whatsapp: model.is_whatsapp,
        answers,
        status,
        created_at: model.created_at.into(),
    })
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
