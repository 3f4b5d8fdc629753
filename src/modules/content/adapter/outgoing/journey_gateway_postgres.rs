use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::modules::content::adapter::outgoing::sea_orm_entity::journey_entries::{
    ActiveModel, Column, Entity, Model,
};
use crate::modules::content::application::ports::outgoing::gateway::{
    GatewayError, ResourceGateway,
};
use crate::modules::content::domain::identity::Identity;
use crate::modules::content::domain::records::{JourneyEntry, ParseEnumError};

#[derive(Clone)]
pub struct JourneyGatewayPostgres {
    db: Arc<DatabaseConnection>,
}

impl JourneyGatewayPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResourceGateway<JourneyEntry> for JourneyGatewayPostgres {
    async fn list(&self) -> Vec<JourneyEntry> {
        match Entity::find()
            .order_by_asc(Column::DisplayOrder)
            .all(&*self.db)
            .await
        {
            Ok(models) => models
                .into_iter()
                .filter_map(|model| match model_to_record(model) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        error!(error = %e, "skipping malformed journey row");
                        None
                    }
                })
                .collect(),
            Err(e) => {
                error!(error = %e, "failed to list journey entries, degrading to empty");
                Vec::new()
            }
        }
    }

    async fn save(&self, record: JourneyEntry) -> Result<JourneyEntry, GatewayError> {
        let model = match record.id.persisted_id() {
            None => {
                let model = ActiveModel {
                    id: Set(Uuid::new_v4()),
                    title: Set(record.title.trim().to_string()),
                    company: Set(record.company),
                    period_label: Set(record.period_label),
                    description: Set(record.description),
                    kind: Set(record.kind.as_str().to_string()),
                    display_order: Set(record.display_order),
                    ..Default::default()
                };
                model.insert(&*self.db).await.map_err(map_db_err)?
            }
            Some(id) => {
                let model = ActiveModel {
                    id: Set(id),
                    title: Set(record.title.trim().to_string()),
                    company: Set(record.company),
                    period_label: Set(record.period_label),
                    description: Set(record.description),
                    kind: Set(record.kind.as_str().to_string()),
                    display_order: Set(record.display_order),
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

fn model_to_record(model: Model) -> Result<JourneyEntry, GatewayError> {
    let kind = model
        .kind
        .parse()
        .map_err(|e: ParseEnumError| GatewayError::Serialization(e.to_string()))?;

    Ok(JourneyEntry {
        id: Identity::persisted(model.id),
        title: model.title,
        company: model.company,
        period_label: model.period_label,
        description: model.description,
        kind,
        display_order: model.display_order,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::domain::records::JourneyKind;
    use crate::modules::content::domain::records::Record;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn mock_model(id: Uuid, kind: &str, order: i32) -> Model {
        let now = Utc::now().fixed_offset();
        Model {
            id,
            title: "Senior Engineer".to_string(),
            company: Some("Acme".to_string()),
            period_label: Some("2020 - 2023".to_string()),
            description: "Led the platform team".to_string(),
            kind: kind.to_string(),
            display_order: order,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_list_parses_kind() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                mock_model(Uuid::new_v4(), "work", 1),
                mock_model(Uuid::new_v4(), "education", 2),
            ]])
            .into_connection();

        let gateway = JourneyGatewayPostgres::new(Arc::new(db));
        let entries = gateway.list().await;

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind, JourneyKind::Work);
        assert_eq!(entries[1].kind, JourneyKind::Education);
    }

    #[tokio::test]
    async fn test_save_update_of_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::RecordNotUpdated])
            .into_connection();

        let gateway = JourneyGatewayPostgres::new(Arc::new(db));
        let mut record = JourneyEntry::blank();
        record.id = Identity::persisted(Uuid::new_v4());

        let result = gateway.save(record).await;
        assert!(matches!(result.unwrap_err(), GatewayError::NotFound));
    }
}
