use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::modules::content::adapter::outgoing::sea_orm_entity::competencies::{
    ActiveModel, Column, Entity, Model,
};
use crate::modules::content::application::ports::outgoing::gateway::{
    GatewayError, ResourceGateway,
};
use crate::modules::content::domain::identity::Identity;
use crate::modules::content::domain::records::{Competency, ParseEnumError};

#[derive(Clone)]
pub struct CompetencyGatewayPostgres {
    db: Arc<DatabaseConnection>,
}

impl CompetencyGatewayPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResourceGateway<Competency> for CompetencyGatewayPostgres {
    async fn list(&self) -> Vec<Competency> {
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
                        error!(error = %e, "skipping malformed competency row");
                        None
                    }
                })
                .collect(),
            Err(e) => {
                error!(error = %e, "failed to list competencies, degrading to empty");
                Vec::new()
            }
        }
    }

    async fn save(&self, record: Competency) -> Result<Competency, GatewayError> {
        let items = serde_json::to_value(&record.items)
            .map_err(|e| GatewayError::Serialization(e.to_string()))?;

        let model = match record.id.persisted_id() {
            None => {
                let model = ActiveModel {
                    id: Set(Uuid::new_v4()),
                    title: Set(record.title.trim().to_string()),
                    subtitle: Set(record.subtitle),
                    icon: Set(record.icon.trim().to_string()),
                    items: Set(items),
                    color_theme: Set(record.color_theme.as_str().to_string()),
                    display_order: Set(record.display_order),
                    ..Default::default()
                };
                model.insert(&*self.db).await.map_err(map_db_err)?
            }
            Some(id) => {
                let model = ActiveModel {
                    id: Set(id),
                    title: Set(record.title.trim().to_string()),
                    subtitle: Set(record.subtitle),
                    icon: Set(record.icon.trim().to_string()),
                    items: Set(items),
                    color_theme: Set(record.color_theme.as_str().to_string()),
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

fn model_to_record(model: Model) -> Result<Competency, GatewayError> {
    let items: Vec<String> = serde_json::from_value(model.items)
        .map_err(|e| GatewayError::Serialization(e.to_string()))?;

    let color_theme = model
        .color_theme
        .parse()
        .map_err(|e: ParseEnumError| GatewayError::Serialization(e.to_string()))?;

    Ok(Competency {
        id: Identity::persisted(model.id),
        title: model.title,
        subtitle: model.subtitle,
        icon: model.icon,
        items,
        color_theme,
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
    use crate::modules::content::domain::records::ColorTheme;
    use crate::modules::content::domain::records::Record;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serde_json::json;

    fn mock_model(id: Uuid, theme: &str) -> Model {
        let now = Utc::now().fixed_offset();
        Model {
            id,
            title: "Backend".to_string(),
            subtitle: None,
            icon: "server".to_string(),
            items: json!(["APIs", "Databases"]),
            color_theme: theme.to_string(),
            display_order: 1,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_list_parses_items_and_theme() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model(Uuid::new_v4(), "cyan")]])
            .into_connection();

        let gateway = CompetencyGatewayPostgres::new(Arc::new(db));
        let competencies = gateway.list().await;

        assert_eq!(competencies.len(), 1);
        assert_eq!(competencies[0].color_theme, ColorTheme::Cyan);
        assert_eq!(competencies[0].items, vec!["APIs", "Databases"]);
    }

    #[tokio::test]
    async fn test_list_skips_rows_with_unknown_theme() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                mock_model(Uuid::new_v4(), "indigo"),
                mock_model(Uuid::new_v4(), "magenta"),
            ]])
            .into_connection();

        let gateway = CompetencyGatewayPostgres::new(Arc::new(db));
        assert_eq!(gateway.list().await.len(), 1);
    }

    #[tokio::test]
    async fn test_save_pending_inserts() {
        let stored_id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model(stored_id, "indigo")]])
            .into_connection();

        let gateway = CompetencyGatewayPostgres::new(Arc::new(db));
        let mut record = Competency::blank();
        record.title = "Backend".to_string();
        record.items = vec!["APIs".to_string()];

        let saved = gateway.save(record).await.unwrap();
        assert_eq!(saved.id, Identity::persisted(stored_id));
    }
}
