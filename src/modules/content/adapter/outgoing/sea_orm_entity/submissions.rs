use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub requester_name: String,

    #[sea_orm(column_type = "Text", string_len = 255)]
    pub requester_email: String,

    #[sea_orm(column_type = "Text", string_len = 40)]
    pub requester_phone: String,

    pub is_whatsapp: bool,

    // Answer map keyed by form field id
    #[sea_orm(column_type = "JsonBinary")]
    pub answers: Json,

    #[sea_orm(column_type = "Text", string_len = 30)]
    pub status: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
