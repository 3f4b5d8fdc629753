use chrono::{DateTime, Utc};
use uuid::Uuid;

/// The dashboard operator. The deployment holds exactly one, bootstrapped
/// from the environment on first start.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Admin {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
