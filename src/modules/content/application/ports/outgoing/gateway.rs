use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::content::domain::records::Record;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GatewayError {
    /// Record doesn't exist (update of a row deleted elsewhere).
    #[error("record not found")]
    NotFound,

    #[error("database error: {0}")]
    Database(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Uniform persistence port over one collection.
///
/// Every collection speaks the same three-operation contract so the dashboard
/// controller can be written once and instantiated per resource. Adapters
/// translate between domain records and the snake_case row shape.
#[async_trait]
pub trait ResourceGateway<R: Record>: Send + Sync {
    /// Fetch the whole collection in display order.
    ///
    /// Fail-open: a transport or database error degrades to an empty
    /// sequence (logged), so an outage renders as "no content" instead of
    /// taking the page down.
    async fn list(&self) -> Vec<R>;

    /// Persist a record and return the authoritative stored version.
    ///
    /// Routes on identity: `Pending` inserts and the result carries the
    /// database-assigned id; `Persisted` updates the existing row. Fields the
    /// adapter normalizes (trimming, casing) come back normalized.
    async fn save(&self, record: R) -> Result<R, GatewayError>;

    /// Remove a row. Deleting an id that is already gone is a success, so a
    /// rollback after a failed optimistic removal never fabricates rows.
    async fn delete(&self, id: Uuid) -> Result<(), GatewayError>;
}
