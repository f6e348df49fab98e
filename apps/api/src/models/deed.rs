use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// One stored sale-deed document. The PDF bytes are opaque to the server;
/// rows are insert-only and immutable after creation.
#[derive(Debug, Clone, FromRow)]
pub struct DeedRow {
    pub id: Uuid,
    pub pdf_data: Vec<u8>,
    pub created_at: DateTime<Utc>,
}
