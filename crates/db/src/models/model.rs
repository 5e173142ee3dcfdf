//! Snapshot and trained-model rows.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vislab_core::types::{DbId, Timestamp};

/// A row from the `snapshots` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Snapshot {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `models` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TrainedModel {
    pub id: DbId,
    pub name: String,
    /// `None` until training has attached the model to a snapshot.
    pub snapshot_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a model.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTrainedModel {
    pub name: String,
    pub snapshot_id: Option<DbId>,
}
