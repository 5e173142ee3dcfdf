//! Snapshot image rows.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vislab_core::labels::EvaluationImage;
use vislab_core::types::{DbId, Timestamp};

/// A row from the `images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Image {
    pub id: DbId,
    pub snapshot_id: DbId,
    pub file_name: String,
    pub split: String,
    pub created_at: Timestamp,
}

/// DTO for registering an image in a snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateImage {
    pub snapshot_id: DbId,
    pub file_name: String,
    pub split: String,
}

impl From<Image> for EvaluationImage {
    fn from(row: Image) -> Self {
        Self {
            id: row.id,
            file_name: row.file_name,
            split: row.split,
        }
    }
}
