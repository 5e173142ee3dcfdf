//! Snapshot class registry rows.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vislab_core::labels::ClassDescriptor;
use vislab_core::types::{DbId, Timestamp};

/// A row from the `snapshot_classes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SnapshotClass {
    pub id: DbId,
    pub snapshot_id: DbId,
    pub name: String,
    pub color: String,
    pub sequence: i32,
    pub created_at: Timestamp,
}

/// DTO for adding a class to a snapshot's registry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSnapshotClass {
    pub snapshot_id: DbId,
    pub name: String,
    pub color: String,
    pub sequence: i32,
}

impl From<SnapshotClass> for ClassDescriptor {
    fn from(row: SnapshotClass) -> Self {
        Self {
            id: row.id,
            name: row.name,
            color: row.color,
            sequence: row.sequence,
        }
    }
}
