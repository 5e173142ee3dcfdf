//! Ground-truth and prediction label rows.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vislab_core::labels::{GroundTruthLabel, PredictionLabel};
use vislab_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `ground_truth_labels` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GroundTruthLabelRow {
    pub id: DbId,
    pub snapshot_id: DbId,
    pub image_id: DbId,
    pub class_id: DbId,
    pub position: Option<String>,
    pub created_at: Timestamp,
    pub created_by: Option<DbId>,
}

/// A row from the `prediction_labels` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PredictionLabelRow {
    pub id: DbId,
    pub model_id: DbId,
    pub image_id: DbId,
    pub class_id: DbId,
    pub position: Option<String>,
    pub confidence_rate: i32,
    pub created_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct CreateGroundTruthLabel {
    pub snapshot_id: DbId,
    pub image_id: DbId,
    pub class_id: DbId,
    pub position: Option<String>,
    pub created_by: Option<DbId>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePredictionLabel {
    pub model_id: DbId,
    pub image_id: DbId,
    pub class_id: DbId,
    pub position: Option<String>,
    pub confidence_rate: i32,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

impl From<GroundTruthLabelRow> for GroundTruthLabel {
    fn from(row: GroundTruthLabelRow) -> Self {
        Self {
            id: row.id,
            image_id: row.image_id,
            class_id: row.class_id,
            position: row.position,
            created_at: row.created_at,
            created_by: row.created_by,
        }
    }
}

impl From<PredictionLabelRow> for PredictionLabel {
    fn from(row: PredictionLabelRow) -> Self {
        Self {
            id: row.id,
            image_id: row.image_id,
            class_id: row.class_id,
            model_id: row.model_id,
            position: row.position,
            confidence_rate: row.confidence_rate,
        }
    }
}
