//! Repository for the `ground_truth_labels` and `prediction_labels` tables.

use sqlx::PgPool;
use vislab_core::types::DbId;

use crate::models::label::{
    CreateGroundTruthLabel, CreatePredictionLabel, GroundTruthLabelRow, PredictionLabelRow,
};

const GROUND_TRUTH_COLUMNS: &str =
    "id, snapshot_id, image_id, class_id, position, created_at, created_by";

const PREDICTION_COLUMNS: &str =
    "id, model_id, image_id, class_id, position, confidence_rate, created_at";

/// Provides read access to both label sides, plus inserts for seeding.
pub struct LabelRepo;

impl LabelRepo {
    // -----------------------------------------------------------------------
    // Ground truth
    // -----------------------------------------------------------------------

    pub async fn create_ground_truth(
        pool: &PgPool,
        input: &CreateGroundTruthLabel,
    ) -> Result<GroundTruthLabelRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO ground_truth_labels (snapshot_id, image_id, class_id, position, created_by)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {GROUND_TRUTH_COLUMNS}"
        );
        sqlx::query_as::<_, GroundTruthLabelRow>(&query)
            .bind(input.snapshot_id)
            .bind(input.image_id)
            .bind(input.class_id)
            .bind(&input.position)
            .bind(input.created_by)
            .fetch_one(pool)
            .await
    }

    /// Ground-truth labels of a snapshot on the given images, ordered by id.
    pub async fn list_ground_truth(
        pool: &PgPool,
        snapshot_id: DbId,
        image_ids: &[DbId],
    ) -> Result<Vec<GroundTruthLabelRow>, sqlx::Error> {
        let query = format!(
            "SELECT {GROUND_TRUTH_COLUMNS} FROM ground_truth_labels
             WHERE snapshot_id = $1 AND image_id = ANY($2)
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, GroundTruthLabelRow>(&query)
            .bind(snapshot_id)
            .bind(image_ids)
            .fetch_all(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Predictions
    // -----------------------------------------------------------------------

    pub async fn create_prediction(
        pool: &PgPool,
        input: &CreatePredictionLabel,
    ) -> Result<PredictionLabelRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO prediction_labels (model_id, image_id, class_id, position, confidence_rate)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {PREDICTION_COLUMNS}"
        );
        sqlx::query_as::<_, PredictionLabelRow>(&query)
            .bind(input.model_id)
            .bind(input.image_id)
            .bind(input.class_id)
            .bind(&input.position)
            .bind(input.confidence_rate)
            .fetch_one(pool)
            .await
    }

    /// Prediction labels of a model on the given images, ordered by id.
    pub async fn list_predictions(
        pool: &PgPool,
        model_id: DbId,
        image_ids: &[DbId],
    ) -> Result<Vec<PredictionLabelRow>, sqlx::Error> {
        let query = format!(
            "SELECT {PREDICTION_COLUMNS} FROM prediction_labels
             WHERE model_id = $1 AND image_id = ANY($2)
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, PredictionLabelRow>(&query)
            .bind(model_id)
            .bind(image_ids)
            .fetch_all(pool)
            .await
    }
}
