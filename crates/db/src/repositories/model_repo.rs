//! Repository for the `models` table.

use sqlx::PgPool;
use vislab_core::types::DbId;

use crate::models::model::{CreateTrainedModel, TrainedModel};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, snapshot_id, created_at, updated_at";

/// Provides lookups for trained models.
pub struct ModelRepo;

impl ModelRepo {
    /// Insert a new model, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTrainedModel,
    ) -> Result<TrainedModel, sqlx::Error> {
        let query = format!(
            "INSERT INTO models (name, snapshot_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TrainedModel>(&query)
            .bind(&input.name)
            .bind(input.snapshot_id)
            .fetch_one(pool)
            .await
    }

    /// Find a model by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TrainedModel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM models WHERE id = $1");
        sqlx::query_as::<_, TrainedModel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
