//! PostgreSQL implementation of [`EvaluationStore`].

use async_trait::async_trait;
use vislab_core::error::CoreError;
use vislab_core::labels::{ClassDescriptor, EvaluationImage, GroundTruthLabel, PredictionLabel};
use vislab_core::store::EvaluationStore;
use vislab_core::types::DbId;

use crate::repositories::{ClassRepo, ImageRepo, LabelRepo, ModelRepo};
use crate::DbPool;

/// Reads evaluation inputs through the repository layer.
#[derive(Debug, Clone)]
pub struct PgEvaluationStore {
    pool: DbPool,
}

impl PgEvaluationStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Log a storage failure and hide its details behind [`CoreError::Internal`].
fn storage_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> CoreError {
    move |err| {
        tracing::error!(error = %err, operation, "Evaluation store query failed");
        CoreError::Internal(format!("{operation} failed"))
    }
}

#[async_trait]
impl EvaluationStore for PgEvaluationStore {
    async fn ping(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(storage_error("health_check"))
    }

    async fn resolve_snapshot_id(&self, model_id: DbId) -> Result<DbId, CoreError> {
        let model = ModelRepo::find_by_id(&self.pool, model_id)
            .await
            .map_err(storage_error("find_model"))?
            .ok_or(CoreError::NotFound {
                entity: "Model",
                id: model_id,
            })?;

        model.snapshot_id.ok_or_else(|| {
            CoreError::PreconditionFailed(format!("Model {model_id} has no associated snapshot"))
        })
    }

    async fn list_classes(&self, snapshot_id: DbId) -> Result<Vec<ClassDescriptor>, CoreError> {
        let rows = ClassRepo::list_by_snapshot(&self.pool, snapshot_id)
            .await
            .map_err(storage_error("list_classes"))?;
        Ok(rows.into_iter().map(ClassDescriptor::from).collect())
    }

    async fn list_images(
        &self,
        snapshot_id: DbId,
        split: &str,
    ) -> Result<Vec<EvaluationImage>, CoreError> {
        let rows = ImageRepo::list_by_split(&self.pool, snapshot_id, split)
            .await
            .map_err(storage_error("list_images"))?;
        Ok(rows.into_iter().map(EvaluationImage::from).collect())
    }

    async fn list_ground_truth_labels(
        &self,
        snapshot_id: DbId,
        image_ids: &[DbId],
    ) -> Result<Vec<GroundTruthLabel>, CoreError> {
        let rows = LabelRepo::list_ground_truth(&self.pool, snapshot_id, image_ids)
            .await
            .map_err(storage_error("list_ground_truth_labels"))?;
        Ok(rows.into_iter().map(GroundTruthLabel::from).collect())
    }

    async fn list_prediction_labels(
        &self,
        model_id: DbId,
        image_ids: &[DbId],
    ) -> Result<Vec<PredictionLabel>, CoreError> {
        let rows = LabelRepo::list_predictions(&self.pool, model_id, image_ids)
            .await
            .map_err(storage_error("list_prediction_labels"))?;
        Ok(rows.into_iter().map(PredictionLabel::from).collect())
    }
}
