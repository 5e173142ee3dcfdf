//! Read-only access to the upstream data the evaluation engine consumes.
//!
//! The engine never touches storage directly. `vislab-db` implements this
//! trait on PostgreSQL; [`crate::memory::InMemoryEvaluationStore`] backs
//! tests and local demos.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::labels::{ClassDescriptor, EvaluationImage, GroundTruthLabel, PredictionLabel};
use crate::types::DbId;

#[async_trait]
pub trait EvaluationStore: Send + Sync {
    /// Cheap liveness check of the backing storage.
    async fn ping(&self) -> Result<(), CoreError>;

    /// Snapshot the model was trained on.
    ///
    /// Returns [`CoreError::NotFound`] for an unknown model and
    /// [`CoreError::PreconditionFailed`] when the model has no snapshot.
    async fn resolve_snapshot_id(&self, model_id: DbId) -> Result<DbId, CoreError>;

    /// Class registry of a snapshot, ordered by `sequence` ascending.
    async fn list_classes(&self, snapshot_id: DbId) -> Result<Vec<ClassDescriptor>, CoreError>;

    /// Images of a snapshot assigned to `split`, ordered by id.
    async fn list_images(
        &self,
        snapshot_id: DbId,
        split: &str,
    ) -> Result<Vec<EvaluationImage>, CoreError>;

    /// Ground-truth labels of a snapshot on the given images, ordered by id.
    async fn list_ground_truth_labels(
        &self,
        snapshot_id: DbId,
        image_ids: &[DbId],
    ) -> Result<Vec<GroundTruthLabel>, CoreError>;

    /// Prediction labels of a model on the given images, ordered by id.
    async fn list_prediction_labels(
        &self,
        model_id: DbId,
        image_ids: &[DbId],
    ) -> Result<Vec<PredictionLabel>, CoreError>;
}
