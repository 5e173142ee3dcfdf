//! In-memory [`EvaluationStore`] for tests and local demos.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::CoreError;
use crate::labels::{ClassDescriptor, EvaluationImage, GroundTruthLabel, PredictionLabel};
use crate::store::EvaluationStore;
use crate::types::DbId;

/// Store populated up front through the `with_*` builder methods.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEvaluationStore {
    /// Model id to its snapshot id (`None` when the model has no snapshot).
    models: HashMap<DbId, Option<DbId>>,
    classes: HashMap<DbId, Vec<ClassDescriptor>>,
    images: HashMap<DbId, Vec<EvaluationImage>>,
    ground_truth: HashMap<DbId, Vec<GroundTruthLabel>>,
    predictions: Vec<PredictionLabel>,
}

impl InMemoryEvaluationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, model_id: DbId, snapshot_id: Option<DbId>) -> Self {
        self.models.insert(model_id, snapshot_id);
        self
    }

    pub fn with_classes(mut self, snapshot_id: DbId, classes: Vec<ClassDescriptor>) -> Self {
        self.classes.entry(snapshot_id).or_default().extend(classes);
        self
    }

    pub fn with_images(mut self, snapshot_id: DbId, images: Vec<EvaluationImage>) -> Self {
        self.images.entry(snapshot_id).or_default().extend(images);
        self
    }

    pub fn with_ground_truth(mut self, snapshot_id: DbId, labels: Vec<GroundTruthLabel>) -> Self {
        self.ground_truth
            .entry(snapshot_id)
            .or_default()
            .extend(labels);
        self
    }

    pub fn with_predictions(mut self, labels: Vec<PredictionLabel>) -> Self {
        self.predictions.extend(labels);
        self
    }
}

#[async_trait]
impl EvaluationStore for InMemoryEvaluationStore {
    async fn ping(&self) -> Result<(), CoreError> {
        Ok(())
    }

    async fn resolve_snapshot_id(&self, model_id: DbId) -> Result<DbId, CoreError> {
        match self.models.get(&model_id) {
            Some(Some(snapshot_id)) => Ok(*snapshot_id),
            Some(None) => Err(CoreError::PreconditionFailed(format!(
                "Model {model_id} has no associated snapshot"
            ))),
            None => Err(CoreError::NotFound {
                entity: "Model",
                id: model_id,
            }),
        }
    }

    async fn list_classes(&self, snapshot_id: DbId) -> Result<Vec<ClassDescriptor>, CoreError> {
        let mut classes = self.classes.get(&snapshot_id).cloned().unwrap_or_default();
        classes.sort_by_key(|c| (c.sequence, c.id));
        Ok(classes)
    }

    async fn list_images(
        &self,
        snapshot_id: DbId,
        split: &str,
    ) -> Result<Vec<EvaluationImage>, CoreError> {
        let mut images: Vec<EvaluationImage> = self
            .images
            .get(&snapshot_id)
            .map(|all| all.iter().filter(|i| i.split == split).cloned().collect())
            .unwrap_or_default();
        images.sort_by_key(|i| i.id);
        Ok(images)
    }

    async fn list_ground_truth_labels(
        &self,
        snapshot_id: DbId,
        image_ids: &[DbId],
    ) -> Result<Vec<GroundTruthLabel>, CoreError> {
        let mut labels: Vec<GroundTruthLabel> = self
            .ground_truth
            .get(&snapshot_id)
            .map(|all| {
                all.iter()
                    .filter(|l| image_ids.contains(&l.image_id))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        labels.sort_by_key(|l| l.id);
        Ok(labels)
    }

    async fn list_prediction_labels(
        &self,
        model_id: DbId,
        image_ids: &[DbId],
    ) -> Result<Vec<PredictionLabel>, CoreError> {
        let mut labels: Vec<PredictionLabel> = self
            .predictions
            .iter()
            .filter(|l| l.model_id == model_id && image_ids.contains(&l.image_id))
            .cloned()
            .collect();
        labels.sort_by_key(|l| l.id);
        Ok(labels)
    }
}
