//! Read-only views of the upstream entities the evaluation engine consumes.
//!
//! These mirror rows owned by other parts of the system (class registry,
//! label store, image store). The engine never mutates them.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// One entry in a snapshot's class registry.
///
/// The registry is frozen when the snapshot is taken; `sequence` defines the
/// order classes appear on the confusion-matrix axes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    pub id: DbId,
    pub name: String,
    pub color: String,
    pub sequence: i32,
}

/// A ground-truth label belonging to a snapshot.
///
/// `position` distinguishes several labels on the same image (detection,
/// segmentation). Classification labels carry no position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundTruthLabel {
    pub id: DbId,
    pub image_id: DbId,
    pub class_id: DbId,
    pub position: Option<String>,
    pub created_at: Timestamp,
    pub created_by: Option<DbId>,
}

/// A label produced by a trained model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionLabel {
    pub id: DbId,
    pub image_id: DbId,
    pub class_id: DbId,
    pub model_id: DbId,
    pub position: Option<String>,
    /// Confidence in percent, `0..=100`.
    pub confidence_rate: i32,
}

/// An image of a snapshot together with the split it was assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationImage {
    pub id: DbId,
    pub file_name: String,
    pub split: String,
}
