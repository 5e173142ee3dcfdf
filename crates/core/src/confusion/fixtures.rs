//! Shared label fixtures for the confusion-matrix tests.

use crate::labels::{ClassDescriptor, EvaluationImage, GroundTruthLabel, PredictionLabel};
use crate::types::{DbId, Timestamp};

pub const CLASS_A: DbId = 1;
pub const CLASS_B: DbId = 2;
pub const IMG1: DbId = 1;
pub const IMG2: DbId = 2;

pub struct Scenario {
    pub classes: Vec<ClassDescriptor>,
    pub images: Vec<EvaluationImage>,
    pub ground_truth: Vec<GroundTruthLabel>,
    pub predictions: Vec<PredictionLabel>,
}

fn created_at() -> Timestamp {
    chrono::DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

pub fn class(id: DbId, name: &str, sequence: i32) -> ClassDescriptor {
    ClassDescriptor {
        id,
        name: name.to_string(),
        color: format!("#00000{id}"),
        sequence,
    }
}

pub fn image(id: DbId, split: &str) -> EvaluationImage {
    EvaluationImage {
        id,
        file_name: format!("img{id}.png"),
        split: split.to_string(),
    }
}

pub fn gt(id: DbId, image_id: DbId, position: &str, class_id: DbId) -> GroundTruthLabel {
    GroundTruthLabel {
        id,
        image_id,
        class_id,
        position: Some(position.to_string()),
        created_at: created_at(),
        created_by: Some(1),
    }
}

pub fn pred(
    id: DbId,
    image_id: DbId,
    position: &str,
    class_id: DbId,
    confidence_rate: i32,
) -> PredictionLabel {
    PredictionLabel {
        id,
        image_id,
        class_id,
        model_id: 1,
        position: Some(position.to_string()),
        confidence_rate,
    }
}

/// Two classes, two test images, three matched pairs (two of them
/// misclassified) and one prediction without ground truth.
pub fn scenario() -> Scenario {
    Scenario {
        classes: vec![class(CLASS_A, "A", 0), class(CLASS_B, "B", 1)],
        images: vec![image(IMG1, "test"), image(IMG2, "test")],
        ground_truth: vec![
            gt(1, IMG1, "0", CLASS_A),
            gt(2, IMG1, "1", CLASS_B),
            gt(3, IMG2, "0", CLASS_A),
        ],
        predictions: vec![
            pred(1, IMG1, "0", CLASS_A, 90),
            pred(2, IMG1, "1", CLASS_A, 60),
            pred(3, IMG2, "0", CLASS_B, 70),
            pred(4, IMG2, "1", CLASS_B, 40),
        ],
    }
}
