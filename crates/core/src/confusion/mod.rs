//! Confusion-matrix and per-class metrics engine.
//!
//! All four views share one matching step:
//!
//! ```text
//! labels ──► matching ──► matrix ──► metrics        (summary)
//!                    ├──► cell                      (cell drill-down)
//! labels ──────────────► image_list                 (per-image listing)
//! ```
//!
//! Everything here is pure and synchronous; data loading happens in
//! [`crate::evaluation`] through [`crate::store::EvaluationStore`].

pub mod axis;
pub mod cell;
pub mod image_list;
pub mod matching;
pub mod matrix;
pub mod metrics;

#[cfg(test)]
pub(crate) mod fixtures;

pub use axis::{AxisClass, ClassAxis, NO_LABEL_ID, NO_PREDICTION_ID};
pub use cell::{cell_detail, CellDetail, ImageWithLabels};
pub use image_list::{is_correct, list_images, ImageEvaluation};
pub use matching::{match_labels, MatchOutcome, MatchedPair};
pub use matrix::{ConfusionMatrix, MatrixCell};
pub use metrics::{compute_class_metrics, ClassMetrics};
