//! Confusion-matrix axis entries, including the two sentinel classes.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::labels::ClassDescriptor;
use crate::types::DbId;

/// Wire id of the "No prediction" column.
pub const NO_PREDICTION_ID: DbId = -1;

/// Wire id of the "No label" row.
pub const NO_LABEL_ID: DbId = -2;

pub const NO_PREDICTION_NAME: &str = "No prediction";
pub const NO_LABEL_NAME: &str = "No label";

/// Colour used for both sentinel axis entries.
pub const SENTINEL_COLOR: &str = "#9E9E9E";

/// A position on either axis of the confusion matrix.
///
/// Serialized as its integer id so clients keep seeing `-1` / `-2` for the
/// sentinels, while code inside the crate gets exhaustive matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassAxis {
    /// A real class from the snapshot's registry.
    Class(DbId),
    /// Prediction with no ground truth at its position (bottom row).
    NoLabel,
    /// Ground truth with no prediction at its position (right column).
    NoPrediction,
}

impl ClassAxis {
    /// Map a wire id onto an axis entry.
    pub fn from_id(id: DbId) -> Self {
        match id {
            NO_PREDICTION_ID => Self::NoPrediction,
            NO_LABEL_ID => Self::NoLabel,
            other => Self::Class(other),
        }
    }

    /// The wire id of this axis entry.
    pub fn id(&self) -> DbId {
        match self {
            Self::Class(id) => *id,
            Self::NoLabel => NO_LABEL_ID,
            Self::NoPrediction => NO_PREDICTION_ID,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        !matches!(self, Self::Class(_))
    }
}

impl fmt::Display for ClassAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl Serialize for ClassAxis {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.id())
    }
}

impl<'de> Deserialize<'de> for ClassAxis {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from_id(DbId::deserialize(deserializer)?))
    }
}

/// A legend entry for one axis of the matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisClass {
    pub id: ClassAxis,
    pub name: String,
    pub color: String,
    pub is_sentinel: bool,
}

impl AxisClass {
    pub fn from_class(class: &ClassDescriptor) -> Self {
        Self {
            id: ClassAxis::Class(class.id),
            name: class.name.clone(),
            color: class.color.clone(),
            is_sentinel: false,
        }
    }

    pub fn no_label() -> Self {
        Self::sentinel(ClassAxis::NoLabel, NO_LABEL_NAME)
    }

    pub fn no_prediction() -> Self {
        Self::sentinel(ClassAxis::NoPrediction, NO_PREDICTION_NAME)
    }

    fn sentinel(id: ClassAxis, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            color: SENTINEL_COLOR.to_string(),
            is_sentinel: id.is_sentinel(),
        }
    }
}

/// Ground-truth axis: registry classes in order, then "No label".
pub fn ground_truth_axis(classes: &[ClassDescriptor]) -> Vec<AxisClass> {
    classes
        .iter()
        .map(AxisClass::from_class)
        .chain(std::iter::once(AxisClass::no_label()))
        .collect()
}

/// Prediction axis: registry classes in order, then "No prediction".
pub fn prediction_axis(classes: &[ClassDescriptor]) -> Vec<AxisClass> {
    classes
        .iter()
        .map(AxisClass::from_class)
        .chain(std::iter::once(AxisClass::no_prediction()))
        .collect()
}
