//! Evaluation-set tokens and their mapping onto stored image splits.
//!
//! Callers identify the subset of a snapshot to evaluate with a token such
//! as `TEST`. Images store the split under a slightly different name
//! (`training` rather than `train`), so the token is parsed once at the
//! boundary and converted with [`EvaluationSet::split_name`].

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Split name stored on images belonging to the training set.
pub const SPLIT_TRAINING: &str = "training";
pub const SPLIT_DEV: &str = "dev";
pub const SPLIT_TEST: &str = "test";

// ---------------------------------------------------------------------------
// Enum
// ---------------------------------------------------------------------------

/// One of the disjoint partitions of a snapshot's images.
///
/// Unknown tokens are not rejected: they are kept as [`EvaluationSet::Other`]
/// (lower-cased) and passed through to the image query verbatim, which
/// simply yields no images.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum EvaluationSet {
    Train,
    Dev,
    #[default]
    Test,
    Other(String),
}

impl EvaluationSet {
    /// Parse a caller-supplied token. Matching is case-insensitive; anything
    /// else is lower-cased and kept verbatim, surrounding whitespace included.
    pub fn parse(token: &str) -> Self {
        match token.to_ascii_uppercase().as_str() {
            "TRAIN" => Self::Train,
            "DEV" => Self::Dev,
            "TEST" => Self::Test,
            _ => Self::Other(token.to_lowercase()),
        }
    }

    /// The split name stored on images.
    pub fn split_name(&self) -> &str {
        match self {
            Self::Train => SPLIT_TRAINING,
            Self::Dev => SPLIT_DEV,
            Self::Test => SPLIT_TEST,
            Self::Other(s) => s,
        }
    }

    /// The canonical token for this set (`TRAIN`, `DEV`, `TEST`).
    pub fn token(&self) -> &str {
        match self {
            Self::Train => "TRAIN",
            Self::Dev => "DEV",
            Self::Test => "TEST",
            Self::Other(s) => s,
        }
    }

}

impl fmt::Display for EvaluationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl Serialize for EvaluationSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.token())
    }
}

impl<'de> Deserialize<'de> for EvaluationSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Ok(Self::parse(&token))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn train_maps_to_training_split() {
        assert_eq!(EvaluationSet::parse("TRAIN").split_name(), "training");
    }

    #[test]
    fn dev_and_test_map_to_same_name() {
        assert_eq!(EvaluationSet::parse("DEV").split_name(), "dev");
        assert_eq!(EvaluationSet::parse("TEST").split_name(), "test");
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(EvaluationSet::parse("test"), EvaluationSet::Test);
        assert_eq!(EvaluationSet::parse("Train"), EvaluationSet::Train);
        assert_eq!(EvaluationSet::parse("dEv"), EvaluationSet::Dev);
    }

    #[test]
    fn unknown_token_is_lowercased_and_passed_through() {
        let set = EvaluationSet::parse("Holdout");
        assert_eq!(set, EvaluationSet::Other("holdout".to_string()));
        assert_eq!(set.split_name(), "holdout");
    }

    #[test]
    fn unknown_token_keeps_surrounding_whitespace() {
        let set = EvaluationSet::parse(" Holdout ");
        assert_eq!(set, EvaluationSet::Other(" holdout ".to_string()));
        assert_eq!(set.split_name(), " holdout ");
    }

    #[test]
    fn padded_known_token_is_not_recognised() {
        assert_eq!(
            EvaluationSet::parse(" dev "),
            EvaluationSet::Other(" dev ".to_string())
        );
    }

    #[test]
    fn default_is_test() {
        assert_eq!(EvaluationSet::default(), EvaluationSet::Test);
        assert_eq!(EvaluationSet::default().split_name(), SPLIT_TEST);
    }

    #[test]
    fn serializes_as_token() {
        let json = serde_json::to_value(EvaluationSet::Train).unwrap();
        assert_eq!(json, "TRAIN");

        let parsed: EvaluationSet = serde_json::from_value(serde_json::json!("dev")).unwrap();
        assert_eq!(parsed, EvaluationSet::Dev);
    }
}
