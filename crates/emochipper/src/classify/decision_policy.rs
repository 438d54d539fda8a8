//! # Decision Policy

use serde::{Deserialize, Serialize};

/// How qualifying labels become a prediction.
///
/// A label qualifies when its score is at least its threshold;
/// NaN scores never qualify.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionPolicy {
    /// The highest-scoring qualifying label; ties go to the lowest index.
    #[default]
    BestQualifying,

    /// Every qualifying label, in label order.
    AllQualifying,
}

impl DecisionPolicy {
    /// Does `score` meet `threshold`?
    pub fn qualifies(
        score: f32,
        threshold: f32,
    ) -> bool {
        score >= threshold
    }
}
