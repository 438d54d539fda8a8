//! # `GoEmotions`
//!
//! The 28-label `GoEmotions` taxonomy (27 emotions plus ``neutral``),
//! in the score order of common multi-label fine-tunes,
//! with per-label thresholds tuned for them.

use std::sync::Arc;

use crate::{
    classify::{DecisionPolicy, LabelSet, ThresholdClassifier, ThresholdTable},
    errors::EmoResult,
};

/// The number of `GoEmotions` labels.
pub const GO_EMOTIONS_LABEL_COUNT: usize = GO_EMOTIONS_THRESHOLDS.len();

/// `GoEmotions` labels with their default thresholds, in score order.
pub const GO_EMOTIONS_THRESHOLDS: &[(&str, f32)] = &[
    ("admiration", 0.25),
    ("amusement", 0.45),
    ("anger", 0.15),
    ("annoyance", 0.10),
    ("approval", 0.30),
    ("caring", 0.40),
    ("confusion", 0.55),
    ("curiosity", 0.25),
    ("desire", 0.25),
    ("disappointment", 0.40),
    ("disapproval", 0.30),
    ("disgust", 0.20),
    ("embarrassment", 0.10),
    ("excitement", 0.35),
    ("fear", 0.40),
    ("gratitude", 0.45),
    ("grief", 0.05),
    ("joy", 0.40),
    ("love", 0.25),
    ("nervousness", 0.25),
    ("optimism", 0.20),
    ("pride", 0.10),
    ("realization", 0.15),
    ("relief", 0.05),
    ("remorse", 0.10),
    ("sadness", 0.40),
    ("surprise", 0.15),
    ("neutral", 0.25),
];

/// The `GoEmotions` [`LabelSet`].
pub fn labels() -> EmoResult<LabelSet> {
    LabelSet::from_names(GO_EMOTIONS_THRESHOLDS.iter().map(|&(label, _)| label))
}

/// The `GoEmotions` default [`ThresholdTable`].
pub fn thresholds() -> EmoResult<ThresholdTable> {
    ThresholdTable::from_entries(GO_EMOTIONS_THRESHOLDS.iter().copied())
}

/// A [`ThresholdClassifier`] over the `GoEmotions` labels and default thresholds.
pub fn classifier(policy: DecisionPolicy) -> EmoResult<ThresholdClassifier> {
    ThresholdClassifier::new(Arc::new(labels()?), Arc::new(thresholds()?), policy)
}
