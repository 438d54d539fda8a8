//! # Threshold Classifier

use std::sync::Arc;

use crate::{
    classify::{DecisionPolicy, LabelScore, LabelSet, Prediction, ThresholdTable},
    errors::{EmoError, EmoResult},
};

/// Applies per-label thresholds to score vectors.
///
/// Label / threshold consistency is checked once, at construction.
#[derive(Debug, Clone)]
pub struct ThresholdClassifier {
    labels: Arc<LabelSet>,
    thresholds: Arc<ThresholdTable>,
    aligned: Vec<f32>,
    policy: DecisionPolicy,
}

impl ThresholdClassifier {
    /// Create a new classifier.
    ///
    /// ## Arguments
    /// * `labels` - The label set, in score order.
    /// * `thresholds` - One threshold per label, and no others.
    /// * `policy` - The decision policy.
    ///
    /// ## Returns
    /// [`EmoError::MissingThreshold`] or [`EmoError::UnexpectedThreshold`]
    /// if the table does not cover exactly the label set.
    pub fn new(
        labels: Arc<LabelSet>,
        thresholds: Arc<ThresholdTable>,
        policy: DecisionPolicy,
    ) -> EmoResult<Self> {
        let aligned = thresholds.aligned_to(&labels)?;
        log::info!("threshold classifier: {} labels, {policy:?}", labels.len());
        Ok(Self {
            labels,
            thresholds,
            aligned,
            policy,
        })
    }

    /// Replace the decision policy and return the classifier.
    pub fn with_policy(
        mut self,
        policy: DecisionPolicy,
    ) -> Self {
        self.policy = policy;
        self
    }

    /// Get the label set.
    pub fn labels(&self) -> &Arc<LabelSet> {
        &self.labels
    }

    /// Get the threshold table.
    pub fn thresholds(&self) -> &Arc<ThresholdTable> {
        &self.thresholds
    }

    /// Get the decision policy.
    pub fn policy(&self) -> DecisionPolicy {
        self.policy
    }

    /// The threshold of the label at `index`.
    pub fn threshold(
        &self,
        index: usize,
    ) -> Option<f32> {
        self.aligned.get(index).copied()
    }

    /// Classify one score vector.
    ///
    /// ## Returns
    /// [`EmoError::ScoreCountMismatch`] unless there is exactly one score per label.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, scores)))]
    pub fn classify(
        &self,
        scores: &[f32],
    ) -> EmoResult<Prediction> {
        decide(scores, &self.labels, &self.aligned, self.policy)
    }
}

/// Classify one score vector without building a [`ThresholdClassifier`].
///
/// ## Arguments
/// * `scores` - One score per label, in label order.
/// * `labels` - The label set.
/// * `thresholds` - One threshold per label, and no others.
/// * `policy` - The decision policy.
pub fn classify(
    scores: &[f32],
    labels: &LabelSet,
    thresholds: &ThresholdTable,
    policy: DecisionPolicy,
) -> EmoResult<Prediction> {
    let aligned = thresholds.aligned_to(labels)?;
    decide(scores, labels, &aligned, policy)
}

fn decide(
    scores: &[f32],
    labels: &LabelSet,
    thresholds: &[f32],
    policy: DecisionPolicy,
) -> EmoResult<Prediction> {
    if scores.len() != labels.len() {
        return Err(EmoError::ScoreCountMismatch {
            scores: scores.len(),
            labels: labels.len(),
        });
    }

    let qualifying = scores
        .iter()
        .zip(thresholds)
        .enumerate()
        .filter(|&(_, (&score, &threshold))| DecisionPolicy::qualifies(score, threshold))
        .map(|(index, (&score, _))| (index, score))
        .inspect(|&(index, score)| {
            log::debug!(
                "label {:?} qualifies with score {score}",
                labels.name(index).unwrap_or_default()
            );
        });

    let to_label_score = |(index, score): (usize, f32)| LabelScore {
        index,
        label: labels.name(index).unwrap_or_default().to_string(),
        score,
    };

    let prediction = match policy {
        DecisionPolicy::BestQualifying => qualifying
            .reduce(|best, cand| if cand.1 > best.1 { cand } else { best })
            .map(to_label_score)
            .map_or(Prediction::NoLabel, Prediction::Single),
        DecisionPolicy::AllQualifying => {
            let scores: Vec<LabelScore> = qualifying.map(to_label_score).collect();
            if scores.is_empty() {
                Prediction::NoLabel
            } else {
                Prediction::Multi(scores)
            }
        }
    };

    if prediction.is_no_label() {
        log::debug!("no label qualifies");
    }
    Ok(prediction)
}
