//! # Label Threshold Classification
//!
//! Turns one score per label into a [`Prediction`].
//!
//! * [`LabelSet`] - ordered label names, index-aligned with the scores.
//! * [`ThresholdTable`] - per-label minimum scores.
//! * [`DecisionPolicy`] - pick the best qualifying label, or all of them.
//! * [`Activation`] - maps raw logits to scores before thresholding.
//! * [`ThresholdClassifier`] - validated once; then classifies any number of score vectors.
//!
//! ## Example
//!
//! ```rust
//! use emochipper::classify::{DecisionPolicy, LabelSet, ThresholdTable, classify};
//!
//! let labels = LabelSet::from_names(["joy", "anger"]).unwrap();
//! let thresholds = ThresholdTable::from_entries([("joy", 0.4), ("anger", 0.3)]).unwrap();
//!
//! let prediction = classify(&[0.55, 0.50], &labels, &thresholds, DecisionPolicy::default()).unwrap();
//! assert_eq!(prediction.to_string(), "joy");
//!
//! let prediction = classify(&[0.1, 0.1], &labels, &thresholds, DecisionPolicy::default()).unwrap();
//! assert_eq!(prediction.to_string(), "no emotion detected");
//! ```

pub mod activation;
pub mod decision_policy;
pub mod io;
pub mod label_set;
pub mod prediction;
pub mod threshold_classifier;
pub mod threshold_table;

#[doc(inline)]
pub use activation::Activation;
#[doc(inline)]
pub use decision_policy::DecisionPolicy;
#[doc(inline)]
pub use label_set::LabelSet;
#[doc(inline)]
pub use prediction::{LabelScore, NO_LABEL_TEXT, Prediction};
#[doc(inline)]
pub use threshold_classifier::{ThresholdClassifier, classify};
#[doc(inline)]
pub use threshold_table::ThresholdTable;
