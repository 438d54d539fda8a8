//! # Pretrained Label Tables
//!
//! Label sets and tuned thresholds for published emotion classifiers.
//!
//! ```rust
//! use emochipper::{classify::DecisionPolicy, pretrained::go_emotions};
//!
//! let classifier = go_emotions::classifier(DecisionPolicy::default()).unwrap();
//!
//! let mut scores = vec![0.0; go_emotions::GO_EMOTIONS_LABEL_COUNT];
//! scores[17] = 0.9; // joy
//! assert_eq!(classifier.classify(&scores).unwrap().to_string(), "joy");
//! ```

pub mod go_emotions;
