//! # `emochipper` Emotion Classification Toolkit
//!
//! The host-side halves of a transformer emotion classifier:
//! turning text into model input, and turning model output into labels.
//! Running the model itself is delegated to an [`inference::InferenceEngine`].
//!
//! See:
//! * [`vocab`] to load a BPE vocabulary and merge table.
//! * [`encoders`] to assemble text into padded, masked id sequences.
//! * [`decoders`] to render ids back to text, for diagnostics.
//! * [`classify`] to apply per-label thresholds to scores.
//! * [`pipeline`] to run text through an engine end to end.
//! * [`config`] for the declarative configuration.
//!
//! Label sets with tuned thresholds are available through:
//! * [`pretrained`]
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use emochipper::{
//!     EmoResult,
//!     classify::{LabelSet, ThresholdTable},
//!     config::EmotionConfig,
//!     vocab::{BpeVocab, MergeRankTable, TokenVocab},
//! };
//!
//! fn example() -> EmoResult<String> {
//!     let tokens = TokenVocab::<u32>::from_id_entries(
//!         [("<s>", 0), ("</s>", 1), ("<pad>", 2), ("<unk>", 3), ("I", 4), ("Ġam", 5)]
//!             .map(|(s, id)| (s.to_string(), id)),
//!     )?;
//!     let merges = MergeRankTable::from_pairs([("a", "m")])?;
//!     let vocab = Arc::new(BpeVocab::init(tokens, merges));
//!
//!     let labels = Arc::new(LabelSet::from_names(["joy", "anger"])?);
//!     let thresholds = Arc::new(ThresholdTable::from_entries([("joy", 0.4), ("anger", 0.3)])?);
//!
//!     // A stand-in for a real model.
//!     let engine = |_ids: &[u32], _mask: &[u8]| -> EmoResult<Vec<f32>> { Ok(vec![2.0, -2.0]) };
//!
//!     let mut pipeline =
//!         EmotionConfig::default().build_pipeline(vocab, labels, thresholds, engine)?;
//!
//!     Ok(pipeline.predict("I am")?.to_string())
//! }
//!
//! assert_eq!(example().unwrap(), "joy");
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod classify;
pub mod config;
pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod inference;
mod json_entries;
pub mod pipeline;
pub mod pretrained;
pub mod regex;
pub mod segmentation;
pub mod tokenizer;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use classify::{Prediction, ThresholdClassifier};
#[doc(inline)]
pub use encoders::{EncodedSequence, SequenceAssembler};
#[doc(inline)]
pub use errors::{EmoError, EmoResult};
#[doc(inline)]
pub use pipeline::EmotionPipeline;
#[doc(inline)]
pub use tokenizer::{Tokenizer, TokenizerOptions};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::BpeVocab;
