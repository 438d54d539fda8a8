//! # Word Segmentation
//!
//! This module exists to factor out splitting raw text into word units.
//!
//! [`WordSegmenter`] is the contract the encoders depend upon:
//! an ordered sequence of non-empty words, with whitespace dropped.
//!
//! Implementations:
//! * [`RegexWordSegmenter`] - unicode-aware word / punctuation runs (the default).
//! * [`WhitespaceSegmenter`] - split on whitespace only.
//!
//! [`SegmenterConfig`] describes the declarative choice between them.

pub mod regex_segmenter;
pub mod segmenter_config;
pub mod whitespace_segmenter;
pub mod word_segmenter;

#[doc(inline)]
pub use regex_segmenter::{DEFAULT_WORD_PATTERN, RegexWordSegmenter};
#[doc(inline)]
pub use segmenter_config::SegmenterConfig;
#[doc(inline)]
pub use whitespace_segmenter::WhitespaceSegmenter;
#[doc(inline)]
pub use word_segmenter::WordSegmenter;
