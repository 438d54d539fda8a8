//! # Vocabulary
//!
//! This module provides the vocabulary tables and related io mechanisms.
//!
//! ## Token Vocabulary
//!
//! [`TokenVocab`] is the bijective ``{ String <-> T }`` table,
//! together with the four required [`SpecialTokens`].
//!
//! ## Merge Ranks
//!
//! [`MergeRankTable`] maps an ordered pair of adjacent subword strings
//! to its merge priority; lower ranks merge first.
//!
//! ## BPE Vocabulary
//!
//! The primary user-oriented vocabulary is [`BpeVocab`], which contains:
//! * `tokens` - a [`TokenVocab`],
//! * `merges` - a [`MergeRankTable`].
//!
//! It is immutable once built, and is shared by `Arc` between
//! encoders and decoders.
pub mod io;

pub mod bpe_vocab;
pub mod merge_ranks;
pub mod special_tokens;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod token_vocab;
pub mod vocab_types;

#[doc(inline)]
pub use bpe_vocab::BpeVocab;
#[doc(inline)]
pub use merge_ranks::MergeRankTable;
#[doc(inline)]
pub use special_tokens::{
    BEGIN_TOKEN, BOUNDARY_MARKER, END_TOKEN, PAD_TOKEN, SpecialTokens, UNKNOWN_TOKEN,
};
#[doc(inline)]
pub use token_vocab::TokenVocab;
#[doc(inline)]
pub use vocab_types::{StrTokenMap, TokenStrMap};
