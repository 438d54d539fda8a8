//! # Encoders
//!
//! Text becomes model input in two layers:
//!
//! * [`BpeWordEncoder`] - splits a single word into ranked-merge subwords,
//!   memoized in a per-encoder [`WordCache`], and maps subwords to ids.
//! * [`SequenceAssembler`] - segments text into words, encodes them,
//!   and frames the ids with begin / end / pad tokens,
//!   producing an [`EncodedSequence`] shaped by [`AssemblerOptions`].
//!
//! Encoders own mutable cache state; use `fork()` to get an
//! independent encoder over the same shared vocabulary.

pub mod assembler_options;
pub mod bpe_word_encoder;
pub mod encoded_sequence;
pub mod sequence_assembler;
pub mod word_cache;

#[doc(inline)]
pub use assembler_options::{AssemblerOptions, DEFAULT_MAX_LENGTH, PaddingStrategy};
#[doc(inline)]
pub use bpe_word_encoder::{BpeWordEncoder, merge_word};
#[doc(inline)]
pub use encoded_sequence::EncodedSequence;
#[doc(inline)]
pub use sequence_assembler::SequenceAssembler;
#[doc(inline)]
pub use word_cache::WordCache;
