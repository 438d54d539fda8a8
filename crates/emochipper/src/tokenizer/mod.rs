//! # Combined Tokenizer
//!
//! [`Tokenizer`] pairs a [`SequenceAssembler`](crate::encoders::SequenceAssembler)
//! with a [`TokenDecoder`](crate::decoders::TokenDecoder) over one shared vocabulary;
//! [`TokenizerOptions`] builds it.

mod tokenizer_impl;
mod tokenizer_options;

#[doc(inline)]
pub use tokenizer_impl::*;
#[doc(inline)]
pub use tokenizer_options::*;
