//! # Decoders
//!
//! [`TokenDecoder`] renders ids back to approximate text, for diagnostics.
//! Decoding is lossy: framing tokens are dropped and boundary markers become spaces.

pub mod token_decoder;

#[doc(inline)]
pub use token_decoder::TokenDecoder;
