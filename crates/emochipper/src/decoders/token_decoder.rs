//! # Token Decoder

use std::sync::Arc;

use crate::{
    types::TokenType,
    vocab::{BOUNDARY_MARKER, BpeVocab, UNKNOWN_TOKEN},
};

/// Renders token ids back to text through the inverse vocabulary.
#[derive(Debug, Clone)]
pub struct TokenDecoder<T: TokenType> {
    vocab: Arc<BpeVocab<T>>,
    boundary_marker: char,
}

impl<T: TokenType> TokenDecoder<T> {
    /// Create a decoder with the default boundary marker.
    pub fn new(vocab: Arc<BpeVocab<T>>) -> Self {
        Self {
            vocab,
            boundary_marker: BOUNDARY_MARKER,
        }
    }

    /// Replace the boundary marker and return the decoder.
    pub fn with_boundary_marker(
        mut self,
        marker: char,
    ) -> Self {
        self.boundary_marker = marker;
        self
    }

    /// Get the shared vocabulary.
    pub fn vocab(&self) -> &Arc<BpeVocab<T>> {
        &self.vocab
    }

    /// Decode ids to text.
    ///
    /// Begin, end, and pad ids are dropped; ids missing from
    /// the vocabulary render as ``<unk>``; every boundary marker
    /// becomes a space.
    pub fn decode(
        &self,
        ids: &[T],
    ) -> String {
        let tokens = self.vocab.tokens();
        let specials = tokens.specials();

        let mut text = String::new();
        for &id in ids {
            if specials.is_framing(id) {
                continue;
            }
            text.push_str(tokens.lookup_str(id).unwrap_or(UNKNOWN_TOKEN));
        }

        if text.contains(self.boundary_marker) {
            text = text.replace(self.boundary_marker, " ");
        }
        text
    }

    /// Decode a batch of id sequences.
    pub fn decode_batch<S: AsRef<[T]>>(
        &self,
        batch: &[S],
    ) -> Vec<String> {
        batch.iter().map(|ids| self.decode(ids.as_ref())).collect()
    }
}
