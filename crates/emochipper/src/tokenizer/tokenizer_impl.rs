//! # Tokenizer

use std::sync::Arc;

use crate::{
    decoders::TokenDecoder,
    encoders::{EncodedSequence, SequenceAssembler},
    errors::EmoResult,
    types::TokenType,
    vocab::BpeVocab,
};

/// Unified Tokenizer.
///
/// Combines a [`SequenceAssembler`] and a [`TokenDecoder`].
#[derive(Debug, Clone)]
pub struct Tokenizer<T: TokenType> {
    assembler: SequenceAssembler<T>,
    decoder: TokenDecoder<T>,
}

impl<T: TokenType> Tokenizer<T> {
    /// Create a new tokenizer.
    pub fn new(
        assembler: SequenceAssembler<T>,
        decoder: TokenDecoder<T>,
    ) -> Self {
        Self { assembler, decoder }
    }

    /// Get the shared vocabulary.
    pub fn vocab(&self) -> &Arc<BpeVocab<T>> {
        self.assembler.vocab()
    }

    /// Get the assembler.
    pub fn assembler(&self) -> &SequenceAssembler<T> {
        &self.assembler
    }

    /// Get the decoder.
    pub fn decoder(&self) -> &TokenDecoder<T> {
        &self.decoder
    }

    /// A new tokenizer with the same configuration and an empty word cache.
    pub fn fork(&self) -> Self {
        Self {
            assembler: self.assembler.fork(),
            decoder: self.decoder.clone(),
        }
    }

    /// Assemble one text.
    pub fn assemble(
        &mut self,
        text: &str,
    ) -> EmoResult<EncodedSequence<T>> {
        self.assembler.assemble(text)
    }

    /// Assemble a batch of texts, in order.
    pub fn assemble_batch<S: AsRef<str>>(
        &mut self,
        batch: &[S],
    ) -> EmoResult<Vec<EncodedSequence<T>>> {
        self.assembler.assemble_batch(batch)
    }

    /// Assemble a batch of texts in parallel, in order.
    #[cfg(feature = "rayon")]
    pub fn par_assemble_batch<S: AsRef<str> + Sync>(
        &self,
        batch: &[S],
    ) -> EmoResult<Vec<EncodedSequence<T>>> {
        crate::rayon::ParallelRayonAssembler::new(self.assembler.fork()).assemble_batch(batch)
    }

    /// Decode ids to text.
    pub fn decode(
        &self,
        ids: &[T],
    ) -> String {
        self.decoder.decode(ids)
    }

    /// Decode a batch of id sequences.
    pub fn decode_batch<S: AsRef<[T]>>(
        &self,
        batch: &[S],
    ) -> Vec<String> {
        self.decoder.decode_batch(batch)
    }
}
