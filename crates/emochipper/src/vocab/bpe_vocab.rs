//! # BPE Vocabulary

use crate::{
    types::TokenType,
    vocab::{MergeRankTable, SpecialTokens, TokenVocab},
};

/// The immutable configuration of a BPE tokenizer.
///
/// Contains:
/// * `tokens` - the bijective [`TokenVocab`] (including special tokens),
/// * `merges` - the [`MergeRankTable`].
///
/// Built once, then shared by `Arc` across any number of encoders
/// and decoders; no synchronization is needed to read it.
#[derive(Debug, Clone, PartialEq)]
pub struct BpeVocab<T: TokenType> {
    tokens: TokenVocab<T>,
    merges: MergeRankTable,
}

impl<T: TokenType> BpeVocab<T> {
    /// Combine a token vocabulary and a merge table.
    pub fn init(
        tokens: TokenVocab<T>,
        merges: MergeRankTable,
    ) -> Self {
        log::info!(
            "bpe vocabulary: {} tokens, {} merges",
            tokens.len(),
            merges.len()
        );
        Self { tokens, merges }
    }

    /// Get the token vocabulary.
    pub fn tokens(&self) -> &TokenVocab<T> {
        &self.tokens
    }

    /// Get the merge table.
    pub fn merges(&self) -> &MergeRankTable {
        &self.merges
    }

    /// Get the special token ids.
    pub fn specials(&self) -> &SpecialTokens<T> {
        self.tokens.specials()
    }
}
