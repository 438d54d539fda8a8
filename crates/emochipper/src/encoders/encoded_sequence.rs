//! # Encoded Sequence

use serde::Serialize;

use crate::types::TokenType;

/// Model-ready token ids with their attention mask.
///
/// Serializes as ``{"input_ids": [...], "attention_mask": [...]}``.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EncodedSequence<T: TokenType> {
    /// The token ids; begins with the begin id,
    /// and the last non-pad id is the end id.
    #[serde(rename = "input_ids")]
    pub ids: Vec<T>,

    /// ``1`` where the id is not the pad id, else ``0``.
    pub attention_mask: Vec<u8>,
}

impl<T: TokenType> EncodedSequence<T> {
    /// Build a sequence, deriving the mask from the pad id.
    pub fn from_ids(
        ids: Vec<T>,
        pad: T,
    ) -> Self {
        let attention_mask = ids.iter().map(|&id| u8::from(id != pad)).collect();
        Self {
            ids,
            attention_mask,
        }
    }

    /// The sequence length, padding included.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Is the sequence empty?
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The number of non-pad positions.
    pub fn real_len(&self) -> usize {
        self.attention_mask.iter().filter(|&&m| m != 0).count()
    }
}
