//! # Inference Engine Seam
//!
//! Model execution is external; an [`InferenceEngine`] takes one
//! assembled sequence and returns one raw score per label.
//!
//! Closures of the right shape are engines:
//!
//! ```rust
//! use emochipper::{EmoResult, inference::InferenceEngine};
//!
//! let mut engine = |ids: &[u32], _mask: &[u8]| -> EmoResult<Vec<f32>> {
//!     Ok(vec![ids.len() as f32, 0.0])
//! };
//! let ids: &[u32] = &[0, 4, 1];
//! assert_eq!(engine.infer(ids, &[1, 1, 1]).unwrap(), vec![3.0, 0.0]);
//! ```

use crate::{errors::EmoResult, types::TokenType};

/// Runs a sequence classification model on a batch of one.
pub trait InferenceEngine<T: TokenType> {
    /// Score one sequence.
    ///
    /// ## Arguments
    /// * `ids` - The token ids.
    /// * `attention_mask` - The mask; same length as `ids`.
    ///
    /// ## Returns
    /// One raw output per label, in label order;
    /// engine failures as [`EmoError::Inference`](crate::EmoError::Inference).
    fn infer(
        &mut self,
        ids: &[T],
        attention_mask: &[u8],
    ) -> EmoResult<Vec<f32>>;
}

impl<T, F> InferenceEngine<T> for F
where
    T: TokenType,
    F: FnMut(&[T], &[u8]) -> EmoResult<Vec<f32>>,
{
    fn infer(
        &mut self,
        ids: &[T],
        attention_mask: &[u8],
    ) -> EmoResult<Vec<f32>> {
        self(ids, attention_mask)
    }
}
