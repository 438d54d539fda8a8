//! # Parallel Assembler

use crate::{
    encoders::{EncodedSequence, SequenceAssembler},
    errors::EmoResult,
    types::TokenType,
};

/// Batch-Level Parallel Assembler Wrapper.
///
/// Each rayon worker assembles with its own forked [`SequenceAssembler`];
/// results are returned in batch order.
#[derive(Debug, Clone)]
pub struct ParallelRayonAssembler<T: TokenType> {
    /// Template assembler; forked per worker.
    pub inner: SequenceAssembler<T>,
}

impl<T: TokenType> ParallelRayonAssembler<T> {
    /// Create a new parallel assembler.
    ///
    /// ## Arguments
    /// * `inner` - The assembler to fork for each worker.
    pub fn new(inner: SequenceAssembler<T>) -> Self {
        Self { inner }
    }

    /// Assemble a batch of texts in parallel.
    ///
    /// ## Returns
    /// The sequences, in batch order; the first error if any text fails.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, batch)))]
    pub fn assemble_batch<S>(
        &self,
        batch: &[S],
    ) -> EmoResult<Vec<EncodedSequence<T>>>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        batch
            .par_iter()
            .map_init(
                || self.inner.fork(),
                |assembler, text| assembler.assemble(text.as_ref()),
            )
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        encoders::{AssemblerOptions, PaddingStrategy},
        segmentation::RegexWordSegmenter,
        vocab::testing::build_test_vocab,
    };

    #[test]
    fn test_matches_sequential() {
        let mut sequential = SequenceAssembler::<u16>::new(
            Arc::new(build_test_vocab()),
            Arc::new(RegexWordSegmenter::default()),
            AssemblerOptions::default()
                .with_max_length(6)
                .with_padding(PaddingStrategy::MaxLength),
        )
        .unwrap();
        let parallel = ParallelRayonAssembler::new(sequential.fork());

        let batch: Vec<String> = (0..64)
            .map(|i| match i % 4 {
                0 => "I feel good".to_string(),
                1 => "hello world!".to_string(),
                2 => "I feel so happy today".to_string(),
                _ => String::new(),
            })
            .collect();

        let expected = sequential.assemble_batch(&batch).unwrap();
        assert_eq!(parallel.assemble_batch(&batch).unwrap(), expected);
        assert_eq!(expected[0].ids, vec![0, 4, 5, 6, 1, 2]);
    }
}
