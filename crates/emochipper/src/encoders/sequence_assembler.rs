//! # Sequence Assembler

use std::sync::Arc;

use crate::{
    encoders::{AssemblerOptions, BpeWordEncoder, EncodedSequence, PaddingStrategy},
    errors::EmoResult,
    segmentation::WordSegmenter,
    types::TokenType,
    vocab::BpeVocab,
};

/// Turns raw text into a framed, truncated, optionally padded [`EncodedSequence`].
///
/// Steps:
/// 1. segment the text into words,
/// 2. encode the words ([`BpeWordEncoder::encode_words_to_ids`]),
/// 3. frame the ids with the begin and end ids,
/// 4. truncate to `max_length`, forcing the end id into the last slot,
/// 5. pad to `max_length` under [`PaddingStrategy::MaxLength`].
#[derive(Clone)]
pub struct SequenceAssembler<T: TokenType> {
    encoder: BpeWordEncoder<T>,
    segmenter: Arc<dyn WordSegmenter>,
    options: AssemblerOptions,
}

impl<T: TokenType> std::fmt::Debug for SequenceAssembler<T> {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("SequenceAssembler")
            .field("encoder", &self.encoder)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<T: TokenType> SequenceAssembler<T> {
    /// Create a new assembler.
    ///
    /// ## Arguments
    /// * `vocab` - The shared vocabulary.
    /// * `segmenter` - The word segmenter.
    /// * `options` - The assembly options.
    ///
    /// ## Returns
    /// [`EmoError::InvalidOptions`](crate::EmoError::InvalidOptions) if the options are invalid.
    pub fn new(
        vocab: Arc<BpeVocab<T>>,
        segmenter: Arc<dyn WordSegmenter>,
        options: AssemblerOptions,
    ) -> EmoResult<Self> {
        options.validate()?;
        let encoder = BpeWordEncoder::new(vocab).with_boundary_marker(options.boundary_marker());
        Ok(Self {
            encoder,
            segmenter,
            options,
        })
    }

    /// Get the options.
    pub fn options(&self) -> &AssemblerOptions {
        &self.options
    }

    /// Get the word segmenter.
    pub fn segmenter(&self) -> &Arc<dyn WordSegmenter> {
        &self.segmenter
    }

    /// Get the word encoder.
    pub fn encoder(&self) -> &BpeWordEncoder<T> {
        &self.encoder
    }

    /// Get the shared vocabulary.
    pub fn vocab(&self) -> &Arc<BpeVocab<T>> {
        self.encoder.vocab()
    }

    /// A new assembler with the same configuration and an empty cache.
    pub fn fork(&self) -> Self {
        Self {
            encoder: self.encoder.fork(),
            segmenter: self.segmenter.clone(),
            options: self.options,
        }
    }

    /// Assemble one text.
    ///
    /// ## Returns
    /// The sequence; fails only with [`EmoError::Segmentation`](crate::EmoError::Segmentation).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn assemble(
        &mut self,
        text: &str,
    ) -> EmoResult<EncodedSequence<T>> {
        let specials = *self.encoder.vocab().specials();
        let max_length = self.options.max_length();

        let words = self.segmenter.split_words(text)?;

        let mut ids = Vec::with_capacity(max_length);
        ids.push(specials.begin);
        self.encoder
            .encode_words_to_ids(words.iter().copied(), &mut ids);
        ids.push(specials.end);

        if ids.len() > max_length {
            log::debug!(
                "truncating sequence of {} tokens to {max_length}",
                ids.len()
            );
            ids.truncate(max_length);
            if let Some(last) = ids.last_mut() {
                *last = specials.end;
            }
        }

        if self.options.padding() == PaddingStrategy::MaxLength {
            ids.resize(max_length, specials.pad);
        }

        Ok(EncodedSequence::from_ids(ids, specials.pad))
    }

    /// Assemble a batch of texts, in order.
    pub fn assemble_batch<S: AsRef<str>>(
        &mut self,
        batch: &[S],
    ) -> EmoResult<Vec<EncodedSequence<T>>> {
        batch
            .iter()
            .map(|text| self.assemble(text.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        segmentation::{RegexWordSegmenter, WhitespaceSegmenter},
        vocab::testing::build_test_vocab,
    };

    fn test_assembler(options: AssemblerOptions) -> SequenceAssembler<u32> {
        SequenceAssembler::new(
            Arc::new(build_test_vocab()),
            Arc::new(RegexWordSegmenter::default()),
            options,
        )
        .unwrap()
    }

    #[test]
    fn test_padded() {
        let mut assembler = test_assembler(
            AssemblerOptions::default()
                .with_max_length(6)
                .with_padding(PaddingStrategy::MaxLength),
        );

        let seq = assembler.assemble("I feel good").unwrap();
        assert_eq!(seq.ids, vec![0, 4, 5, 6, 1, 2]);
        assert_eq!(seq.attention_mask, vec![1, 1, 1, 1, 1, 0]);
        assert_eq!(seq.real_len(), 5);
    }

    #[test]
    fn test_unpadded() {
        let mut assembler = test_assembler(AssemblerOptions::default());
        let seq = assembler.assemble("hello world").unwrap();
        assert_eq!(seq.ids, vec![0, 15, 16, 1]);
        assert_eq!(seq.attention_mask, vec![1, 1, 1, 1]);
    }

    #[test]
    fn test_empty_text() {
        let mut assembler = test_assembler(
            AssemblerOptions::default()
                .with_max_length(4)
                .with_padding(PaddingStrategy::MaxLength),
        );
        let seq = assembler.assemble("   ").unwrap();
        assert_eq!(seq.ids, vec![0, 1, 2, 2]);
        assert_eq!(seq.attention_mask, vec![1, 1, 0, 0]);
    }

    #[test]
    fn test_truncation() {
        let mut assembler = test_assembler(AssemblerOptions::default().with_max_length(4));
        let seq = assembler.assemble("I feel so happy today").unwrap();
        assert_eq!(seq.ids, vec![0, 4, 5, 1]);

        let mut assembler = test_assembler(AssemblerOptions::default().with_max_length(2));
        let seq = assembler.assemble("I feel so happy today").unwrap();
        assert_eq!(seq.ids, vec![0, 1]);
    }

    #[test]
    fn test_exact_fit_is_not_truncated() {
        let mut assembler = test_assembler(AssemblerOptions::default().with_max_length(5));
        let seq = assembler.assemble("I feel good").unwrap();
        assert_eq!(seq.ids, vec![0, 4, 5, 6, 1]);
    }

    #[test]
    fn test_punctuation_words() {
        let mut assembler = test_assembler(AssemblerOptions::default());
        let seq = assembler.assemble("so happy!").unwrap();
        // "so" is the first word, and is not in the vocabulary unmarked.
        assert_eq!(seq.ids, vec![0, 3, 8, 10, 1]);
    }

    #[test]
    fn test_whitespace_segmenter() {
        let mut assembler = SequenceAssembler::<u32>::new(
            Arc::new(build_test_vocab()),
            Arc::new(WhitespaceSegmenter),
            AssemblerOptions::default(),
        )
        .unwrap();
        let seq = assembler.assemble("I feel good!").unwrap();
        // "good!" merges to ["good", "!"]; only the first subword is marked.
        assert_eq!(seq.ids, vec![0, 4, 5, 6, 9, 1]);
    }

    #[test]
    fn test_invalid_options() {
        let err = SequenceAssembler::<u32>::new(
            Arc::new(build_test_vocab()),
            Arc::new(WhitespaceSegmenter),
            AssemblerOptions::default().with_max_length(0),
        )
        .unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_batch_and_fork() {
        let mut assembler = test_assembler(AssemblerOptions::default());
        let batch = ["I feel good", "hello world", ""];
        let seqs = assembler.assemble_batch(&batch).unwrap();
        assert_eq!(seqs.len(), 3);
        assert_eq!(seqs[1].ids, vec![0, 15, 16, 1]);
        assert_eq!(seqs[2].ids, vec![0, 1]);

        let mut forked = assembler.fork();
        assert!(forked.encoder().cache().is_empty());
        assert_eq!(forked.assemble_batch(&batch).unwrap(), seqs);
    }
}
