//! # Tokenizer Options

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    decoders::TokenDecoder,
    encoders::{AssemblerOptions, PaddingStrategy, SequenceAssembler},
    errors::EmoResult,
    segmentation::SegmenterConfig,
    tokenizer::Tokenizer,
    types::TokenType,
    vocab::BpeVocab,
};

/// Options for configuring a [`Tokenizer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TokenizerOptions {
    /// The maximum sequence length, including the begin and end tokens.
    pub max_length: usize,

    /// The [`PaddingStrategy`].
    pub padding: PaddingStrategy,

    /// Prefix applied to the first subword of every word but the first.
    pub boundary_marker: char,

    /// The word segmenter.
    pub segmenter: SegmenterConfig,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self::from_assembler_options(AssemblerOptions::default())
    }
}

impl TokenizerOptions {
    /// Default segmentation with the given assembler options.
    pub fn from_assembler_options(options: AssemblerOptions) -> Self {
        Self {
            max_length: options.max_length,
            padding: options.padding,
            boundary_marker: options.boundary_marker,
            segmenter: SegmenterConfig::default(),
        }
    }

    /// The assembler part of these options.
    pub fn assembler_options(&self) -> AssemblerOptions {
        AssemblerOptions {
            max_length: self.max_length,
            padding: self.padding,
            boundary_marker: self.boundary_marker,
        }
    }

    /// Set the maximum sequence length and return the options.
    pub fn with_max_length(
        mut self,
        max_length: usize,
    ) -> Self {
        self.max_length = max_length;
        self
    }

    /// Set the [`PaddingStrategy`] and return the options.
    pub fn with_padding(
        mut self,
        padding: PaddingStrategy,
    ) -> Self {
        self.padding = padding;
        self
    }

    /// Get the segmenter configuration.
    pub fn segmenter(&self) -> &SegmenterConfig {
        &self.segmenter
    }

    /// Set the segmenter configuration.
    pub fn set_segmenter(
        &mut self,
        segmenter: SegmenterConfig,
    ) {
        self.segmenter = segmenter;
    }

    /// Set the segmenter configuration and return the options.
    pub fn with_segmenter(
        mut self,
        segmenter: SegmenterConfig,
    ) -> Self {
        self.set_segmenter(segmenter);
        self
    }

    /// Build a [`Tokenizer`] for the given vocab.
    ///
    /// ## Returns
    /// A configuration error for invalid options or an uncompilable segmenter pattern.
    pub fn build<T: TokenType>(
        &self,
        vocab: Arc<BpeVocab<T>>,
    ) -> EmoResult<Tokenizer<T>> {
        let options = self.assembler_options();
        let assembler = SequenceAssembler::new(vocab.clone(), self.segmenter.build()?, options)?;
        let decoder = TokenDecoder::new(vocab).with_boundary_marker(options.boundary_marker());
        Ok(Tokenizer::new(assembler, decoder))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::testing::build_test_vocab;

    #[test]
    fn test_serde_defaults() {
        let options: TokenizerOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, TokenizerOptions::default());
        assert_eq!(options.assembler_options(), AssemblerOptions::default());

        let options: TokenizerOptions =
            serde_json::from_str(r#"{"max_length": 32, "segmenter": "whitespace"}"#).unwrap();
        assert_eq!(options.max_length, 32);
        assert_eq!(options.segmenter(), &SegmenterConfig::Whitespace);

        assert!(serde_json::from_str::<TokenizerOptions>(r#"{"truncate": true}"#).is_err());
    }

    #[test]
    fn test_build_rejects_bad_options() {
        let vocab = Arc::new(build_test_vocab::<u32>());

        let err = TokenizerOptions::default()
            .with_max_length(1)
            .build(vocab.clone())
            .unwrap_err();
        assert!(err.is_config_error());

        let err = TokenizerOptions::default()
            .with_segmenter(SegmenterConfig::Regex {
                pattern: "(".to_string(),
            })
            .build(vocab)
            .unwrap_err();
        assert!(err.is_config_error());
    }
}
