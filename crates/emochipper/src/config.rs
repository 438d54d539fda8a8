//! # Emotion Configuration
//!
//! [`EmotionConfig`] is the declarative form of an [`EmotionPipeline`]:
//!
//! ```json
//! {
//!   "tokenizer": {
//!     "max_length": 128,
//!     "padding": "max_length",
//!     "boundary_marker": "Ġ",
//!     "segmenter": "whitespace"
//!   },
//!   "classifier": {
//!     "policy": "all_qualifying",
//!     "activation": "sigmoid"
//!   }
//! }
//! ```
//!
//! Every field is optional; unknown fields are rejected.

use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
    sync::Arc,
};

use serde::{Deserialize, Serialize};

use crate::{
    classify::{Activation, DecisionPolicy, LabelSet, ThresholdClassifier, ThresholdTable},
    errors::EmoResult,
    inference::InferenceEngine,
    pipeline::EmotionPipeline,
    tokenizer::TokenizerOptions,
    types::TokenType,
    vocab::BpeVocab,
};

/// Options for the classification stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifierOptions {
    /// The [`DecisionPolicy`].
    pub policy: DecisionPolicy,

    /// The [`Activation`] applied to engine outputs.
    pub activation: Activation,
}

/// Tokenizer and classifier configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmotionConfig {
    /// Tokenizer options.
    pub tokenizer: TokenizerOptions,

    /// Classifier options.
    pub classifier: ClassifierOptions,
}

impl EmotionConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_reader<R: Read>(reader: R) -> EmoResult<Self> {
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON configuration string.
    pub fn from_json_str(json: &str) -> EmoResult<Self> {
        Self::from_json_reader(json.as_bytes())
    }

    /// Load and validate a JSON configuration file.
    pub fn load_path<P: AsRef<Path>>(path: P) -> EmoResult<Self> {
        Self::from_json_reader(BufReader::new(File::open(path)?))
    }

    /// Check the option values.
    pub fn validate(&self) -> EmoResult<()> {
        self.tokenizer.assembler_options().validate()
    }

    /// Build a pipeline.
    ///
    /// ## Arguments
    /// * `vocab` - The tokenizer vocabulary.
    /// * `labels` - The model's label set.
    /// * `thresholds` - One threshold per label.
    /// * `engine` - The inference engine.
    pub fn build_pipeline<T, E>(
        &self,
        vocab: Arc<BpeVocab<T>>,
        labels: Arc<LabelSet>,
        thresholds: Arc<ThresholdTable>,
        engine: E,
    ) -> EmoResult<EmotionPipeline<T, E>>
    where
        T: TokenType,
        E: InferenceEngine<T>,
    {
        let tokenizer = self.tokenizer.build(vocab)?;
        let classifier = ThresholdClassifier::new(labels, thresholds, self.classifier.policy)?;
        Ok(EmotionPipeline::new(tokenizer, classifier, engine)
            .with_activation(self.classifier.activation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{encoders::PaddingStrategy, segmentation::SegmenterConfig};

    #[test]
    fn test_defaults() {
        let config = EmotionConfig::from_json_str("{}").unwrap();
        assert_eq!(config, EmotionConfig::default());
        assert_eq!(config.tokenizer.max_length, 128);
        assert_eq!(config.classifier.policy, DecisionPolicy::BestQualifying);
        assert_eq!(config.classifier.activation, Activation::Sigmoid);
    }

    #[test]
    fn test_full() {
        let config = EmotionConfig::from_json_str(
            r#"{
                "tokenizer": {
                    "max_length": 64,
                    "padding": "max_length",
                    "boundary_marker": "_",
                    "segmenter": "whitespace"
                },
                "classifier": {"policy": "all_qualifying", "activation": "identity"}
            }"#,
        )
        .unwrap();

        assert_eq!(config.tokenizer.max_length, 64);
        assert_eq!(config.tokenizer.padding, PaddingStrategy::MaxLength);
        assert_eq!(config.tokenizer.boundary_marker, '_');
        assert_eq!(config.tokenizer.segmenter, SegmenterConfig::Whitespace);
        assert_eq!(config.classifier.policy, DecisionPolicy::AllQualifying);
        assert_eq!(config.classifier.activation, Activation::Identity);
    }

    #[test]
    fn test_fails_fast() {
        let err = EmotionConfig::from_json_str(r#"{"tokenizer": {"max_length": 1}}"#).unwrap_err();
        assert!(err.is_config_error());

        let err = EmotionConfig::from_json_str(r#"{"classifer": {}}"#).unwrap_err();
        assert!(err.is_config_error());

        let err = EmotionConfig::from_json_str(r#"{"classifier": {"policy": "top_k"}}"#).unwrap_err();
        assert!(err.is_config_error());
    }
}
