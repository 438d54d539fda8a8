//! # Emotion Pipeline
//!
//! Text in, [`Prediction`] out:
//! assemble, run the [`InferenceEngine`], activate, threshold.

use crate::{
    classify::{Activation, Prediction, ThresholdClassifier},
    encoders::EncodedSequence,
    errors::EmoResult,
    inference::InferenceEngine,
    tokenizer::Tokenizer,
    types::TokenType,
};

/// End-to-end emotion classification over an external engine.
#[derive(Debug, Clone)]
pub struct EmotionPipeline<T: TokenType, E: InferenceEngine<T>> {
    tokenizer: Tokenizer<T>,
    classifier: ThresholdClassifier,
    activation: Activation,
    engine: E,
}

impl<T, E> EmotionPipeline<T, E>
where
    T: TokenType,
    E: InferenceEngine<T>,
{
    /// Create a pipeline with [`Activation::Sigmoid`].
    pub fn new(
        tokenizer: Tokenizer<T>,
        classifier: ThresholdClassifier,
        engine: E,
    ) -> Self {
        Self {
            tokenizer,
            classifier,
            activation: Activation::default(),
            engine,
        }
    }

    /// Replace the activation and return the pipeline.
    pub fn with_activation(
        mut self,
        activation: Activation,
    ) -> Self {
        self.activation = activation;
        self
    }

    /// Get the tokenizer.
    pub fn tokenizer(&self) -> &Tokenizer<T> {
        &self.tokenizer
    }

    /// Get the classifier.
    pub fn classifier(&self) -> &ThresholdClassifier {
        &self.classifier
    }

    /// Get the activation.
    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Get the engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Get the engine, mutably.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Score an already assembled sequence.
    ///
    /// ## Returns
    /// The activated scores, one per label.
    pub fn score_sequence(
        &mut self,
        seq: &EncodedSequence<T>,
    ) -> EmoResult<Vec<f32>> {
        let mut scores = self.engine.infer(&seq.ids, &seq.attention_mask)?;
        self.activation.apply_all(&mut scores);
        Ok(scores)
    }

    /// Score one text.
    pub fn scores(
        &mut self,
        text: &str,
    ) -> EmoResult<Vec<f32>> {
        let seq = self.tokenizer.assemble(text)?;
        self.score_sequence(&seq)
    }

    /// Classify one text.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn predict(
        &mut self,
        text: &str,
    ) -> EmoResult<Prediction> {
        let scores = self.scores(text)?;
        self.classifier.classify(&scores)
    }

    /// Classify a batch of texts, in order.
    pub fn predict_batch<S: AsRef<str>>(
        &mut self,
        batch: &[S],
    ) -> EmoResult<Vec<Prediction>> {
        batch
            .iter()
            .map(|text| self.predict(text.as_ref()))
            .collect()
    }
}
