//! # Sequence Assembler Options

use serde::{Deserialize, Serialize};

use crate::{
    errors::{EmoError, EmoResult},
    vocab::BOUNDARY_MARKER,
};

/// The default truncation length.
pub const DEFAULT_MAX_LENGTH: usize = 128;

/// How sequences shorter than `max_length` are filled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaddingStrategy {
    /// Leave sequences at their natural length.
    #[default]
    None,

    /// Extend every sequence to exactly `max_length` with the pad id.
    MaxLength,
}

/// Options for configuring a [`SequenceAssembler`](crate::encoders::SequenceAssembler).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssemblerOptions {
    /// The maximum sequence length, including the begin and end tokens.
    pub max_length: usize,

    /// The [`PaddingStrategy`].
    pub padding: PaddingStrategy,

    /// Prefix applied to the first subword of every word but the first.
    pub boundary_marker: char,
}

impl Default for AssemblerOptions {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            padding: PaddingStrategy::None,
            boundary_marker: BOUNDARY_MARKER,
        }
    }
}

impl AssemblerOptions {
    /// Check the options.
    ///
    /// ## Returns
    /// [`EmoError::InvalidOptions`] if `max_length` cannot hold
    /// the begin and end tokens.
    pub fn validate(&self) -> EmoResult<()> {
        if self.max_length < 2 {
            return Err(EmoError::InvalidOptions(format!(
                "max_length must be at least 2, got {}",
                self.max_length
            )));
        }
        Ok(())
    }

    /// Get the maximum sequence length.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Set the maximum sequence length.
    pub fn set_max_length(
        &mut self,
        max_length: usize,
    ) {
        self.max_length = max_length;
    }

    /// Set the maximum sequence length and return the options.
    pub fn with_max_length(
        mut self,
        max_length: usize,
    ) -> Self {
        self.set_max_length(max_length);
        self
    }

    /// Get the [`PaddingStrategy`].
    pub fn padding(&self) -> PaddingStrategy {
        self.padding
    }

    /// Set the [`PaddingStrategy`].
    pub fn set_padding(
        &mut self,
        padding: PaddingStrategy,
    ) {
        self.padding = padding;
    }

    /// Set the [`PaddingStrategy`] and return the options.
    pub fn with_padding(
        mut self,
        padding: PaddingStrategy,
    ) -> Self {
        self.set_padding(padding);
        self
    }

    /// Get the boundary marker.
    pub fn boundary_marker(&self) -> char {
        self.boundary_marker
    }

    /// Set the boundary marker.
    pub fn set_boundary_marker(
        &mut self,
        boundary_marker: char,
    ) {
        self.boundary_marker = boundary_marker;
    }

    /// Set the boundary marker and return the options.
    pub fn with_boundary_marker(
        mut self,
        boundary_marker: char,
    ) -> Self {
        self.set_boundary_marker(boundary_marker);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = AssemblerOptions::default();
        assert_eq!(options.max_length(), 128);
        assert_eq!(options.padding(), PaddingStrategy::None);
        assert_eq!(options.boundary_marker(), 'Ġ');
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let options = AssemblerOptions::default()
            .with_max_length(2)
            .with_padding(PaddingStrategy::MaxLength)
            .with_boundary_marker('_');
        assert_eq!(options.max_length(), 2);
        assert_eq!(options.padding(), PaddingStrategy::MaxLength);
        assert_eq!(options.boundary_marker(), '_');
        assert!(options.validate().is_ok());

        let err = options.with_max_length(1).validate().unwrap_err();
        assert!(matches!(err, EmoError::InvalidOptions(_)));
        assert!(err.is_config_error());
    }

    #[test]
    fn test_serde() {
        let options: AssemblerOptions =
            serde_json::from_str(r#"{"max_length": 64, "padding": "max_length"}"#).unwrap();
        assert_eq!(
            options,
            AssemblerOptions::default()
                .with_max_length(64)
                .with_padding(PaddingStrategy::MaxLength)
        );

        assert!(serde_json::from_str::<AssemblerOptions>(r#"{"max_len": 64}"#).is_err());
    }
}
