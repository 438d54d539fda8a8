//! # Word Segmenter Configuration

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    errors::EmoResult,
    segmentation::{
        DEFAULT_WORD_PATTERN,
        RegexWordSegmenter,
        WhitespaceSegmenter,
        WordSegmenter,
    },
};

/// Declarative choice of [`WordSegmenter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub enum SegmenterConfig {
    /// A [`RegexWordSegmenter`] with the given word pattern.
    Regex {
        /// The word pattern.
        pattern: String,
    },

    /// A [`WhitespaceSegmenter`].
    Whitespace,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self::Regex {
            pattern: DEFAULT_WORD_PATTERN.to_string(),
        }
    }
}

impl SegmenterConfig {
    /// Build the configured segmenter.
    ///
    /// ## Returns
    /// A configuration error if the regex pattern does not compile.
    pub fn build(&self) -> EmoResult<Arc<dyn WordSegmenter>> {
        Ok(match self {
            Self::Regex { pattern } if pattern == DEFAULT_WORD_PATTERN => {
                Arc::new(RegexWordSegmenter::default())
            }
            Self::Regex { pattern } => Arc::new(RegexWordSegmenter::from_pattern(pattern.as_str())?),
            Self::Whitespace => Arc::new(WhitespaceSegmenter),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde() {
        let config: SegmenterConfig = serde_json::from_str(r#""whitespace""#).unwrap();
        assert_eq!(config, SegmenterConfig::Whitespace);

        let config: SegmenterConfig =
            serde_json::from_str(r#"{"regex": {"pattern": "\\w+"}}"#).unwrap();
        assert_eq!(
            config,
            SegmenterConfig::Regex {
                pattern: r"\w+".to_string()
            }
        );

        assert!(serde_json::from_str::<SegmenterConfig>(r#""sentencepiece""#).is_err());
    }

    #[test]
    fn test_build() {
        let segmenter = SegmenterConfig::default().build().unwrap();
        assert_eq!(
            segmenter.split_words("so happy!").unwrap(),
            vec!["so", "happy", "!"]
        );

        let segmenter = SegmenterConfig::Whitespace.build().unwrap();
        assert_eq!(
            segmenter.split_words("so happy!").unwrap(),
            vec!["so", "happy!"]
        );

        let err = SegmenterConfig::Regex {
            pattern: "[".to_string(),
        }
        .build()
        .err()
        .unwrap();
        assert!(err.is_config_error());
    }
}
