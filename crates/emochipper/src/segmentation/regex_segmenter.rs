//! # Regex Word Segmenter

use std::sync::LazyLock;

use crate::{
    errors::{EmoError, EmoResult},
    regex::{RegexWrapper, RegexWrapperPattern},
    segmentation::WordSegmenter,
};

/// Runs of letters (with combining marks), runs of digits,
/// and runs of anything else that is not whitespace.
pub const DEFAULT_WORD_PATTERN: &str = r"[\p{L}\p{M}]+|\p{N}+|[^\s\p{L}\p{M}\p{N}]+";

static DEFAULT_WORD_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(DEFAULT_WORD_PATTERN).expect("DEFAULT_WORD_PATTERN is a valid regex")
});

/// Unicode-aware regex word segmenter.
///
/// Every non-empty match of the pattern is a word;
/// text between matches is dropped.
#[derive(Debug, Clone)]
pub struct RegexWordSegmenter {
    regex: RegexWrapper,
}

impl Default for RegexWordSegmenter {
    fn default() -> Self {
        Self {
            regex: DEFAULT_WORD_REGEX.clone().into(),
        }
    }
}

impl RegexWordSegmenter {
    /// Compile a segmenter from a word pattern.
    ///
    /// ## Arguments
    /// * `pattern` - The word pattern; plain strings are [`RegexWrapperPattern::Adaptive`].
    pub fn from_pattern<P>(pattern: P) -> EmoResult<Self>
    where
        P: Into<RegexWrapperPattern>,
    {
        Ok(Self {
            regex: pattern.into().compile()?,
        })
    }

    /// Build a segmenter around an already compiled regex.
    pub fn from_regex<R>(regex: R) -> Self
    where
        R: Into<RegexWrapper>,
    {
        Self {
            regex: regex.into(),
        }
    }

    /// Get the word regex.
    pub fn regex(&self) -> &RegexWrapper {
        &self.regex
    }
}

impl WordSegmenter for RegexWordSegmenter {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self, text, f))
    )]
    fn for_each_word<'t>(
        &self,
        text: &'t str,
        f: &mut dyn FnMut(&'t str),
    ) -> EmoResult<()> {
        self.regex
            .for_each_match(text, |range| {
                if !range.is_empty() {
                    f(&text[range]);
                }
            })
            .map_err(EmoError::Segmentation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pattern() {
        let segmenter = RegexWordSegmenter::default();
        assert!(segmenter.regex().is_basic());

        assert_eq!(
            segmenter.split_words("I feel fantastic today!").unwrap(),
            vec!["I", "feel", "fantastic", "today", "!"]
        );
        assert_eq!(
            segmenter
                .split_words("  caf\u{00e9} na\u{00ef}ve, 2024...?! ")
                .unwrap(),
            vec!["caf\u{00e9}", "na\u{00ef}ve", ",", "2024", "...?!"]
        );
        assert_eq!(
            segmenter.split_words("don't").unwrap(),
            vec!["don", "'", "t"]
        );
        assert!(segmenter.split_words("").unwrap().is_empty());
        assert!(segmenter.split_words("   ").unwrap().is_empty());
    }

    #[test]
    fn test_empty_matches_dropped() {
        let segmenter = RegexWordSegmenter::from_pattern(r"\w*").unwrap();
        assert_eq!(
            segmenter.split_words("ab  cd").unwrap(),
            vec!["ab", "cd"]
        );
    }

    #[test]
    fn test_fancy_pattern() {
        let segmenter = RegexWordSegmenter::from_pattern(r"\w+(?!\d)").unwrap();
        assert!(segmenter.regex().is_fancy());
        assert_eq!(segmenter.split_words("hi yo").unwrap(), vec!["hi", "yo"]);
    }

    #[test]
    fn test_backtrack_limit_is_not_config() {
        let regex = fancy_regex::RegexBuilder::new(r"(?i)(a|b|ab)*(?=c)")
            .backtrack_limit(100_000)
            .build()
            .unwrap();
        let segmenter = RegexWordSegmenter::from_regex(regex);
        assert!(segmenter.regex().is_fancy());

        let err = segmenter
            .split_words("abababababababababababababababababababababababababababab")
            .unwrap_err();
        assert!(matches!(err, EmoError::Segmentation(_)));
        assert!(!err.is_config_error());
    }

    #[test]
    fn test_bad_pattern() {
        let err = RegexWordSegmenter::from_pattern(r"(unclosed").unwrap_err();
        assert!(err.is_config_error());
    }
}
