//! # Whitespace Segmenter

use crate::{errors::EmoResult, segmentation::WordSegmenter};

/// Splits text on unicode whitespace only.
///
/// Punctuation stays attached to its neighbouring word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WhitespaceSegmenter;

impl WordSegmenter for WhitespaceSegmenter {
    fn for_each_word<'t>(
        &self,
        text: &'t str,
        f: &mut dyn FnMut(&'t str),
    ) -> EmoResult<()> {
        text.split_whitespace().for_each(f);
        Ok(())
    }
}
