//! # Word Segmenter Trait

use crate::errors::EmoResult;

/// Splits raw text into an ordered sequence of word units.
///
/// Implementations must never yield an empty word.
pub trait WordSegmenter: Send + Sync {
    /// Visit each word of `text`, in order.
    ///
    /// ## Arguments
    /// * `text` - The text to split.
    /// * `f` - Called once per word; words borrow from `text`.
    fn for_each_word<'t>(
        &self,
        text: &'t str,
        f: &mut dyn FnMut(&'t str),
    ) -> EmoResult<()>;

    /// Split `text` into words.
    ///
    /// ## Returns
    /// The words of `text`, in order.
    fn split_words<'t>(
        &self,
        text: &'t str,
    ) -> EmoResult<Vec<&'t str>> {
        let mut words = Vec::new();
        self.for_each_word(text, &mut |word| words.push(word))?;
        Ok(words)
    }
}
