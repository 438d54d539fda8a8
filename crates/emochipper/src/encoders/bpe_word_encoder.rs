//! # BPE Word Encoder

use std::sync::Arc;

use crate::{
    encoders::WordCache,
    types::TokenType,
    vocab::{BOUNDARY_MARKER, BpeVocab, MergeRankTable},
};

/// Split a word into subwords by greedy ranked merges.
///
/// Starts from the characters of `word`; repeatedly finds the
/// lowest-ranked adjacent pair and merges every non-overlapping
/// occurrence of that exact pair, scanning left to right,
/// until no adjacent pair is ranked.
///
/// ## Returns
/// The ordered subwords; their concatenation is `word`.
pub fn merge_word(
    merges: &MergeRankTable,
    word: &str,
) -> Vec<String> {
    let mut parts: Vec<String> = word.chars().map(String::from).collect();

    while parts.len() > 1 {
        let Some((idx, _rank)) = merges.best_pair(&parts) else {
            break;
        };
        let left = parts[idx].clone();
        let right = parts[idx + 1].clone();

        let mut merged = Vec::with_capacity(parts.len() - 1);
        let mut iter = parts.into_iter().peekable();
        while let Some(part) = iter.next() {
            if part == left && iter.peek() == Some(&right) {
                iter.next();
                merged.push(format!("{left}{right}"));
            } else {
                merged.push(part);
            }
        }
        parts = merged;
    }

    parts
}

/// Encodes words into token ids using a shared [`BpeVocab`].
///
/// Holds a private [`WordCache`]; an encoder is used by one caller at a time.
/// [`BpeWordEncoder::fork`] gives an independent encoder for concurrent work.
#[derive(Debug, Clone)]
pub struct BpeWordEncoder<T: TokenType> {
    vocab: Arc<BpeVocab<T>>,
    boundary_marker: char,
    cache: WordCache,
}

impl<T: TokenType> BpeWordEncoder<T> {
    /// Create an encoder with an empty cache and the default boundary marker.
    pub fn new(vocab: Arc<BpeVocab<T>>) -> Self {
        Self {
            vocab,
            boundary_marker: BOUNDARY_MARKER,
            cache: WordCache::new(),
        }
    }

    /// Replace the boundary marker and return the encoder.
    pub fn with_boundary_marker(
        mut self,
        marker: char,
    ) -> Self {
        self.boundary_marker = marker;
        self
    }

    /// Get the shared vocabulary.
    pub fn vocab(&self) -> &Arc<BpeVocab<T>> {
        &self.vocab
    }

    /// Get the boundary marker.
    pub fn boundary_marker(&self) -> char {
        self.boundary_marker
    }

    /// Get the word cache.
    pub fn cache(&self) -> &WordCache {
        &self.cache
    }

    /// Drop all cached decompositions.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// A new encoder sharing this vocabulary and marker, with an empty cache.
    pub fn fork(&self) -> Self {
        Self {
            vocab: self.vocab.clone(),
            boundary_marker: self.boundary_marker,
            cache: WordCache::new(),
        }
    }

    /// Split a single word into subwords, consulting the cache.
    ///
    /// No boundary marker is applied.
    pub fn encode_word(
        &mut self,
        word: &str,
    ) -> Vec<String> {
        let merges = self.vocab.merges();
        self.cache
            .get_or_insert_with(word, || merge_word(merges, word))
            .to_vec()
    }

    /// Encode the words of one text, appending ids.
    ///
    /// The first subword of every word after the first
    /// is looked up with the boundary marker prefixed.
    /// Subwords missing from the vocabulary become the unknown id.
    ///
    /// ## Arguments
    /// * `words` - The words of the text, in order.
    /// * `ids` - The target buffer to append to.
    pub fn encode_words_to_ids<'a, I>(
        &mut self,
        words: I,
        ids: &mut Vec<T>,
    ) where
        I: IntoIterator<Item = &'a str>,
    {
        let tokens = self.vocab.tokens();
        let merges = self.vocab.merges();
        let mut marked = String::new();

        for (word_index, word) in words.into_iter().enumerate() {
            let subwords = self
                .cache
                .get_or_insert_with(word, || merge_word(merges, word));

            for (subword_index, subword) in subwords.iter().enumerate() {
                if word_index > 0 && subword_index == 0 {
                    marked.clear();
                    marked.push(self.boundary_marker);
                    marked.push_str(subword);
                    ids.push(tokens.token_or_unknown(&marked));
                } else {
                    ids.push(tokens.token_or_unknown(subword));
                }
            }
        }
    }
}
