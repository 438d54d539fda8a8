//! # Word Decomposition Cache

use crate::types::{EmoHashMap, hash_map_new};

/// Memoizes raw word to subword decompositions.
///
/// Entries are never invalidated; clearing only costs recomputation.
#[derive(Debug, Clone, Default)]
pub struct WordCache {
    entries: EmoHashMap<String, Vec<String>>,
    hits: u64,
    misses: u64,
}

impl WordCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: hash_map_new(),
            hits: 0,
            misses: 0,
        }
    }

    /// The number of cached words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the cache empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The number of lookups served from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// The number of lookups which had to compute a decomposition.
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Look up a cached decomposition without touching the counters.
    pub fn get(
        &self,
        word: &str,
    ) -> Option<&[String]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    /// Get the decomposition of `word`, computing and storing it on a miss.
    ///
    /// ## Arguments
    /// * `word` - The raw word.
    /// * `compute` - Produces the decomposition on a miss.
    pub fn get_or_insert_with<F>(
        &mut self,
        word: &str,
        compute: F,
    ) -> &[String]
    where
        F: FnOnce() -> Vec<String>,
    {
        if self.entries.contains_key(word) {
            self.hits += 1;
        } else {
            self.misses += 1;
            log::trace!("word cache miss {word:?}");
            self.entries.insert(word.to_string(), compute());
        }
        self.get(word).unwrap_or_default()
    }

    /// Drop all entries and reset the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}
