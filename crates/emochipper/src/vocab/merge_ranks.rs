//! # Merge Rank Table ``{ (String, String) -> rank }``

use crate::{
    errors::{EmoError, EmoResult},
    types::{EmoHashMap, hash_map_new},
};

/// Immutable BPE merge priorities.
///
/// Each ordered pair of adjacent subword strings maps to its rank,
/// the position of the pair in the source merge list.
/// Lower ranks merge first; pairs absent from the table never merge.
///
/// Pairs are stored as ``left -> right -> rank`` so that lookups
/// borrow the candidate strings rather than building a joined key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeRankTable {
    ranks: EmoHashMap<String, EmoHashMap<String, usize>>,
    len: usize,
}

impl MergeRankTable {
    /// Build a table from merge pairs in priority order.
    ///
    /// The first pair has rank 0.
    ///
    /// ## Returns
    /// [`EmoError::DuplicateMerge`] if a pair is listed twice.
    pub fn from_pairs<I, L, R>(pairs: I) -> EmoResult<Self>
    where
        I: IntoIterator<Item = (L, R)>,
        L: Into<String>,
        R: Into<String>,
    {
        let mut ranks: EmoHashMap<String, EmoHashMap<String, usize>> = hash_map_new();
        let mut len = 0;

        for (left, right) in pairs {
            let (left, right): (String, String) = (left.into(), right.into());
            if ranks
                .get(&left)
                .is_some_and(|rights| rights.contains_key(&right))
            {
                return Err(EmoError::DuplicateMerge { left, right });
            }
            ranks
                .entry(left)
                .or_insert_with(hash_map_new)
                .insert(right, len);
            len += 1;
        }

        Ok(Self { ranks, len })
    }

    /// The number of merge pairs.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Look up the rank of the ``(left, right)`` pair.
    pub fn rank(
        &self,
        left: &str,
        right: &str,
    ) -> Option<usize> {
        self.ranks.get(left)?.get(right).copied()
    }

    /// Find the lowest-ranked adjacent pair in `units`.
    ///
    /// ## Returns
    /// ``Some((idx, rank))`` where ``units[idx..=idx+1]`` is the first
    /// occurrence of the best pair; `None` if no adjacent pair is ranked.
    pub fn best_pair<S: AsRef<str>>(
        &self,
        units: &[S],
    ) -> Option<(usize, usize)> {
        units
            .windows(2)
            .enumerate()
            .filter_map(|(idx, w)| {
                self.rank(w[0].as_ref(), w[1].as_ref())
                    .map(|rank| (idx, rank))
            })
            .min_by_key(|&(idx, rank)| (rank, idx))
    }
}
