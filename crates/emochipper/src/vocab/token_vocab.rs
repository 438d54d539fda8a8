//! # Token Vocabulary ``{ String <-> T }``

use crate::{
    errors::{EmoError, EmoResult},
    types::{TokenType, hash_map_with_capacity},
    vocab::{SpecialTokens, StrTokenMap, TokenStrMap},
};

/// Bijective ``{ String <-> T }`` token vocabulary.
///
/// Construction validates that:
/// - no two strings share an id;
/// - the four [`SpecialTokens`] are present.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenVocab<T: TokenType> {
    str_map: StrTokenMap<T>,
    token_strs: TokenStrMap<T>,
    specials: SpecialTokens<T>,
}

impl<T: TokenType> TokenVocab<T> {
    /// Build a vocabulary from a `{ String -> T }` map.
    ///
    /// ## Arguments
    /// * `str_map` - The token string to id map.
    ///
    /// ## Returns
    /// A `Result` containing the vocabulary, or a configuration error
    /// if the map is not a bijection or lacks a special token.
    pub fn from_str_map(str_map: StrTokenMap<T>) -> EmoResult<Self> {
        // Sorted by id, then string, so a collision always reports
        // the lowest shared id and its two smallest strings.
        let mut by_token: Vec<(T, &String)> = str_map.iter().map(|(s, &t)| (t, s)).collect();
        by_token.sort_unstable();

        if let Some(pair) = by_token.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(EmoError::DuplicateTokenId {
                id: pair[0].0.to_u64().unwrap_or(u64::MAX),
                first: pair[0].1.clone(),
                second: pair[1].1.clone(),
            });
        }

        let mut token_strs: TokenStrMap<T> = hash_map_with_capacity(by_token.len());
        token_strs.extend(by_token.into_iter().map(|(t, s)| (t, s.clone())));

        let specials = SpecialTokens::from_str_map(&str_map)?;

        log::debug!("built token vocabulary with {} entries", str_map.len());

        Ok(Self {
            str_map,
            token_strs,
            specials,
        })
    }

    /// Build a vocabulary from raw ``(String, u64)`` entries.
    ///
    /// ## Returns
    /// [`EmoError::DuplicateToken`] if a string appears twice;
    /// [`EmoError::TokenOutOfRange`] if an id does not fit `T`;
    /// otherwise as [`Self::from_str_map`].
    pub fn from_id_entries<I>(entries: I) -> EmoResult<Self>
    where
        I: IntoIterator<Item = (String, u64)>,
    {
        let entries = entries.into_iter();
        let mut str_map: StrTokenMap<T> = hash_map_with_capacity(entries.size_hint().0);
        for (s, id) in entries {
            let token = T::from_u64(id).ok_or(EmoError::TokenOutOfRange { id })?;
            if str_map.contains_key(&s) {
                return Err(EmoError::DuplicateToken { token: s });
            }
            str_map.insert(s, token);
        }

        Self::from_str_map(str_map)
    }

    /// Get the `{ String -> T }` map.
    pub fn str_map(&self) -> &StrTokenMap<T> {
        &self.str_map
    }

    /// Get the special token ids.
    pub fn specials(&self) -> &SpecialTokens<T> {
        &self.specials
    }

    /// The number of entries.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.str_map.len()
    }

    /// The largest id in the vocabulary.
    pub fn max_token(&self) -> T {
        // Never empty: the special tokens are always present.
        self.token_strs.keys().copied().max().unwrap_or_default()
    }

    /// Look up the id of a token string.
    pub fn lookup_token(
        &self,
        s: &str,
    ) -> Option<T> {
        self.str_map.get(s).copied()
    }

    /// Look up the id of a token string, falling back to the unknown id.
    pub fn token_or_unknown(
        &self,
        s: &str,
    ) -> T {
        match self.lookup_token(s) {
            Some(token) => token,
            None => {
                log::trace!("unknown subword {s:?}");
                self.specials.unknown
            }
        }
    }

    /// Look up the string for a token id.
    pub fn lookup_str(
        &self,
        token: T,
    ) -> Option<&str> {
        self.token_strs.get(&token).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::UNKNOWN_TOKEN;

    fn entries(pairs: &[(&str, u64)]) -> Vec<(String, u64)> {
        pairs.iter().map(|&(s, id)| (s.to_string(), id)).collect()
    }

    fn base_entries() -> Vec<(String, u64)> {
        entries(&[
            ("<s>", 0),
            ("</s>", 1),
            ("<pad>", 2),
            ("<unk>", 3),
            ("I", 4),
            ("Ġfeel", 5),
        ])
    }

    #[test]
    fn test_bijection() {
        let vocab = TokenVocab::<u32>::from_id_entries(base_entries()).unwrap();
        assert_eq!(vocab.len(), 6);
        assert_eq!(vocab.max_token(), 5);

        for (s, &token) in vocab.str_map().iter() {
            assert_eq!(vocab.lookup_str(token), Some(s.as_str()));
            assert_eq!(vocab.lookup_token(s), Some(token));
        }

        assert_eq!(vocab.token_or_unknown("Ġfeel"), 5);
        assert_eq!(vocab.token_or_unknown("nope"), 3);
        assert_eq!(vocab.lookup_str(3), Some(UNKNOWN_TOKEN));
        assert_eq!(vocab.lookup_str(99), None);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut raw = base_entries();
        raw.push(("other".to_string(), 4));

        match TokenVocab::<u32>::from_id_entries(raw) {
            Err(EmoError::DuplicateTokenId { id, first, second }) => {
                assert_eq!(id, 4);
                assert_eq!((first.as_str(), second.as_str()), ("I", "other"));
            }
            other => panic!("expected duplicate id, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_ids_reported_in_order() {
        for order in [["z", "x", "y"], ["y", "z", "x"], ["x", "y", "z"]] {
            let mut raw = base_entries();
            raw.extend(order.iter().map(|s| (s.to_string(), 6)));

            match TokenVocab::<u32>::from_id_entries(raw) {
                Err(EmoError::DuplicateTokenId { id, first, second }) => {
                    assert_eq!(id, 6);
                    assert_eq!((first.as_str(), second.as_str()), ("x", "y"));
                }
                other => panic!("expected duplicate id, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_duplicate_token_rejected() {
        let mut raw = base_entries();
        raw.push(("I".to_string(), 9));

        let err = TokenVocab::<u32>::from_id_entries(raw).unwrap_err();
        assert!(err.is_config_error());
        assert!(matches!(err, EmoError::DuplicateToken { ref token } if token == "I"));
    }

    #[test]
    fn test_missing_special_rejected() {
        let raw = entries(&[("<s>", 0), ("</s>", 1), ("<unk>", 3)]);
        let err = TokenVocab::<u32>::from_id_entries(raw).unwrap_err();
        assert!(err.is_config_error());
        assert!(matches!(
            err,
            EmoError::MissingSpecialToken { ref token } if token == "<pad>"
        ));
    }

    #[test]
    fn test_out_of_range() {
        let mut raw = base_entries();
        raw.push(("big".to_string(), 70_000));

        assert!(matches!(
            TokenVocab::<u16>::from_id_entries(raw.clone()),
            Err(EmoError::TokenOutOfRange { id: 70_000 })
        ));
        assert!(TokenVocab::<u32>::from_id_entries(raw).is_ok());
    }
}
