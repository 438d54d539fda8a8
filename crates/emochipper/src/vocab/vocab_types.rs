//! # Vocabulary Types

use crate::types::EmoHashMap;

/// `{ String -> T }` map.
///
/// ## Style Hints
/// Instance names should prefer `str_map`, or `str_token_map`.
pub type StrTokenMap<T> = EmoHashMap<String, T>;

/// `{ T -> String }` map.
///
/// ## Style Hints
/// Instance names should prefer `token_strs`, or `token_str_map`.
pub type TokenStrMap<T> = EmoHashMap<T, String>;
