//! # `vocab.json` Reader

use std::io::Read;

use crate::{errors::EmoResult, json_entries::JsonEntries, types::TokenType, vocab::TokenVocab};

/// Read a flat `{ "token": id }` JSON object into a [`TokenVocab`].
///
/// ## Returns
/// A configuration error if the JSON is malformed, an id is negative
/// or does not fit `T`, a token is listed twice, two tokens share an id,
/// or a special token is missing.
pub fn read_vocab_json<T, R>(reader: R) -> EmoResult<TokenVocab<T>>
where
    T: TokenType,
    R: Read,
{
    let entries: JsonEntries<u64> = serde_json::from_reader(reader)?;
    TokenVocab::from_id_entries(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{errors::EmoError, vocab::testing::test_vocab_json};

    #[test]
    fn test_read_vocab_json() {
        let vocab: TokenVocab<u32> = read_vocab_json(test_vocab_json().as_bytes()).unwrap();
        assert_eq!(vocab.lookup_token("Ġfeel"), Some(5));
        assert_eq!(vocab.specials().pad, 2);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = read_vocab_json::<u32, _>(r#"{"<s>": -1}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, EmoError::Json(_)));
        assert!(err.is_config_error());

        let err = read_vocab_json::<u32, _>(r#"["<s>"]"#.as_bytes()).unwrap_err();
        assert!(matches!(err, EmoError::Json(_)));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let json = r#"{"<s>": 0, "</s>": 1, "<pad>": 2, "<unk>": 3, "a": 4, "b": 4}"#;
        let err = read_vocab_json::<u32, _>(json.as_bytes()).unwrap_err();
        assert!(matches!(err, EmoError::DuplicateTokenId { id: 4, .. }));
    }

    #[test]
    fn test_rejects_repeated_token() {
        let json = r#"{"<s>": 0, "</s>": 1, "<pad>": 2, "<unk>": 3, "a": 4, "a": 5}"#;
        let err = read_vocab_json::<u32, _>(json.as_bytes()).unwrap_err();
        assert!(err.is_config_error());
        assert!(matches!(err, EmoError::DuplicateToken { ref token } if token == "a"));
    }
}
