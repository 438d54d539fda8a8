//! # Vocab Testing Tools

use crate::{
    types::TokenType,
    vocab::{BpeVocab, MergeRankTable, TokenVocab},
};

/// Token entries of the test vocabulary.
pub const TEST_TOKENS: &[(&str, u64)] = &[
    ("<s>", 0),
    ("</s>", 1),
    ("<pad>", 2),
    ("<unk>", 3),
    ("I", 4),
    ("Ġfeel", 5),
    ("Ġgood", 6),
    ("Ġso", 7),
    ("Ġhappy", 8),
    ("!", 9),
    ("Ġ!", 10),
    ("f", 11),
    ("e", 12),
    ("l", 13),
    ("Ġtoday", 14),
    ("hello", 15),
    ("Ġworld", 16),
    ("feel", 17),
];

/// Merge pairs of the test vocabulary, in priority order.
pub const TEST_MERGES: &[(&str, &str)] = &[
    ("f", "e"),
    ("fe", "e"),
    ("fee", "l"),
    ("g", "o"),
    ("go", "o"),
    ("goo", "d"),
    ("s", "o"),
    ("h", "a"),
    ("ha", "p"),
    ("hap", "p"),
    ("happ", "y"),
    ("t", "o"),
    ("to", "d"),
    ("tod", "a"),
    ("toda", "y"),
    ("h", "e"),
    ("l", "l"),
    ("he", "ll"),
    ("hell", "o"),
    ("w", "o"),
    ("wo", "r"),
    ("wor", "l"),
    ("worl", "d"),
];

/// Create the test [`BpeVocab`].
pub fn build_test_vocab<T: TokenType>() -> BpeVocab<T> {
    let tokens = TokenVocab::from_id_entries(
        TEST_TOKENS
            .iter()
            .map(|&(s, id)| (s.to_string(), id)),
    )
    .unwrap();

    let merges = MergeRankTable::from_pairs(TEST_MERGES.iter().copied()).unwrap();

    BpeVocab::init(tokens, merges)
}

/// Render merge pairs as `merges.txt` content, with a header line.
pub fn test_merges_txt() -> String {
    let mut text = String::from("#version: 0.2\n");
    for (left, right) in TEST_MERGES {
        text.push_str(left);
        text.push(' ');
        text.push_str(right);
        text.push('\n');
    }
    text
}

/// Render the test tokens as `vocab.json` content.
pub fn test_vocab_json() -> String {
    let map: serde_json::Map<String, serde_json::Value> = TEST_TOKENS
        .iter()
        .map(|&(s, id)| (s.to_string(), serde_json::Value::from(id)))
        .collect();
    serde_json::Value::Object(map).to_string()
}
