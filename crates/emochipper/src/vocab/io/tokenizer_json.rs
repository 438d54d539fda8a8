//! # `HuggingFace` `tokenizer.json` Reader

use std::io::Read;

use serde::Deserialize;

use crate::{
    errors::{EmoError, EmoResult},
    json_entries::JsonEntries,
    types::TokenType,
    vocab::{BpeVocab, MergeRankTable, TokenVocab},
};

#[derive(Debug, Deserialize)]
struct TokenizerJsonFile {
    model: ModelSection,

    #[serde(default)]
    truncation: Option<TruncationSection>,
}

#[derive(Debug, Deserialize)]
struct ModelSection {
    vocab: JsonEntries<u64>,

    #[serde(default)]
    merges: Vec<MergeEntry>,
}

/// Merges appear either as ``"a b"`` strings or ``["a", "b"]`` arrays,
/// depending on the writer version.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MergeEntry {
    Joined(String),
    Pair(String, String),
}

#[derive(Debug, Deserialize)]
struct TruncationSection {
    max_length: usize,
}

/// The parts of a `tokenizer.json` used for sequence assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenizerJson<T: TokenType> {
    /// The vocabulary and merges.
    pub vocab: BpeVocab<T>,

    /// The truncation length, if the file configures one.
    pub max_length: Option<usize>,
}

/// Read a `HuggingFace` `tokenizer.json`.
///
/// Uses `model.vocab`, `model.merges`, and `truncation.max_length`;
/// other sections are ignored. Unlike `merges.txt`, the merge list has no header.
pub fn read_tokenizer_json<T, R>(reader: R) -> EmoResult<TokenizerJson<T>>
where
    T: TokenType,
    R: Read,
{
    let file: TokenizerJsonFile = serde_json::from_reader(reader)?;

    let pairs = file
        .model
        .merges
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| match entry {
            MergeEntry::Pair(left, right) => Ok((left, right)),
            MergeEntry::Joined(text) => {
                let mut parts = text.split_whitespace();
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(left), Some(right), None) => Ok((left.to_string(), right.to_string())),
                    _ => Err(EmoError::MalformedMerge {
                        line: idx + 1,
                        text: text.clone(),
                    }),
                }
            }
        })
        .collect::<EmoResult<Vec<_>>>()?;

    let tokens = TokenVocab::from_id_entries(file.model.vocab)?;
    let merges = MergeRankTable::from_pairs(pairs)?;

    Ok(TokenizerJson {
        vocab: BpeVocab::init(tokens, merges),
        max_length: file.truncation.map(|t| t.max_length),
    })
}
