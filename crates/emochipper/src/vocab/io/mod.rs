//! # Vocabulary IO
//!
//! Readers for the on-disk formats a `RoBERTa`-style tokenizer ships with:
//! * `vocab.json` - [`read_vocab_json`],
//! * `merges.txt` - [`read_merges_txt`],
//! * `tokenizer.json` - [`read_tokenizer_json`].
//!
//! All readers parse into typed structures and fail fast with a
//! configuration [`crate::EmoError`] on malformed input.
//!
//! ## Loading A Vocab
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use emochipper::vocab::{BpeVocab, io::load_vocab_files};
//!
//! fn example() -> emochipper::EmoResult<Arc<BpeVocab<u32>>> {
//!     let vocab: BpeVocab<u32> = load_vocab_files("vocab.json", "merges.txt")?;
//!     Ok(Arc::new(vocab))
//! }
//! ```

mod merges_txt;
mod tokenizer_json;
mod vocab_json;

use std::{fs::File, io::BufReader, path::Path};

#[doc(inline)]
pub use merges_txt::*;
#[doc(inline)]
pub use tokenizer_json::*;
#[doc(inline)]
pub use vocab_json::*;

use crate::{errors::EmoResult, types::TokenType, vocab::BpeVocab};

/// Load a [`BpeVocab`] from `vocab.json` and `merges.txt` paths.
pub fn load_vocab_files<T, V, M>(
    vocab_path: V,
    merges_path: M,
) -> EmoResult<BpeVocab<T>>
where
    T: TokenType,
    V: AsRef<Path>,
    M: AsRef<Path>,
{
    let vocab_reader = BufReader::new(File::open(vocab_path)?);
    let merges_reader = BufReader::new(File::open(merges_path)?);

    Ok(BpeVocab::init(
        read_vocab_json(vocab_reader)?,
        read_merges_txt(merges_reader)?,
    ))
}

/// Load a [`TokenizerJson`] from a `tokenizer.json` path.
pub fn load_tokenizer_json_path<T, P>(path: P) -> EmoResult<TokenizerJson<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    read_tokenizer_json(BufReader::new(File::open(path)?))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempdir::TempDir;

    use super::*;
    use crate::vocab::testing::{build_test_vocab, test_merges_txt, test_vocab_json};

    #[test]
    fn test_load_vocab_files() {
        let dir = TempDir::new("emochipper_vocab").unwrap();
        let vocab_path = dir.path().join("vocab.json");
        let merges_path = dir.path().join("merges.txt");

        File::create(&vocab_path)
            .unwrap()
            .write_all(test_vocab_json().as_bytes())
            .unwrap();
        File::create(&merges_path)
            .unwrap()
            .write_all(test_merges_txt().as_bytes())
            .unwrap();

        let vocab: BpeVocab<u32> = load_vocab_files(&vocab_path, &merges_path).unwrap();
        assert_eq!(vocab, build_test_vocab());
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new("emochipper_vocab").unwrap();
        let err = load_vocab_files::<u32, _, _>(
            dir.path().join("nope.json"),
            dir.path().join("nope.txt"),
        )
        .unwrap_err();
        assert!(!err.is_config_error());
    }
}
