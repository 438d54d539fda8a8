use std::sync::Arc;

use emochipper::{
    BpeVocab,
    vocab::io::{load_tokenizer_json_path, load_vocab_files},
};

/// A loaded vocabulary, and any truncation length it ships with.
pub struct LoadedVocab {
    pub vocab: Arc<BpeVocab<u32>>,
    pub max_length: Option<usize>,
}

/// Vocabulary source arg group.
#[derive(clap::Args, Debug)]
#[group(required = true, multiple = true)]
pub struct VocabArgs {
    /// Path to a `vocab.json`; requires `--merges`.
    #[arg(long, requires = "merges", conflicts_with = "tokenizer_json")]
    vocab: Option<String>,

    /// Path to a `merges.txt`; requires `--vocab`.
    #[arg(long, requires = "vocab", conflicts_with = "tokenizer_json")]
    merges: Option<String>,

    /// Path to a `HuggingFace` `tokenizer.json`.
    #[arg(long)]
    tokenizer_json: Option<String>,
}

impl VocabArgs {
    /// Load the vocabulary.
    pub fn load(&self) -> Result<LoadedVocab, Box<dyn std::error::Error>> {
        if let Some(path) = &self.tokenizer_json {
            let loaded = load_tokenizer_json_path::<u32, _>(path)?;
            return Ok(LoadedVocab {
                vocab: Arc::new(loaded.vocab),
                max_length: loaded.max_length,
            });
        }

        match (&self.vocab, &self.merges) {
            (Some(vocab), Some(merges)) => Ok(LoadedVocab {
                vocab: Arc::new(load_vocab_files(vocab, merges)?),
                max_length: None,
            }),
            _ => Err("either --tokenizer-json, or both --vocab and --merges, are required".into()),
        }
    }
}
