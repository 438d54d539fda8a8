use std::io::Write;

use emochipper::{
    TokenizerOptions,
    config::EmotionConfig,
    encoders::PaddingStrategy,
    segmentation::SegmenterConfig,
};

use crate::{
    input_output::{InputArgs, OutputArgs, for_each_line},
    vocab_args::VocabArgs,
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    vocab: VocabArgs,

    /// Optional emotion config JSON; its tokenizer section sets the defaults.
    #[arg(long)]
    config: Option<String>,

    /// Maximum sequence length, including begin and end tokens.
    ///
    /// Defaults to the config, then the `tokenizer.json` truncation, then 128.
    #[arg(long)]
    max_length: Option<usize>,

    /// Pad every sequence to the maximum length.
    #[arg(long)]
    pad: bool,

    /// Split words on whitespace only.
    #[arg(long)]
    whitespace: bool,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl EncodeArgs {
    /// Resolve the tokenizer options from the config file and flags.
    fn tokenizer_options(
        &self,
        vocab_max_length: Option<usize>,
    ) -> Result<TokenizerOptions, Box<dyn std::error::Error>> {
        let mut options = match &self.config {
            Some(path) => EmotionConfig::load_path(path)?.tokenizer,
            None => {
                let mut options = TokenizerOptions::default();
                if let Some(max_length) = vocab_max_length {
                    options.max_length = max_length;
                }
                options
            }
        };

        if let Some(max_length) = self.max_length {
            options.max_length = max_length;
        }
        if self.pad {
            options.padding = PaddingStrategy::MaxLength;
        }
        if self.whitespace {
            options.set_segmenter(SegmenterConfig::Whitespace);
        }
        Ok(options)
    }

    /// Run the encode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let loaded = self.vocab.load()?;
        let options = self.tokenizer_options(loaded.max_length)?;
        log::info!("encoding with {options:?}");
        let mut tokenizer = options.build(loaded.vocab)?;

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        for_each_line(&mut reader, |_, line| {
            let seq = tokenizer.assemble(line)?;
            serde_json::to_writer(&mut writer, &seq)?;
            writeln!(writer)?;
            Ok(())
        })?;
        writer.flush()?;

        log::debug!(
            "word cache: {} hits, {} misses",
            tokenizer.assembler().encoder().cache().hits(),
            tokenizer.assembler().encoder().cache().misses()
        );
        Ok(())
    }
}
