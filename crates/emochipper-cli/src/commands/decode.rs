use std::io::Write;

use emochipper::decoders::TokenDecoder;

use crate::{
    input_output::{InputArgs, OutputArgs, for_each_line},
    vocab_args::VocabArgs,
};

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    #[command(flatten)]
    vocab: VocabArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

/// Parse a line of whitespace-separated token ids.
fn parse_ids(
    line_number: usize,
    line: &str,
) -> Result<Vec<u32>, Box<dyn std::error::Error>> {
    line.split_whitespace()
        .map(|s| {
            s.parse::<u32>()
                .map_err(|e| format!("line {line_number}: bad token id {s:?}: {e}").into())
        })
        .collect()
}

impl DecodeArgs {
    /// Run the decode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let decoder = TokenDecoder::new(self.vocab.load()?.vocab);

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        for_each_line(&mut reader, |n, line| {
            let ids = parse_ids(n, line)?;
            writeln!(writer, "{}", decoder.decode(&ids))?;
            Ok(())
        })?;
        writer.flush()?;
        Ok(())
    }
}
