pub mod classify;
pub mod decode;
pub mod encode;
pub mod list_labels;

/// Subcommands for emochipper
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Assemble text lines into model input, as JSON lines.
    Encode(encode::EncodeArgs),

    /// Decode lines of token ids back to text.
    Decode(decode::DecodeArgs),

    /// Classify lines of per-label scores.
    Classify(classify::ClassifyArgs),

    /// List the built-in `GoEmotions` labels and thresholds.
    ListLabels(list_labels::ListLabelsArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Encode(cmd) => cmd.run(),
            Commands::Decode(cmd) => cmd.run(),
            Commands::Classify(cmd) => cmd.run(),
            Commands::ListLabels(cmd) => cmd.run(),
        }
    }
}
