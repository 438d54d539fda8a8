use std::io::Write;

use emochipper::pretrained::go_emotions::GO_EMOTIONS_THRESHOLDS;

use crate::input_output::OutputArgs;

/// Args for the list-labels command.
#[derive(clap::Args, Debug)]
pub struct ListLabelsArgs {
    #[command(flatten)]
    output: OutputArgs,
}

impl ListLabelsArgs {
    /// Run the list-labels command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut writer = self.output.open_writer()?;
        for (index, (label, threshold)) in GO_EMOTIONS_THRESHOLDS.iter().enumerate() {
            writeln!(writer, "{index}\t{label}\t{threshold:.2}")?;
        }
        writer.flush()?;
        Ok(())
    }
}
