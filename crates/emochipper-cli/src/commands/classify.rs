use std::{io::Write, sync::Arc};

use emochipper::{
    classify::{
        Activation,
        DecisionPolicy,
        LabelSet,
        ThresholdClassifier,
        ThresholdTable,
        io::{load_model_config_labels_path, load_thresholds_path},
    },
    pretrained::go_emotions,
};

use crate::input_output::{InputArgs, OutputArgs, for_each_line};

/// Decision policy selector.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PolicyArg {
    /// The single highest-scoring qualifying label.
    #[default]
    Best,

    /// Every qualifying label.
    All,
}

impl From<PolicyArg> for DecisionPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Best => DecisionPolicy::BestQualifying,
            PolicyArg::All => DecisionPolicy::AllQualifying,
        }
    }
}

/// Activation selector.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActivationArg {
    /// Inputs are logits.
    #[default]
    Sigmoid,

    /// Inputs are already probabilities.
    Identity,
}

impl From<ActivationArg> for Activation {
    fn from(value: ActivationArg) -> Self {
        match value {
            ActivationArg::Sigmoid => Activation::Sigmoid,
            ActivationArg::Identity => Activation::Identity,
        }
    }
}

/// Args for the classify command.
#[derive(clap::Args, Debug)]
pub struct ClassifyArgs {
    /// Model `config.json` to read `id2label` from.
    ///
    /// Defaults to the built-in `GoEmotions` labels.
    #[arg(long)]
    model_config: Option<String>,

    /// Per-label `thresholds.json`.
    ///
    /// Defaults to the built-in `GoEmotions` thresholds.
    #[arg(long)]
    thresholds: Option<String>,

    /// The decision policy.
    #[arg(long, value_enum, default_value_t = PolicyArg::Best)]
    policy: PolicyArg,

    /// The activation applied to each input score.
    #[arg(long, value_enum, default_value_t = ActivationArg::Sigmoid)]
    activation: ActivationArg,

    /// Write each prediction as a JSON line.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

/// Parse a line of whitespace- or comma-separated scores.
fn parse_scores(
    line_number: usize,
    line: &str,
) -> Result<Vec<f32>, Box<dyn std::error::Error>> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f32>()
                .map_err(|e| format!("line {line_number}: bad score {s:?}: {e}").into())
        })
        .collect()
}

impl ClassifyArgs {
    fn build_classifier(&self) -> Result<ThresholdClassifier, Box<dyn std::error::Error>> {
        let labels: LabelSet = match &self.model_config {
            Some(path) => load_model_config_labels_path(path)?,
            None => go_emotions::labels()?,
        };
        let thresholds: ThresholdTable = match &self.thresholds {
            Some(path) => load_thresholds_path(path)?,
            None => go_emotions::thresholds()?,
        };
        Ok(ThresholdClassifier::new(
            Arc::new(labels),
            Arc::new(thresholds),
            self.policy.into(),
        )?)
    }

    /// Run the classify command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let classifier = self.build_classifier()?;
        let activation: Activation = self.activation.into();

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        for_each_line(&mut reader, |n, line| {
            if line.trim().is_empty() {
                return Ok(());
            }
            let mut scores = parse_scores(n, line)?;
            activation.apply_all(&mut scores);
            let prediction = classifier
                .classify(&scores)
                .map_err(|e| format!("line {n}: {e}"))?;

            if self.json {
                serde_json::to_writer(&mut writer, &prediction)?;
                writeln!(writer)?;
            } else {
                writeln!(writer, "{prediction}")?;
            }
            Ok(())
        })?;
        writer.flush()?;
        Ok(())
    }
}
