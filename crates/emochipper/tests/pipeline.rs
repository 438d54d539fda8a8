#![allow(missing_docs)]

use std::{fs::File, io::Write, sync::Arc};

use emochipper::{
    EmoError,
    EmoResult,
    classify::{Activation, DecisionPolicy, LabelSet, Prediction, ThresholdTable, io as label_io},
    config::EmotionConfig,
    encoders::PaddingStrategy,
    pretrained::go_emotions,
    vocab::{BpeVocab, io::load_vocab_files},
};
use tempdir::TempDir;

const VOCAB_JSON: &str = r#"{
    "<s>": 0, "</s>": 1, "<pad>": 2, "<unk>": 3,
    "I": 4, "Ġfeel": 5, "Ġgood": 6, "Ġterrible": 7, "Ġ!": 8
}"#;

const MERGES_TXT: &str = "#version: 0.2
f e
fe e
fee l
g o
go o
goo d
t e
te r
ter r
terr i
terri b
terrib l
terribl e
";

fn write_vocab_files(dir: &TempDir) -> Arc<BpeVocab<u32>> {
    let vocab_path = dir.path().join("vocab.json");
    let merges_path = dir.path().join("merges.txt");
    File::create(&vocab_path)
        .unwrap()
        .write_all(VOCAB_JSON.as_bytes())
        .unwrap();
    File::create(&merges_path)
        .unwrap()
        .write_all(MERGES_TXT.as_bytes())
        .unwrap();
    Arc::new(load_vocab_files(&vocab_path, &merges_path).unwrap())
}

/// Scores "good" texts as joy and "terrible" texts as anger, by token id.
fn keyword_engine(
    ids: &[u32],
    mask: &[u8],
) -> EmoResult<Vec<f32>> {
    assert_eq!(ids.len(), mask.len());
    let joy = if ids.contains(&6) { 3.0 } else { -3.0 };
    let anger = if ids.contains(&7) { 3.0 } else { -3.0 };
    Ok(vec![joy, anger])
}

fn joy_anger() -> (Arc<LabelSet>, Arc<ThresholdTable>) {
    (
        Arc::new(LabelSet::from_names(["joy", "anger"]).unwrap()),
        Arc::new(ThresholdTable::from_entries([("joy", 0.4), ("anger", 0.3)]).unwrap()),
    )
}

#[test]
fn test_files_to_prediction() {
    let dir = TempDir::new("emochipper_pipeline").unwrap();
    let vocab = write_vocab_files(&dir);
    let (labels, thresholds) = joy_anger();

    let config = EmotionConfig::from_json_str(
        r#"{"tokenizer": {"max_length": 6, "padding": "max_length"}}"#,
    )
    .unwrap();
    let mut pipeline = config
        .build_pipeline(vocab, labels, thresholds, keyword_engine)
        .unwrap();

    let seq = pipeline.tokenizer().fork().assemble("I feel good").unwrap();
    assert_eq!(seq.ids, vec![0, 4, 5, 6, 1, 2]);
    assert_eq!(seq.attention_mask, vec![1, 1, 1, 1, 1, 0]);

    assert_eq!(pipeline.predict("I feel good").unwrap().to_string(), "joy");
    assert_eq!(
        pipeline.predict("I feel terrible!").unwrap().to_string(),
        "anger"
    );
    assert_eq!(
        pipeline.predict("I feel").unwrap().to_string(),
        "no emotion detected"
    );

    let predictions = pipeline
        .predict_batch(&["I feel good", "meh"])
        .unwrap();
    assert_eq!(predictions[0].to_string(), "joy");
    assert_eq!(predictions[1], Prediction::NoLabel);
}

#[test]
fn test_all_qualifying_with_identity() {
    let dir = TempDir::new("emochipper_pipeline").unwrap();
    let vocab = write_vocab_files(&dir);
    let (labels, thresholds) = joy_anger();

    let config = EmotionConfig::from_json_str(
        r#"{"classifier": {"policy": "all_qualifying", "activation": "identity"}}"#,
    )
    .unwrap();
    assert_eq!(config.tokenizer.padding, PaddingStrategy::None);

    let engine = |_ids: &[u32], _mask: &[u8]| -> EmoResult<Vec<f32>> { Ok(vec![0.55, 0.50]) };
    let mut pipeline = config
        .build_pipeline(vocab, labels, thresholds, engine)
        .unwrap();
    assert_eq!(pipeline.activation(), Activation::Identity);

    let prediction = pipeline.predict("anything").unwrap();
    assert_eq!(prediction.labels(), vec!["joy", "anger"]);
}

#[test]
fn test_engine_errors_surface() {
    let dir = TempDir::new("emochipper_pipeline").unwrap();
    let vocab = write_vocab_files(&dir);
    let (labels, thresholds) = joy_anger();

    let failing = |_ids: &[u32], _mask: &[u8]| -> EmoResult<Vec<f32>> {
        Err(EmoError::Inference("session closed".to_string()))
    };
    let mut pipeline = EmotionConfig::default()
        .build_pipeline(vocab.clone(), labels.clone(), thresholds.clone(), failing)
        .unwrap();
    let err = pipeline.predict("I feel good").unwrap_err();
    assert!(!err.is_config_error());

    // An engine with the wrong output width.
    let wide = |_ids: &[u32], _mask: &[u8]| -> EmoResult<Vec<f32>> { Ok(vec![0.0; 3]) };
    let mut pipeline = EmotionConfig::default()
        .build_pipeline(vocab, labels, thresholds, wide)
        .unwrap();
    assert!(matches!(
        pipeline.predict("I feel good"),
        Err(EmoError::ScoreCountMismatch {
            scores: 3,
            labels: 2
        })
    ));
}

#[test]
fn test_label_files_with_go_emotions_engine() {
    let dir = TempDir::new("emochipper_pipeline").unwrap();
    let vocab = write_vocab_files(&dir);

    let labels = go_emotions::labels().unwrap();
    let id2label: serde_json::Map<String, serde_json::Value> = labels
        .iter()
        .enumerate()
        .map(|(idx, name)| (idx.to_string(), name.into()))
        .collect();
    let config_path = dir.path().join("config.json");
    serde_json::to_writer(
        File::create(&config_path).unwrap(),
        &serde_json::json!({ "id2label": id2label }),
    )
    .unwrap();

    let labels = Arc::new(label_io::load_model_config_labels_path(&config_path).unwrap());
    assert_eq!(labels.len(), go_emotions::GO_EMOTIONS_LABEL_COUNT);
    let thresholds = Arc::new(go_emotions::thresholds().unwrap());

    let engine = |_ids: &[u32], _mask: &[u8]| -> EmoResult<Vec<f32>> {
        let mut logits = vec![-5.0; go_emotions::GO_EMOTIONS_LABEL_COUNT];
        logits[15] = 1.0; // gratitude
        logits[17] = 2.0; // joy
        Ok(logits)
    };

    let config = EmotionConfig::from_json_str(r#"{"classifier": {"policy": "all_qualifying"}}"#).unwrap();
    let mut pipeline = config
        .build_pipeline(vocab, labels, thresholds, engine)
        .unwrap();

    let prediction = pipeline.predict("I feel good").unwrap();
    assert_eq!(prediction.labels(), vec!["gratitude", "joy"]);
    assert_eq!(prediction.top().unwrap().label, "joy");

    let scores = pipeline.scores("I feel good").unwrap();
    assert!((scores[17] - 0.880_797).abs() < 1e-5);
    assert_eq!(
        pipeline
            .classifier()
            .clone()
            .with_policy(DecisionPolicy::BestQualifying)
            .classify(&scores)
            .unwrap()
            .to_string(),
        "joy"
    );
}
