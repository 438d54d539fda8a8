//! # Label and Threshold File Readers
//!
//! * Model ``config.json`` - the ``id2label`` object, keyed ``"0"..."n-1"``.
//! * ``thresholds.json`` - a flat ``{ label: threshold }`` object.

use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use serde::Deserialize;

use crate::{
    classify::{LabelSet, ThresholdTable},
    errors::{EmoError, EmoResult},
    json_entries::JsonEntries,
};

#[derive(Debug, Deserialize)]
struct ModelConfigFile {
    id2label: JsonEntries<String>,
}

/// Read the label set from a model ``config.json``.
///
/// Only ``id2label`` is used; other fields are ignored.
///
/// ## Returns
/// [`EmoError::Config`] for a key that is not an integer,
/// or for keys which are not exactly ``0..n``.
pub fn read_model_config_labels<R: Read>(reader: R) -> EmoResult<LabelSet> {
    let file: ModelConfigFile = serde_json::from_reader(reader)?;

    let mut by_index = BTreeMap::new();
    for (key, label) in file.id2label {
        let index: usize = key
            .trim()
            .parse()
            .map_err(|_| EmoError::Config(format!("id2label key {key:?} is not an index")))?;
        if by_index.insert(index, label).is_some() {
            return Err(EmoError::Config(format!("id2label index {index} is repeated")));
        }
    }

    if let Some(missing) = by_index
        .keys()
        .enumerate()
        .find(|&(expected, &index)| expected != index)
        .map(|(expected, _)| expected)
    {
        return Err(EmoError::Config(format!(
            "id2label has no entry for index {missing}"
        )));
    }

    let labels = LabelSet::from_names(by_index.into_values())?;
    log::info!("loaded {} labels", labels.len());
    Ok(labels)
}

/// Read a ``thresholds.json``.
pub fn read_thresholds_json<R: Read>(reader: R) -> EmoResult<ThresholdTable> {
    let values: JsonEntries<f32> = serde_json::from_reader(reader)?;
    let table = ThresholdTable::from_entries(values)?;
    log::info!("loaded {} thresholds", table.len());
    Ok(table)
}

/// Load the label set from a model ``config.json`` path.
pub fn load_model_config_labels_path<P: AsRef<Path>>(path: P) -> EmoResult<LabelSet> {
    read_model_config_labels(BufReader::new(File::open(path)?))
}

/// Load a ``thresholds.json`` path.
pub fn load_thresholds_path<P: AsRef<Path>>(path: P) -> EmoResult<ThresholdTable> {
    read_thresholds_json(BufReader::new(File::open(path)?))
}
