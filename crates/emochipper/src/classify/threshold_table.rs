//! # Threshold Table

use crate::{
    classify::LabelSet,
    errors::{EmoError, EmoResult},
    types::{EmoHashMap, hash_map_new},
};

/// Per-label minimum scores, each finite and in ``[0, 1]``.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThresholdTable {
    values: EmoHashMap<String, f32>,
}

impl ThresholdTable {
    /// Build a table from ``(label, threshold)`` entries.
    ///
    /// ## Returns
    /// [`EmoError::ThresholdOutOfRange`] for a non-finite or out-of-range value;
    /// [`EmoError::DuplicateLabel`] for a repeated label.
    pub fn from_entries<I, S>(entries: I) -> EmoResult<Self>
    where
        I: IntoIterator<Item = (S, f32)>,
        S: Into<String>,
    {
        let mut values = hash_map_new();
        for (label, value) in entries {
            let label = label.into();
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(EmoError::ThresholdOutOfRange { label, value });
            }
            if values.contains_key(&label) {
                return Err(EmoError::DuplicateLabel { label });
            }
            values.insert(label, value);
        }
        Ok(Self { values })
    }

    /// The number of thresholds.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The threshold for `label`.
    pub fn get(
        &self,
        label: &str,
    ) -> Option<f32> {
        self.values.get(label).copied()
    }

    /// Iterate over ``(label, threshold)`` entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.values.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// The thresholds in `labels` order.
    ///
    /// ## Returns
    /// [`EmoError::MissingThreshold`] for the first label without a threshold;
    /// [`EmoError::UnexpectedThreshold`] for the (alphabetically first)
    /// threshold whose label is not in `labels`.
    pub fn aligned_to(
        &self,
        labels: &LabelSet,
    ) -> EmoResult<Vec<f32>> {
        let aligned = labels
            .iter()
            .map(|label| {
                self.get(label).ok_or_else(|| EmoError::MissingThreshold {
                    label: label.to_string(),
                })
            })
            .collect::<EmoResult<Vec<f32>>>()?;

        if let Some(extra) = self
            .values
            .keys()
            .filter(|label| !labels.contains(label))
            .min()
        {
            return Err(EmoError::UnexpectedThreshold {
                label: extra.clone(),
            });
        }

        Ok(aligned)
    }
}
