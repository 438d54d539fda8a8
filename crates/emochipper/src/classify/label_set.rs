//! # Label Set

use crate::{
    errors::{EmoError, EmoResult},
    types::{EmoHashMap, hash_map_with_capacity},
};

/// Ordered, unique label names.
///
/// Position `i` names score `i` of the model output.
#[derive(Debug, Clone)]
pub struct LabelSet {
    names: Vec<String>,
    index: EmoHashMap<String, usize>,
}

impl PartialEq for LabelSet {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.names == other.names
    }
}

impl LabelSet {
    /// Build a label set from names in score order.
    ///
    /// ## Returns
    /// [`EmoError::DuplicateLabel`] for a repeated name;
    /// [`EmoError::Config`] for an empty name or an empty set.
    pub fn from_names<I, S>(names: I) -> EmoResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(EmoError::Config("label set is empty".to_string()));
        }

        let mut index = hash_map_with_capacity(names.len());
        for (idx, name) in names.iter().enumerate() {
            if name.is_empty() {
                return Err(EmoError::Config(format!("label {idx} has an empty name")));
            }
            if index.insert(name.clone(), idx).is_some() {
                return Err(EmoError::DuplicateLabel {
                    label: name.clone(),
                });
            }
        }

        Ok(Self { names, index })
    }

    /// The number of labels.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Is the set empty? Never true for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The names, in score order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The name at `index`.
    pub fn name(
        &self,
        index: usize,
    ) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// The score index of `name`.
    pub fn index_of(
        &self,
        name: &str,
    ) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Does the set contain `name`?
    pub fn contains(
        &self,
        name: &str,
    ) -> bool {
        self.index.contains_key(name)
    }

    /// Iterate over the names, in score order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
