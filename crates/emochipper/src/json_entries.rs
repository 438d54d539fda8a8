//! # Ordered JSON Object Entries
//!
//! `serde_json` keeps the last value when an object repeats a key.
//! [`JsonEntries`] keeps every entry in document order instead,
//! so readers can reject repeated keys.

use core::{fmt, marker::PhantomData};

use serde::{
    Deserialize,
    Deserializer,
    de::{MapAccess, Visitor},
};

/// Every ``(key, value)`` entry of a JSON object, in document order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct JsonEntries<V>(pub Vec<(String, V)>);

impl<V> IntoIterator for JsonEntries<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

struct EntriesVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
    type Value = JsonEntries<V>;

    fn expecting(
        &self,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A>(
        self,
        mut map: A,
    ) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(entry) = map.next_entry::<String, V>()? {
            entries.push(entry);
        }
        Ok(JsonEntries(entries))
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for JsonEntries<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}
