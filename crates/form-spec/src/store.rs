use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// Current text of every input field, keyed by field id.
///
/// Keys only exist once the matching input has changed at least once; a
/// missing key reads as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueStore {
    values: BTreeMap<String, String>,
}

impl ValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> &str {
        self.values.get(id).map(String::as_str).unwrap_or_default()
    }

    /// Returns a copy of the store with `id` mapped to `value`.
    #[must_use]
    pub fn set(&self, id: impl Into<String>, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.values.insert(id.into(), value.into());
        next
    }

    pub fn contains(&self, id: &str) -> bool {
        self.values.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(id, value)| (id.as_str(), value.as_str()))
    }

    pub fn from_json_str(json: &str) -> Result<Self, FormError> {
        serde_json::from_str(json).map_err(FormError::Values)
    }

    pub fn to_json_pretty(&self) -> Result<String, FormError> {
        serde_json::to_string_pretty(self).map_err(FormError::EncodeJson)
    }

    pub fn to_cbor(&self) -> Result<Vec<u8>, FormError> {
        serde_cbor::to_vec(self).map_err(FormError::EncodeCbor)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ValueStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(id, value)| (id.into(), value.into()))
                .collect(),
        }
    }
}
