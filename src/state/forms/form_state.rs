//! Live input values of one form instance

use super::field::InputValue;
use super::registry::FieldRegistry;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Mapping from field key to its current value, in registry order.
///
/// The key set is fixed at construction to exactly the registry's keys;
/// values can be replaced but entries are never added or removed.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    entries: Vec<(&'static str, InputValue)>,
}

impl FormState {
    /// Create a form with every field set to its kind's empty value
    pub fn new(registry: &FieldRegistry) -> Self {
        Self {
            entries: registry
                .fields()
                .iter()
                .map(|f| (f.key, f.kind.empty_value()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&InputValue> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    /// Replace the value of an existing key. Returns false for unknown keys.
    pub(crate) fn set(&mut self, key: &str, value: InputValue) -> bool {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &InputValue)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FormState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
