use crate::CanonicalKey;
use crate::Identifier;
use indexmap::IndexMap;

/// Canonical key -> identifier, in first-seen order.
///
/// Serializes as a flat JSON object.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct OutputMap {
    entries: IndexMap<CanonicalKey, Identifier>,
}

impl OutputMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Identifier> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub(crate) fn insert(&mut self, key: CanonicalKey, id: Identifier) {
        self.entries.insert(key, id);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, CanonicalKey, Identifier> {
        self.entries.iter()
    }

    /// Identifier (as text) -> canonical key; the shape a persisted-query
    /// server looks queries up by.
    pub fn inverted(&self) -> IndexMap<String, CanonicalKey> {
        self.entries.iter()
            .map(|(key, id)| (id.to_string(), key.clone()))
            .collect()
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl<'a> IntoIterator for &'a OutputMap {
    type Item = (&'a CanonicalKey, &'a Identifier);
    type IntoIter = indexmap::map::Iter<'a, CanonicalKey, Identifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
