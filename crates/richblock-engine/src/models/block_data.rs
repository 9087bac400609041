use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

/// Opaque per-block annotation store.
///
/// Values are arbitrary JSON-shaped data; the engine never interprets them.
/// Like the other block fields this is persistent: `with` and `merged` build
/// a new map and leave the original alone.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockData(Arc<BTreeMap<String, Value>>);

impl BlockData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn with(&self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut entries = (*self.0).clone();
        entries.insert(key.into(), value.into());
        Self(Arc::new(entries))
    }

    /// Shallow merge; entries from `other` win.
    #[must_use]
    pub fn merged(&self, other: &BlockData) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        let mut entries = (*self.0).clone();
        entries.extend(other.0.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self(Arc::new(entries))
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl FromIterator<(String, Value)> for BlockData {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(Arc::new(iter.into_iter().collect()))
    }
}
