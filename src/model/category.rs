use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Category id to display name.
///
/// Stored in the order received. [`CategoryMap::entries`] lists canonical
/// integer ids first in numeric order, then every other id in received order,
/// the same way a JS object enumerates its keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryMap(IndexMap<String, String>);

/// `"7"` is an index; `"07"`, `"+7"` and `"4294967295"` are plain keys.
fn array_index(id: &str) -> Option<u32> {
    let n = id.parse::<u32>().ok()?;
    (n != u32::MAX && n.to_string() == id).then_some(n)
}

impl CategoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    /// Entries in display order.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .0
            .iter()
            .map(|(id, name)| (id.as_str(), name.as_str()))
            .collect();
        // Stable, so plain keys keep their received order.
        entries.sort_by_key(|(id, _)| match array_index(id) {
            Some(n) => (0, n),
            None => (1, 0),
        });
        entries
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CategoryMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
