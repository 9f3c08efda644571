//! String-keyed map of string values.

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A mapping from string key to string value.
///
/// Uses `BTreeMap` so encodings are deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MapData {
    entries: BTreeMap<String, String>,
}

impl MapData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Insert or overwrite `key`. Returns the previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_btree(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut BTreeMap<String, String> {
        &mut self.entries
    }
}

impl From<BTreeMap<String, String>> for MapData {
    fn from(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MapData {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let mut map = MapData::new();
        assert_eq!(map.set("volume", "7"), None);
        assert_eq!(map.set("volume", "8"), Some("7".to_string()));
        assert_eq!(map.get("volume"), Some("8"));
        assert!(map.contains("volume"));

        assert_eq!(map.remove("volume"), Some("8".to_string()));
        assert!(map.is_empty());
        assert_eq!(map.get("volume"), None);
    }

    #[test]
    fn keys_are_case_sensitive() {
        let map: MapData = [("Volume", "1"), ("volume", "2")].into_iter().collect();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("Volume"), Some("1"));
        assert_eq!(map.get("volume"), Some("2"));
    }

    #[test]
    fn keys_iterate_in_order() {
        let map: MapData = [("b", "2"), ("a", "1"), ("c", "3")].into_iter().collect();
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn encodes_as_plain_object() {
        let map: MapData = [("a", "1")].into_iter().collect();
        assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"a":"1"}"#);
    }
}
