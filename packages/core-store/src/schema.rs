//! Validated schemas that stored data is reconciled against.
//!
//! A schema says which keys, rows, fields or dictionaries are currently
//! allowed and what value a newly introduced entry starts with. Schemas are
//! built by the caller (or parsed by `statekeep-schema-source`) and never
//! change during a reconciliation pass.

use std::collections::BTreeMap;

use crate::map::MapData;

/// Default for a scalar store. Only fills an empty value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScalarSchema {
    pub default: String,
}

impl ScalarSchema {
    pub fn new(default: impl Into<String>) -> Self {
        Self {
            default: default.into(),
        }
    }
}

/// Allowed keys of a map store, each with its default value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MapSchema {
    defaults: BTreeMap<String, String>,
}

impl MapSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allows(&self, key: &str) -> bool {
        self.defaults.contains_key(key)
    }

    pub fn default_for(&self, key: &str) -> Option<&str> {
        self.defaults.get(key).map(String::as_str)
    }

    /// Add an allowed key. Returns the previous default if the key was
    /// already allowed.
    pub fn insert(&mut self, key: impl Into<String>, default: impl Into<String>) -> Option<String> {
        self.defaults.insert(key.into(), default.into())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.defaults.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.defaults.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.defaults.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defaults.is_empty()
    }

    pub fn as_btree(&self) -> &BTreeMap<String, String> {
        &self.defaults
    }

    /// The data a map holds when every key is at its default.
    pub fn to_defaults(&self) -> MapData {
        MapData::from(self.defaults.clone())
    }
}

impl From<BTreeMap<String, String>> for MapSchema {
    fn from(defaults: BTreeMap<String, String>) -> Self {
        Self { defaults }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapSchema {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            defaults: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Allowed fields (with defaults) and allowed rows of a table store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableSchema {
    pub fields: MapSchema,
    pub rows: Vec<String>,
}

impl TableSchema {
    pub fn new(fields: MapSchema, rows: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            fields,
            rows: rows.into_iter().map(Into::into).collect(),
        }
    }

    pub fn allows_row(&self, row: &str) -> bool {
        self.rows.iter().any(|r| r == row)
    }
}

/// Per-dictionary schemas of a collection store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollectionSchema {
    dictionaries: BTreeMap<String, MapSchema>,
}

impl CollectionSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, dictionary: impl Into<String>, schema: MapSchema) -> Option<MapSchema> {
        self.dictionaries.insert(dictionary.into(), schema)
    }

    pub fn allows(&self, dictionary: &str) -> bool {
        self.dictionaries.contains_key(dictionary)
    }

    pub fn dictionary(&self, dictionary: &str) -> Option<&MapSchema> {
        self.dictionaries.get(dictionary)
    }

    pub fn dictionaries(&self) -> impl Iterator<Item = (&str, &MapSchema)> {
        self.dictionaries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.dictionaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dictionaries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, MapSchema)> for CollectionSchema {
    fn from_iter<I: IntoIterator<Item = (K, MapSchema)>>(iter: I) -> Self {
        Self {
            dictionaries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
