//! Named collection of maps.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Entry, Error};
use crate::map::MapData;

/// A mapping from dictionary name to a [`MapData`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollectionData {
    dictionaries: BTreeMap<String, MapData>,
}

impl CollectionData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dictionary_exists(&self, dictionary: &str) -> bool {
        self.dictionaries.contains_key(dictionary)
    }

    pub fn dictionaries(&self) -> impl Iterator<Item = &str> {
        self.dictionaries.keys().map(String::as_str)
    }

    pub fn dictionary(&self, dictionary: &str) -> Option<&MapData> {
        self.dictionaries.get(dictionary)
    }

    pub fn set_dictionary(&mut self, dictionary: impl Into<String>, data: MapData) {
        self.dictionaries.insert(dictionary.into(), data);
    }

    pub fn remove_dictionary(&mut self, dictionary: &str) -> Option<MapData> {
        self.dictionaries.remove(dictionary)
    }

    pub fn get(&self, dictionary: &str, key: &str) -> Option<&str> {
        self.dictionaries.get(dictionary)?.get(key)
    }

    /// Write `key` inside an existing dictionary.
    pub fn set(
        &mut self,
        dictionary: &str,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), Error> {
        self.dictionary_mut(dictionary)?.set(key, value);
        Ok(())
    }

    pub fn remove(&mut self, dictionary: &str, key: &str) -> Result<Option<String>, Error> {
        Ok(self.dictionary_mut(dictionary)?.remove(key))
    }

    pub fn len(&self) -> usize {
        self.dictionaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dictionaries.is_empty()
    }

    fn dictionary_mut(&mut self, dictionary: &str) -> Result<&mut MapData, Error> {
        self.dictionaries
            .get_mut(dictionary)
            .ok_or_else(|| Error::not_found(Entry::Dictionary(dictionary.to_string())))
    }

    pub(crate) fn dictionaries_mut(&mut self) -> &mut BTreeMap<String, MapData> {
        &mut self.dictionaries
    }
}
