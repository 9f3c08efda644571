use statekeep_core_store::{CollectionData, CollectionSchema, Codec, Entry, Error, MapData};
use statekeep_json_store::{JsonCodec, LocalStore, StoreConfig};

use crate::convert::{normalize_bool, normalize_int, parse_bool, parse_int};

/// A persisted set of named dictionaries, e.g. one per locale.
pub struct CollectionStore<C: Codec = JsonCodec> {
    store: LocalStore<CollectionData, C>,
}

impl CollectionStore {
    /// Open and initialize the collection `<name>DictionaryCollection`.
    pub fn open(config: &StoreConfig, schema: CollectionSchema) -> Result<Self, Error> {
        Self::open_with_codec(config, schema, JsonCodec)
    }
}

impl<C: Codec> CollectionStore<C> {
    pub const SUFFIX: &'static str = "DictionaryCollection";

    pub fn open_with_codec(
        config: &StoreConfig,
        schema: CollectionSchema,
        codec: C,
    ) -> Result<Self, Error> {
        let mut store = LocalStore::with_codec(config.with_suffix(Self::SUFFIX), schema, codec)?;
        store.initialize()?;
        Ok(Self { store })
    }

    pub fn dictionary_exists(&self, dictionary: &str) -> Result<bool, Error> {
        Ok(self.store.data()?.dictionary_exists(dictionary))
    }

    pub fn contains(&self, dictionary: &str, key: &str) -> Result<bool, Error> {
        Ok(self.store.data()?.get(dictionary, key).is_some())
    }

    pub fn dictionaries(&self) -> Result<Vec<&str>, Error> {
        Ok(self.store.data()?.dictionaries().collect())
    }

    pub fn dictionary(&self, dictionary: &str) -> Result<&MapData, Error> {
        self.store
            .data()?
            .dictionary(dictionary)
            .ok_or_else(|| Error::not_found(Entry::Dictionary(dictionary.to_string())))
    }

    pub fn keys(&self, dictionary: &str) -> Result<Vec<&str>, Error> {
        Ok(self.dictionary(dictionary)?.keys().collect())
    }

    pub fn get(&self, dictionary: &str, key: &str) -> Result<&str, Error> {
        self.dictionary(dictionary)?.get(key).ok_or_else(|| {
            Error::not_found(Entry::DictionaryKey {
                dictionary: dictionary.to_string(),
                key: key.to_string(),
            })
        })
    }

    /// Write `key` inside `dictionary`, which must already exist.
    pub fn set(&mut self, dictionary: &str, key: &str, value: impl Into<String>) -> Result<(), Error> {
        self.store.data_mut()?.set(dictionary, key, value)
    }

    pub fn remove(&mut self, dictionary: &str, key: &str) -> Result<Option<String>, Error> {
        self.store.data_mut()?.remove(dictionary, key)
    }

    pub fn get_int(&self, dictionary: &str, key: &str) -> Result<i64, Error> {
        parse_int(&self.target(dictionary, key), self.get(dictionary, key)?)
    }

    pub fn set_int(&mut self, dictionary: &str, key: &str, value: &str) -> Result<(), Error> {
        let value = normalize_int(&self.target(dictionary, key), value)?;
        self.set(dictionary, key, value)
    }

    pub fn get_bool(&self, dictionary: &str, key: &str) -> Result<bool, Error> {
        parse_bool(&self.target(dictionary, key), self.get(dictionary, key)?)
    }

    pub fn set_bool(&mut self, dictionary: &str, key: &str, value: &str) -> Result<(), Error> {
        let value = normalize_bool(&self.target(dictionary, key), value)?;
        self.set(dictionary, key, value)
    }

    pub fn data(&self) -> Result<&CollectionData, Error> {
        self.store.data()
    }

    pub fn store(&self) -> &LocalStore<CollectionData, C> {
        &self.store
    }

    fn target(&self, dictionary: &str, key: &str) -> String {
        let entry = Entry::DictionaryKey {
            dictionary: dictionary.to_string(),
            key: key.to_string(),
        };
        format!("{} in {}", entry, self.store.name())
    }
}

crate::impl_lifecycle!(CollectionStore);
