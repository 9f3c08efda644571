use statekeep_core_store::{Codec, Entry, Error, MapData, MapSchema};
use statekeep_json_store::{JsonCodec, LocalStore, StoreConfig};

use crate::convert::{format_bool, normalize_bool, normalize_int, parse_bool, parse_int};

/// A persisted string-to-string map whose keys follow a [`MapSchema`].
///
/// Setting a key outside the schema is allowed; the key is dropped the next
/// time the store is reconciled.
pub struct DictionaryStore<C: Codec = JsonCodec> {
    store: LocalStore<MapData, C>,
}

impl DictionaryStore {
    /// Open and initialize the dictionary `<name>Dictionary`.
    pub fn open(config: &StoreConfig, schema: MapSchema) -> Result<Self, Error> {
        Self::open_with_codec(config, schema, JsonCodec)
    }

    /// Open and initialize the boolean dictionary `<name>BooleanDictionary`,
    /// where every key defaults to `false`.
    pub fn open_flags<K: Into<String>>(
        config: &StoreConfig,
        keys: impl IntoIterator<Item = K>,
    ) -> Result<Self, Error> {
        let schema = keys
            .into_iter()
            .map(|key| (key, format_bool(false)))
            .collect();
        Self::open_suffixed(config, Self::FLAGS_SUFFIX, schema, JsonCodec)
    }
}

impl<C: Codec> DictionaryStore<C> {
    pub const SUFFIX: &'static str = "Dictionary";
    pub const FLAGS_SUFFIX: &'static str = "BooleanDictionary";

    pub fn open_with_codec(config: &StoreConfig, schema: MapSchema, codec: C) -> Result<Self, Error> {
        Self::open_suffixed(config, Self::SUFFIX, schema, codec)
    }

    fn open_suffixed(
        config: &StoreConfig,
        suffix: &str,
        schema: MapSchema,
        codec: C,
    ) -> Result<Self, Error> {
        let mut store = LocalStore::with_codec(config.with_suffix(suffix), schema, codec)?;
        store.initialize()?;
        Ok(Self { store })
    }

    pub fn contains(&self, key: &str) -> Result<bool, Error> {
        Ok(self.store.data()?.contains(key))
    }

    pub fn keys(&self) -> Result<Vec<&str>, Error> {
        Ok(self.store.data()?.keys().collect())
    }

    pub fn get(&self, key: &str) -> Result<&str, Error> {
        self.store
            .data()?
            .get(key)
            .ok_or_else(|| Error::not_found(Entry::Key(key.to_string())))
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<(), Error> {
        self.store.data_mut()?.set(key, value);
        Ok(())
    }

    pub fn remove(&mut self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.store.data_mut()?.remove(key))
    }

    pub fn get_int(&self, key: &str) -> Result<i64, Error> {
        parse_int(&self.target(key), self.get(key)?)
    }

    pub fn set_int(&mut self, key: &str, value: &str) -> Result<(), Error> {
        let value = normalize_int(&self.target(key), value)?;
        self.set(key, value)
    }

    pub fn get_bool(&self, key: &str) -> Result<bool, Error> {
        parse_bool(&self.target(key), self.get(key)?)
    }

    pub fn set_bool(&mut self, key: &str, value: &str) -> Result<(), Error> {
        let value = normalize_bool(&self.target(key), value)?;
        self.set(key, value)
    }

    pub fn data(&self) -> Result<&MapData, Error> {
        self.store.data()
    }

    pub fn store(&self) -> &LocalStore<MapData, C> {
        &self.store
    }

    fn target(&self, key: &str) -> String {
        format!("{} in {}", Entry::Key(key.to_string()), self.store.name())
    }
}

crate::impl_lifecycle!(DictionaryStore);
