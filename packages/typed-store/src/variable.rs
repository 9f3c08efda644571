use statekeep_core_store::{Codec, Error, ScalarData, ScalarSchema};
use statekeep_json_store::{JsonCodec, LocalStore, StoreConfig};

use crate::convert::{normalize_bool, normalize_int, parse_bool, parse_int};

/// A single persisted string, filled with a default when empty.
pub struct VariableStore<C: Codec = JsonCodec> {
    store: LocalStore<ScalarData, C>,
}

impl VariableStore {
    /// Open and initialize the variable `<name>Variable` under `config.root`.
    pub fn open(config: &StoreConfig, default: impl Into<String>) -> Result<Self, Error> {
        Self::open_with_codec(config, ScalarSchema::new(default), JsonCodec)
    }
}

impl<C: Codec> VariableStore<C> {
    pub const SUFFIX: &'static str = "Variable";

    pub fn open_with_codec(
        config: &StoreConfig,
        schema: ScalarSchema,
        codec: C,
    ) -> Result<Self, Error> {
        let mut store = LocalStore::with_codec(config.with_suffix(Self::SUFFIX), schema, codec)?;
        store.initialize()?;
        Ok(Self { store })
    }

    pub fn get(&self) -> Result<&str, Error> {
        Ok(self.store.data()?.get())
    }

    pub fn set(&mut self, value: impl Into<String>) -> Result<(), Error> {
        self.store.data_mut()?.set(value);
        Ok(())
    }

    pub fn get_int(&self) -> Result<i64, Error> {
        parse_int(self.store.name(), self.get()?)
    }

    /// Store `value` if it parses as an integer; otherwise leave the
    /// variable unchanged.
    pub fn set_int(&mut self, value: &str) -> Result<(), Error> {
        let value = normalize_int(self.store.name(), value)?;
        self.set(value)
    }

    pub fn get_bool(&self) -> Result<bool, Error> {
        parse_bool(self.store.name(), self.get()?)
    }

    pub fn set_bool(&mut self, value: &str) -> Result<(), Error> {
        let value = normalize_bool(self.store.name(), value)?;
        self.set(value)
    }

    pub fn store(&self) -> &LocalStore<ScalarData, C> {
        &self.store
    }
}

crate::impl_lifecycle!(VariableStore);
