use statekeep_core_store::{Codec, Entry, Error, MapData, TableData, TableSchema};
use statekeep_json_store::{JsonCodec, LocalStore, StoreConfig};

use crate::convert::{normalize_bool, normalize_int, parse_bool, parse_int};

/// A persisted table: named rows sharing one set of fields.
///
/// Writes to a field outside the schema are ignored. Writes to a row that
/// does not exist fail with `NotFound`.
pub struct TableStore<C: Codec = JsonCodec> {
    store: LocalStore<TableData, C>,
}

impl TableStore {
    /// Open and initialize the table `<name>Table`.
    pub fn open(config: &StoreConfig, schema: TableSchema) -> Result<Self, Error> {
        Self::open_with_codec(config, schema, JsonCodec)
    }
}

impl<C: Codec> TableStore<C> {
    pub const SUFFIX: &'static str = "Table";

    pub fn open_with_codec(config: &StoreConfig, schema: TableSchema, codec: C) -> Result<Self, Error> {
        let mut store = LocalStore::with_codec(config.with_suffix(Self::SUFFIX), schema, codec)?;
        store.initialize()?;
        Ok(Self { store })
    }

    pub fn field_exists(&self, field: &str) -> Result<bool, Error> {
        Ok(self.store.data()?.field_exists(field))
    }

    pub fn row_exists(&self, row: &str) -> Result<bool, Error> {
        Ok(self.store.data()?.row_exists(row))
    }

    pub fn fields(&self) -> Result<Vec<&str>, Error> {
        Ok(self.store.data()?.fields().keys().collect())
    }

    pub fn rows(&self) -> Result<Vec<&str>, Error> {
        Ok(self.store.data()?.rows().collect())
    }

    pub fn row(&self, row: &str) -> Result<&MapData, Error> {
        self.store
            .data()?
            .row(row)
            .ok_or_else(|| Error::not_found(Entry::Row(row.to_string())))
    }

    pub fn get(&self, row: &str, field: &str) -> Result<&str, Error> {
        self.row(row)?.get(field).ok_or_else(|| {
            Error::not_found(Entry::Field {
                row: row.to_string(),
                field: field.to_string(),
            })
        })
    }

    /// Write one cell. Returns `Ok(false)` when `field` is not a table field.
    pub fn set(&mut self, row: &str, field: &str, value: impl Into<String>) -> Result<bool, Error> {
        let written = self.store.data_mut()?.set(row, field, value)?;
        if !written {
            log::debug!(
                "Ignoring write to unknown field '{}' of {}",
                field,
                self.store.name()
            );
        }
        Ok(written)
    }

    /// Merge `values` into `row`, creating the row if needed.
    ///
    /// Unknown fields are ignored and unspecified fields keep their current
    /// (or default) value. A row outside the schema is dropped at the next
    /// reconciliation.
    pub fn set_row(&mut self, row: &str, values: &MapData) -> Result<(), Error> {
        self.store.data_mut()?.set_row(row, values);
        Ok(())
    }

    pub fn remove_row(&mut self, row: &str) -> Result<Option<MapData>, Error> {
        Ok(self.store.data_mut()?.remove_row(row))
    }

    pub fn get_int(&self, row: &str, field: &str) -> Result<i64, Error> {
        parse_int(&self.target(row, field), self.get(row, field)?)
    }

    pub fn set_int(&mut self, row: &str, field: &str, value: &str) -> Result<bool, Error> {
        let value = normalize_int(&self.target(row, field), value)?;
        self.set(row, field, value)
    }

    pub fn get_bool(&self, row: &str, field: &str) -> Result<bool, Error> {
        parse_bool(&self.target(row, field), self.get(row, field)?)
    }

    pub fn set_bool(&mut self, row: &str, field: &str, value: &str) -> Result<bool, Error> {
        let value = normalize_bool(&self.target(row, field), value)?;
        self.set(row, field, value)
    }

    pub fn data(&self) -> Result<&TableData, Error> {
        self.store.data()
    }

    pub fn store(&self) -> &LocalStore<TableData, C> {
        &self.store
    }

    fn target(&self, row: &str, field: &str) -> String {
        let entry = Entry::Field {
            row: row.to_string(),
            field: field.to_string(),
        };
        format!("{} in {}", entry, self.store.name())
    }
}

crate::impl_lifecycle!(TableStore);
