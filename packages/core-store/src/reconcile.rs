//! Reconciliation of stored data against a schema.
//!
//! Reconciling edits data in place so that:
//! - entries present in both data and schema keep their stored value,
//! - entries only in the schema are added with the schema default,
//! - entries only in the data are removed.
//!
//! There is no rename detection: a key renamed in the schema is a removal
//! plus an insertion, and its stored value is dropped. Reconciling twice
//! against the same schema changes nothing the second time.

use std::collections::BTreeSet;

use crate::collection::CollectionData;
use crate::map::MapData;
use crate::scalar::ScalarData;
use crate::schema::{CollectionSchema, MapSchema, ScalarSchema, TableSchema};
use crate::table::TableData;

/// Converge a data shape onto its schema.
pub trait Reconcile {
    type Schema;

    fn reconcile(&mut self, schema: &Self::Schema);
}

/// Drop keys the schema does not allow, then add missing allowed keys with
/// their default.
pub fn reconcile_map(data: &mut MapData, schema: &MapSchema) {
    let entries = data.entries_mut();
    entries.retain(|key, _| schema.allows(key));
    for (key, default) in schema.iter() {
        if !entries.contains_key(key) {
            entries.insert(key.to_string(), default.to_string());
        }
    }
}

impl Reconcile for MapData {
    type Schema = MapSchema;

    fn reconcile(&mut self, schema: &MapSchema) {
        reconcile_map(self, schema);
    }
}

impl Reconcile for ScalarData {
    type Schema = ScalarSchema;

    /// Fills an empty value with the default; never overwrites a stored one.
    fn reconcile(&mut self, schema: &ScalarSchema) {
        if self.is_empty() {
            self.set(schema.default.clone());
        }
    }
}

impl Reconcile for TableData {
    type Schema = TableSchema;

    fn reconcile(&mut self, schema: &TableSchema) {
        self.replace_fields(schema.fields.to_defaults());

        // Fields of rows that already exist.
        for cells in self.rows_mut().values_mut() {
            reconcile_map(cells, &schema.fields);
        }

        let allowed: BTreeSet<&str> = schema.rows.iter().map(String::as_str).collect();
        self.rows_mut().retain(|row, _| allowed.contains(row.as_str()));
        for row in &schema.rows {
            if !self.row_exists(row) {
                self.insert_default_row(row.clone());
            }
        }
    }
}

impl Reconcile for CollectionData {
    type Schema = CollectionSchema;

    fn reconcile(&mut self, schema: &CollectionSchema) {
        let dictionaries = self.dictionaries_mut();
        dictionaries.retain(|name, _| schema.allows(name));
        for (name, dictionary_schema) in schema.dictionaries() {
            let data = dictionaries.entry(name.to_string()).or_default();
            reconcile_map(data, dictionary_schema);
        }
    }
}
