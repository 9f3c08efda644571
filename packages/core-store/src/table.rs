//! Rows of named fields with per-field defaults.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Entry, Error};
use crate::map::MapData;

/// A table: a set of fields with default values, and named rows holding a
/// value for each field.
///
/// Once reconciled, every row holds exactly the current field set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableData {
    fields: MapData,
    rows: BTreeMap<String, MapData>,
}

impl TableData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field names with their default values.
    pub fn fields(&self) -> &MapData {
        &self.fields
    }

    pub fn field_exists(&self, field: &str) -> bool {
        self.fields.contains(field)
    }

    pub fn row_exists(&self, row: &str) -> bool {
        self.rows.contains_key(row)
    }

    pub fn rows(&self) -> impl Iterator<Item = &str> {
        self.rows.keys().map(String::as_str)
    }

    pub fn row(&self, row: &str) -> Option<&MapData> {
        self.rows.get(row)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, row: &str, field: &str) -> Option<&str> {
        self.rows.get(row)?.get(field)
    }

    /// Write one cell.
    ///
    /// Returns `Ok(false)` without touching anything when `field` is not one
    /// of the table's fields. Fails with `NotFound` when `row` is absent.
    pub fn set(&mut self, row: &str, field: &str, value: impl Into<String>) -> Result<bool, Error> {
        if !self.fields.contains(field) {
            return Ok(false);
        }
        let cells = self
            .rows
            .get_mut(row)
            .ok_or_else(|| Error::not_found(Entry::Row(row.to_string())))?;
        cells.set(field, value);
        Ok(true)
    }

    /// Create (or replace) `row` with every field at its default value.
    pub fn insert_default_row(&mut self, row: impl Into<String>) {
        self.rows.insert(row.into(), self.fields.clone());
    }

    /// Merge `values` into `row`.
    ///
    /// Only fields already present in the row (or, for a new row, the
    /// table's fields) are kept; values for other fields are ignored, and
    /// fields missing from `values` keep their current or default value.
    pub fn set_row(&mut self, row: impl Into<String>, values: &MapData) {
        let row = row.into();
        let base = self.rows.get(&row).unwrap_or(&self.fields);
        let merged: MapData = base
            .iter()
            .map(|(field, current)| {
                let value = values.get(field).unwrap_or(current);
                (field.clone(), value.to_string())
            })
            .collect();
        self.rows.insert(row, merged);
    }

    pub fn remove_row(&mut self, row: &str) -> Option<MapData> {
        self.rows.remove(row)
    }

    pub(crate) fn replace_fields(&mut self, fields: MapData) {
        self.fields = fields;
    }

    pub(crate) fn rows_mut(&mut self) -> &mut BTreeMap<String, MapData> {
        &mut self.rows
    }
}
