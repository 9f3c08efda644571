//! statekeep: local persistence for application state that reconciles
//! itself against a schema on every load.
//!
//! Saved data keeps every value whose key is still in the schema, loses the
//! keys that were removed, and picks up defaults for the keys that were
//! added, so schema changes between releases need no migration step.
//!
//! This crate re-exports the typed façades, the schema loaders and the
//! lower-level store types, and adds [`DataManager`] for version-gated
//! resets across stores.

mod manager;

pub use manager::{DataManager, StartOutcome};

pub use statekeep_core_store::{
    CollectionData, CollectionSchema, DataShape, Entry, Error, Lifecycle, MapData, MapSchema,
    Reconcile, ScalarData, ScalarSchema, Shape, ShapeKind, ShapeRef, TableData, TableSchema,
    ValueKind,
};
pub use statekeep_json_store::{JsonCodec, LocalStore, StoreConfig};
pub use statekeep_schema_source as schema_source;
pub use statekeep_schema_source::SchemaError;
pub use statekeep_typed_store::{CollectionStore, DictionaryStore, TableStore, VariableStore};
