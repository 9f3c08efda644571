//! Core statekeep: data shapes, schemas and reconciliation
//!
//! This layer knows what persisted state looks like but not where it lives:
//! - `DataShape`: the four storable shapes (scalar, map, table, collection)
//! - `*Schema`: what a shape is currently allowed to hold, with defaults
//! - `Reconcile`: converges stored data onto a schema, keeping overlap
//! - `Codec`: turns a `DataShape` into bytes and back
//! - `Lifecycle`: the save/reset surface a host drives
//!
//! Stores that bind a shape to a file live in `statekeep-json-store`.
//!
//! # Example
//!
//! ```rust
//! use statekeep_core_store::{MapData, MapSchema, Reconcile};
//!
//! let mut data: MapData = [("a", "9"), ("c", "3")].into_iter().collect();
//! let schema: MapSchema = [("a", "1"), ("b", "2")].into_iter().collect();
//!
//! data.reconcile(&schema);
//!
//! assert_eq!(data.get("a"), Some("9"));
//! assert_eq!(data.get("b"), Some("2"));
//! assert!(!data.contains("c"));
//! ```

pub use bytes::Bytes;

mod collection;
mod error;
mod format;
mod map;
pub mod reconcile;
mod scalar;
mod schema;
mod shape;
mod table;
mod traits;

pub use collection::CollectionData;
pub use error::{Entry, Error, ValueKind};
pub use format::Format;
pub use map::MapData;
pub use reconcile::{reconcile_map, Reconcile};
pub use scalar::ScalarData;
pub use schema::{CollectionSchema, MapSchema, ScalarSchema, TableSchema};
pub use shape::{DataShape, Shape, ShapeKind, ShapeRef};
pub use table::TableData;
pub use traits::{Codec, Lifecycle};
