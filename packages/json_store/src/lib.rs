//! File-backed stores for statekeep
//!
//! - `JsonCodec`: the default codec, a tagged JSON envelope per file
//! - `StoreConfig`: root directory, store name and format
//! - `LocalStore`: binds one data shape to one file and runs the
//!   load/reconcile/save lifecycle
//!
//! # Example
//!
//! ```rust,no_run
//! use statekeep_json_store::{LocalStore, StoreConfig};
//! use statekeep_core_store::{MapData, MapSchema};
//!
//! let schema: MapSchema = [("volume", "7")].into_iter().collect();
//! let mut store: LocalStore<MapData> =
//!     LocalStore::new(StoreConfig::new("/tmp/game", "settings"), schema)?;
//!
//! store.initialize()?;
//! store.data_mut()?.set("volume", "3");
//! store.save()?;
//! # Ok::<(), statekeep_core_store::Error>(())
//! ```

mod codec;
mod config;
mod local_disk;

pub use codec::JsonCodec;
pub use config::StoreConfig;
pub use local_disk::LocalStore;

pub use statekeep_core_store::{Codec, Error, Format, Lifecycle, Shape};
