//! Typed façades over statekeep stores
//!
//! One façade per data shape, each opened from a [`StoreConfig`] and a
//! schema and initialized before it is returned:
//! - `VariableStore`: one string (`<name>Variable`)
//! - `DictionaryStore`: key/value map (`<name>Dictionary`, or
//!   `<name>BooleanDictionary` for flags)
//! - `TableStore`: rows by fields (`<name>Table`)
//! - `CollectionStore`: named dictionaries (`<name>DictionaryCollection`)
//!
//! Every façade implements [`Lifecycle`], and offers `get_int`/`set_int` and
//! `get_bool`/`set_bool` next to the string accessors.
//!
//! # Example
//!
//! ```rust,no_run
//! use statekeep_typed_store::{DictionaryStore, StoreConfig};
//! use statekeep_typed_store::Lifecycle;
//!
//! let config = StoreConfig::new("/tmp/game", "settings");
//! let schema = [("volume", "7")].into_iter().collect();
//!
//! let mut settings = DictionaryStore::open(&config, schema)?;
//! settings.set_int("volume", "3")?;
//! settings.save()?;
//! # Ok::<(), statekeep_typed_store::Error>(())
//! ```

/// Forward `Lifecycle` to the façade's inner store.
macro_rules! impl_lifecycle {
    ($facade:ident) => {
        impl<C: statekeep_core_store::Codec> statekeep_core_store::Lifecycle for $facade<C> {
            fn name(&self) -> &str {
                self.store.name()
            }

            fn save(&mut self) -> Result<(), statekeep_core_store::Error> {
                self.store.save()
            }

            fn reset(&mut self) {
                self.store.reset()
            }

            fn reset_reconcile_save(&mut self) -> Result<(), statekeep_core_store::Error> {
                self.store.reset_reconcile_save()
            }
        }
    };
}

pub(crate) use impl_lifecycle;

mod collection;
pub mod convert;
mod dictionary;
mod table;
mod variable;

pub use collection::CollectionStore;
pub use dictionary::DictionaryStore;
pub use table::TableStore;
pub use variable::VariableStore;

pub use statekeep_core_store::{Error, Lifecycle};
pub use statekeep_json_store::StoreConfig;
