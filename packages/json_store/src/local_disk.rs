use std::{fs, io, path};

use bytes::Bytes;
use statekeep_core_store::{Codec, Error, Format, Lifecycle, Reconcile, Shape};

use crate::{JsonCodec, StoreConfig};

/// A store binding one data shape to one file.
///
/// The store is created uninitialized; [`LocalStore::initialize`] loads the
/// file (or bootstraps a fresh one), reconciles it against the schema given
/// at construction, and writes the result back. Until that succeeds the data
/// is not observable.
///
/// There is no internal locking. Using one store from several threads, or
/// pointing two stores at the same file, is not supported.
///
/// Writes truncate and rewrite the file in place. An interrupted write can
/// leave a truncated file, which the next `initialize()` reports as
/// [`Error::CorruptStore`].
pub struct LocalStore<S: Shape, C: Codec = JsonCodec> {
    name: String,
    file_path: path::PathBuf,
    format: Format,
    codec: C,
    schema: S::Schema,
    data: Option<S>,
}

impl<S: Shape> LocalStore<S, JsonCodec> {
    /// Create an uninitialized JSON-backed store.
    pub fn new(config: StoreConfig, schema: S::Schema) -> Result<Self, Error> {
        Self::with_codec(config, schema, JsonCodec)
    }
}

impl<S: Shape, C: Codec> LocalStore<S, C> {
    pub fn with_codec(config: StoreConfig, schema: S::Schema, codec: C) -> Result<Self, Error> {
        config.validate()?;

        if !codec.supports(&config.format) {
            return Err(Error::UnsupportedFormat(config.format));
        }

        // The root may not exist yet, but if it does it has to be a directory.
        if config.root.exists() && !config.root.is_dir() {
            return Err(Error::Io {
                path: config.root.clone(),
                source: io::Error::other("Root path must be a directory."),
            });
        }

        Ok(LocalStore {
            file_path: config.file_path(),
            name: config.name,
            format: config.format,
            codec,
            schema,
            data: None,
        })
    }

    /// Load or bootstrap, reconcile, then save.
    ///
    /// A missing file is created immediately with the empty default before
    /// reconciliation runs. Any failure (including a corrupt file) leaves
    /// the store uninitialized.
    pub fn initialize(&mut self) -> Result<(), Error> {
        let mut data = match self.load()? {
            Some(data) => data,
            None => {
                log::info!(
                    "A new {} file will be made at {}",
                    self.name,
                    self.file_path.display()
                );
                let fresh = S::default();
                self.write(&fresh)?;
                fresh
            }
        };

        data.reconcile(&self.schema);
        self.write(&data)?;
        self.data = Some(data);

        Ok(())
    }

    /// Persist the in-memory data. The in-memory data is left as is.
    pub fn save(&mut self) -> Result<(), Error> {
        let data = self.data()?;
        self.write(data)
    }

    /// Replace the in-memory data with a fresh, unreconciled default.
    ///
    /// Does nothing on a store that was never initialized, so a later
    /// `save()` still fails instead of overwriting the file.
    pub fn reset(&mut self) {
        match self.data.as_mut() {
            Some(data) => *data = S::default(),
            None => log::warn!("Ignoring reset of uninitialized store {}", self.name),
        }
    }

    /// Restore schema-correct defaults and persist them.
    pub fn reset_reconcile_save(&mut self) -> Result<(), Error> {
        let Some(data) = self.data.as_mut() else {
            return Err(Error::Uninitialized {
                name: self.name.clone(),
            });
        };
        *data = S::default();
        data.reconcile(&self.schema);
        self.save()
    }

    pub fn is_initialized(&self) -> bool {
        self.data.is_some()
    }

    pub fn data(&self) -> Result<&S, Error> {
        self.data.as_ref().ok_or_else(|| Error::Uninitialized {
            name: self.name.clone(),
        })
    }

    pub fn data_mut(&mut self) -> Result<&mut S, Error> {
        match self.data.as_mut() {
            Some(data) => Ok(data),
            None => Err(Error::Uninitialized {
                name: self.name.clone(),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file_path(&self) -> &path::Path {
        &self.file_path
    }

    pub fn format(&self) -> &Format {
        &self.format
    }

    pub fn schema(&self) -> &S::Schema {
        &self.schema
    }

    fn io_error(&self, source: io::Error) -> Error {
        Error::Io {
            path: self.file_path.clone(),
            source,
        }
    }

    fn corrupt(&self, message: String) -> Error {
        Error::CorruptStore {
            path: self.file_path.clone(),
            message,
        }
    }

    fn load(&self) -> Result<Option<S>, Error> {
        log::debug!("Reading {}...", self.file_path.display());

        let bytes = match fs::read(&self.file_path) {
            Ok(bytes) => Bytes::from(bytes),
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(self.io_error(error)),
        };

        let shape = self
            .codec
            .decode(&bytes, &self.format)
            .map_err(|error| match error {
                Error::Decode { message, .. } => self.corrupt(message),
                other => other,
            })?;

        match S::from_data_shape(shape) {
            Ok(data) => Ok(Some(data)),
            Err(found) => Err(self.corrupt(format!(
                "expected {} data, found {} data",
                S::KIND,
                found.kind()
            ))),
        }
    }

    fn write(&self, data: &S) -> Result<(), Error> {
        use io::Write;

        let bytes = self.codec.encode(data.as_shape_ref(), &self.format)?;

        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent).map_err(|error| self.io_error(error))?;
        }

        log::debug!("Writing {}...", self.file_path.display());
        let mut f = fs::File::create(&self.file_path).map_err(|error| self.io_error(error))?;
        f.write_all(&bytes).map_err(|error| self.io_error(error))?;

        Ok(())
    }
}

impl<S: Shape, C: Codec> Lifecycle for LocalStore<S, C> {
    fn name(&self) -> &str {
        LocalStore::name(self)
    }

    fn save(&mut self) -> Result<(), Error> {
        LocalStore::save(self)
    }

    fn reset(&mut self) {
        LocalStore::reset(self)
    }

    fn reset_reconcile_save(&mut self) -> Result<(), Error> {
        LocalStore::reset_reconcile_save(self)
    }
}
