//! Store configuration: where a store's file lives and how it is encoded.

use std::path::PathBuf;

use lazy_static::lazy_static;
use regex::Regex;
use statekeep_core_store::{Error, Format};

/// Explicit configuration for one store.
///
/// The file path is `<root>/<name>Data.<ext>`, where `ext` follows the
/// format. Two stores must never share a configuration that resolves to the
/// same file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    pub root: PathBuf,
    pub name: String,
    pub format: Format,
}

impl StoreConfig {
    pub fn new(root: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            name: name.into(),
            format: Format::JSON,
        }
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Same root and format, with `suffix` appended to the name.
    pub fn with_suffix(&self, suffix: &str) -> Self {
        Self {
            root: self.root.clone(),
            name: format!("{}{}", self.name, suffix),
            format: self.format.clone(),
        }
    }

    /// The platform's per-user data directory joined with `app`, if the
    /// platform has one.
    pub fn default_root(app: &str) -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join(app))
    }

    pub fn file_path(&self) -> PathBuf {
        self.root
            .join(format!("{}Data.{}", self.name, self.format.extension()))
    }

    /// Check that the name can be used as a file stem.
    pub fn validate(&self) -> Result<(), Error> {
        lazy_static! {
            static ref STORE_NAME: Regex = Regex::new(r"^[\w-][\w.-]*$").unwrap();
        }

        if STORE_NAME.is_match(&self.name) {
            Ok(())
        } else {
            Err(Error::InvalidName {
                name: self.name.clone(),
                message: concat!(
                    "store names may only contain letters, digits, '_', '-' and '.', ",
                    "and may not start with '.'"
                )
                .to_string(),
            })
        }
    }
}
