//! Error types for statekeep stores.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::format::Format;

/// Something a lookup expected to find inside a data shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A key of a map store.
    Key(String),
    /// A table row.
    Row(String),
    /// A field of a table row.
    Field { row: String, field: String },
    /// A dictionary of a collection.
    Dictionary(String),
    /// A key inside one dictionary of a collection.
    DictionaryKey { dictionary: String, key: String },
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Key(key) => write!(f, "key '{}'", key),
            Entry::Row(row) => write!(f, "row '{}'", row),
            Entry::Field { row, field } => write!(f, "field '{}' of row '{}'", field, row),
            Entry::Dictionary(name) => write!(f, "dictionary '{}'", name),
            Entry::DictionaryKey { dictionary, key } => {
                write!(f, "key '{}' of dictionary '{}'", key, dictionary)
            }
        }
    }
}

/// The type a typed accessor expected a stored string to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Integer,
    Boolean,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Integer => write!(f, "integer"),
            ValueKind::Boolean => write!(f, "boolean"),
        }
    }
}

/// Errors produced by stores, codecs and façades.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The store file exists but does not decode into the expected shape.
    ///
    /// Fatal to `initialize()`; the caller decides whether to discard the
    /// file or halt.
    #[error("store file {} is corrupt: {message}", path.display())]
    CorruptStore { path: PathBuf, message: String },

    /// A key, row, field or dictionary that should exist does not.
    #[error("{0} not found")]
    NotFound(Entry),

    /// A typed accessor got a string that does not parse as its type.
    #[error("value {value:?} for {target} is not a valid {expected}")]
    Validation {
        target: String,
        value: String,
        expected: ValueKind,
    },

    /// Data was accessed before `initialize()` completed.
    #[error("store '{name}' has not been initialized")]
    Uninitialized { name: String },

    /// The store name cannot be used to derive a file path.
    #[error("invalid store name {name:?}: {message}")]
    InvalidName { name: String, message: String },

    /// Reading or writing the store file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Codec failed to decode bytes.
    #[error("decode error ({format}): {message}")]
    Decode { format: Format, message: String },

    /// Codec failed to encode a data shape.
    #[error("encode error ({format}): {message}")]
    Encode { format: Format, message: String },

    /// Format not supported by codec.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(Format),
}

impl Error {
    pub fn not_found(entry: Entry) -> Self {
        Error::NotFound(entry)
    }

    /// True for errors a caller can recover from locally.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }
}
