use std::io;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum SchemaError {
    /// The same key appears twice in one schema text.
    #[error("line {line}: duplicate key '{key}'")]
    DuplicateKey { line: usize, key: String },

    #[error("key/value separator must not be empty")]
    EmptySeparator,

    /// Two schema files would name the same dictionary.
    #[error("dictionary '{name}' is defined by both {} and {}", first.display(), second.display())]
    DuplicateDictionary {
        name: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// A schema file path has no stem to name its dictionary.
    #[error("cannot derive a dictionary name from {}", path.display())]
    UnnamedDictionary { path: PathBuf },

    /// A parse error inside a schema file.
    #[error("{}: {source}", path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<SchemaError>,
    },

    #[error("failed to read schema file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SchemaError {
    /// The innermost error, skipping file context.
    pub fn root(&self) -> &SchemaError {
        match self {
            SchemaError::InFile { source, .. } => source.root(),
            other => other,
        }
    }
}
