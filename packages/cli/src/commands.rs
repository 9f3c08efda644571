//! Command-line parsing and execution.
//!
//! Commands:
//! - `show <kind> <name> ...` - Open the store (reconciling it) and print its data
//! - `reset <kind> <name> ...` - Restore schema defaults, save, and print the result
//!
//! Kinds and their schema files:
//! - `variable <name> --default-file <path>`
//! - `dictionary <name> --schema <path>`
//! - `flags <name> --list <path>`
//! - `table <name> --fields <path> --rows <path>`
//! - `collection <name> --dictionary <path>...`

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use statekeep::schema_source::{
    load_collection_schema, load_flag_list, load_map_schema, load_scalar_schema,
    load_table_schema, DEFAULT_SEPARATOR,
};
use statekeep::{
    CollectionStore, DictionaryStore, JsonCodec, Lifecycle, SchemaError, StoreConfig, TableStore,
    VariableStore,
};

/// Inspect and reset statekeep stores
#[derive(Parser, Debug)]
#[command(name = "statekeep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the store files [default: platform data dir + "statekeep"]
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Separator between key and default value in schema files
    #[arg(long, global = true, default_value = DEFAULT_SEPARATOR, value_parser = non_empty)]
    pub separator: String,

    /// Log every file read and write
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open a store and print its reconciled data
    Show {
        #[command(subcommand)]
        store: StoreArgs,
    },
    /// Reset a store to its schema defaults and print the result
    Reset {
        #[command(subcommand)]
        store: StoreArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum StoreArgs {
    /// A single value
    Variable {
        name: String,
        /// File whose trimmed content is the default value
        #[arg(long)]
        default_file: PathBuf,
    },
    /// A key/value map
    Dictionary {
        name: String,
        /// File of `key<separator>default` lines
        #[arg(long)]
        schema: PathBuf,
    },
    /// A map of flags, each defaulting to false
    Flags {
        name: String,
        /// File with one flag name per line
        #[arg(long)]
        list: PathBuf,
    },
    /// Rows by fields
    Table {
        name: String,
        /// File of `field<separator>default` lines
        #[arg(long)]
        fields: PathBuf,
        /// File with one row name per line
        #[arg(long)]
        rows: PathBuf,
    },
    /// Named dictionaries, one schema file each
    Collection {
        name: String,
        /// Dictionary schema file, named by its file stem (repeatable)
        #[arg(long = "dictionary", required = true)]
        dictionaries: Vec<PathBuf>,
    },
}

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Store(#[from] statekeep::Error),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("no platform data directory found; pass --root")]
    NoRoot,

    #[error("failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

fn non_empty(value: &str) -> Result<String, String> {
    if value.is_empty() {
        Err("separator must not be empty".to_string())
    } else {
        Ok(value.to_string())
    }
}

/// Whether a command only opens the store or also resets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Show,
    Reset,
}

impl Cli {
    fn root(&self) -> Result<PathBuf, CliError> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => StoreConfig::default_root("statekeep").ok_or(CliError::NoRoot),
        }
    }
}

/// Run the parsed command and return the store's data as pretty JSON.
pub fn execute(cli: &Cli) -> Result<String, CliError> {
    let (action, store) = match &cli.command {
        Command::Show { store } => (Action::Show, store),
        Command::Reset { store } => (Action::Reset, store),
    };
    let root = cli.root()?;
    let separator = cli.separator.as_str();

    match store {
        StoreArgs::Variable { name, default_file } => {
            let schema = load_scalar_schema(default_file)?;
            let config = StoreConfig::new(root, name.as_str());
            let mut store = VariableStore::open_with_codec(&config, schema, JsonCodec)?;
            apply(action, &mut store)?;
            render(store.store().data()?)
        }
        StoreArgs::Dictionary { name, schema } => {
            let schema = load_map_schema(schema, separator)?;
            let mut store = DictionaryStore::open(&StoreConfig::new(root, name.as_str()), schema)?;
            apply(action, &mut store)?;
            render(store.data()?)
        }
        StoreArgs::Flags { name, list } => {
            let schema = load_flag_list(list)?;
            let keys: Vec<&str> = schema.keys().collect();
            let config = StoreConfig::new(root, name.as_str());
            let mut store = DictionaryStore::open_flags(&config, keys)?;
            apply(action, &mut store)?;
            render(store.data()?)
        }
        StoreArgs::Table { name, fields, rows } => {
            let schema = load_table_schema(fields, rows, separator)?;
            let mut store = TableStore::open(&StoreConfig::new(root, name.as_str()), schema)?;
            apply(action, &mut store)?;
            render(store.data()?)
        }
        StoreArgs::Collection { name, dictionaries } => {
            let schema = load_collection_schema(dictionaries, separator)?;
            let config = StoreConfig::new(root, name.as_str());
            let mut store = CollectionStore::open(&config, schema)?;
            apply(action, &mut store)?;
            render(store.data()?)
        }
    }
}

fn apply(action: Action, store: &mut dyn Lifecycle) -> Result<(), CliError> {
    if action == Action::Reset {
        log::info!("Resetting {}", store.name());
        store.reset_reconcile_save()?;
    }
    Ok(())
}

fn render<T: Serialize>(data: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(data)?)
}
