//! # statekeep-cli
//!
//! Inspect and reset statekeep stores from the command line.
//!
//! Every command opens the named store with a schema loaded from text
//! files, which reconciles and saves it, then prints the store's data as
//! JSON.
//!
//! ## Usage
//!
//! ```bash
//! # Show a dictionary, creating it with defaults if needed
//! statekeep --root ./saves show dictionary settings --schema settings.txt
//!
//! # Restore a table to its defaults
//! statekeep --root ./saves reset table monsters --fields fields.txt --rows rows.txt
//!
//! # Localized strings, one file per dictionary
//! statekeep show collection locale --dictionary en.txt --dictionary de.txt
//! ```

pub mod commands;

pub use commands::{execute, Cli, CliError};

/// Install the process logger.
///
/// `RUST_LOG` wins when set; otherwise the filter is `warn`, or `debug` with
/// `verbose`.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
