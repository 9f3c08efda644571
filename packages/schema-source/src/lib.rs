//! Schema text for statekeep stores
//!
//! Schemas are usually authored as small text files shipped with the
//! application:
//!
//! ```text
//! # settings.txt: key, separator, default
//! volume: 7
//! difficulty: normal
//! ```
//!
//! Flag lists and row lists hold one name per line. A collection is a set
//! of map schema files, one dictionary per file, named by file stem.

mod error;
mod load;
mod parse;

pub use error::SchemaError;
pub use load::{
    load_collection_schema, load_flag_list, load_map_schema, load_scalar_schema,
    load_table_schema,
};
pub use parse::{
    parse_flag_list, parse_map_schema, parse_row_list, parse_scalar_schema, parse_table_schema,
    DEFAULT_SEPARATOR, FLAG_DEFAULT,
};
