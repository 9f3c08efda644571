//! Parsers for schema text.
//!
//! Every format is line based. Lines are trimmed; blank lines and lines
//! starting with `#` are skipped.

use statekeep_core_store::{MapSchema, ScalarSchema, TableSchema};

use crate::SchemaError;

/// Separator between key and default value when none is configured.
pub const DEFAULT_SEPARATOR: &str = ":";

/// Default value of every key in a flag list.
pub const FLAG_DEFAULT: &str = "false";

/// Non-blank, non-comment lines with their 1-based line numbers.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`.
fn entries(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .flat_map(|(index, line)| line.split('\r').map(move |part| (index + 1, part.trim())))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

fn insert_unique(
    schema: &mut MapSchema,
    line: usize,
    key: &str,
    default: &str,
) -> Result<(), SchemaError> {
    if schema.allows(key) {
        return Err(SchemaError::DuplicateKey {
            line,
            key: key.to_string(),
        });
    }
    schema.insert(key, default);
    Ok(())
}

/// Parse `key<separator>default` lines.
///
/// The key is everything before the first separator and the default is the
/// rest, both trimmed. Lines without the separator are skipped. An empty
/// `separator` is rejected with [`SchemaError::EmptySeparator`].
///
/// ```rust
/// use statekeep_schema_source::parse_map_schema;
///
/// let schema = parse_map_schema("# audio\nvolume: 7\nmuted : false\n", ":").unwrap();
/// assert_eq!(schema.default_for("volume"), Some("7"));
/// assert_eq!(schema.default_for("muted"), Some("false"));
/// ```
pub fn parse_map_schema(text: &str, separator: &str) -> Result<MapSchema, SchemaError> {
    if separator.is_empty() {
        return Err(SchemaError::EmptySeparator);
    }

    let mut schema = MapSchema::new();
    for (line, entry) in entries(text) {
        let Some((key, default)) = entry.split_once(separator) else {
            log::debug!("Skipping line {} without '{}'", line, separator);
            continue;
        };
        insert_unique(&mut schema, line, key.trim(), default.trim())?;
    }
    Ok(schema)
}

/// Parse one key per line, each defaulting to `false`.
pub fn parse_flag_list(text: &str) -> Result<MapSchema, SchemaError> {
    let mut schema = MapSchema::new();
    for (line, key) in entries(text) {
        insert_unique(&mut schema, line, key, FLAG_DEFAULT)?;
    }
    Ok(schema)
}

/// Parse one row name per line. Order is kept; repeats are dropped.
pub fn parse_row_list(text: &str) -> Vec<String> {
    let mut rows: Vec<String> = Vec::new();
    for (_, row) in entries(text) {
        if !rows.iter().any(|existing| existing == row) {
            rows.push(row.to_string());
        }
    }
    rows
}

/// The whole text, trimmed, is the default.
pub fn parse_scalar_schema(text: &str) -> ScalarSchema {
    ScalarSchema::new(text.trim())
}

pub fn parse_table_schema(
    fields_text: &str,
    rows_text: &str,
    separator: &str,
) -> Result<TableSchema, SchemaError> {
    let fields = parse_map_schema(fields_text, separator)?;
    Ok(TableSchema::new(fields, parse_row_list(rows_text)))
}
