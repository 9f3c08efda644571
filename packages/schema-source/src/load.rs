//! Load schemas from files.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use statekeep_core_store::{CollectionSchema, MapSchema, ScalarSchema, TableSchema};

use crate::parse::{parse_flag_list, parse_map_schema, parse_row_list, parse_scalar_schema};
use crate::SchemaError;

fn read(path: &Path) -> Result<String, SchemaError> {
    log::debug!("Reading schema {}...", path.display());
    fs::read_to_string(path).map_err(|source| SchemaError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn in_file(path: &Path) -> impl FnOnce(SchemaError) -> SchemaError + '_ {
    move |source| SchemaError::InFile {
        path: path.to_path_buf(),
        source: Box::new(source),
    }
}

pub fn load_map_schema(path: impl AsRef<Path>, separator: &str) -> Result<MapSchema, SchemaError> {
    let path = path.as_ref();
    parse_map_schema(&read(path)?, separator).map_err(in_file(path))
}

pub fn load_flag_list(path: impl AsRef<Path>) -> Result<MapSchema, SchemaError> {
    let path = path.as_ref();
    parse_flag_list(&read(path)?).map_err(in_file(path))
}

pub fn load_scalar_schema(path: impl AsRef<Path>) -> Result<ScalarSchema, SchemaError> {
    Ok(parse_scalar_schema(&read(path.as_ref())?))
}

/// Load table fields (`key<separator>default` lines) and row names from two
/// files.
pub fn load_table_schema(
    fields_path: impl AsRef<Path>,
    rows_path: impl AsRef<Path>,
    separator: &str,
) -> Result<TableSchema, SchemaError> {
    let fields = load_map_schema(fields_path, separator)?;
    let rows = parse_row_list(&read(rows_path.as_ref())?);
    Ok(TableSchema::new(fields, rows))
}

/// Load one dictionary per file, each named by its file stem.
///
/// `locale/en.txt` and `locale/de.txt` produce the dictionaries `en` and
/// `de`. Two files with the same stem are an error.
pub fn load_collection_schema<P: AsRef<Path>>(
    paths: impl IntoIterator<Item = P>,
    separator: &str,
) -> Result<CollectionSchema, SchemaError> {
    let mut sources: BTreeMap<String, PathBuf> = BTreeMap::new();
    let mut schema = CollectionSchema::new();

    for path in paths {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .ok_or_else(|| SchemaError::UnnamedDictionary {
                path: path.to_path_buf(),
            })?;

        if let Some(first) = sources.get(&name) {
            return Err(SchemaError::DuplicateDictionary {
                name,
                first: first.clone(),
                second: path.to_path_buf(),
            });
        }

        schema.insert(name.clone(), load_map_schema(path, separator)?);
        sources.insert(name, path.to_path_buf());
    }

    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, text: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn load_map_and_flags() {
        let dir = tempfile::tempdir().unwrap();
        let settings = write(dir.path(), "settings.txt", "volume: 7\n");
        let flags = write(dir.path(), "flags.txt", "tutorial_done\n");

        let schema = load_map_schema(&settings, ":").unwrap();
        assert_eq!(schema.default_for("volume"), Some("7"));

        let schema = load_flag_list(&flags).unwrap();
        assert_eq!(schema.default_for("tutorial_done"), Some("false"));
    }

    #[test]
    fn load_table_reads_rows_file() {
        let dir = tempfile::tempdir().unwrap();
        let fields = write(dir.path(), "fields.txt", "hp: 100\n");
        let rows = write(dir.path(), "rows.txt", "goblin\nogre\n");

        let schema = load_table_schema(&fields, &rows, ":").unwrap();
        assert_eq!(schema.rows, vec!["goblin", "ogre"]);
        assert!(schema.fields.allows("hp"));
        assert!(!schema.allows_row("hp: 100"));
    }

    #[test]
    fn load_scalar_trims() {
        let dir = tempfile::tempdir().unwrap();
        let version = write(dir.path(), "version.txt", "2.1.0\n");
        assert_eq!(load_scalar_schema(&version).unwrap().default, "2.1.0");
    }

    #[test]
    fn collection_named_by_file_stem() {
        let dir = tempfile::tempdir().unwrap();
        let en = write(dir.path(), "en.txt", "title: Hello\n");
        let de = write(dir.path(), "de.txt", "title: Hallo\n");

        let schema = load_collection_schema([&en, &de], ":").unwrap();
        assert_eq!(
            schema.dictionaries().map(|(name, _)| name).collect::<Vec<_>>(),
            vec!["de", "en"]
        );
        assert_eq!(
            schema.dictionary("de").and_then(|d| d.default_for("title")),
            Some("Hallo")
        );
    }

    #[test]
    fn collection_rejects_duplicate_stems() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("other")).unwrap();
        let first = write(dir.path(), "en.txt", "title: Hello\n");
        let second = write(dir.path(), "other/en.cfg", "title: Hi\n");

        let err = load_collection_schema([&first, &second], ":").unwrap_err();
        match err {
            SchemaError::DuplicateDictionary { name, first: a, second: b } => {
                assert_eq!(name, "en");
                assert_eq!(a, first);
                assert_eq!(b, second);
            }
            other => panic!("expected DuplicateDictionary, got {:?}", other),
        }
    }

    #[test]
    fn missing_file_is_io_error_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");

        match load_map_schema(&missing, ":") {
            Err(SchemaError::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected Io, got {:?}", other),
        }
    }

    #[test]
    fn parse_errors_carry_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "settings.txt", "a: 1\na: 2\n");

        let err = load_map_schema(&path, ":").unwrap_err();
        assert!(matches!(err, SchemaError::InFile { path: ref p, .. } if *p == path));
        assert!(matches!(err.root(), SchemaError::DuplicateKey { line: 2, .. }));
        assert!(err.to_string().contains("settings.txt"));
    }
}
