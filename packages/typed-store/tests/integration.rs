use std::fs;

use collection_literals::btree;

use statekeep_core_store::{CollectionSchema, MapData, MapSchema, TableSchema};
use statekeep_typed_store::{
    CollectionStore, DictionaryStore, Error, Lifecycle, StoreConfig, TableStore, VariableStore,
};

fn map_schema(entries: std::collections::BTreeMap<&str, &str>) -> MapSchema {
    entries.into_iter().collect()
}

fn write_json(config: &StoreConfig, suffix: &str, value: serde_json::Value) {
    let path = config.with_suffix(suffix).file_path();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, serde_json::to_vec_pretty(&value).unwrap()).unwrap();
}

fn read_json(config: &StoreConfig, suffix: &str) -> serde_json::Value {
    let bytes = fs::read(config.with_suffix(suffix).file_path()).unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[test]
fn test_dictionary_drops_stale_keys_and_adds_new_ones() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::new(dir.path(), "settings");
    write_json(
        &config,
        "Dictionary",
        serde_json::json!({"shape": "map", "data": {"a": "9", "c": "3"}}),
    );

    let store = DictionaryStore::open(&config, map_schema(btree! { "a" => "1", "b" => "2" })).unwrap();

    assert_eq!(store.keys().unwrap(), vec!["a", "b"]);
    assert_eq!(store.get("a").unwrap(), "9");
    assert_eq!(store.get("b").unwrap(), "2");
    assert_eq!(
        read_json(&config, "Dictionary"),
        serde_json::json!({"shape": "map", "data": {"a": "9", "b": "2"}})
    );
}

#[test]
fn test_table_rows_and_fields_follow_schema() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::new(dir.path(), "monsters");
    write_json(
        &config,
        "Table",
        serde_json::json!({
            "shape": "table",
            "data": {
                "fields": {"hp": "100", "mana": "0"},
                "rows": {
                    "goblin": {"hp": "50", "mana": "0"},
                    "troll": {"hp": "30"}
                }
            }
        }),
    );

    let schema = TableSchema::new(map_schema(btree! { "hp" => "100" }), ["goblin", "ogre"]);
    let table = TableStore::open(&config, schema).unwrap();

    assert_eq!(table.rows().unwrap(), vec!["goblin", "ogre"]);
    assert_eq!(table.fields().unwrap(), vec!["hp"]);
    assert_eq!(table.get("goblin", "hp").unwrap(), "50");
    assert_eq!(table.get("ogre", "hp").unwrap(), "100");
    assert!(matches!(table.get("goblin", "mana"), Err(Error::NotFound(_))));
}

#[test]
fn test_variable_keeps_value_and_fills_gap() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::new(dir.path(), "level");

    write_json(
        &config,
        "Variable",
        serde_json::json!({"shape": "scalar", "data": {"value": "3"}}),
    );
    assert_eq!(VariableStore::open(&config, "5").unwrap().get().unwrap(), "3");

    write_json(
        &config,
        "Variable",
        serde_json::json!({"shape": "scalar", "data": {"value": null}}),
    );
    assert_eq!(VariableStore::open(&config, "5").unwrap().get().unwrap(), "5");
}

#[test]
fn test_bootstrap_then_reload() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::new(dir.path().join("fresh"), "locale");
    let schema: CollectionSchema = [
        ("en", map_schema(btree! { "title" => "Hello" })),
        ("de", map_schema(btree! { "title" => "Hallo" })),
    ]
    .into_iter()
    .collect();

    let first = CollectionStore::open(&config, schema.clone()).unwrap();
    assert!(config.with_suffix("DictionaryCollection").file_path().exists());

    let second = CollectionStore::open(&config, schema).unwrap();
    assert_eq!(first.data().unwrap(), second.data().unwrap());
}

#[test]
fn test_corrupt_file_is_reported_and_kept() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::new(dir.path(), "settings");
    let path = config.with_suffix("Dictionary").file_path();
    fs::write(&path, b"{\"shape\": \"map\", \"data\": {\"a\": \"9\"").unwrap();

    match DictionaryStore::open(&config, MapSchema::new()) {
        Err(Error::CorruptStore { path: reported, .. }) => assert_eq!(reported, path),
        Err(other) => panic!("expected CorruptStore, got {:?}", other),
        Ok(_) => panic!("expected CorruptStore, got a store"),
    }
    assert_eq!(
        fs::read(&path).unwrap(),
        b"{\"shape\": \"map\", \"data\": {\"a\": \"9\""
    );
}

#[test]
fn test_file_holding_other_shape_is_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::new(dir.path(), "settings");
    write_json(
        &config,
        "Dictionary",
        serde_json::json!({"shape": "scalar", "data": {"value": "1"}}),
    );

    let result = DictionaryStore::open(&config, MapSchema::new());
    assert!(matches!(result, Err(Error::CorruptStore { .. })));
}

#[test]
fn test_fan_out_over_mixed_facades() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::new(dir.path(), "game");

    let mut lives = VariableStore::open(&config, "3").unwrap();
    let mut flags = DictionaryStore::open_flags(&config, ["tutorial_done"]).unwrap();
    let mut table = TableStore::open(
        &config,
        TableSchema::new(map_schema(btree! { "hp" => "10" }), ["hero"]),
    )
    .unwrap();

    lives.set_int("1").unwrap();
    flags.set_bool("tutorial_done", "true").unwrap();
    table
        .set_row("hero", &MapData::from_iter([("hp", "4")]))
        .unwrap();

    {
        let stores: &mut [&mut dyn Lifecycle] = &mut [&mut lives, &mut flags, &mut table];
        for store in stores.iter_mut() {
            store.save().unwrap();
        }
    }

    let names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names.len(), 3);

    {
        let stores: &mut [&mut dyn Lifecycle] = &mut [&mut lives, &mut flags, &mut table];
        for store in stores.iter_mut() {
            store.reset_reconcile_save().unwrap();
        }
    }

    assert_eq!(lives.get_int().unwrap(), 3);
    assert!(!flags.get_bool("tutorial_done").unwrap());
    assert_eq!(table.get_int("hero", "hp").unwrap(), 10);
}
