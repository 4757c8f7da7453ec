//! End-to-end tests across the tree, store, and mapper crates
//!
//! These exercise the complete flow: document tree -> tree-backed store ->
//! namespace mapper, plus declarative mounts over an in-memory store.

use keyspace_store::{
    ConfigurationStore, Error, MapStore, NamespaceConfig, NamespaceMapper, NamespaceTable,
    TreeStore,
};
use keyspace_test_utils::fixtures::{feature_tree, sample_store, sample_tree};
use keyspace_test_utils::logging;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_concrete_scenario() {
    logging::init();
    let underlying = sample_store();
    let mapper = NamespaceMapper::new("config", "", &underlying);

    assert_eq!(mapper.get_string("value1").unwrap(), "v1");
    assert_eq!(mapper.get_string("sub.value2").unwrap(), "v4");

    mapper.set_raw("value3", "v5").unwrap();
    assert_eq!(mapper.get_string("value3").unwrap(), "v5");
    assert_eq!(underlying.get_string("config.value3").unwrap(), "v5");
    assert_eq!(mapper.keys().unwrap(), vec!["value1", "value2", "sub", "value3"]);
}

#[rstest]
#[case("", "", "config.sub.value2")]
#[case("config", "", "sub.value2")]
#[case("config", "root.conf", "root.conf.sub.value2")]
#[case("", "root", "root.config.sub.value2")]
#[case("config.sub", "leaf", "leaf.value2")]
fn test_tree_and_map_agree_through_mapper(
    #[case] from: &str,
    #[case] to: &str,
    #[case] key: &str,
) {
    let tree = sample_tree();
    let tree_store = TreeStore::new(&tree);
    let map_store = sample_store();

    let over_tree = NamespaceMapper::new(from, to, tree_store);
    let over_map = NamespaceMapper::new(from, to, &map_store);

    assert_eq!(over_tree.get_string(key).unwrap(), "v4");
    assert_eq!(over_map.get_string(key).unwrap(), "v4");
    assert_eq!(over_tree.keys().unwrap(), over_map.keys().unwrap());
}

#[test]
fn test_mapper_over_read_only_tree_reports_unsupported() {
    let tree = feature_tree();
    let mapper = NamespaceMapper::new("prop3", "settings", TreeStore::new(&tree));

    assert_eq!(mapper.get_string("settings.prop4[1][@attr]").unwrap(), "value4");
    assert_eq!(mapper.enumerate("settings").unwrap(), vec!["prop4", "prop4[1]"]);

    assert!(matches!(
        mapper.set_raw("settings.prop4", "x"),
        Err(Error::Unsupported { .. })
    ));
    assert!(matches!(
        mapper.set_raw("prop1", "x"),
        Err(Error::OutsideNamespace { .. })
    ));
    assert!(matches!(
        mapper.get_raw("settings.prop4[x]"),
        Err(Error::Path(_))
    ));
}

#[test]
fn test_bracket_steps_on_mapped_root() {
    let tree = feature_tree();
    let mapper = NamespaceMapper::new("prop3.prop4", "p", TreeStore::new(&tree));
    assert_eq!(mapper.get_string("p[@attr]").unwrap(), "value3");
    assert_eq!(mapper.get_string("p[1][@attr]").unwrap(), "value4");

    let whole = NamespaceMapper::new("", "settings", TreeStore::new(&tree));
    assert_eq!(whole.get_string("settings[@id]").unwrap(), "main");
    assert_eq!(whole.get_raw("settingsx[@id]").unwrap(), None);
}

#[test]
fn test_declarative_mounts() {
    logging::init();
    let table = NamespaceTable::from_toml_str(
        r#"
[[mount]]
from_prefix = "config"
to_prefix = "app"

[[mount]]
from_prefix = "config.sub"
to_prefix = "app.nested.sub"
"#,
    )
    .unwrap();

    let store = sample_store();
    let mappers: Vec<_> = table.mounts.iter().map(|m| m.mount(&store)).collect();

    assert_eq!(mappers[0].get_string("app.sub.value1").unwrap(), "v3");
    assert_eq!(mappers[1].get_string("app.nested.sub.value1").unwrap(), "v3");
    assert_eq!(mappers[1].enumerate("app").unwrap(), vec!["nested"]);

    mappers[1].set_raw("app.nested.sub.value9", "v9").unwrap();
    assert_eq!(mappers[0].get_string("app.sub.value9").unwrap(), "v9");
    assert_eq!(NamespaceConfig::from(&mappers[1]), table.mounts[1]);
}

#[test]
fn test_boxed_stores_share_one_contract() {
    let tree = sample_tree();
    let stores: Vec<Box<dyn ConfigurationStore + '_>> = vec![
        Box::new(TreeStore::new(&tree)),
        Box::new(sample_store()),
        Box::new(NamespaceMapper::new("", "", MapStore::new())),
    ];

    let has_value: Vec<bool> = stores
        .iter()
        .map(|store| store.has("config.value1").unwrap())
        .collect();
    assert_eq!(has_value, vec![true, true, false]);

    let writable: Vec<bool> = stores
        .iter()
        .map(|store| store.set_raw("config.value1", "x").is_ok())
        .collect();
    assert_eq!(writable, vec![false, true, true]);
}
