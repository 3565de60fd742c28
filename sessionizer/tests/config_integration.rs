//! Integration tests for configuration loading.

mod common;

use std::fs;

use common::Tree;
use sessionizer::{ConfigLoader, Error, PathResolver, Root, TargetAggregator};

#[test]
fn test_load_targets_and_selector() {
    let tree = Tree::new();
    let path = tree.path("config.json");
    fs::write(
        &path,
        r#"{
            "targets": [
                { "path": "~/test/path1", "depth": 3 },
                { "path": "~/test/path2", "depth": 5 }
            ],
            "selector": ["--border", "--height=50%"]
        }"#,
    )
    .unwrap();

    let config = ConfigLoader::load_file(&path).unwrap();
    assert_eq!(
        config.roots(),
        vec![Root::new("~/test/path1", 3), Root::new("~/test/path2", 5)]
    );
    assert_eq!(config.selector, vec!["--border", "--height=50%"]);
}

#[test]
fn test_missing_and_invalid_files() {
    let tree = Tree::new();
    assert!(ConfigLoader::load_file(&tree.path("non_existent_file.json")).is_err());

    let invalid = tree.path("invalid.json");
    fs::write(&invalid, "{ invalid json }").unwrap();
    assert!(matches!(
        ConfigLoader::load_file(&invalid),
        Err(Error::Configuration { .. })
    ));
}

#[test]
fn test_loaded_config_drives_discovery() {
    let tree = Tree::new().dir("code/api").dir("notes");
    fs::write(
        tree.path("ts.yml"),
        "targets:\n  - path: ~/code\n    depth: 1\n  - path: ~/notes\n",
    )
    .unwrap();

    let resolver = PathResolver::with_home(tree.root());
    let config = ConfigLoader::load("~/ts.yml", &resolver).unwrap();
    let targets = TargetAggregator::new(resolver).collect(&config.roots()).unwrap();

    assert_eq!(targets, vec!["~/notes", "~/code/api", "~/code"]);
}
