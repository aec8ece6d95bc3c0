//! End-to-end integration test for environment layering
//!
//! Exercises the complete flow: declare environments -> validate -> resolve
//! layers -> load settings files -> read merged values.

use pretty_assertions::assert_eq;
use serde_json::json;
use settings_core::{DEVELOPMENT, Environment, EnvironmentRegistry, JsonSource, PRODUCTION};
use settings_host::{Host, HostBuilder, SourceSink};
use settings_test_utils::TestContentRoot;
use std::collections::HashMap;

/// Production (root), PPE (root), Development inheriting PPE
fn app_environments() -> Vec<Environment> {
    let production = Environment::new(PRODUCTION).unwrap();
    let ppe = Environment::new("PPE").unwrap();
    let development = Environment::with_parent(DEVELOPMENT, &ppe).unwrap();
    vec![production, development, ppe]
}

/// Settings files mirroring a typical app: one key per layer plus one key
/// that Development overrides from PPE
fn setup_content_root() -> TestContentRoot {
    let root = TestContentRoot::new();
    root.write_base(&json!({ "app": { "common_option": "base" } }));
    root.write_layer(
        PRODUCTION,
        &json!({ "app": { "production_only_option": "production" } }),
    );
    root.write_layer(
        "PPE",
        &json!({ "app": { "ppe_only_option": "ppe", "dev_override_ppe_option": "ppe" } }),
    );
    root.write_layer(
        DEVELOPMENT,
        &json!({ "app": { "development_only_option": "development", "dev_override_ppe_option": "development" } }),
    );
    root
}

fn build(root: &TestContentRoot, environment: Option<&str>) -> Host {
    let mut builder = HostBuilder::new(Vec::<String>::new(), Some(app_environments()))
        .unwrap()
        .content_root(root.root())
        .env_vars(HashMap::new());
    if let Some(environment) = environment {
        builder = builder.environment(environment);
    }
    builder.build().unwrap()
}

fn paths(host: &Host) -> Vec<&str> {
    host.sources().iter().map(|s| s.path.as_str()).collect()
}

#[test]
fn test_ppe_loads_base_and_ppe_only() {
    let root = setup_content_root();
    let host = build(&root, Some("PPE"));

    assert_eq!(paths(&host), ["appsettings.json", "appsettings.PPE.json"]);
    assert_eq!(host.get_string("app:common_option").unwrap().as_deref(), Some("base"));
    assert_eq!(host.get_string("app:dev_override_ppe_option").unwrap().as_deref(), Some("ppe"));
    assert_eq!(host.get_string("app:development_only_option").unwrap(), None);
    assert_eq!(host.get_string("app:production_only_option").unwrap(), None);
}

#[test]
fn test_development_inherits_ppe_and_overrides_it() {
    let root = setup_content_root();
    let host = build(&root, Some("Development"));

    assert_eq!(
        paths(&host),
        [
            "appsettings.json",
            "appsettings.PPE.json",
            "appsettings.Development.json"
        ]
    );
    assert_eq!(host.get_string("app:ppe_only_option").unwrap().as_deref(), Some("ppe"));
    assert_eq!(
        host.get_string("app:development_only_option").unwrap().as_deref(),
        Some("development")
    );
    assert_eq!(
        host.get_string("app:dev_override_ppe_option").unwrap().as_deref(),
        Some("development")
    );
}

#[test]
fn test_unset_environment_is_production() {
    let root = setup_content_root();
    let host = build(&root, None);

    assert_eq!(host.environment_name(), "Production");
    assert_eq!(
        paths(&host),
        ["appsettings.json", "appsettings.Production.json"]
    );
    assert_eq!(
        host.get_string("app:production_only_option").unwrap().as_deref(),
        Some("production")
    );
    assert_eq!(host.get_string("app:ppe_only_option").unwrap(), None);
}

#[test]
fn test_host_plan_matches_registry_plan() {
    let registry = EnvironmentRegistry::new(app_environments()).unwrap();
    let mut recorded: Vec<JsonSource> = Vec::new();
    for source in registry
        .resolve(Some("Development"))
        .unwrap()
        .json_sources(true)
    {
        recorded.add_json_source(&source);
    }

    let root = setup_content_root();
    let host = build(&root, Some("Development"));
    assert_eq!(host.sources(), recorded.as_slice());
}
