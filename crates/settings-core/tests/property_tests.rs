use proptest::prelude::*;
use settings_core::{Environment, EnvironmentRegistry, Error, resolve_layers, validate};
use std::collections::HashSet;

/// Names unique ignoring case
fn distinct_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z][A-Za-z0-9]{0,8}", 0..12).prop_map(|names| {
        let mut seen = HashSet::new();
        names
            .into_iter()
            .filter(|name| seen.insert(name.to_lowercase()))
            .collect()
    })
}

/// Each environment inherits from the one declared before it
fn linear_chain(names: &[String]) -> Vec<Environment> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| match i {
            0 => Environment::new(name.clone()).unwrap(),
            _ => Environment::inheriting(name.clone(), names[i - 1].clone()).unwrap(),
        })
        .collect()
}

proptest! {
    #[test]
    fn distinct_names_always_validate(names in distinct_names()) {
        let environments: Vec<_> = names
            .iter()
            .map(|name| Environment::new(name.clone()).unwrap())
            .collect();

        prop_assert!(validate(Some(environments.as_slice())).is_ok());
    }

    #[test]
    fn case_variant_duplicate_always_fails(names in distinct_names(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!names.is_empty());
        let duplicate = names[pick.index(names.len())].to_uppercase();

        let mut environments: Vec<_> = names
            .iter()
            .map(|name| Environment::new(name.clone()).unwrap())
            .collect();
        environments.push(Environment::new(duplicate).unwrap());

        let is_duplicate_error = matches!(
            validate(Some(environments.as_slice())),
            Err(Error::DuplicateEnvironmentName { .. })
        );
        prop_assert!(is_duplicate_error);
    }

    #[test]
    fn chain_resolves_to_declared_prefix(names in distinct_names(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!names.is_empty());
        let leaf = pick.index(names.len());
        let environments = linear_chain(&names);

        let layers = resolve_layers(Some(environments.as_slice()), Some(names[leaf].as_str())).unwrap();

        prop_assert_eq!(layers.names(), &names[..=leaf]);
        prop_assert_eq!(layers.json_sources(true).len(), leaf + 2);
    }

    #[test]
    fn resolution_is_idempotent(names in distinct_names(), current in "[A-Za-z]{1,8}") {
        let registry = EnvironmentRegistry::new(linear_chain(&names)).unwrap();

        let first = registry.resolve(Some(current.as_str())).unwrap();
        let second = registry.resolve(Some(current.as_str())).unwrap();
        prop_assert_eq!(first, second);
    }
}
