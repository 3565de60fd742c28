//! Property-based tests for the resolver.
//!
//! Note: The normalize module already has property tests for the raw
//! transforms. This module focuses on `PathResolver` behavior.

use super::PathResolver;
use proptest::prelude::*;
use std::path::PathBuf;

fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,20}"
}

fn home_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(path_component_strategy(), 1..4).prop_map(|parts| {
        let mut path = PathBuf::from("/");
        for part in parts {
            path.push(part);
        }
        path
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 2000,
        .. ProptestConfig::default()
    })]

    // Display form of anything under home starts with ~ and round-trips
    #[test]
    fn resolver_round_trip_under_home(
        home in home_strategy(),
        parts in prop::collection::vec(path_component_strategy(), 0..6),
    ) {
        let resolver = PathResolver::with_home(&home);
        let mut path = home.clone();
        for part in &parts {
            path.push(part);
        }

        let display = resolver.unexpand(&path);
        prop_assert!(display.starts_with('~'));

        let normalized = resolver.normalize(&display).unwrap();
        prop_assert_eq!(normalized.as_path(), path.as_path());
    }

    // Normalization is idempotent on its own output
    #[test]
    fn resolver_normalize_idempotent(
        home in home_strategy(),
        parts in prop::collection::vec(path_component_strategy(), 1..6),
    ) {
        let resolver = PathResolver::with_home(&home);
        let raw = format!("~/{}", parts.join("/"));
        let once = resolver.normalize(&raw).unwrap();
        let twice = resolver.normalize(&once.to_string()).unwrap();
        prop_assert_eq!(once, twice);
    }
}
