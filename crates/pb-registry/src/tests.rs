//! Unit tests for pb-registry.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use pb_behavior::{Behavior, BehaviorExt, ConstantBehavior, DynBehavior, FnBehavior};
use pb_core::{DuplicatePolicy, PbError, RegistryConfig};

use crate::{Registry, RegistryBuilder, RegistryError, SharedRegistry};

// ── Helpers ───────────────────────────────────────────────────────────────────

type Const = ConstantBehavior<(), u32>;

fn konst(name: &'static str, value: u32) -> impl Fn() -> Const + Send + Sync + 'static {
    move || ConstantBehavior::new(name, value)
}

fn value_of(reg: &Registry<String, Const>, key: &str) -> u32 {
    reg.create(key).unwrap().apply(&()).unwrap()
}

fn abc() -> Registry<String, Const> {
    let mut reg = Registry::with_config(RegistryConfig::labeled("test")).unwrap();
    reg.register("a".to_owned(), konst("a", 1)).unwrap();
    reg.register("b".to_owned(), konst("b", 2)).unwrap();
    reg.register("c".to_owned(), konst("c", 3)).unwrap();
    reg
}

// ── register / create ─────────────────────────────────────────────────────────

#[cfg(test)]
mod registry_tests {
    use super::*;

    #[test]
    fn create_every_registered_key() {
        let reg = abc();
        for (key, behavior) in reg.create_all() {
            assert_eq!(behavior.name(), key);
        }
        assert_eq!(value_of(&reg, "b"), 2);
    }

    #[test]
    fn unknown_key_fails_without_side_effects() {
        let reg = abc();
        let before = reg.keys();
        let err = reg.create("nonexistent").unwrap_err();
        assert!(matches!(&err, RegistryError::UnknownKey { key, .. } if key == "nonexistent"));
        assert_eq!(err.key(), Some("nonexistent"));
        assert_eq!(reg.keys(), before);
        assert_eq!(value_of(&reg, "a"), 1);
    }

    #[test]
    fn unknown_key_message_names_registry() {
        let err = abc().create("zzz").unwrap_err();
        assert_eq!(err.to_string(), "test: no behavior registered under key \"zzz\"");
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let reg = abc();
        assert!(reg.contains("a"));
        assert!(!reg.contains("A"));
        assert!(reg.create("A").is_err());
    }

    #[test]
    fn overwrite_uses_latest_factory() {
        let mut reg = abc();
        reg.register("b".to_owned(), konst("b2", 20)).unwrap();
        assert_eq!(value_of(&reg, "b"), 20);
        assert_eq!(reg.create("b").unwrap().name(), "b2");
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn overwrite_keeps_original_position() {
        let mut reg = abc();
        reg.register("a".to_owned(), konst("a2", 10)).unwrap();
        assert_eq!(reg.keys(), ["a", "b", "c"]);
    }

    #[test]
    fn reject_policy_keeps_existing_entry() {
        let mut reg = Registry::with_config(
            RegistryConfig::labeled("strict").on_duplicate(DuplicatePolicy::Reject),
        )
        .unwrap();
        reg.register("x".to_owned(), konst("x", 1)).unwrap();
        let err = reg.register("x".to_owned(), konst("x", 2)).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateKey { .. }));
        assert_eq!(value_of(&reg, "x"), 1);
    }

    #[test]
    fn keys_in_registration_order_and_idempotent() {
        let reg = abc();
        let first = reg.keys();
        let second = reg.keys();
        assert_eq!(first, ["a", "b", "c"]);
        assert_eq!(first, second);
    }

    #[test]
    fn unregister_shifts_later_entries() {
        let mut reg = abc();
        assert!(reg.unregister("a"));
        assert!(!reg.unregister("a"));
        assert_eq!(reg.keys(), ["b", "c"]);
        assert_eq!(value_of(&reg, "c"), 3);
        reg.register("a".to_owned(), konst("a", 1)).unwrap();
        assert_eq!(reg.keys(), ["b", "c", "a"]);
        assert_eq!(value_of(&reg, "a"), 1);
    }

    #[test]
    fn unregister_middle_reindexes_tail() {
        let mut reg = abc();
        assert!(reg.unregister("b"));
        assert_eq!(reg.keys(), ["a", "c"]);
        assert_eq!(value_of(&reg, "a"), 1);
        assert_eq!(value_of(&reg, "c"), 3);
        reg.register("c".to_owned(), konst("c", 30)).unwrap();
        assert_eq!(reg.keys(), ["a", "c"]);
        assert_eq!(value_of(&reg, "c"), 30);
    }

    #[test]
    fn blank_label_is_rejected_at_construction() {
        let result = Registry::<String, Const>::with_config(RegistryConfig::labeled("  "));
        assert!(matches!(result, Err(RegistryError::Config(PbError::Config(_)))));
    }

    #[test]
    fn factory_runs_on_every_create() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut reg: Registry<&'static str, Const> = Registry::new();
        reg.register("k", move || {
            counter.fetch_add(1, Ordering::SeqCst);
            ConstantBehavior::new("k", 0)
        })
        .unwrap();
        reg.create("k").unwrap();
        reg.create("k").unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn heterogeneous_behaviors_via_dyn() {
        let mut reg: Registry<&'static str, DynBehavior<u32, u32>> = Registry::new();
        reg.register("double", || FnBehavior::new("double", |n: &u32| Ok(n * 2)).boxed()).unwrap();
        reg.register("seven", || ConstantBehavior::<u32, u32>::new("seven", 7).boxed()).unwrap();
        assert_eq!(reg.create("double").unwrap().apply(&4).unwrap(), 8);
        assert_eq!(reg.create("seven").unwrap().apply(&4).unwrap(), 7);
    }

    #[test]
    fn empty_registry() {
        let reg: Registry<String, Const> = Registry::default();
        assert!(reg.is_empty());
        assert!(reg.keys().is_empty());
        assert_eq!(reg.label(), "registry");
    }
}

// ── RegistryBuilder ───────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_in_call_order() {
        let reg = RegistryBuilder::new()
            .register("z".to_owned(), konst("z", 26))
            .register("y".to_owned(), konst("y", 25))
            .build()
            .unwrap();
        assert_eq!(reg.keys(), ["z", "y"]);
    }

    #[test]
    fn duplicate_under_reject_fails_build() {
        let result = RegistryBuilder::new()
            .config(RegistryConfig::labeled("strict").on_duplicate(DuplicatePolicy::Reject))
            .register("a".to_owned(), konst("a", 1))
            .register("a".to_owned(), konst("a", 2))
            .build();
        assert!(matches!(result, Err(RegistryError::DuplicateKey { .. })));
    }

    #[test]
    fn duplicate_under_overwrite_last_wins() {
        let reg = RegistryBuilder::new()
            .register("a".to_owned(), konst("a", 1))
            .register("a".to_owned(), konst("a", 2))
            .build()
            .unwrap();
        assert_eq!(value_of(&reg, "a"), 2);
    }

    #[test]
    fn invalid_config_fails_build() {
        let result = RegistryBuilder::<String, Const>::new()
            .config(RegistryConfig::labeled(""))
            .build();
        assert!(matches!(result, Err(RegistryError::Config(PbError::Config(_)))));
    }
}

// ── SharedRegistry ────────────────────────────────────────────────────────────

#[cfg(test)]
mod shared_tests {
    use super::*;

    #[test]
    fn clones_share_entries() {
        let shared = SharedRegistry::new(abc());
        let other = shared.clone();
        other.register("d".to_owned(), konst("d", 4)).unwrap();
        assert!(shared.contains("d"));
        assert_eq!(shared.keys(), ["a", "b", "c", "d"]);
        assert_eq!(shared.len(), 4);
    }

    #[test]
    fn concurrent_create_and_register() {
        let shared = SharedRegistry::from(abc());
        std::thread::scope(|s| {
            for t in 0..4u32 {
                let reg = shared.clone();
                s.spawn(move || {
                    for i in 0..50u32 {
                        reg.register(format!("t{t}-{i}"), konst("dyn", i)).unwrap();
                        assert_eq!(reg.create("a").unwrap().apply(&()).unwrap(), 1);
                    }
                });
            }
        });
        assert_eq!(shared.len(), 3 + 4 * 50);
        let value = shared.create("t3-49").unwrap().apply(&()).unwrap();
        assert_eq!(value, 49);
    }

    #[test]
    fn with_read_sees_consistent_snapshot() {
        let shared = SharedRegistry::new(abc());
        let (len, keys) = shared.with_read(|r| (r.len(), r.keys()));
        assert_eq!(len, keys.len());
        assert!(shared.unregister("b"));
        assert!(!shared.is_empty());
        assert!(shared.create("b").is_err());
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        /// Keys come back in first-registration order and each resolves to
        /// the last factory registered under it.
        #[test]
        fn last_write_wins_in_first_seen_order(
            ops in prop::collection::vec((0u8..6, any::<u32>()), 1..40)
        ) {
            let mut reg: Registry<String, Const> = Registry::new();
            let mut order: Vec<String> = Vec::new();
            let mut latest = std::collections::HashMap::new();
            for (k, v) in &ops {
                let key = format!("k{k}");
                if !order.contains(&key) {
                    order.push(key.clone());
                }
                latest.insert(key.clone(), *v);
                let value = *v;
                reg.register(key, move || ConstantBehavior::new("p", value)).unwrap();
            }
            prop_assert_eq!(reg.keys(), order.clone());
            for key in &order {
                prop_assert_eq!(value_of(&reg, key), latest[key]);
            }
        }

        #[test]
        fn misses_never_mutate(probe in "[a-z]{1,8}") {
            let reg = abc();
            let before = reg.keys();
            let hit = reg.contains(probe.as_str());
            prop_assert_eq!(reg.create(probe.as_str()).is_ok(), hit);
            prop_assert_eq!(reg.keys(), before);
        }
    }
}
