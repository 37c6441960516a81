//! # Reconciler Scenario Tests
//!
//! End-to-end reconciliation scenarios against in-memory stores.
//!
//! These tests verify:
//! - Idempotence of apply and revert
//! - Apply then revert round trips back to the pre-apply state
//! - Per-browser gating (an unconfigured browser is never touched)
//! - Validation short-circuits before any store mutation
//! - Separator-only app names are rejected before they can address the
//!   shared uninstall root
//! - Escalated store faults fail the run without stopping other branches
//! - Revert tolerates every removal failure

mod common;

use common::{both_browsers_config, edge_only_config, FlakyStore};
use forcelist_deployer::prelude::*;
use forcelist_deployer::reconciler::inventory;

#[test]
fn test_apply_is_idempotent() {
    let mut store = MemoryStore::new();
    let config = both_browsers_config();

    let first = Reconciler::new(&mut store).apply(&config);
    assert!(first.is_success());
    let after_first = store.clone();

    let second = Reconciler::new(&mut store).apply(&config);
    assert!(second.is_success());
    assert_eq!(
        store, after_first,
        "a second apply with identical config must not change the store"
    );
}

#[test]
fn test_revert_is_idempotent() {
    let mut store = MemoryStore::new();
    let config = both_browsers_config();

    Reconciler::new(&mut store).apply(&config);
    let first = Reconciler::new(&mut store).revert(&config);
    assert!(first.is_success());
    let after_first = store.clone();

    let second = Reconciler::new(&mut store).revert(&config);
    assert!(second.is_success(), "reverting an already-clean store must succeed");
    assert_eq!(store, after_first);
}

#[test]
fn test_apply_then_revert_round_trip() {
    let mut store = MemoryStore::new();
    let config = both_browsers_config();

    Reconciler::new(&mut store).apply(&config);
    Reconciler::new(&mut store).revert(&config);

    for record in config.extension_policies() {
        assert_eq!(
            store.read_value(&record.policy_path, &record.value_name).unwrap(),
            None,
            "{} forcelist entry should be gone after revert",
            record.browser
        );
    }
    assert!(
        !store
            .path_exists(&config.inventory_record().registration_path)
            .unwrap(),
        "inventory registration should be gone after revert"
    );
}

#[test]
fn test_gating_skips_unconfigured_chrome() {
    let mut store = MemoryStore::new();
    let config = edge_only_config();

    let status = Reconciler::new(&mut store).apply(&config);
    assert!(status.is_success());

    let chrome_path = BrowserKind::Chrome.policy_path();
    let edge_path = BrowserKind::Edge.policy_path();
    assert!(
        !store.path_exists(&chrome_path).unwrap(),
        "apply must never touch the Chrome container when Chrome is unconfigured"
    );
    assert!(store
        .read_value(&edge_path, &config.value_name)
        .unwrap()
        .is_some());
}

#[test]
fn test_gating_revert_leaves_other_browser_entry() {
    let mut store = MemoryStore::new();

    // Install for both browsers, then revert a deployment that only knows
    // about Edge; the Chrome entry must survive
    Reconciler::new(&mut store).apply(&both_browsers_config());
    let status = Reconciler::new(&mut store).revert(&edge_only_config());
    assert!(status.is_success());

    let chrome_path = BrowserKind::Chrome.policy_path();
    let edge_path = BrowserKind::Edge.policy_path();
    assert!(
        store.read_value(&chrome_path, "rdid-42").unwrap().is_some(),
        "Chrome entry must survive an Edge-only revert"
    );
    assert_eq!(store.read_value(&edge_path, "rdid-42").unwrap(), None);
}

#[test]
fn test_validation_short_circuit_performs_no_mutation() {
    let missing_identity = vec![
        DeploymentConfig {
            app_name: String::new(),
            ..both_browsers_config()
        },
        DeploymentConfig {
            value_name: "   ".to_string(),
            ..both_browsers_config()
        },
    ];

    for config in missing_identity {
        let mut store = MemoryStore::new();

        let apply = Reconciler::new(&mut store).apply(&config);
        assert_eq!(apply, ReconcileStatus::Failure);
        assert_eq!(store, MemoryStore::new(), "apply must perform zero store mutations");

        let revert = Reconciler::new(&mut store).revert(&config);
        assert_eq!(revert, ReconcileStatus::Failure);
        assert_eq!(store, MemoryStore::new(), "revert must perform zero store mutations");
    }
}

#[test]
fn test_separator_app_name_cannot_reach_other_registrations() {
    // A separator-only app name normalizes to the shared uninstall root
    // itself; the run must fail validation instead of touching that tree
    let other_app = InventoryRecord::registration_path_for("OtherApp");
    let mut store = MemoryStore::new();
    store.create_path(&other_app).unwrap();
    store
        .write_value(&other_app, "DisplayName", StoreValue::from("OtherApp"))
        .unwrap();
    let seeded = store.clone();

    for app_name in ["/", "\\", "//"] {
        let config = DeploymentConfig {
            app_name: app_name.to_string(),
            ..both_browsers_config()
        };

        let revert = Reconciler::new(&mut store).revert(&config);
        assert_eq!(revert, ReconcileStatus::Failure);
        let apply = Reconciler::new(&mut store).apply(&config);
        assert_eq!(apply, ReconcileStatus::Failure);

        assert!(
            store.path_exists(&other_app).unwrap(),
            "app name '{}' must not reach the OtherApp registration",
            app_name.escape_debug()
        );
        assert_eq!(store, seeded, "store must be untouched");
    }
}

#[test]
fn test_written_value_format() {
    let mut store = MemoryStore::new();
    let config = both_browsers_config();

    Reconciler::new(&mut store).apply(&config);

    let written = store
        .read_value(&BrowserKind::Chrome.policy_path(), "rdid-42")
        .unwrap()
        .expect("chrome entry written");
    assert_eq!(
        written,
        StoreValue::from(
            "abcdefghijklmnopqrstuvwxyzabcdef;https://clients2.google.com/service/update2/crx"
        )
    );
}

#[test]
fn test_fresh_store_full_install_scenario() {
    let mut store = MemoryStore::new();
    let config = both_browsers_config();

    let status = Reconciler::new(&mut store).apply(&config);
    assert_eq!(status.exit_code(), 0);

    assert!(store.path_exists(&BrowserKind::Chrome.policy_path()).unwrap());
    assert!(store.path_exists(&BrowserKind::Edge.policy_path()).unwrap());

    let registration = config.inventory_record().registration_path;
    let expected_attributes = vec![
        ("DisplayName", StoreValue::from("Acme Agent")),
        ("DisplayVersion", StoreValue::from("1.0.0")),
        ("Publisher", StoreValue::from("Microscaler")),
        ("UninstallString", StoreValue::from("NA")),
        ("NoRemove", StoreValue::Dword(1)),
        ("NoRepair", StoreValue::Dword(1)),
        ("NoModify", StoreValue::Dword(1)),
    ];
    for (name, expected) in expected_attributes {
        assert_eq!(
            store.read_value(&registration, name).unwrap(),
            Some(expected),
            "registration attribute {} should be written",
            name
        );
    }
}

#[test]
fn test_revert_with_no_prior_apply_is_clean() {
    let mut store = MemoryStore::new();
    let status = Reconciler::new(&mut store).revert(&both_browsers_config());
    assert_eq!(status.exit_code(), 0);
    assert_eq!(store, MemoryStore::new());
}

#[test]
fn test_inventory_write_fault_fails_the_run() {
    let mut store = FlakyStore::new().fail_write("Publisher");
    let config = both_browsers_config();

    let status = Reconciler::new(&mut store).apply(&config);
    assert_eq!(status.exit_code(), 1);

    // The failing branch is the inventory; both browser branches completed
    for record in config.extension_policies() {
        assert!(
            store
                .inner
                .read_value(&record.policy_path, &record.value_name)
                .unwrap()
                .is_some(),
            "{} entry should be written despite the inventory fault",
            record.browser
        );
    }
}

#[test]
fn test_inventory_write_fault_names_the_attribute() {
    let mut store = FlakyStore::new().fail_write("Publisher");
    let record = both_browsers_config().inventory_record();

    let err = inventory::register(&mut store, &record).unwrap_err();
    let chain = format!("{err:#}");
    assert!(
        chain.contains("Publisher"),
        "error chain should identify the failing attribute, got: {chain}"
    );
    assert!(chain.contains("injected store fault"));
}

#[test]
fn test_forcelist_fault_does_not_block_inventory() {
    // Both browser writes share the value name, so failing it fails both
    // branches; the inventory branch must still run to completion
    let mut store = FlakyStore::new().fail_write("rdid-42");
    let config = both_browsers_config();

    let status = Reconciler::new(&mut store).apply(&config);
    assert_eq!(status, ReconcileStatus::Failure);

    let registration = config.inventory_record().registration_path;
    assert!(
        store.inner.path_exists(&registration).unwrap(),
        "inventory registration should be rebuilt despite forcelist faults"
    );
    assert_eq!(
        store.inner.read_value(&registration, "UninstallString").unwrap(),
        Some(StoreValue::from("NA"))
    );
}

#[test]
fn test_revert_tolerates_removal_faults() {
    let config = both_browsers_config();
    let registration = config.inventory_record().registration_path;

    let mut store = FlakyStore::new()
        .fail_delete("rdid-42")
        .fail_tree_delete(&registration);

    // Seed installed state through the inner store so revert has work to do
    {
        let inner = &mut store.inner;
        let _ = Reconciler::new(inner).apply(&config);
    }

    let status = Reconciler::new(&mut store).revert(&config);
    assert_eq!(
        status.exit_code(),
        0,
        "revert is best-effort cleanup; removal faults must not fail the run"
    );
}
