//! End-to-end access rule workflows over the in-memory descriptor store
//!
//! Exercises the full pipeline: rule text parsed into records, records
//! applied through the mutator, and the resulting state read back as
//! snapshots and serialized.

use aclkit_flags::{parse_file_system_rights, FileSystemRights};
use aclkit_resources::{
    MemoryStore, ResourceMutator, ResourceSnapshot, SecurityDescriptor,
};
use aclkit_rules::{AccessRuleRecord, ResourceKind};

fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();
    store.insert(
        "C:\\data\\reports",
        ResourceKind::Directory,
        SecurityDescriptor::new("BUILTIN\\Administrators"),
    );
    store.insert(
        "C:\\data\\reports\\q3.xlsx",
        ResourceKind::File,
        SecurityDescriptor::new("BUILTIN\\Administrators"),
    );
    store.insert(
        "HKLM\\Software\\Vendor",
        ResourceKind::RegistryKey,
        SecurityDescriptor::new("SYSTEM"),
    );
    store
}

#[test]
fn test_grant_then_revoke_leaves_no_trace() {
    let store = seeded_store();
    let mut mutator = ResourceMutator::new(store.handle("C:\\data\\reports").unwrap());

    let record: AccessRuleRecord = "Alice;Read,Write;Allow;ContainerInherit;None"
        .parse()
        .unwrap();
    assert!(mutator.grant(&record));

    let snapshot = ResourceSnapshot::from_handle(mutator.handle()).unwrap();
    assert_eq!(snapshot.acl.rules.len(), 1);
    assert_eq!(snapshot.acl.rules[0].account, "Alice");
    // The summary decomposes the union; parsing it back recovers the grant.
    assert_eq!(
        parse_file_system_rights(&snapshot.acl.rules[0].rights).unwrap(),
        FileSystemRights::READ | FileSystemRights::WRITE
    );

    assert!(mutator.revoke("Alice"));
    let snapshot = ResourceSnapshot::from_handle(mutator.handle()).unwrap();
    assert!(snapshot.acl.rules.is_empty());
}

#[test]
fn test_revoke_absent_account_succeeds_without_changes() {
    let store = seeded_store();
    let mut mutator = ResourceMutator::new(store.handle("C:\\data\\reports").unwrap());

    let before = store.descriptor("C:\\data\\reports").unwrap();
    assert!(mutator.revoke("NoSuchUser"));
    assert_eq!(store.descriptor("C:\\data\\reports").unwrap(), before);
}

#[test]
fn test_file_grant_drops_inheritance_fields() {
    let store = seeded_store();
    let mut mutator =
        ResourceMutator::new(store.handle("C:\\data\\reports\\q3.xlsx").unwrap());

    // Inheritance flags make no sense on a leaf; the file handle strips them.
    let record: AccessRuleRecord = "Bob;Modify;Allow;ContainerInherit,ObjectInherit;InheritOnly"
        .parse()
        .unwrap();
    assert!(mutator.grant(&record));

    let snapshot = ResourceSnapshot::from_handle(mutator.handle()).unwrap();
    assert_eq!(snapshot.acl.rules.len(), 1);
    assert_eq!(snapshot.acl.rules[0].inheritance, "None");
    assert_eq!(snapshot.acl.rules[0].propagation, "None");
}

#[test]
fn test_registry_key_grant_uses_registry_rights() {
    let store = seeded_store();
    let mut mutator = ResourceMutator::new(store.handle("HKLM\\Software\\Vendor").unwrap());

    let record: AccessRuleRecord = "Operators;ReadKey;Allow;ContainerInherit;None"
        .parse()
        .unwrap();
    assert!(mutator.grant(&record));

    let snapshot = ResourceSnapshot::from_handle(mutator.handle()).unwrap();
    assert_eq!(snapshot.acl.rules.len(), 1);
    assert_eq!(snapshot.acl.rules[0].rights, "ReadKey");
}

#[test]
fn test_owner_and_inheritance_workflow() {
    let store = seeded_store();
    let mut mutator = ResourceMutator::new(store.handle("C:\\data\\reports").unwrap());

    let record: AccessRuleRecord = "Alice;FullControl;Allow;ContainerInherit;None"
        .parse()
        .unwrap();
    assert!(mutator.grant(&record));
    assert!(mutator.change_owner("Alice"));
    assert!(mutator.change_inherited(Some(false), true));

    let snapshot = ResourceSnapshot::from_handle(mutator.handle()).unwrap();
    assert_eq!(snapshot.acl.owner, "Alice");
    assert!(!snapshot.acl.is_inherited);
    assert_eq!(snapshot.acl.rules.len(), 1);
    assert_eq!(snapshot.acl.rules[0].rights, "FullControl");
}

#[test]
fn test_skip_inputs_report_success_without_writes() {
    let store = seeded_store();
    let mut mutator = ResourceMutator::new(store.handle("C:\\data\\reports").unwrap());

    let before = store.descriptor("C:\\data\\reports").unwrap();
    assert!(mutator.change_owner(""));
    assert!(mutator.change_inherited(None, true));
    assert_eq!(store.descriptor("C:\\data\\reports").unwrap(), before);
}

#[test]
fn test_revoke_all_then_regrant() {
    let store = seeded_store();
    let mut mutator = ResourceMutator::new(store.handle("C:\\data\\reports").unwrap());

    for text in [
        "Alice;Read;Allow;None;None",
        "Bob;Write;Allow;None;None",
        "Guests;FullControl;Deny;None;None",
    ] {
        let record: AccessRuleRecord = text.parse().unwrap();
        assert!(mutator.grant(&record));
    }
    assert_eq!(store.descriptor("C:\\data\\reports").unwrap().aces.len(), 3);

    assert!(mutator.revoke_all());
    assert!(store.descriptor("C:\\data\\reports").unwrap().aces.is_empty());

    let record: AccessRuleRecord = "Alice;Read;Allow;None;None".parse().unwrap();
    assert!(mutator.grant(&record));
    assert_eq!(store.descriptor("C:\\data\\reports").unwrap().aces.len(), 1);
}

#[test]
fn test_snapshot_serializes_rules_as_strings() {
    let store = seeded_store();
    let mut mutator = ResourceMutator::new(store.handle("C:\\data\\reports").unwrap());
    let record: AccessRuleRecord = "Alice;Read;Allow;ContainerInherit;None"
        .parse()
        .unwrap();
    assert!(mutator.grant(&record));

    let snapshot = ResourceSnapshot::from_handle(mutator.handle()).unwrap();
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(
        json["acl"]["rules"][0],
        serde_json::json!("Alice;Read;Allow;ContainerInherit;None")
    );

    let back: ResourceSnapshot = serde_json::from_value(json).unwrap();
    assert_eq!(back, snapshot);
}

#[test]
fn test_malformed_rule_never_reaches_the_store() {
    let store = seeded_store();
    let mut mutator = ResourceMutator::new(store.handle("C:\\data\\reports").unwrap());

    // Parsing fails before any descriptor read.
    assert!("Alice;Read;Allow;None".parse::<AccessRuleRecord>().is_err());

    // A well-formed record with an unknown right fails at grant time.
    let record =
        AccessRuleRecord::new("Alice", "Launch", "Allow", "None", "None").unwrap();
    assert!(!mutator.grant(&record));
    assert!(store.descriptor("C:\\data\\reports").unwrap().aces.is_empty());
}
