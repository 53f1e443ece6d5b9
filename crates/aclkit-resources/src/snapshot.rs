//! Serializable point-in-time view of a resource and its access rules

use aclkit_rules::{AccessRuleSet, ResourceKind};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::handle::SecurityDescriptorHandle;

/// One resource's identity and normalized access rules, captured at read
/// time. This is the shape exports and reports work with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceSnapshot {
    pub kind: ResourceKind,
    pub path: String,
    /// Last component of the path
    pub name: String,
    pub acl: AccessRuleSet,
}

impl ResourceSnapshot {
    /// Capture the current state of the resource behind `handle`.
    pub fn from_handle<H: SecurityDescriptorHandle>(handle: &H) -> Result<Self> {
        let descriptor = handle.read_descriptor()?;
        let path = handle.path().to_string();
        Ok(Self {
            kind: handle.kind(),
            name: leaf_name(&path).to_string(),
            path,
            acl: descriptor.to_rule_set()?,
        })
    }
}

/// Last path component; both separator styles are honored so registry
/// paths and file paths get the same treatment.
fn leaf_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::SecurityDescriptor;
    use crate::memory::MemoryStore;

    #[test]
    fn test_leaf_name_handles_both_separators() {
        assert_eq!(leaf_name("C:\\data\\reports"), "reports");
        assert_eq!(leaf_name("srv/share/reports"), "reports");
        assert_eq!(leaf_name("reports"), "reports");
    }

    #[test]
    fn test_from_handle_captures_owner_and_rules() {
        let store = MemoryStore::new();
        store.insert(
            "C:\\data\\reports",
            ResourceKind::Directory,
            SecurityDescriptor::new("BUILTIN\\Administrators"),
        );
        let handle = store.handle("C:\\data\\reports").unwrap();

        let snapshot = ResourceSnapshot::from_handle(&handle).unwrap();
        assert_eq!(snapshot.kind, ResourceKind::Directory);
        assert_eq!(snapshot.path, "C:\\data\\reports");
        assert_eq!(snapshot.name, "reports");
        assert_eq!(snapshot.acl.owner, "BUILTIN\\Administrators");
        assert!(snapshot.acl.rules.is_empty());
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let store = MemoryStore::new();
        store.insert(
            "HKLM\\Software\\Vendor",
            ResourceKind::RegistryKey,
            SecurityDescriptor::new("SYSTEM"),
        );
        let handle = store.handle("HKLM\\Software\\Vendor").unwrap();
        let snapshot = ResourceSnapshot::from_handle(&handle).unwrap();

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: ResourceSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
