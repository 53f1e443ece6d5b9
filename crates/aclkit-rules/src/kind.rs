//! Securable resource kinds

use serde::{Deserialize, Serialize};

/// The kinds of resource this toolkit understands.
///
/// Registry values live under a key but carry no ACL of their own; the ACL
/// of the containing key governs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    File,
    Directory,
    RegistryKey,
    RegistryValue,
}

impl ResourceKind {
    /// Whether resources of this kind carry their own security descriptor.
    pub fn is_securable(&self) -> bool {
        !matches!(self, ResourceKind::RegistryValue)
    }

    /// Whether resources of this kind can contain children, which is what
    /// makes inheritance and propagation flags meaningful on their rules.
    pub fn is_container(&self) -> bool {
        matches!(self, ResourceKind::Directory | ResourceKind::RegistryKey)
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ResourceKind::File => "File",
            ResourceKind::Directory => "Directory",
            ResourceKind::RegistryKey => "RegistryKey",
            ResourceKind::RegistryValue => "RegistryValue",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_securable_kinds() {
        assert!(ResourceKind::File.is_securable());
        assert!(ResourceKind::Directory.is_securable());
        assert!(ResourceKind::RegistryKey.is_securable());
        assert!(!ResourceKind::RegistryValue.is_securable());
    }

    #[test]
    fn test_container_kinds() {
        assert!(!ResourceKind::File.is_container());
        assert!(ResourceKind::Directory.is_container());
        assert!(ResourceKind::RegistryKey.is_container());
    }
}
