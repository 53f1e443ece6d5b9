//! In-memory resource store and handles (for tests and embedding)

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use aclkit_rules::ResourceKind;

use crate::descriptor::SecurityDescriptor;
use crate::error::{Error, Result};
use crate::handle::SecurityDescriptorHandle;

#[derive(Debug, Clone)]
struct StoredResource {
    kind: ResourceKind,
    descriptor: SecurityDescriptor,
    read_only: bool,
}

/// Shared map of path to security descriptor
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<HashMap<String, StoredResource>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource with its initial descriptor.
    pub fn insert(
        &self,
        path: impl Into<String>,
        kind: ResourceKind,
        descriptor: SecurityDescriptor,
    ) {
        let mut resources = self.inner.write().expect("memory store lock poisoned");
        resources.insert(
            path.into(),
            StoredResource {
                kind,
                descriptor,
                read_only: false,
            },
        );
    }

    /// Mark a resource read-only, so descriptor writes fail with
    /// access-denied. Returns false if the path is unknown.
    pub fn set_read_only(&self, path: &str, read_only: bool) -> bool {
        let mut resources = self.inner.write().expect("memory store lock poisoned");
        match resources.get_mut(path) {
            Some(resource) => {
                resource.read_only = read_only;
                true
            }
            None => false,
        }
    }

    /// Current descriptor of a resource, if any.
    pub fn descriptor(&self, path: &str) -> Option<SecurityDescriptor> {
        let resources = self.inner.read().expect("memory store lock poisoned");
        resources.get(path).map(|resource| resource.descriptor.clone())
    }

    /// Handle for an already registered resource.
    pub fn handle(&self, path: &str) -> Result<MemoryHandle> {
        let resources = self
            .inner
            .read()
            .map_err(|e| Error::Internal(format!("memory store lock poisoned: {e}")))?;
        let resource = resources
            .get(path)
            .ok_or_else(|| Error::ResourceNotFound(path.to_string()))?;
        Ok(MemoryHandle {
            store: self.clone(),
            path: path.to_string(),
            kind: resource.kind,
            writable: true,
        })
    }

    /// Open a registry key handle, optionally creating the key.
    ///
    /// Mirrors the platform's `open(path, writable, createIfMissing)`
    /// factory: a missing key is created (with the given owner semantics
    /// left to the caller) only when `create_if_missing` is set, and a
    /// handle opened without `writable` refuses descriptor writes.
    pub fn open_key(
        &self,
        path: &str,
        writable: bool,
        create_if_missing: bool,
    ) -> Result<MemoryHandle> {
        {
            let mut resources = self
                .inner
                .write()
                .map_err(|e| Error::Internal(format!("memory store lock poisoned: {e}")))?;
            if !resources.contains_key(path) {
                if !create_if_missing {
                    return Err(Error::ResourceNotFound(path.to_string()));
                }
                resources.insert(
                    path.to_string(),
                    StoredResource {
                        kind: ResourceKind::RegistryKey,
                        descriptor: SecurityDescriptor::new(""),
                        read_only: false,
                    },
                );
            }
        }
        Ok(MemoryHandle {
            store: self.clone(),
            path: path.to_string(),
            kind: ResourceKind::RegistryKey,
            writable,
        })
    }
}

/// Handle over one resource in a [`MemoryStore`]
#[derive(Debug, Clone)]
pub struct MemoryHandle {
    store: MemoryStore,
    path: String,
    kind: ResourceKind,
    writable: bool,
}

impl SecurityDescriptorHandle for MemoryHandle {
    fn kind(&self) -> ResourceKind {
        self.kind
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn read_descriptor(&self) -> Result<SecurityDescriptor> {
        self.store
            .descriptor(&self.path)
            .ok_or_else(|| Error::ResourceNotFound(self.path.clone()))
    }

    fn write_descriptor(&mut self, descriptor: &SecurityDescriptor) -> Result<()> {
        if !self.writable {
            return Err(Error::ResourceAccessDenied(self.path.clone()));
        }
        let mut resources = self
            .store
            .inner
            .write()
            .map_err(|e| Error::Internal(format!("memory store lock poisoned: {e}")))?;
        let resource = resources
            .get_mut(&self.path)
            .ok_or_else(|| Error::ResourceNotFound(self.path.clone()))?;
        if resource.read_only {
            return Err(Error::ResourceAccessDenied(self.path.clone()));
        }
        resource.descriptor = descriptor.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_for_missing_resource() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.handle("C:\\missing"),
            Err(Error::ResourceNotFound(_))
        ));
    }

    #[test]
    fn test_read_write_round_trip() {
        let store = MemoryStore::new();
        store.insert(
            "C:\\data",
            ResourceKind::Directory,
            SecurityDescriptor::new("SYSTEM"),
        );

        let mut handle = store.handle("C:\\data").unwrap();
        let mut descriptor = handle.read_descriptor().unwrap();
        descriptor.owner = "Alice".to_string();
        handle.write_descriptor(&descriptor).unwrap();

        assert_eq!(store.descriptor("C:\\data").unwrap().owner, "Alice");
    }

    #[test]
    fn test_read_only_resource_denies_writes() {
        let store = MemoryStore::new();
        store.insert(
            "C:\\locked",
            ResourceKind::File,
            SecurityDescriptor::new("SYSTEM"),
        );
        store.set_read_only("C:\\locked", true);

        let mut handle = store.handle("C:\\locked").unwrap();
        let descriptor = handle.read_descriptor().unwrap();
        assert!(matches!(
            handle.write_descriptor(&descriptor),
            Err(Error::ResourceAccessDenied(_))
        ));
    }

    #[test]
    fn test_open_key_creates_when_asked() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.open_key("HKLM\\Software\\Missing", true, false),
            Err(Error::ResourceNotFound(_))
        ));

        let handle = store.open_key("HKLM\\Software\\New", true, true).unwrap();
        assert_eq!(handle.kind(), ResourceKind::RegistryKey);
        assert!(store.descriptor("HKLM\\Software\\New").is_some());
    }

    #[test]
    fn test_open_key_not_writable_denies_writes() {
        let store = MemoryStore::new();
        store.insert(
            "HKLM\\Software\\Ro",
            ResourceKind::RegistryKey,
            SecurityDescriptor::new("SYSTEM"),
        );
        let mut handle = store.open_key("HKLM\\Software\\Ro", false, false).unwrap();
        let descriptor = handle.read_descriptor().unwrap();
        assert!(matches!(
            handle.write_descriptor(&descriptor),
            Err(Error::ResourceAccessDenied(_))
        ));
    }
}
