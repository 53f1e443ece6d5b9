//! Securable resource mutation over an abstract descriptor store
//!
//! This crate turns parsed access rule records into changes on real
//! resources. The [`SecurityDescriptorHandle`] trait is the seam to the
//! platform; [`ResourceMutator`] drives grant/revoke/ownership/inheritance
//! operations through it as read-modify-write cycles, and
//! [`ResourceSnapshot`] captures the resulting state for export. The
//! [`memory`] module provides the in-memory store used by tests and by
//! embedders without a platform backend.

pub mod descriptor;
pub mod error;
pub mod handle;
pub mod memory;
pub mod mutator;
pub mod privilege;
pub mod registry;
pub mod snapshot;

pub use descriptor::SecurityDescriptor;
pub use error::{Error, Result};
pub use handle::SecurityDescriptorHandle;
pub use memory::{MemoryHandle, MemoryStore};
pub use mutator::ResourceMutator;
pub use privilege::{NoopPrivileges, Privilege, PrivilegeAdjuster};
pub use registry::{
    parse_value_kind, RegistryData, RegistryValueKind, REGISTRY_VALUE_KINDS,
};
pub use snapshot::ResourceSnapshot;
