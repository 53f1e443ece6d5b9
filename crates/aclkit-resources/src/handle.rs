//! The capability seam between the mutator and the operating system
//!
//! A handle knows how to fetch and store the security descriptor of one
//! resource. Real implementations wrap platform security APIs; the
//! in-memory implementation in [`crate::memory`] backs tests and
//! embedding. Handles are cheap and per-operation; nothing is shared
//! across calls.

use aclkit_rules::ResourceKind;

use crate::descriptor::SecurityDescriptor;
use crate::error::Result;

/// Scoped access to one resource's security descriptor
pub trait SecurityDescriptorHandle {
    /// Kind of the underlying resource
    fn kind(&self) -> ResourceKind;

    /// Path identifying the resource
    fn path(&self) -> &str;

    /// Fetch the current descriptor.
    fn read_descriptor(&self) -> Result<SecurityDescriptor>;

    /// Store a descriptor, replacing the current one in a single call.
    ///
    /// There is no optimistic-concurrency check: if another process changed
    /// the descriptor between read and write, the last write wins.
    fn write_descriptor(&mut self, descriptor: &SecurityDescriptor) -> Result<()>;
}
