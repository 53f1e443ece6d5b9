//! Flag alias tables and permission flag text parsing
//!
//! Converts between human-typed permission text and the canonical bitmask
//! and enumeration values used on security descriptors. Each flag category
//! (filesystem rights, registry rights, inheritance, propagation, access
//! type, file attributes) registers an [`AliasTable`] of canonical value to
//! accepted spellings; the codec in [`codec`] parses comma-separated flag
//! lists, renders values back to canonical text, and applies `+`/`-`
//! incremental edits.
//!
//! Tables are process-wide immutable registries built lazily on first use;
//! concurrent first touch is safe.

pub mod access;
pub mod attributes;
pub mod codec;
pub mod error;
pub mod inherit;
pub mod rights;
pub mod table;

pub use access::{parse_access_type, AccessType, ACCESS_TYPES};
pub use attributes::{
    merge_attributes, parse_attributes, render_attributes, FileAttributes, FILE_ATTRIBUTES,
};
pub use codec::{merge_flags, parse_flags, render_flags};
pub use error::{Error, Result};
pub use inherit::{
    parse_inheritance_flags, parse_propagation_flags, render_inheritance_flags,
    render_propagation_flags, InheritanceFlags, PropagationFlags, INHERITANCE_FLAGS,
    PROPAGATION_FLAGS,
};
pub use rights::{
    parse_file_system_rights, parse_registry_rights, render_file_system_rights,
    render_registry_rights, FileSystemRights, RegistryRights, FILE_SYSTEM_RIGHTS, REGISTRY_RIGHTS,
};
pub use table::{AliasEntry, AliasTable, UNKNOWN};
