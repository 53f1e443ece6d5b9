//! Platform access control entries
//!
//! An [`Ace`] is the typed, per-resource-kind shape of one allow/deny rule
//! as it sits on a security descriptor. The flat, text-form counterpart is
//! [`crate::AccessRuleRecord`].

use aclkit_flags::{
    AccessType, FileSystemRights, InheritanceFlags, PropagationFlags, RegistryRights,
};
use serde::{Deserialize, Serialize};

/// Rights of an entry, typed by the resource family they apply to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RightsValue {
    FileSystem(FileSystemRights),
    Registry(RegistryRights),
}

/// One access control entry on a security descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ace {
    /// Identity the entry applies to (user or group name)
    pub account: String,
    /// Rights granted or denied
    pub rights: RightsValue,
    /// Allow or deny
    pub access: AccessType,
    /// Inheritance to child containers/objects
    pub inheritance: InheritanceFlags,
    /// Propagation of an inheritable entry
    pub propagation: PropagationFlags,
    /// Whether this entry was inherited from a parent rather than set
    /// explicitly on the resource
    pub inherited: bool,
}

impl Ace {
    /// Whether this entry's identity matches `account`, case-insensitively.
    pub fn matches_account(&self, account: &str) -> bool {
        self.account.eq_ignore_ascii_case(account)
    }
}
