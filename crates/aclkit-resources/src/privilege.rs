//! Process privilege elevation capability
//!
//! Ownership changes can require elevating specific token privileges
//! before the descriptor write. Elevation itself is platform work and
//! lives behind [`PrivilegeAdjuster`]; the mutator only decides when to
//! call it and treats failures as non-fatal.

use crate::error::Result;

/// Token privileges relevant to ownership changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Privilege {
    TakeOwnership,
    Restore,
    Backup,
}

impl Privilege {
    /// Privileges adjusted before every owner change, in order.
    pub const OWNERSHIP_SET: [Privilege; 3] =
        [Privilege::TakeOwnership, Privilege::Restore, Privilege::Backup];

    /// Platform name of the privilege.
    pub fn as_name(&self) -> &'static str {
        match self {
            Privilege::TakeOwnership => "SeTakeOwnershipPrivilege",
            Privilege::Restore => "SeRestorePrivilege",
            Privilege::Backup => "SeBackupPrivilege",
        }
    }
}

impl std::fmt::Display for Privilege {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_name())
    }
}

/// Capability to enable a privilege on the current process token
pub trait PrivilegeAdjuster {
    /// Enable `privilege` on the process token, best-effort.
    fn adjust_token(&self, privilege: Privilege) -> Result<()>;
}

/// Adjuster that grants nothing and never fails; the default on hosts
/// where no elevation is needed or possible
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPrivileges;

impl PrivilegeAdjuster for NoopPrivileges {
    fn adjust_token(&self, _privilege: Privilege) -> Result<()> {
        Ok(())
    }
}
