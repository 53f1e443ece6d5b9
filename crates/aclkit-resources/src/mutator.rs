//! Grant/revoke/ownership/inheritance mutations on securable resources
//!
//! One generic mutator covers files, directories, and registry keys; the
//! differences live in the handle and in the platform rule shape built
//! from the record. Every operation is a single read-modify-write cycle
//! over the resource's descriptor and reports plain success/failure: OS
//! errors are logged here and never propagate to the caller.

use aclkit_rules::AccessRuleRecord;
use tracing::{error, info, warn};

use crate::error::Result;
use crate::handle::SecurityDescriptorHandle;
use crate::privilege::{NoopPrivileges, Privilege, PrivilegeAdjuster};

/// Applies access rule mutations to one securable resource
pub struct ResourceMutator<H: SecurityDescriptorHandle> {
    handle: H,
    privileges: Box<dyn PrivilegeAdjuster>,
}

impl<H: SecurityDescriptorHandle> ResourceMutator<H> {
    /// Mutator with no privilege elevation capability.
    pub fn new(handle: H) -> Self {
        Self::with_privileges(handle, Box::new(NoopPrivileges))
    }

    /// Mutator that elevates token privileges through `privileges` before
    /// ownership changes.
    pub fn with_privileges(handle: H, privileges: Box<dyn PrivilegeAdjuster>) -> Self {
        Self { handle, privileges }
    }

    /// The underlying handle.
    pub fn handle(&self) -> &H {
        &self.handle
    }

    /// Add the record's rule to the resource's ACE list.
    ///
    /// No dedup check is made; granting the same rule twice yields two
    /// entries unless the platform merges them.
    pub fn grant(&mut self, record: &AccessRuleRecord) -> bool {
        info!(
            path = %self.handle.path(),
            kind = %self.handle.kind(),
            rule = %record,
            "Granting access rule"
        );
        match self.try_grant(record) {
            Ok(()) => {
                info!(path = %self.handle.path(), "Successfully granted access rule");
                true
            }
            Err(e) => {
                error!(path = %self.handle.path(), error = %e, "Failed to grant access rule");
                false
            }
        }
    }

    /// Remove every entry matching `account` (case-insensitive).
    ///
    /// Zero matches is a no-op success, not an error.
    pub fn revoke(&mut self, account: &str) -> bool {
        info!(
            path = %self.handle.path(),
            kind = %self.handle.kind(),
            account,
            "Revoking access rules"
        );
        match self.try_revoke(account) {
            Ok(removed) => {
                info!(path = %self.handle.path(), removed, "Successfully revoked access rules");
                true
            }
            Err(e) => {
                error!(path = %self.handle.path(), error = %e, "Failed to revoke access rules");
                false
            }
        }
    }

    /// Remove every entry on the resource.
    pub fn revoke_all(&mut self) -> bool {
        info!(
            path = %self.handle.path(),
            kind = %self.handle.kind(),
            "Revoking all access rules"
        );
        match self.try_revoke_all() {
            Ok(removed) => {
                info!(path = %self.handle.path(), removed, "Successfully revoked all access rules");
                true
            }
            Err(e) => {
                error!(path = %self.handle.path(), error = %e, "Failed to revoke all access rules");
                false
            }
        }
    }

    /// Set the resource owner.
    ///
    /// An empty `new_owner` is a skip: nothing happens and the call still
    /// succeeds. The take-ownership, restore, and backup privileges are
    /// adjusted (best-effort) before every actual change.
    pub fn change_owner(&mut self, new_owner: &str) -> bool {
        if new_owner.is_empty() {
            warn!(path = %self.handle.path(), "Skip owner change, no new owner given");
            return true;
        }
        info!(
            path = %self.handle.path(),
            kind = %self.handle.kind(),
            new_owner,
            "Changing owner"
        );
        for privilege in Privilege::OWNERSHIP_SET {
            if let Err(e) = self.privileges.adjust_token(privilege) {
                warn!(privilege = %privilege, error = %e, "Failed to adjust token privilege");
            }
        }
        match self.try_change_owner(new_owner) {
            Ok(()) => {
                info!(path = %self.handle.path(), "Successfully changed owner");
                true
            }
            Err(e) => {
                error!(path = %self.handle.path(), error = %e, "Failed to change owner");
                false
            }
        }
    }

    /// Set whether the resource inherits rules from its parent.
    ///
    /// `None` is a skip (success with no effect). `preserve_existing`
    /// decides whether inherited entries become explicit or are dropped
    /// when inheritance is being switched off.
    pub fn change_inherited(&mut self, is_inherited: Option<bool>, preserve_existing: bool) -> bool {
        let Some(inherited) = is_inherited else {
            warn!(path = %self.handle.path(), "Skip inheritance change, no value given");
            return true;
        };
        info!(
            path = %self.handle.path(),
            kind = %self.handle.kind(),
            inherited,
            preserve_existing,
            "Changing rule inheritance"
        );
        match self.try_change_inherited(inherited, preserve_existing) {
            Ok(()) => {
                info!(path = %self.handle.path(), "Successfully changed rule inheritance");
                true
            }
            Err(e) => {
                error!(path = %self.handle.path(), error = %e, "Failed to change rule inheritance");
                false
            }
        }
    }

    fn try_grant(&mut self, record: &AccessRuleRecord) -> Result<()> {
        let ace = record.to_platform_rule(self.handle.kind())?;
        let mut descriptor = self.handle.read_descriptor()?;
        descriptor.add_ace(ace);
        self.handle.write_descriptor(&descriptor)
    }

    fn try_revoke(&mut self, account: &str) -> Result<usize> {
        let mut descriptor = self.handle.read_descriptor()?;
        let removed = descriptor.remove_aces_for(account);
        if removed > 0 {
            self.handle.write_descriptor(&descriptor)?;
        }
        Ok(removed)
    }

    fn try_revoke_all(&mut self) -> Result<usize> {
        let mut descriptor = self.handle.read_descriptor()?;
        let removed = descriptor.clear_aces();
        if removed > 0 {
            self.handle.write_descriptor(&descriptor)?;
        }
        Ok(removed)
    }

    fn try_change_owner(&mut self, new_owner: &str) -> Result<()> {
        let mut descriptor = self.handle.read_descriptor()?;
        descriptor.owner = new_owner.to_string();
        self.handle.write_descriptor(&descriptor)
    }

    fn try_change_inherited(&mut self, inherited: bool, preserve: bool) -> Result<()> {
        let mut descriptor = self.handle.read_descriptor()?;
        // Protected is the inverse of inherited.
        descriptor.set_protection(!inherited, preserve);
        self.handle.write_descriptor(&descriptor)
    }
}
