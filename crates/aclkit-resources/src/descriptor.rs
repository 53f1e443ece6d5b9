//! In-memory model of a resource's security descriptor
//!
//! Holds the owner, the rules-protected flag, and the ACE list. Handles
//! read a whole descriptor, the mutator edits it here, and the handle
//! writes it back in one call.

use aclkit_rules::{AccessRuleRecord, AccessRuleSet, Ace};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Owner, protection state, and access control entries of one resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityDescriptor {
    /// Owning identity
    pub owner: String,
    /// When true, the resource does not inherit entries from its parent
    pub rules_protected: bool,
    /// Access control entries, explicit and inherited
    pub aces: Vec<Ace>,
}

impl SecurityDescriptor {
    /// New descriptor with no entries, inheriting from its parent.
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            rules_protected: false,
            aces: Vec::new(),
        }
    }

    /// Whether the resource inherits entries from its parent.
    pub fn is_inherited(&self) -> bool {
        !self.rules_protected
    }

    /// Append an entry. No dedup: adding the same entry twice leaves two.
    pub fn add_ace(&mut self, ace: Ace) {
        self.aces.push(ace);
    }

    /// Remove every entry whose identity matches `account`,
    /// case-insensitively. Returns how many were removed.
    pub fn remove_aces_for(&mut self, account: &str) -> usize {
        let before = self.aces.len();
        self.aces.retain(|ace| !ace.matches_account(account));
        before - self.aces.len()
    }

    /// Remove every entry. Returns how many were removed.
    pub fn clear_aces(&mut self) -> usize {
        let removed = self.aces.len();
        self.aces.clear();
        removed
    }

    /// Set the rules-protected flag.
    ///
    /// When protection is newly enabled, `preserve` decides the fate of
    /// entries that were inherited from the parent: `true` converts them to
    /// explicit entries, `false` drops them. Disabling protection only
    /// clears the flag; re-inheriting from the parent is the platform's
    /// job on the next read.
    pub fn set_protection(&mut self, protect: bool, preserve: bool) {
        if protect && !self.rules_protected {
            if preserve {
                for ace in &mut self.aces {
                    ace.inherited = false;
                }
            } else {
                self.aces.retain(|ace| !ace.inherited);
            }
        }
        self.rules_protected = protect;
    }

    /// Normalized snapshot of the explicit (non-inherited) entries.
    ///
    /// Fails if any entry's account cannot be represented in the flat
    /// record form (empty, or containing the `;` field delimiter).
    pub fn to_rule_set(&self) -> Result<AccessRuleSet> {
        let rules = self
            .aces
            .iter()
            .filter(|ace| !ace.inherited)
            .map(AccessRuleRecord::from_ace)
            .collect::<aclkit_rules::Result<Vec<_>>>()?;
        Ok(AccessRuleSet {
            owner: self.owner.clone(),
            is_inherited: self.is_inherited(),
            rules,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aclkit_flags::{
        AccessType, FileSystemRights, InheritanceFlags, PropagationFlags,
    };
    use aclkit_rules::RightsValue;

    fn ace(account: &str, inherited: bool) -> Ace {
        Ace {
            account: account.to_string(),
            rights: RightsValue::FileSystem(FileSystemRights::READ),
            access: AccessType::Allow,
            inheritance: InheritanceFlags::empty(),
            propagation: PropagationFlags::empty(),
            inherited,
        }
    }

    #[test]
    fn test_remove_aces_for_is_case_insensitive() {
        let mut descriptor = SecurityDescriptor::new("SYSTEM");
        descriptor.add_ace(ace("Alice", false));
        descriptor.add_ace(ace("ALICE", false));
        descriptor.add_ace(ace("Bob", false));

        assert_eq!(descriptor.remove_aces_for("alice"), 2);
        assert_eq!(descriptor.aces.len(), 1);
        assert_eq!(descriptor.aces[0].account, "Bob");
    }

    #[test]
    fn test_remove_aces_for_absent_account_is_noop() {
        let mut descriptor = SecurityDescriptor::new("SYSTEM");
        descriptor.add_ace(ace("Alice", false));
        assert_eq!(descriptor.remove_aces_for("NoSuchAccount"), 0);
        assert_eq!(descriptor.aces.len(), 1);
    }

    #[test]
    fn test_add_ace_does_not_dedup() {
        let mut descriptor = SecurityDescriptor::new("SYSTEM");
        descriptor.add_ace(ace("Alice", false));
        descriptor.add_ace(ace("Alice", false));
        assert_eq!(descriptor.aces.len(), 2);
    }

    #[test]
    fn test_set_protection_preserving_converts_inherited() {
        let mut descriptor = SecurityDescriptor::new("SYSTEM");
        descriptor.add_ace(ace("Alice", true));
        descriptor.add_ace(ace("Bob", false));

        descriptor.set_protection(true, true);
        assert!(descriptor.rules_protected);
        assert!(!descriptor.is_inherited());
        assert_eq!(descriptor.aces.len(), 2);
        assert!(descriptor.aces.iter().all(|ace| !ace.inherited));
    }

    #[test]
    fn test_set_protection_dropping_removes_inherited() {
        let mut descriptor = SecurityDescriptor::new("SYSTEM");
        descriptor.add_ace(ace("Alice", true));
        descriptor.add_ace(ace("Bob", false));

        descriptor.set_protection(true, false);
        assert_eq!(descriptor.aces.len(), 1);
        assert_eq!(descriptor.aces[0].account, "Bob");
    }

    #[test]
    fn test_set_protection_when_already_protected_keeps_entries() {
        let mut descriptor = SecurityDescriptor::new("SYSTEM");
        descriptor.set_protection(true, false);
        descriptor.add_ace(ace("Alice", true));

        // Already protected, so a second call must not touch the entries.
        descriptor.set_protection(true, false);
        assert_eq!(descriptor.aces.len(), 1);
    }

    #[test]
    fn test_to_rule_set_skips_inherited_entries() {
        let mut descriptor = SecurityDescriptor::new("SYSTEM");
        descriptor.add_ace(ace("Alice", false));
        descriptor.add_ace(ace("Parent", true));

        let set = descriptor.to_rule_set().unwrap();
        assert_eq!(set.owner, "SYSTEM");
        assert!(set.is_inherited);
        assert_eq!(set.rules.len(), 1);
        assert_eq!(set.rules[0].account, "Alice");
    }

    #[test]
    fn test_to_rule_set_rejects_delimiter_in_account() {
        let mut descriptor = SecurityDescriptor::new("SYSTEM");
        descriptor.add_ace(ace("DOMAIN;Alice", false));
        assert!(descriptor.to_rule_set().is_err());
    }
}
