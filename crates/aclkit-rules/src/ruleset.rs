//! Read-only ACL snapshot of a securable resource

use serde::{Deserialize, Serialize};

use crate::record::AccessRuleRecord;

/// Owner, inheritance state, and explicit rules of one resource.
///
/// Snapshots are taken when a resource is inspected and discarded after
/// use; mutations always re-read the live descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessRuleSet {
    /// Owning identity of the resource
    pub owner: String,
    /// Whether the resource inherits rules from its parent
    /// (the inverse of the descriptor's rules-protected flag)
    pub is_inherited: bool,
    /// Explicit rules set directly on the resource, in normalized form
    pub rules: Vec<AccessRuleRecord>,
}

impl AccessRuleSet {
    /// Look up all rules for one account, case-insensitively.
    pub fn rules_for(&self, account: &str) -> Vec<&AccessRuleRecord> {
        self.rules
            .iter()
            .filter(|rule| rule.account.eq_ignore_ascii_case(account))
            .collect()
    }
}
