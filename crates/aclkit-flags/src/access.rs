//! Allow/deny access control type

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::table::{AliasEntry, AliasTable};

/// Whether an access control entry grants or denies its rights.
///
/// This is a closed enumeration, not a combinable flag set, so it goes
/// through the alias table directly rather than the flag codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccessType {
    Allow,
    Deny,
}

/// Alias table for [`AccessType`]
pub static ACCESS_TYPES: Lazy<AliasTable<AccessType>> = Lazy::new(|| {
    AliasTable::new(vec![
        AliasEntry { value: AccessType::Allow, aliases: &["Allow", "A"] },
        AliasEntry { value: AccessType::Deny, aliases: &["Deny", "Block", "D"] },
    ])
});

/// Resolve access type text, e.g. `"Allow"` or `"Block"`.
pub fn parse_access_type(text: &str) -> Result<AccessType> {
    ACCESS_TYPES.resolve(text.trim())
}

impl std::fmt::Display for AccessType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(ACCESS_TYPES.canonical(*self))
    }
}
