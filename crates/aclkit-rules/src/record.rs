//! The normalized, serializable form of one access control entry
//!
//! An [`AccessRuleRecord`] is a flat 5-tuple of text fields:
//! `account;rights;access_type;inheritance;propagation`. Records are built
//! either from a platform entry read off a live resource (normalized to
//! canonical flag text) or from caller-supplied text describing an intended
//! mutation. They are short-lived; nothing persists them beyond a single
//! operation.

use std::fmt;
use std::str::FromStr;

use aclkit_flags::{
    parse_access_type, parse_file_system_rights, parse_inheritance_flags,
    parse_propagation_flags, parse_registry_rights, render_flags, FileSystemRights,
    InheritanceFlags, PropagationFlags, RegistryRights, FILE_SYSTEM_RIGHTS, INHERITANCE_FLAGS,
    PROPAGATION_FLAGS, REGISTRY_RIGHTS, UNKNOWN,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ace::{Ace, RightsValue};
use crate::error::{Error, Result};
use crate::kind::ResourceKind;

const FIELD_COUNT: usize = 5;

/// Flat 5-field form of one access control entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessRuleRecord {
    /// Identity the rule applies to; required, non-empty
    pub account: String,
    /// Rights as flag text (filesystem or registry, depending on target kind)
    pub rights: String,
    /// `Allow` or `Deny`
    pub access_type: String,
    /// Inheritance flag text
    pub inheritance: String,
    /// Propagation flag text
    pub propagation: String,
}

impl AccessRuleRecord {
    /// Build a record from caller-supplied field text.
    ///
    /// The account must be non-empty and no field may contain the `;` field
    /// delimiter. Flag text is stored verbatim; it is validated when the
    /// record is turned into a platform rule.
    pub fn new(
        account: impl Into<String>,
        rights: impl Into<String>,
        access_type: impl Into<String>,
        inheritance: impl Into<String>,
        propagation: impl Into<String>,
    ) -> Result<Self> {
        let record = Self {
            account: account.into(),
            rights: rights.into(),
            access_type: access_type.into(),
            inheritance: inheritance.into(),
            propagation: propagation.into(),
        };
        record.validate()?;
        Ok(record)
    }

    /// Parse the serialized `account;rights;accessType;inheritance;propagation`
    /// form. Exactly five fields are required.
    pub fn parse(text: &str) -> Result<Self> {
        let parts: Vec<&str> = text.split(';').collect();
        if parts.len() != FIELD_COUNT {
            return Err(Error::MalformedRuleText {
                text: text.to_string(),
                found: parts.len(),
            });
        }
        let record = Self {
            account: parts[0].to_string(),
            rights: parts[1].to_string(),
            access_type: parts[2].to_string(),
            inheritance: parts[3].to_string(),
            propagation: parts[4].to_string(),
        };
        record.validate()?;
        Ok(record)
    }

    /// Normalize a platform entry into its flat text form.
    ///
    /// Filesystem rights covering everything but `Synchronize` collapse to
    /// the literal `FullControl`; otherwise the `Synchronize` bit is
    /// stripped before rendering, since every real-world grant carries it
    /// and it is noise in round-trips.
    ///
    /// The entry's account goes through the same field validation as
    /// caller-supplied text, so an empty account or one containing the `;`
    /// delimiter fails rather than producing a record that cannot
    /// re-parse.
    pub fn from_ace(ace: &Ace) -> Result<Self> {
        let rights = match ace.rights {
            RightsValue::FileSystem(rights) => summarize_file_system_rights(rights),
            RightsValue::Registry(rights) => summarize_registry_rights(rights),
        };
        let record = Self {
            account: ace.account.clone(),
            rights,
            access_type: ace.access.to_string(),
            inheritance: render_flags(ace.inheritance, &INHERITANCE_FLAGS),
            propagation: render_flags(ace.propagation, &PROPAGATION_FLAGS),
        };
        record.validate()?;
        Ok(record)
    }

    /// Reconstruct the platform rule shape appropriate to `kind`.
    ///
    /// File rules omit inheritance and propagation (files are not
    /// containers); directory and registry-key rules carry them. Registry
    /// values have no ACL and are rejected.
    pub fn to_platform_rule(&self, kind: ResourceKind) -> Result<Ace> {
        let access = parse_access_type(&self.access_type)?;
        let (rights, inheritance, propagation) = match kind {
            ResourceKind::File => (
                RightsValue::FileSystem(parse_file_system_rights(&self.rights)?),
                InheritanceFlags::empty(),
                PropagationFlags::empty(),
            ),
            ResourceKind::Directory => (
                RightsValue::FileSystem(parse_file_system_rights(&self.rights)?),
                parse_inheritance_flags(&self.inheritance)?,
                parse_propagation_flags(&self.propagation)?,
            ),
            ResourceKind::RegistryKey => (
                RightsValue::Registry(parse_registry_rights(&self.rights)?),
                parse_inheritance_flags(&self.inheritance)?,
                parse_propagation_flags(&self.propagation)?,
            ),
            ResourceKind::RegistryValue => return Err(Error::NoAcl(kind)),
        };
        Ok(Ace {
            account: self.account.clone(),
            rights,
            access,
            inheritance,
            propagation,
            inherited: false,
        })
    }

    fn validate(&self) -> Result<()> {
        if self.account.is_empty() {
            return Err(Error::EmptyAccount);
        }
        for (field, value) in [
            ("account", &self.account),
            ("rights", &self.rights),
            ("access_type", &self.access_type),
            ("inheritance", &self.inheritance),
            ("propagation", &self.propagation),
        ] {
            if value.contains(';') {
                return Err(Error::ReservedDelimiter {
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}

fn summarize_file_system_rights(rights: FileSystemRights) -> String {
    let full_without_sync = FileSystemRights::FULL_CONTROL.difference(FileSystemRights::SYNCHRONIZE);
    if rights.contains(full_without_sync) {
        return "FullControl".to_string();
    }
    let visible = rights.difference(FileSystemRights::SYNCHRONIZE);
    let canonical = FILE_SYSTEM_RIGHTS.canonical(visible);
    if canonical != UNKNOWN {
        return canonical.to_string();
    }
    render_flags(visible, &FILE_SYSTEM_RIGHTS)
}

fn summarize_registry_rights(rights: RegistryRights) -> String {
    let canonical = REGISTRY_RIGHTS.canonical(rights);
    if canonical != UNKNOWN {
        return canonical.to_string();
    }
    render_flags(rights, &REGISTRY_RIGHTS)
}

impl fmt::Display for AccessRuleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{};{};{};{};{}",
            self.account, self.rights, self.access_type, self.inheritance, self.propagation
        )
    }
}

impl FromStr for AccessRuleRecord {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Self::parse(text)
    }
}

impl Serialize for AccessRuleRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AccessRuleRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
