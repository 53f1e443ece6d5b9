//! Error types for access rule records

use crate::kind::ResourceKind;
use thiserror::Error;

/// Result type for rule operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or converting access rule records
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Serialized rule text did not have exactly five `;`-delimited fields
    #[error("malformed rule text '{text}': expected 5 fields, found {found}")]
    MalformedRuleText { text: String, found: usize },

    /// The account field is required and must be non-empty
    #[error("account must not be empty")]
    EmptyAccount,

    /// `;` is the field delimiter and is not allowed inside field values
    #[error("field '{field}' must not contain ';': '{value}'")]
    ReservedDelimiter { field: &'static str, value: String },

    /// The resource kind does not carry an access control list
    #[error("resource kind {0} does not carry an ACL")]
    NoAcl(ResourceKind),

    /// A flag field failed to parse
    #[error(transparent)]
    Flags(#[from] aclkit_flags::Error),
}
