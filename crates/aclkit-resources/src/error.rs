//! Error types for resource descriptor access

use thiserror::Error;

/// Result type for resource operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced from the resource handle layer
#[derive(Error, Debug)]
pub enum Error {
    /// No resource exists at the given path
    #[error("resource not found: '{0}'")]
    ResourceNotFound(String),

    /// The caller lacks the privilege to read or write the descriptor
    #[error("access to resource denied: '{0}'")]
    ResourceAccessDenied(String),

    /// Underlying I/O failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A rule record could not be turned into a platform rule
    #[error(transparent)]
    Rule(#[from] aclkit_rules::Error),

    /// Invariant violation inside the handle implementation
    #[error("internal error: {0}")]
    Internal(String),
}
