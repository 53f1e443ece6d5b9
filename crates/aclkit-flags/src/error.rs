//! Error types for flag alias resolution and flag text parsing

use thiserror::Error;

/// Result type for flag parsing operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving aliases or parsing flag text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A single token did not match any registered alias
    #[error("unknown flag alias: '{0}'")]
    UnknownAlias(String),

    /// The flag expression itself is malformed (empty text, empty token,
    /// bare `+`/`-` with no flag name)
    #[error("invalid flag text: '{0}'")]
    InvalidFlagText(String),
}
