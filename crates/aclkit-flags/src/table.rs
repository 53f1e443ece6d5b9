//! Alias tables mapping canonical flag values to their accepted spellings
//!
//! A table is an ordered list of entries; each entry pairs one canonical
//! value with a non-empty list of case-insensitive aliases. The first alias
//! of an entry is the canonical spelling used when rendering. Tables are
//! built once behind a `Lazy` and never mutated afterwards.

use crate::error::{Error, Result};

/// Sentinel returned when a value has no registered entry
pub const UNKNOWN: &str = "Unknown";

/// One canonical value together with its accepted spellings
#[derive(Debug, Clone, Copy)]
pub struct AliasEntry<T> {
    /// Canonical value for this entry
    pub value: T,
    /// Accepted spellings; the first one is canonical
    pub aliases: &'static [&'static str],
}

/// Ordered, immutable registry of flag aliases for one flag category
#[derive(Debug, Clone)]
pub struct AliasTable<T> {
    entries: Vec<AliasEntry<T>>,
}

impl<T: Copy + PartialEq> AliasTable<T> {
    /// Build a table from its entries.
    ///
    /// Debug builds assert that every entry has at least one alias and that
    /// no alias (case-insensitively) appears under two entries.
    pub fn new(entries: Vec<AliasEntry<T>>) -> Self {
        #[cfg(debug_assertions)]
        {
            let mut seen: Vec<&str> = Vec::new();
            for entry in &entries {
                assert!(!entry.aliases.is_empty(), "alias entry without aliases");
                for alias in entry.aliases {
                    assert!(
                        !seen.iter().any(|s| s.eq_ignore_ascii_case(alias)),
                        "duplicate alias '{alias}' in table"
                    );
                    seen.push(alias);
                }
            }
        }
        Self { entries }
    }

    /// Resolve a single alias to its canonical value, case-insensitively.
    pub fn resolve(&self, alias: &str) -> Result<T> {
        for entry in &self.entries {
            if entry.aliases.iter().any(|a| a.eq_ignore_ascii_case(alias)) {
                return Ok(entry.value);
            }
        }
        Err(Error::UnknownAlias(alias.to_string()))
    }

    /// Canonical spelling for an exactly matching value.
    ///
    /// This is an exact reverse lookup, not a flag decomposition; combined
    /// values without their own entry yield the [`UNKNOWN`] sentinel. Use
    /// [`crate::render_flags`] to render combinations.
    pub fn canonical(&self, value: T) -> &'static str {
        self.entries
            .iter()
            .find(|entry| entry.value == value)
            .map(|entry| entry.aliases[0])
            .unwrap_or(UNKNOWN)
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[AliasEntry<T>] {
        &self.entries
    }
}
