//! Text codec for combinable flag values
//!
//! Converts between free-form permission text and flag values using an
//! [`AliasTable`]. Flag lists are comma-separated; tokens are trimmed and
//! matched case-insensitively. [`merge_flags`] additionally supports `+`/`-`
//! prefixed tokens for incremental edits against a base value.

use bitflags::Flags;

use crate::error::{Error, Result};
use crate::table::{AliasTable, UNKNOWN};

/// Parse a comma-separated flag list into a combined value.
///
/// Every token must resolve; an unknown token fails the whole parse with
/// [`Error::UnknownAlias`] and nothing is applied partially.
pub fn parse_flags<T>(text: &str, table: &AliasTable<T>) -> Result<T>
where
    T: Flags + Copy + PartialEq,
{
    let mut value = T::empty();
    for token in split_tokens(text)? {
        value = value.union(table.resolve(token)?);
    }
    Ok(value)
}

/// Render a flag value as a comma-separated list of canonical aliases.
///
/// Entries are emitted in table declaration order whenever their value is a
/// subset of `value`; zero-valued entries are skipped during the scan. An
/// empty combination renders as the table's zero entry (so `None`
/// round-trips through [`parse_flags`]) or as `"Unknown"` when the table
/// has none.
pub fn render_flags<T>(value: T, table: &AliasTable<T>) -> String
where
    T: Flags + Copy + PartialEq,
{
    let mut parts: Vec<&str> = Vec::new();
    for entry in table.entries() {
        if !entry.value.is_empty() && value.contains(entry.value) {
            parts.push(entry.aliases[0]);
        }
    }
    if parts.is_empty() {
        table
            .entries()
            .iter()
            .find(|entry| entry.value.is_empty())
            .map(|entry| entry.aliases[0].to_string())
            .unwrap_or_else(|| UNKNOWN.to_string())
    } else {
        parts.join(", ")
    }
}

/// Apply a flag expression as a sequence of edits against `base`.
///
/// Token forms:
/// - `-Flag` clears the flag from the accumulator
/// - `+Flag` sets the flag
/// - a bare `Flag` resets the accumulator to empty once (first bare token
///   only) and then sets the flag, giving "replace the whole set" semantics
///   when no prefixes are used
///
/// The expression is validated in full before the accumulator is touched,
/// so a failing token leaves the caller's value unchanged.
pub fn merge_flags<T>(text: &str, base: T, table: &AliasTable<T>) -> Result<T>
where
    T: Flags + Copy + PartialEq,
{
    enum Edit<T> {
        Set(T),
        Clear(T),
        Replace(T),
    }

    let mut edits = Vec::new();
    for token in split_tokens(text)? {
        if let Some(name) = token.strip_prefix('-') {
            edits.push(Edit::Clear(resolve_name(name, text, table)?));
        } else if let Some(name) = token.strip_prefix('+') {
            edits.push(Edit::Set(resolve_name(name, text, table)?));
        } else {
            edits.push(Edit::Replace(table.resolve(token)?));
        }
    }

    let mut value = base;
    let mut reset = false;
    for edit in edits {
        match edit {
            Edit::Set(flag) => value = value.union(flag),
            Edit::Clear(flag) => value = value.difference(flag),
            Edit::Replace(flag) => {
                if !reset {
                    value = T::empty();
                    reset = true;
                }
                value = value.union(flag);
            }
        }
    }
    Ok(value)
}

fn resolve_name<T>(name: &str, text: &str, table: &AliasTable<T>) -> Result<T>
where
    T: Copy + PartialEq,
{
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::InvalidFlagText(text.to_string()));
    }
    table.resolve(name)
}

fn split_tokens(text: &str) -> Result<Vec<&str>> {
    if text.trim().is_empty() {
        return Err(Error::InvalidFlagText(text.to_string()));
    }
    let mut tokens = Vec::new();
    for raw in text.split(',') {
        let token = raw.trim();
        if token.is_empty() {
            return Err(Error::InvalidFlagText(text.to_string()));
        }
        tokens.push(token);
    }
    Ok(tokens)
}
