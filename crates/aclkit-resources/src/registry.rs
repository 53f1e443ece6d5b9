//! Registry value kinds and a text codec for value data
//!
//! Value data travels through the same text pipeline as everything else,
//! so each kind has a canonical string form: hex pairs for binary,
//! decimal for the integer kinds, and `\0`-joined strings for
//! multi-string values.

use aclkit_flags::{AliasEntry, AliasTable};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// The storage type of a registry value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegistryValueKind {
    String,
    ExpandString,
    Binary,
    DWord,
    QWord,
    MultiString,
    None,
}

pub static REGISTRY_VALUE_KINDS: Lazy<AliasTable<RegistryValueKind>> = Lazy::new(|| {
    AliasTable::new(vec![
        AliasEntry { value: RegistryValueKind::String, aliases: &["REG_SZ", "String", "Str"] },
        AliasEntry {
            value: RegistryValueKind::ExpandString,
            aliases: &["REG_EXPAND_SZ", "ExpandString", "Expand"],
        },
        AliasEntry { value: RegistryValueKind::Binary, aliases: &["REG_BINARY", "Binary", "Bytes"] },
        AliasEntry { value: RegistryValueKind::DWord, aliases: &["REG_DWORD", "DWord", "Int"] },
        AliasEntry { value: RegistryValueKind::QWord, aliases: &["REG_QWORD", "QWord", "Long"] },
        AliasEntry {
            value: RegistryValueKind::MultiString,
            aliases: &["REG_MULTI_SZ", "MultiString", "Strings"],
        },
        AliasEntry { value: RegistryValueKind::None, aliases: &["REG_NONE", "None"] },
    ])
});

/// Resolve a value kind name, e.g. `"REG_DWORD"` or `"Int"`.
pub fn parse_value_kind(text: &str) -> aclkit_flags::Result<RegistryValueKind> {
    REGISTRY_VALUE_KINDS.resolve(text.trim())
}

impl std::fmt::Display for RegistryValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(REGISTRY_VALUE_KINDS.canonical(*self))
    }
}

/// Typed registry value data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryData {
    String(String),
    ExpandString(String),
    Binary(Vec<u8>),
    DWord(u32),
    QWord(u64),
    MultiString(Vec<String>),
    None,
}

/// Multi-string values join their elements with a literal backslash-zero
/// pair, mirroring the NUL separators of REG_MULTI_SZ.
const MULTI_STRING_SEPARATOR: &str = "\\0";

impl RegistryData {
    /// Build value data of `kind` from its text form.
    ///
    /// The codec is tolerant: unparseable integers become zero and
    /// malformed hex becomes empty binary data, so a bad field degrades
    /// instead of aborting a whole import.
    pub fn from_text(kind: RegistryValueKind, text: &str) -> Self {
        match kind {
            RegistryValueKind::String => RegistryData::String(text.to_string()),
            RegistryValueKind::ExpandString => RegistryData::ExpandString(text.to_string()),
            RegistryValueKind::Binary => RegistryData::Binary(parse_hex_bytes(text)),
            RegistryValueKind::DWord => RegistryData::DWord(text.trim().parse().unwrap_or(0)),
            RegistryValueKind::QWord => RegistryData::QWord(text.trim().parse().unwrap_or(0)),
            RegistryValueKind::MultiString => RegistryData::MultiString(
                if text.is_empty() {
                    Vec::new()
                } else {
                    text.split(MULTI_STRING_SEPARATOR).map(str::to_string).collect()
                },
            ),
            RegistryValueKind::None => RegistryData::None,
        }
    }

    /// The kind this data was built as.
    pub fn kind(&self) -> RegistryValueKind {
        match self {
            RegistryData::String(_) => RegistryValueKind::String,
            RegistryData::ExpandString(_) => RegistryValueKind::ExpandString,
            RegistryData::Binary(_) => RegistryValueKind::Binary,
            RegistryData::DWord(_) => RegistryValueKind::DWord,
            RegistryData::QWord(_) => RegistryValueKind::QWord,
            RegistryData::MultiString(_) => RegistryValueKind::MultiString,
            RegistryData::None => RegistryValueKind::None,
        }
    }

    /// The canonical text form of the data.
    pub fn to_text(&self) -> String {
        match self {
            RegistryData::String(s) | RegistryData::ExpandString(s) => s.clone(),
            RegistryData::Binary(bytes) => {
                bytes.iter().map(|b| format!("{b:02X}")).collect()
            }
            RegistryData::DWord(n) => n.to_string(),
            RegistryData::QWord(n) => n.to_string(),
            RegistryData::MultiString(items) => items.join(MULTI_STRING_SEPARATOR),
            RegistryData::None => String::new(),
        }
    }
}

/// Contiguous hex digit pairs; whitespace between digits is ignored. An
/// odd digit count or a non-hex character degrades to empty data.
fn parse_hex_bytes(text: &str) -> Vec<u8> {
    let digits: Vec<u8> = text.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Vec::new();
    }
    let mut bytes = Vec::with_capacity(digits.len() / 2);
    for pair in digits.chunks(2) {
        match (
            (pair[0] as char).to_digit(16),
            (pair[1] as char).to_digit(16),
        ) {
            (Some(hi), Some(lo)) => bytes.push((hi * 16 + lo) as u8),
            _ => return Vec::new(),
        }
    }
    bytes
}
