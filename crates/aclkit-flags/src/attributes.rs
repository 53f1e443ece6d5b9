//! File attribute flags and the `+`/`-` attribute edit syntax
//!
//! Bit values match the Windows `FILE_ATTRIBUTE_*` constants. `Normal`
//! (0x80) is itself a bit, not the empty set; it means "no other attributes
//! apply" and is what the `None` spelling maps to.

use bitflags::bitflags;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::codec::{merge_flags, parse_flags, render_flags};
use crate::error::Result;
use crate::table::{AliasEntry, AliasTable};

bitflags! {
    /// Attributes carried by files and directories
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct FileAttributes: u32 {
        const READ_ONLY = 0x0000_0001;
        const HIDDEN = 0x0000_0002;
        const SYSTEM = 0x0000_0004;
        const DIRECTORY = 0x0000_0010;
        const ARCHIVE = 0x0000_0020;
        const DEVICE = 0x0000_0040;
        const NORMAL = 0x0000_0080;
        const TEMPORARY = 0x0000_0100;
        const SPARSE_FILE = 0x0000_0200;
        const REPARSE_POINT = 0x0000_0400;
        const COMPRESSED = 0x0000_0800;
        const OFFLINE = 0x0000_1000;
        const NOT_CONTENT_INDEXED = 0x0000_2000;
        const ENCRYPTED = 0x0000_4000;
        const INTEGRITY_STREAM = 0x0000_8000;
        const NO_SCRUB_DATA = 0x0002_0000;
    }
}

/// Alias table for [`FileAttributes`]
pub static FILE_ATTRIBUTES: Lazy<AliasTable<FileAttributes>> = Lazy::new(|| {
    AliasTable::new(vec![
        AliasEntry { value: FileAttributes::ARCHIVE, aliases: &["Archive"] },
        AliasEntry { value: FileAttributes::COMPRESSED, aliases: &["Compressed"] },
        AliasEntry { value: FileAttributes::DEVICE, aliases: &["Device", "Dev"] },
        AliasEntry { value: FileAttributes::DIRECTORY, aliases: &["Directory", "Dir"] },
        AliasEntry { value: FileAttributes::ENCRYPTED, aliases: &["Encrypted", "Enc"] },
        AliasEntry { value: FileAttributes::HIDDEN, aliases: &["Hidden", "H", "Hide"] },
        AliasEntry { value: FileAttributes::INTEGRITY_STREAM, aliases: &["IntegrityStream"] },
        AliasEntry { value: FileAttributes::NORMAL, aliases: &["Normal", "None"] },
        AliasEntry { value: FileAttributes::NO_SCRUB_DATA, aliases: &["NoScrubData"] },
        AliasEntry {
            value: FileAttributes::NOT_CONTENT_INDEXED,
            aliases: &["NotContentIndexed"],
        },
        AliasEntry { value: FileAttributes::OFFLINE, aliases: &["Offline"] },
        AliasEntry { value: FileAttributes::READ_ONLY, aliases: &["ReadOnly", "R", "Read"] },
        AliasEntry { value: FileAttributes::REPARSE_POINT, aliases: &["ReparsePoint"] },
        AliasEntry { value: FileAttributes::SPARSE_FILE, aliases: &["SparseFile"] },
        AliasEntry { value: FileAttributes::SYSTEM, aliases: &["System", "S", "Sys"] },
        AliasEntry { value: FileAttributes::TEMPORARY, aliases: &["Temporary", "Temp", "tmp"] },
    ])
});

/// Parse attribute text, e.g. `"Hidden, ReadOnly"`.
pub fn parse_attributes(text: &str) -> Result<FileAttributes> {
    parse_flags(text, &FILE_ATTRIBUTES)
}

/// Render attributes as canonical text.
pub fn render_attributes(attributes: FileAttributes) -> String {
    render_flags(attributes, &FILE_ATTRIBUTES)
}

/// Apply attribute edits against a current attribute set.
///
/// `"+Hidden"` adds, `"-ReadOnly"` removes, and a bare list such as
/// `"Archive, Hidden"` replaces the whole set.
pub fn merge_attributes(text: &str, base: FileAttributes) -> Result<FileAttributes> {
    merge_flags(text, base, &FILE_ATTRIBUTES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shorthand() {
        assert_eq!(parse_attributes("H").unwrap(), FileAttributes::HIDDEN);
        assert_eq!(
            parse_attributes("sys, tmp").unwrap(),
            FileAttributes::SYSTEM | FileAttributes::TEMPORARY
        );
    }

    #[test]
    fn test_none_maps_to_normal() {
        assert_eq!(parse_attributes("None").unwrap(), FileAttributes::NORMAL);
        assert_eq!(render_attributes(FileAttributes::NORMAL), "Normal");
    }

    #[test]
    fn test_merge_add_keeps_existing() {
        let base = FileAttributes::ARCHIVE;
        assert_eq!(
            merge_attributes("+Hidden", base).unwrap(),
            FileAttributes::ARCHIVE | FileAttributes::HIDDEN
        );
    }

    #[test]
    fn test_merge_remove() {
        let base = FileAttributes::ARCHIVE | FileAttributes::READ_ONLY;
        assert_eq!(
            merge_attributes("-ReadOnly", base).unwrap(),
            FileAttributes::ARCHIVE
        );
    }

    #[test]
    fn test_merge_bare_list_replaces() {
        let base = FileAttributes::ARCHIVE | FileAttributes::SYSTEM;
        assert_eq!(
            merge_attributes("Hidden, ReadOnly", base).unwrap(),
            FileAttributes::HIDDEN | FileAttributes::READ_ONLY
        );
    }
}
