//! Resource right flags for filesystem entries and registry keys
//!
//! Bit values match the Windows access masks these rights are read from and
//! written back to. Compound rights (`Read`, `Write`, `Modify`,
//! `ReadAndExecute`, `FullControl`) are genuine unions of the granular bits.

use bitflags::bitflags;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::codec::{parse_flags, render_flags};
use crate::error::Result;
use crate::table::{AliasEntry, AliasTable};

bitflags! {
    /// Rights grantable on files and directories
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct FileSystemRights: u32 {
        const READ_DATA = 0x0000_0001;
        const LIST_DIRECTORY = 0x0000_0001;
        const WRITE_DATA = 0x0000_0002;
        const CREATE_FILES = 0x0000_0002;
        const APPEND_DATA = 0x0000_0004;
        const CREATE_DIRECTORIES = 0x0000_0004;
        const READ_EXTENDED_ATTRIBUTES = 0x0000_0008;
        const WRITE_EXTENDED_ATTRIBUTES = 0x0000_0010;
        const EXECUTE_FILE = 0x0000_0020;
        const TRAVERSE = 0x0000_0020;
        const DELETE_SUBDIRECTORIES_AND_FILES = 0x0000_0040;
        const READ_ATTRIBUTES = 0x0000_0080;
        const WRITE_ATTRIBUTES = 0x0000_0100;
        const WRITE = 0x0000_0116;
        const DELETE = 0x0001_0000;
        const READ_PERMISSIONS = 0x0002_0000;
        const READ = 0x0002_0089;
        const READ_AND_EXECUTE = 0x0002_00A9;
        const MODIFY = 0x0003_01BF;
        const CHANGE_PERMISSIONS = 0x0004_0000;
        const TAKE_OWNERSHIP = 0x0008_0000;
        const SYNCHRONIZE = 0x0010_0000;
        const FULL_CONTROL = 0x001F_01FF;
    }
}

bitflags! {
    /// Rights grantable on registry keys
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct RegistryRights: u32 {
        const QUERY_VALUES = 0x0000_0001;
        const SET_VALUE = 0x0000_0002;
        const CREATE_SUB_KEY = 0x0000_0004;
        const ENUMERATE_SUB_KEYS = 0x0000_0008;
        const NOTIFY = 0x0000_0010;
        const CREATE_LINK = 0x0000_0020;
        const DELETE = 0x0001_0000;
        const READ_PERMISSIONS = 0x0002_0000;
        const WRITE_KEY = 0x0002_0006;
        const EXECUTE_KEY = 0x0002_0019;
        const READ_KEY = 0x0002_0019;
        const CHANGE_PERMISSIONS = 0x0004_0000;
        const TAKE_OWNERSHIP = 0x0008_0000;
        const FULL_CONTROL = 0x000F_003F;
    }
}

/// Alias table for [`FileSystemRights`]
pub static FILE_SYSTEM_RIGHTS: Lazy<AliasTable<FileSystemRights>> = Lazy::new(|| {
    AliasTable::new(vec![
        AliasEntry { value: FileSystemRights::APPEND_DATA, aliases: &["AppendData"] },
        AliasEntry { value: FileSystemRights::CHANGE_PERMISSIONS, aliases: &["ChangePermissions"] },
        AliasEntry { value: FileSystemRights::CREATE_DIRECTORIES, aliases: &["CreateDirectories"] },
        AliasEntry { value: FileSystemRights::CREATE_FILES, aliases: &["CreateFiles"] },
        AliasEntry { value: FileSystemRights::DELETE, aliases: &["Delete", "Del"] },
        AliasEntry {
            value: FileSystemRights::DELETE_SUBDIRECTORIES_AND_FILES,
            aliases: &["DeleteSubdirectoriesAndFiles"],
        },
        AliasEntry { value: FileSystemRights::EXECUTE_FILE, aliases: &["ExecuteFile", "XFile"] },
        AliasEntry { value: FileSystemRights::FULL_CONTROL, aliases: &["FullControl", "Full", "Ful"] },
        AliasEntry { value: FileSystemRights::LIST_DIRECTORY, aliases: &["ListDirectory"] },
        AliasEntry { value: FileSystemRights::MODIFY, aliases: &["Modify", "Mod", "Modified"] },
        AliasEntry { value: FileSystemRights::READ, aliases: &["Read", "R"] },
        AliasEntry {
            value: FileSystemRights::READ_AND_EXECUTE,
            aliases: &["ReadAndExecute", "ReadAndX", "R&X"],
        },
        AliasEntry { value: FileSystemRights::READ_ATTRIBUTES, aliases: &["ReadAttributes"] },
        AliasEntry { value: FileSystemRights::READ_DATA, aliases: &["ReadData"] },
        AliasEntry {
            value: FileSystemRights::READ_EXTENDED_ATTRIBUTES,
            aliases: &["ReadExtendedAttributes"],
        },
        AliasEntry { value: FileSystemRights::READ_PERMISSIONS, aliases: &["ReadPermissions"] },
        AliasEntry { value: FileSystemRights::SYNCHRONIZE, aliases: &["Synchronize"] },
        AliasEntry { value: FileSystemRights::TAKE_OWNERSHIP, aliases: &["TakeOwnership"] },
        AliasEntry { value: FileSystemRights::TRAVERSE, aliases: &["Traverse"] },
        AliasEntry { value: FileSystemRights::WRITE, aliases: &["Write", "W"] },
        AliasEntry { value: FileSystemRights::WRITE_ATTRIBUTES, aliases: &["WriteAttributes"] },
        AliasEntry { value: FileSystemRights::WRITE_DATA, aliases: &["WriteData"] },
        AliasEntry {
            value: FileSystemRights::WRITE_EXTENDED_ATTRIBUTES,
            aliases: &["WriteExtendedAttributes"],
        },
    ])
});

/// Alias table for [`RegistryRights`]
pub static REGISTRY_RIGHTS: Lazy<AliasTable<RegistryRights>> = Lazy::new(|| {
    AliasTable::new(vec![
        AliasEntry { value: RegistryRights::QUERY_VALUES, aliases: &["QueryValues"] },
        AliasEntry { value: RegistryRights::SET_VALUE, aliases: &["SetValue", "Set"] },
        AliasEntry { value: RegistryRights::CREATE_SUB_KEY, aliases: &["CreateSubKey"] },
        AliasEntry { value: RegistryRights::ENUMERATE_SUB_KEYS, aliases: &["EnumerateSubKeys"] },
        AliasEntry { value: RegistryRights::NOTIFY, aliases: &["Notify", "Notice"] },
        AliasEntry { value: RegistryRights::CREATE_LINK, aliases: &["CreateLink"] },
        AliasEntry { value: RegistryRights::DELETE, aliases: &["Delete", "Del"] },
        AliasEntry { value: RegistryRights::READ_PERMISSIONS, aliases: &["ReadPermissions"] },
        AliasEntry { value: RegistryRights::WRITE_KEY, aliases: &["WriteKey", "Write", "W"] },
        AliasEntry { value: RegistryRights::READ_KEY, aliases: &["ReadKey", "Read", "R"] },
        AliasEntry { value: RegistryRights::EXECUTE_KEY, aliases: &["ExecuteKey"] },
        AliasEntry { value: RegistryRights::CHANGE_PERMISSIONS, aliases: &["ChangePermissions"] },
        AliasEntry {
            value: RegistryRights::TAKE_OWNERSHIP,
            aliases: &["TakeOwnership", "TakeOwn", "TakeOwner"],
        },
        AliasEntry { value: RegistryRights::FULL_CONTROL, aliases: &["FullControl", "Full"] },
    ])
});

/// Parse filesystem rights text, e.g. `"Read, Write"`.
pub fn parse_file_system_rights(text: &str) -> Result<FileSystemRights> {
    parse_flags(text, &FILE_SYSTEM_RIGHTS)
}

/// Render filesystem rights as canonical text.
pub fn render_file_system_rights(rights: FileSystemRights) -> String {
    render_flags(rights, &FILE_SYSTEM_RIGHTS)
}

/// Parse registry rights text, e.g. `"ReadKey, SetValue"`.
pub fn parse_registry_rights(text: &str) -> Result<RegistryRights> {
    parse_flags(text, &REGISTRY_RIGHTS)
}

/// Render registry rights as canonical text.
pub fn render_registry_rights(rights: RegistryRights) -> String {
    render_flags(rights, &REGISTRY_RIGHTS)
}
