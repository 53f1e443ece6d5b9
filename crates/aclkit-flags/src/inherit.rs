//! Inheritance and propagation flags for access control entries

use bitflags::bitflags;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::codec::{parse_flags, render_flags};
use crate::error::Result;
use crate::table::{AliasEntry, AliasTable};

bitflags! {
    /// Whether an entry propagates to child containers and child objects
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct InheritanceFlags: u32 {
        const CONTAINER_INHERIT = 0x1;
        const OBJECT_INHERIT = 0x2;
    }
}

bitflags! {
    /// How an inheritable entry applies to the object itself and its children
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct PropagationFlags: u32 {
        const NO_PROPAGATE_INHERIT = 0x1;
        const INHERIT_ONLY = 0x2;
    }
}

/// Alias table for [`InheritanceFlags`]
pub static INHERITANCE_FLAGS: Lazy<AliasTable<InheritanceFlags>> = Lazy::new(|| {
    AliasTable::new(vec![
        AliasEntry {
            value: InheritanceFlags::CONTAINER_INHERIT,
            aliases: &[
                "ContainerInherit",
                "Container Inherit",
                "ContainerInheritance",
                "Container Inheritance",
                "Container",
                "CI",
                "(CI)",
            ],
        },
        AliasEntry { value: InheritanceFlags::empty(), aliases: &["None", "No"] },
        AliasEntry {
            value: InheritanceFlags::OBJECT_INHERIT,
            aliases: &[
                "ObjectInherit",
                "Object Inherit",
                "ObjectInheritance",
                "Object Inheritance",
                "Object",
                "OI",
                "(OI)",
            ],
        },
    ])
});

/// Alias table for [`PropagationFlags`]
pub static PROPAGATION_FLAGS: Lazy<AliasTable<PropagationFlags>> = Lazy::new(|| {
    AliasTable::new(vec![
        AliasEntry { value: PropagationFlags::empty(), aliases: &["None", "No"] },
        AliasEntry {
            value: PropagationFlags::NO_PROPAGATE_INHERIT,
            aliases: &["NoPropagateInherit", "NoPropagate", "NPI"],
        },
        AliasEntry {
            value: PropagationFlags::INHERIT_ONLY,
            aliases: &["InheritOnly", "IO"],
        },
    ])
});

/// Parse inheritance flag text, e.g. `"ContainerInherit, ObjectInherit"`.
pub fn parse_inheritance_flags(text: &str) -> Result<InheritanceFlags> {
    parse_flags(text, &INHERITANCE_FLAGS)
}

/// Render inheritance flags as canonical text.
pub fn render_inheritance_flags(flags: InheritanceFlags) -> String {
    render_flags(flags, &INHERITANCE_FLAGS)
}

/// Parse propagation flag text, e.g. `"InheritOnly"`.
pub fn parse_propagation_flags(text: &str) -> Result<PropagationFlags> {
    parse_flags(text, &PROPAGATION_FLAGS)
}

/// Render propagation flags as canonical text.
pub fn render_propagation_flags(flags: PropagationFlags) -> String {
    render_flags(flags, &PROPAGATION_FLAGS)
}
