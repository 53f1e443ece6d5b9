//! Normalized access rule records and platform rule shapes
//!
//! Bridges the textual rule form (`account;rights;accessType;inheritance;
//! propagation`) and the typed access control entries that sit on a
//! resource's security descriptor. Flag text goes through the tables and
//! codec of `aclkit-flags`.

pub mod ace;
pub mod error;
pub mod kind;
pub mod record;
pub mod ruleset;

pub use ace::{Ace, RightsValue};
pub use error::{Error, Result};
pub use kind::ResourceKind;
pub use record::AccessRuleRecord;
pub use ruleset::AccessRuleSet;
