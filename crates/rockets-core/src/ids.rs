//! ID prefixes and formatting.
//!
//! Every stored entity gets an id of the form `{prefix}-{8 hex digits}`,
//! e.g. `rkt-0000001f`. The prefix tells the entity kind at a glance.

use crate::enums::EntityKind;

pub const PREFIX_PROVIDER: &str = "lsp";
pub const PREFIX_ROCKET: &str = "rkt";
pub const PREFIX_FAMILY: &str = "fam";
pub const PREFIX_PAYLOAD: &str = "pld";
pub const PREFIX_LAUNCH: &str = "lch";

/// Prefix used for ids of the given entity kind.
#[must_use]
pub const fn prefix_for(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Provider => PREFIX_PROVIDER,
        EntityKind::Rocket => PREFIX_ROCKET,
        EntityKind::Family => PREFIX_FAMILY,
        EntityKind::Payload => PREFIX_PAYLOAD,
        EntityKind::Launch => PREFIX_LAUNCH,
    }
}

/// Format a sequence number as a prefixed id.
#[must_use]
pub fn format_id(kind: EntityKind, seq: u32) -> String {
    format!("{}-{seq:08x}", prefix_for(kind))
}

/// Recover the entity kind from an id prefix, if it has a known one.
#[must_use]
pub fn kind_of(id: &str) -> Option<EntityKind> {
    let (prefix, _) = id.split_once('-')?;
    match prefix {
        PREFIX_PROVIDER => Some(EntityKind::Provider),
        PREFIX_ROCKET => Some(EntityKind::Rocket),
        PREFIX_FAMILY => Some(EntityKind::Family),
        PREFIX_PAYLOAD => Some(EntityKind::Payload),
        PREFIX_LAUNCH => Some(EntityKind::Launch),
        _ => None,
    }
}
