//! Entity structs for the launch domain.
//!
//! Relationships are stored as ids (a launch names its rocket and provider,
//! a rocket names its manufacturer) so the whole record set can live in a flat
//! arena. Equality and hashing use each entity's natural key, never the id.

mod family;
mod launch;
mod payload;
mod provider;
mod rocket;

pub use family::RocketFamily;
pub use launch::Launch;
pub use payload::Payload;
pub use provider::Provider;
pub use rocket::Rocket;

use serde::{Deserialize, Serialize};

use crate::enums::EntityKind;
use crate::errors::CoreError;

/// Any stored entity, tagged with its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entity {
    Provider(Provider),
    Rocket(Rocket),
    Family(RocketFamily),
    Payload(Payload),
    Launch(Launch),
}

impl Entity {
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Provider(_) => EntityKind::Provider,
            Self::Rocket(_) => EntityKind::Rocket,
            Self::Family(_) => EntityKind::Family,
            Self::Payload(_) => EntityKind::Payload,
            Self::Launch(_) => EntityKind::Launch,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Provider(p) => &p.id,
            Self::Rocket(r) => &r.id,
            Self::Family(f) => &f.id,
            Self::Payload(p) => &p.id,
            Self::Launch(l) => &l.id,
        }
    }

    /// Run the structural checks of the wrapped entity.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when a required field is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        match self {
            Self::Provider(p) => p.validate(),
            Self::Rocket(r) => r.validate(),
            Self::Family(f) => f.validate(),
            Self::Payload(p) => p.validate(),
            Self::Launch(l) => l.validate(),
        }
    }
}

impl From<Provider> for Entity {
    fn from(value: Provider) -> Self {
        Self::Provider(value)
    }
}

impl From<Rocket> for Entity {
    fn from(value: Rocket) -> Self {
        Self::Rocket(value)
    }
}

impl From<RocketFamily> for Entity {
    fn from(value: RocketFamily) -> Self {
        Self::Family(value)
    }
}

impl From<Payload> for Entity {
    fn from(value: Payload) -> Self {
        Self::Payload(value)
    }
}

impl From<Launch> for Entity {
    fn from(value: Launch) -> Self {
        Self::Launch(value)
    }
}

pub(crate) fn require(entity: &str, field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::blank(entity, field));
    }
    Ok(())
}
