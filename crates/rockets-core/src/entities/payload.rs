use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::require;
use crate::errors::CoreError;

/// Something a rocket can carry, such as a satellite or a crew capsule.
/// `manufacturer` is the id of the provider that builds it.
///
/// Identity is `(payload_type, name, manufacturer)`. `mass` is free text with
/// a unit, e.g. `"1200 kg"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payload {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub payload_type: String,
    pub name: String,
    pub manufacturer: String,
    #[serde(default)]
    pub mass: Option<String>,
}

impl Payload {
    #[must_use]
    pub fn new(
        payload_type: impl Into<String>,
        name: impl Into<String>,
        manufacturer: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            payload_type: payload_type.into(),
            name: name.into(),
            manufacturer: manufacturer.into(),
            mass: None,
        }
    }

    #[must_use]
    pub fn natural_key(&self) -> (&str, &str, &str) {
        (&self.payload_type, &self.name, &self.manufacturer)
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the type, name or manufacturer is
    /// blank, or if `mass` is set but is not a number followed by a unit.
    pub fn validate(&self) -> Result<(), CoreError> {
        require("payload", "type", &self.payload_type)?;
        require("payload", "name", &self.name)?;
        require("payload", "manufacturer", &self.manufacturer)?;
        if let Some(mass) = &self.mass {
            if !is_mass(mass) {
                return Err(CoreError::Validation(format!(
                    "payload mass '{mass}' must be a number followed by a unit"
                )));
            }
        }
        Ok(())
    }
}

fn is_mass(value: &str) -> bool {
    let Some((amount, unit)) = value.trim().split_once(' ') else {
        return false;
    };
    amount.parse::<f64>().is_ok_and(f64::is_finite)
        && !unit.trim().is_empty()
        && unit.trim().chars().all(char::is_alphabetic)
}

impl PartialEq for Payload {
    fn eq(&self, other: &Self) -> bool {
        self.natural_key() == other.natural_key()
    }
}

impl Eq for Payload {}

impl Hash for Payload {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.natural_key().hash(state);
    }
}

impl PartialOrd for Payload {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Payload {
    fn cmp(&self, other: &Self) -> Ordering {
        self.natural_key().cmp(&other.natural_key())
    }
}
