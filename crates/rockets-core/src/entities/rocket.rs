use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::require;
use crate::errors::CoreError;

/// A launch vehicle. `manufacturer` is the id of the owning provider.
///
/// Identity is `(name, variation, country, manufacturer)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rocket {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub variation: String,
    pub country: String,
    pub manufacturer: String,
    #[serde(default)]
    pub mass_to_leo: Option<String>,
    #[serde(default)]
    pub mass_to_gto: Option<String>,
    #[serde(default)]
    pub mass_to_other: Option<String>,
    /// Ids of the payloads this rocket is rated to carry.
    #[serde(default)]
    pub payloads: BTreeSet<String>,
}

impl Rocket {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        variation: impl Into<String>,
        country: impl Into<String>,
        manufacturer: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            variation: variation.into(),
            country: country.into(),
            manufacturer: manufacturer.into(),
            mass_to_leo: None,
            mass_to_gto: None,
            mass_to_other: None,
            payloads: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn natural_key(&self) -> (&str, &str, &str, &str) {
        (&self.name, &self.variation, &self.country, &self.manufacturer)
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the name, country or manufacturer is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        require("rocket", "name", &self.name)?;
        require("rocket", "country", &self.country)?;
        require("rocket", "manufacturer", &self.manufacturer)
    }
}

impl PartialEq for Rocket {
    fn eq(&self, other: &Self) -> bool {
        self.natural_key() == other.natural_key()
    }
}

impl Eq for Rocket {}

impl Hash for Rocket {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.natural_key().hash(state);
    }
}

impl PartialOrd for Rocket {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rocket {
    fn cmp(&self, other: &Self) -> Ordering {
        self.natural_key().cmp(&other.natural_key())
    }
}
