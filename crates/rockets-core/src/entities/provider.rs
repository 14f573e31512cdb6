use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::require;
use crate::errors::CoreError;

/// A launch service provider: the organisation that owns rockets and
/// contracts launches.
///
/// Identity is `(name, year_founded, country)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provider {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub year_founded: i32,
    pub country: String,
    #[serde(default)]
    pub headquarters: Option<String>,
    /// Ids of the rockets this provider manufactures.
    #[serde(default)]
    pub rockets: BTreeSet<String>,
}

impl Provider {
    #[must_use]
    pub fn new(name: impl Into<String>, year_founded: i32, country: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            year_founded,
            country: country.into(),
            headquarters: None,
            rockets: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn natural_key(&self) -> (&str, i32, &str) {
        (&self.name, self.year_founded, &self.country)
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the name or country is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        require("provider", "name", &self.name)?;
        require("provider", "country", &self.country)
    }
}

impl PartialEq for Provider {
    fn eq(&self, other: &Self) -> bool {
        self.natural_key() == other.natural_key()
    }
}

impl Eq for Provider {}

impl Hash for Provider {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.natural_key().hash(state);
    }
}

impl PartialOrd for Provider {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Orders by natural key, consistent with `Eq`.
impl Ord for Provider {
    fn cmp(&self, other: &Self) -> Ordering {
        self.natural_key().cmp(&other.natural_key())
    }
}
