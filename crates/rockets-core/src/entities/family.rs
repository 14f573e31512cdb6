use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::require;
use crate::errors::CoreError;

/// A named group of related rockets (e.g. all Falcon variants).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RocketFamily {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub rockets: BTreeSet<String>,
}

impl RocketFamily {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            rockets: BTreeSet::new(),
        }
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the name is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        require("family", "name", &self.name)
    }
}

impl PartialEq for RocketFamily {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for RocketFamily {}

impl Hash for RocketFamily {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for RocketFamily {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RocketFamily {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}
