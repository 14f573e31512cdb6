use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use bigdecimal::BigDecimal;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::require;
use crate::enums::LaunchOutcome;
use crate::errors::CoreError;

/// One flight of a rocket for a provider.
///
/// `vehicle` and `provider` are entity ids. `price` and `payload` are often
/// unknown when a launch is first recorded; they are filled in by a separate
/// preparation step before cost or payload reports run.
///
/// Identity is `(date, vehicle, provider, orbit)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Launch {
    #[serde(default)]
    pub id: String,
    pub date: NaiveDate,
    pub outcome: LaunchOutcome,
    pub orbit: String,
    #[serde(default)]
    pub launch_site: String,
    pub vehicle: String,
    pub provider: String,
    #[serde(default)]
    pub function: Option<String>,
    #[serde(default)]
    pub price: Option<BigDecimal>,
    #[serde(default)]
    pub payload: Option<BTreeSet<String>>,
}

impl Launch {
    #[must_use]
    pub fn new(
        date: NaiveDate,
        outcome: LaunchOutcome,
        orbit: impl Into<String>,
        vehicle: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            date,
            outcome,
            orbit: orbit.into(),
            launch_site: String::new(),
            vehicle: vehicle.into(),
            provider: provider.into(),
            function: None,
            price: None,
            payload: None,
        }
    }

    #[must_use]
    pub fn natural_key(&self) -> (NaiveDate, &str, &str, &str) {
        (self.date, &self.vehicle, &self.provider, &self.orbit)
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    #[must_use]
    pub const fn is_successful(&self) -> bool {
        self.outcome.is_success()
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the orbit or either reference is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        require("launch", "orbit", &self.orbit)?;
        require("launch", "vehicle", &self.vehicle)?;
        require("launch", "provider", &self.provider)
    }
}

impl PartialEq for Launch {
    fn eq(&self, other: &Self) -> bool {
        self.natural_key() == other.natural_key()
    }
}

impl Eq for Launch {}

impl Hash for Launch {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.natural_key().hash(state);
    }
}

impl PartialOrd for Launch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Orders by natural key, consistent with `Eq`.
impl Ord for Launch {
    fn cmp(&self, other: &Self) -> Ordering {
        self.natural_key().cmp(&other.natural_key())
    }
}
