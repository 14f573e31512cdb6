//! Data preparation: filling in launch prices and payloads.
//!
//! Cost and payload reports need values that are usually missing when
//! launches are first recorded. An [`Enrichment`] carries those values keyed
//! by launch id and writes them through the repository before any report
//! runs. The reports themselves only read.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use bigdecimal::BigDecimal;
use rockets_core::EntityKind;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::{Repository, expect_launch};

/// Prices and payload sets to apply, keyed by launch id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Enrichment {
    #[serde(default)]
    pub prices: BTreeMap<String, BigDecimal>,
    #[serde(default)]
    pub payloads: BTreeMap<String, BTreeSet<String>>,
}

impl Enrichment {
    /// Read an enrichment file (`{"prices": {...}, "payloads": {...}}`).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` or `StoreError::Json` if the file cannot be
    /// read or parsed.
    pub fn read(path: &Path) -> Result<Self, StoreError> {
        let json = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&json)?)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty() && self.payloads.is_empty()
    }

    /// Write every price and payload into the matching stored launch.
    ///
    /// Every target launch is loaded before anything is written, so an
    /// unknown id leaves the repository untouched. Returns the number of
    /// launches updated.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an id that names no stored launch.
    pub fn apply<R: Repository + ?Sized>(&self, repo: &mut R) -> Result<usize, StoreError> {
        let ids: BTreeSet<&String> = self.prices.keys().chain(self.payloads.keys()).collect();

        let mut updated = Vec::with_capacity(ids.len());
        for id in ids {
            let mut launch = expect_launch(repo.load(EntityKind::Launch, id)?)?;
            if let Some(price) = self.prices.get(id) {
                launch.price = Some(price.clone());
            }
            if let Some(payload) = self.payloads.get(id) {
                launch.payload = Some(payload.clone());
            }
            updated.push(launch);
        }

        let count = updated.len();
        for launch in updated {
            repo.create_or_update(launch.into())?;
        }

        tracing::info!(launches = count, "applied launch enrichment");
        Ok(count)
    }
}
