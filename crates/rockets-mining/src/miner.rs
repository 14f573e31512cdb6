//! Repository-backed entry point for the reports.

use std::collections::BTreeMap;

use bigdecimal::BigDecimal;
use rockets_core::{Launch, Provider, Rocket, Snapshot};
use rockets_store::{Repository, load_snapshot};

use crate::error::MiningError;
use crate::queries;
use crate::rank::clamp_k;
use crate::reliability::Reliability;

/// Runs reports against a [`Repository`].
///
/// Every call loads a fresh snapshot, computes the report, and returns owned
/// copies of the ranked entities. Nothing is cached between calls and the
/// repository is never written to.
pub struct RocketMiner<R> {
    repo: R,
}

impl<R: Repository> RocketMiner<R> {
    pub const fn new(repo: R) -> Self {
        Self { repo }
    }

    pub const fn repository(&self) -> &R {
        &self.repo
    }

    /// Mutable access for the preparation step (enrichment, edits) between reports.
    pub const fn repository_mut(&mut self) -> &mut R {
        &mut self.repo
    }

    pub fn into_inner(self) -> R {
        self.repo
    }

    fn snapshot(&self) -> Result<Snapshot, MiningError> {
        Ok(load_snapshot(&self.repo)?)
    }

    /// # Errors
    ///
    /// Returns `MiningError` if loading fails or a launch reference dangles.
    pub fn most_launched_rockets(&self, k: i64) -> Result<Vec<Rocket>, MiningError> {
        tracing::info!(k, "most launched rockets");
        let snapshot = self.snapshot()?;
        let ranked = queries::most_launched_rockets(&snapshot, clamp_k(k))?;
        Ok(ranked.into_iter().cloned().collect())
    }

    /// # Errors
    ///
    /// Returns `MiningError` if loading fails or a launch reference dangles.
    pub fn most_reliable_providers(&self, k: i64) -> Result<Vec<Provider>, MiningError> {
        tracing::info!(k, "most reliable providers");
        let snapshot = self.snapshot()?;
        let ranked = queries::most_reliable_providers(&snapshot, clamp_k(k))?;
        Ok(ranked.into_iter().cloned().collect())
    }

    /// # Errors
    ///
    /// Returns `MiningError` if loading fails or a launch reference dangles.
    pub fn most_recent_launches(&self, k: i64) -> Result<Vec<Launch>, MiningError> {
        tracing::info!(k, "most recent launches");
        let snapshot = self.snapshot()?;
        let ranked = queries::most_recent_launches(&snapshot, clamp_k(k))?;
        Ok(ranked.into_iter().cloned().collect())
    }

    /// # Errors
    ///
    /// Returns `MiningError` if loading fails or a launch reference dangles.
    pub fn most_recent_successful_launches(&self) -> Result<Vec<Launch>, MiningError> {
        tracing::info!("most recent successful launches");
        let snapshot = self.snapshot()?;
        let launches = queries::most_recent_successful_launches(&snapshot)?;
        Ok(launches.into_iter().cloned().collect())
    }

    /// # Errors
    ///
    /// Returns `MiningError::IncompleteData` if a matching launch has no
    /// payload set, or the loading and reference errors.
    pub fn dominant_country(
        &self,
        orbit: &str,
        countries: &[String],
    ) -> Result<Option<String>, MiningError> {
        tracing::info!(orbit, countries = countries.len(), "dominant country");
        let snapshot = self.snapshot()?;
        queries::dominant_country(&snapshot, orbit, countries)
    }

    /// # Errors
    ///
    /// See [`RocketMiner::dominant_country`].
    pub fn payloads_by_country(
        &self,
        orbit: &str,
        countries: &[String],
    ) -> Result<BTreeMap<String, usize>, MiningError> {
        tracing::info!(orbit, countries = countries.len(), "payloads by country");
        let snapshot = self.snapshot()?;
        queries::payloads_by_country(&snapshot, orbit, countries)
    }

    /// # Errors
    ///
    /// Returns `MiningError::IncompleteData` if any launch has no price, or
    /// the loading and reference errors.
    pub fn most_expensive_launches(&self, k: i64) -> Result<Vec<Launch>, MiningError> {
        tracing::info!(k, "most expensive launches");
        let snapshot = self.snapshot()?;
        let ranked = queries::most_expensive_launches(&snapshot, clamp_k(k))?;
        Ok(ranked.into_iter().cloned().collect())
    }

    /// # Errors
    ///
    /// Returns `MiningError::IncompleteData` if an in-year launch has no
    /// price, or the loading and reference errors.
    pub fn highest_revenue_providers(
        &self,
        k: i64,
        year: i32,
    ) -> Result<Vec<Provider>, MiningError> {
        tracing::info!(k, year, "highest revenue providers");
        let snapshot = self.snapshot()?;
        let ranked = queries::highest_revenue_providers(&snapshot, clamp_k(k), year)?;
        Ok(ranked.into_iter().cloned().collect())
    }

    /// # Errors
    ///
    /// Returns `MiningError::NotFound` for an unknown provider, otherwise as
    /// [`RocketMiner::highest_revenue_providers`].
    pub fn provider_revenue(&self, provider_id: &str, year: i32) -> Result<BigDecimal, MiningError> {
        tracing::info!(provider_id, year, "provider revenue");
        let snapshot = self.snapshot()?;
        queries::provider_revenue(&snapshot, provider_id, year)
    }

    /// # Errors
    ///
    /// Returns `MiningError::NotFound` for an unknown provider, or the
    /// loading and reference errors.
    pub fn launches_into_orbit(&self, provider_id: &str, orbit: &str) -> Result<usize, MiningError> {
        tracing::info!(provider_id, orbit, "launches into orbit");
        let snapshot = self.snapshot()?;
        queries::launches_into_orbit(&snapshot, provider_id, orbit)
    }

    /// Revenue of every provider in `year`, highest first.
    ///
    /// # Errors
    ///
    /// As [`RocketMiner::highest_revenue_providers`].
    pub fn revenue_by_provider(&self, year: i32) -> Result<Vec<(Provider, BigDecimal)>, MiningError> {
        tracing::info!(year, "revenue by provider");
        let snapshot = self.snapshot()?;
        let revenue = queries::revenue_by_provider(&snapshot, year)?;
        Ok(sorted_desc(revenue))
    }

    /// Successful launch count per rocket, most launched first.
    ///
    /// # Errors
    ///
    /// Returns `MiningError` if loading fails or a launch reference dangles.
    pub fn successful_launches_per_rocket(&self) -> Result<Vec<(Rocket, usize)>, MiningError> {
        tracing::info!("successful launches per rocket");
        let snapshot = self.snapshot()?;
        let counts = queries::successful_launches_per_rocket(&snapshot)?;
        Ok(sorted_desc(counts))
    }

    /// Success rate of every provider, most reliable first.
    ///
    /// # Errors
    ///
    /// Returns `MiningError` if loading fails or a launch reference dangles.
    pub fn success_rate_per_provider(&self) -> Result<Vec<(Provider, Reliability)>, MiningError> {
        tracing::info!("success rate per provider");
        let snapshot = self.snapshot()?;
        let rates = queries::success_rate_per_provider(&snapshot)?;
        Ok(sorted_desc(rates))
    }
}

fn sorted_desc<E: Ord + Clone, S: Ord + Clone>(map: BTreeMap<&E, S>) -> Vec<(E, S)> {
    let len = map.len();
    crate::rank::top_k(map, len, |(_, s)| s.clone(), |(a, _), (b, _)| a.cmp(b))
        .into_iter()
        .map(|(entity, score)| (entity.clone(), score))
        .collect()
}
