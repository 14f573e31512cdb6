//! Per-invocation state: configuration plus the loaded, prepared repository.

use std::path::PathBuf;

use anyhow::Context;
use rockets_config::RocketsConfig;
use rockets_core::Snapshot;
use rockets_mining::RocketMiner;
use rockets_store::{Enrichment, MemoryStore, load_snapshot};

use crate::cli::GlobalFlags;

pub struct AppContext {
    pub miner: RocketMiner<MemoryStore>,
    pub config: RocketsConfig,
}

impl AppContext {
    /// Open the dataset and apply the enrichment file, if any.
    ///
    /// `--data` and `--enrich` win over `general.data_path` and
    /// `general.enrichment_path`.
    pub fn init(config: RocketsConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let data_path = match &flags.data {
            Some(path) => PathBuf::from(path),
            None => config
                .general
                .data_path()
                .context("no dataset given: pass --data or set general.data_path")?,
        };

        let mut store = MemoryStore::open(&data_path)
            .with_context(|| format!("failed to load dataset at {}", data_path.display()))?;

        let enrichment_path = flags
            .enrich
            .as_ref()
            .map(PathBuf::from)
            .or_else(|| config.general.enrichment_path());
        if let Some(path) = enrichment_path {
            let enrichment = Enrichment::read(&path)
                .with_context(|| format!("failed to read enrichment at {}", path.display()))?;
            let updated = enrichment
                .apply(&mut store)
                .with_context(|| format!("failed to apply enrichment at {}", path.display()))?;
            tracing::debug!(updated, path = %path.display(), "enrichment applied");
        }

        Ok(Self {
            miner: RocketMiner::new(store),
            config,
        })
    }

    /// Snapshot used to resolve display names for report rows.
    pub fn snapshot(&self) -> anyhow::Result<Snapshot> {
        load_snapshot(self.miner.repository()).context("failed to load launch records")
    }

    /// Explicit countries if given, otherwise `report.countries`.
    pub fn countries<'a>(&'a self, explicit: &'a [String]) -> &'a [String] {
        if explicit.is_empty() {
            &self.config.report.countries
        } else {
            explicit
        }
    }

    pub fn limit(&self, flags: &GlobalFlags) -> i64 {
        i64::from(flags.limit.unwrap_or(self.config.general.default_limit))
    }
}
