//! Shared fixture: three providers, five rockets and ten launches across 2017.

#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use rockets_core::{Entity, Launch, LaunchOutcome, Provider, Rocket};
use rockets_mining::RocketMiner;
use rockets_store::{Enrichment, MemoryStore, Repository};

pub const MONTHS: [u32; 10] = [1, 6, 4, 3, 4, 11, 6, 5, 12, 5];
pub const ROCKET_OF_LAUNCH: [usize; 10] = [0, 0, 0, 0, 1, 1, 1, 2, 2, 3];
pub const MANUFACTURER_OF_ROCKET: [usize; 5] = [0, 0, 0, 1, 1];
pub const OUTCOMES: [LaunchOutcome; 10] = [
    LaunchOutcome::Successful,
    LaunchOutcome::Successful,
    LaunchOutcome::Failed,
    LaunchOutcome::Failed,
    LaunchOutcome::Successful,
    LaunchOutcome::Successful,
    LaunchOutcome::Failed,
    LaunchOutcome::Failed,
    LaunchOutcome::Failed,
    LaunchOutcome::Successful,
];

pub const LIST_PRICES: [&str; 10] = [
    "50.01", "80.25", "44.07", "66.12", "420.14", "54.21", "3500.12", "453.01", "751.00", "142.78",
];
pub const CONTRACT_PRICES: [&str; 10] = [
    "12.11", "40.3", "50.32", "7.8", "123.32", "5.4", "345.43", "567.5", "45443.3", "123.3",
];

/// Store plus the ids it assigned, in creation order.
pub struct Fleet {
    pub miner: RocketMiner<MemoryStore>,
    pub providers: Vec<String>,
    pub rockets: Vec<String>,
    pub launches: Vec<String>,
}

impl Fleet {
    /// Launch ids by fixture index.
    pub fn launch_ids(&self, indexes: &[usize]) -> Vec<String> {
        indexes.iter().map(|&i| self.launches[i].clone()).collect()
    }

    pub fn enrich(&mut self, enrichment: &Enrichment) {
        enrichment.apply(self.miner.repository_mut()).unwrap();
    }

    /// Give every launch a price from `prices` and a payload set of
    /// `(index + 1) % 4` items.
    pub fn prepare(&mut self, prices: &[&str; 10]) {
        let enrichment = self.enrichment(prices);
        self.enrich(&enrichment);
    }

    pub fn enrichment(&self, prices: &[&str; 10]) -> Enrichment {
        let mut out = Enrichment::default();
        for (i, id) in self.launches.iter().enumerate() {
            out.prices
                .insert(id.clone(), BigDecimal::from_str(prices[i]).unwrap());
            out.payloads.insert(id.clone(), payload(i));
        }
        out
    }
}

pub fn payload(index: usize) -> BTreeSet<String> {
    (0..(index + 1) % 4).map(|n| format!("sat-{index}-{n}")).collect()
}

fn store(repo: &mut MemoryStore, entity: impl Into<Entity>) -> String {
    repo.create_or_update(entity.into()).unwrap().id().to_string()
}

pub fn fleet() -> Fleet {
    let mut repo = MemoryStore::new();

    let providers: Vec<String> = [("ULA", 1990, "USA"), ("SpaceX", 2002, "USA"), ("ESA", 1975, "Europe")]
        .into_iter()
        .map(|(name, year, country)| store(&mut repo, Provider::new(name, year, country)))
        .collect();

    let rockets: Vec<String> = MANUFACTURER_OF_ROCKET
        .iter()
        .enumerate()
        .map(|(i, &m)| {
            store(
                &mut repo,
                Rocket::new(format!("rocket_{i}"), "ccc", "USA", providers[m].clone()),
            )
        })
        .collect();

    let launches: Vec<String> = (0..10)
        .map(|j| {
            let date = NaiveDate::from_ymd_opt(2017, MONTHS[j], 1).unwrap();
            let mut launch = Launch::new(
                date,
                OUTCOMES[j],
                "LEO",
                rockets[ROCKET_OF_LAUNCH[j]].clone(),
                providers[j % 3].clone(),
            );
            launch.launch_site = "VAFB".to_string();
            store(&mut repo, launch)
        })
        .collect();

    Fleet {
        miner: RocketMiner::new(repo),
        providers,
        rockets,
        launches,
    }
}

pub fn names_of_rockets(rockets: &[Rocket]) -> Vec<&str> {
    rockets.iter().map(|r| r.name.as_str()).collect()
}

pub fn names_of_providers(providers: &[Provider]) -> Vec<&str> {
    providers.iter().map(|p| p.name.as_str()).collect()
}

pub fn ids_of(launches: &[Launch]) -> Vec<String> {
    launches.iter().map(|l| l.id.clone()).collect()
}

pub fn totals(pairs: &[(&str, usize)]) -> BTreeMap<String, usize> {
    pairs.iter().map(|(c, n)| ((*c).to_string(), *n)).collect()
}
