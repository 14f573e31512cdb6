//! The read-only record set a single query runs against.
//!
//! A `Snapshot` owns every provider, rocket, family and launch loaded from a
//! repository and resolves id references through per-kind indexes. It never
//! checks those references on construction: a launch that names a missing
//! rocket is still accepted here and reported by whichever query trips over it.

use std::collections::{BTreeSet, HashMap};

use crate::entities::{Launch, Provider, Rocket, RocketFamily};

#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    providers: Vec<Provider>,
    rockets: Vec<Rocket>,
    families: Vec<RocketFamily>,
    launches: Vec<Launch>,
    provider_index: HashMap<String, usize>,
    rocket_index: HashMap<String, usize>,
    launch_index: HashMap<String, usize>,
}

impl Snapshot {
    /// Build a snapshot. Collections keep the order they were loaded in.
    ///
    /// When two entities of the same kind share an id, lookups resolve to the
    /// first one.
    #[must_use]
    pub fn new(
        providers: Vec<Provider>,
        rockets: Vec<Rocket>,
        families: Vec<RocketFamily>,
        launches: Vec<Launch>,
    ) -> Self {
        let provider_index = index_by(&providers, |p| &p.id);
        let rocket_index = index_by(&rockets, |r| &r.id);
        let launch_index = index_by(&launches, |l| &l.id);
        Self {
            providers,
            rockets,
            families,
            launches,
            provider_index,
            rocket_index,
            launch_index,
        }
    }

    #[must_use]
    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    #[must_use]
    pub fn rockets(&self) -> &[Rocket] {
        &self.rockets
    }

    #[must_use]
    pub fn families(&self) -> &[RocketFamily] {
        &self.families
    }

    #[must_use]
    pub fn launches(&self) -> &[Launch] {
        &self.launches
    }

    #[must_use]
    pub fn provider(&self, id: &str) -> Option<&Provider> {
        self.provider_index.get(id).map(|&i| &self.providers[i])
    }

    #[must_use]
    pub fn rocket(&self, id: &str) -> Option<&Rocket> {
        self.rocket_index.get(id).map(|&i| &self.rockets[i])
    }

    #[must_use]
    pub fn launch(&self, id: &str) -> Option<&Launch> {
        self.launch_index.get(id).map(|&i| &self.launches[i])
    }

    /// Every distinct provider country, in ascending order.
    #[must_use]
    pub fn countries(&self) -> BTreeSet<&str> {
        self.providers.iter().map(|p| p.country.as_str()).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty() && self.rockets.is_empty() && self.launches.is_empty()
    }
}

fn index_by<T>(items: &[T], id: impl Fn(&T) -> &String) -> HashMap<String, usize> {
    let mut index = HashMap::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        index.entry(id(item).clone()).or_insert(i);
    }
    index
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::enums::LaunchOutcome;

    fn provider(id: &str, name: &str, country: &str) -> Provider {
        Provider {
            id: id.to_string(),
            ..Provider::new(name, 2000, country)
        }
    }

    #[test]
    fn lookups_resolve_by_id() {
        let mut rocket = Rocket::new("Falcon 9", "v1.2", "USA", "lsp-1");
        rocket.id = "rkt-1".to_string();
        let mut launch = Launch::new(
            NaiveDate::from_ymd_opt(2017, 1, 1).unwrap(),
            LaunchOutcome::Successful,
            "LEO",
            "rkt-1",
            "lsp-1",
        );
        launch.id = "lch-1".to_string();

        let snapshot = Snapshot::new(
            vec![provider("lsp-1", "SpaceX", "USA")],
            vec![rocket],
            Vec::new(),
            vec![launch],
        );

        assert_eq!(snapshot.provider("lsp-1").unwrap().name, "SpaceX");
        assert_eq!(snapshot.rocket("rkt-1").unwrap().name, "Falcon 9");
        assert_eq!(snapshot.launch("lch-1").unwrap().orbit, "LEO");
        assert!(snapshot.rocket("rkt-2").is_none());
    }

    #[test]
    fn duplicate_ids_resolve_to_first() {
        let snapshot = Snapshot::new(
            vec![provider("lsp-1", "ULA", "USA"), provider("lsp-1", "ESA", "France")],
            Vec::new(),
            Vec::new(),
            Vec::new(),
        );
        assert_eq!(snapshot.provider("lsp-1").unwrap().name, "ULA");
        assert_eq!(snapshot.providers().len(), 2);
    }

    #[test]
    fn countries_are_distinct_and_sorted() {
        let snapshot = Snapshot::new(
            vec![
                provider("lsp-1", "ULA", "USA"),
                provider("lsp-2", "SpaceX", "USA"),
                provider("lsp-3", "ESA", "Europe"),
            ],
            Vec::new(),
            Vec::new(),
            Vec::new(),
        );
        let countries: Vec<&str> = snapshot.countries().into_iter().collect();
        assert_eq!(countries, vec!["Europe", "USA"]);
    }

    #[test]
    fn default_snapshot_is_empty() {
        assert!(Snapshot::default().is_empty());
    }
}
