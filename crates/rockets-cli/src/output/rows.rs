//! Display rows for report output. Ids are resolved to names here so the
//! reports themselves stay id-based.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rockets_core::{Launch, LaunchOutcome, Provider, Rocket, Snapshot};
use rockets_mining::Reliability;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RocketRow {
    pub rank: usize,
    pub id: String,
    pub name: String,
    pub variation: String,
    pub country: String,
    pub successful_launches: usize,
}

impl RocketRow {
    pub fn new(rank: usize, rocket: Rocket, successful_launches: usize) -> Self {
        Self {
            rank,
            id: rocket.id,
            name: rocket.name,
            variation: rocket.variation,
            country: rocket.country,
            successful_launches,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReliabilityRow {
    pub rank: usize,
    pub id: String,
    pub name: String,
    pub country: String,
    pub successes: usize,
    pub launches: usize,
    pub rate: f64,
}

impl ReliabilityRow {
    pub fn new(rank: usize, provider: Provider, reliability: Reliability) -> Self {
        Self {
            rank,
            id: provider.id,
            name: provider.name,
            country: provider.country,
            successes: reliability.successes,
            launches: reliability.launches,
            rate: reliability.fraction(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LaunchRow {
    pub rank: usize,
    pub id: String,
    pub date: NaiveDate,
    pub outcome: LaunchOutcome,
    pub orbit: String,
    pub site: String,
    pub vehicle: String,
    pub provider: String,
    pub price: Option<String>,
    pub payloads: Option<usize>,
}

impl LaunchRow {
    /// Unknown references fall back to the raw id.
    pub fn new(rank: usize, launch: Launch, snapshot: &Snapshot) -> Self {
        let vehicle = snapshot
            .rocket(&launch.vehicle)
            .map_or_else(|| launch.vehicle.clone(), rocket_label);
        let provider = snapshot
            .provider(&launch.provider)
            .map_or_else(|| launch.provider.clone(), |p| p.name.clone());
        Self {
            rank,
            id: launch.id,
            date: launch.date,
            outcome: launch.outcome,
            orbit: launch.orbit,
            site: launch.launch_site,
            vehicle,
            provider,
            price: launch.price.map(|p| p.to_string()),
            payloads: launch.payload.map(|p| p.len()),
        }
    }
}

fn rocket_label(rocket: &Rocket) -> String {
    if rocket.variation.is_empty() {
        rocket.name.clone()
    } else {
        format!("{} {}", rocket.name, rocket.variation)
    }
}

#[derive(Debug, Serialize)]
pub struct RevenueRow {
    pub rank: usize,
    pub id: String,
    pub name: String,
    pub country: String,
    pub year: i32,
    pub revenue: String,
}

#[derive(Debug, Serialize)]
pub struct DominantReport {
    pub orbit: String,
    pub dominant: Option<String>,
    pub payloads: BTreeMap<String, usize>,
}

#[derive(Debug, Serialize)]
pub struct ProviderRevenueReport {
    pub id: String,
    pub name: String,
    pub year: i32,
    pub revenue: String,
}

#[derive(Debug, Serialize)]
pub struct OrbitLaunchesReport {
    pub id: String,
    pub name: String,
    pub orbit: String,
    pub launches: usize,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn launch_row_resolves_names() {
        let mut provider = Provider::new("SpaceX", 2002, "USA");
        provider.id = "lsp-1".to_string();
        let mut rocket = Rocket::new("Falcon 9", "FT", "USA", "lsp-1");
        rocket.id = "rkt-2".to_string();
        let date = NaiveDate::from_ymd_opt(2017, 6, 1).expect("date");
        let mut launch = Launch::new(date, LaunchOutcome::Failed, "GTO", "rkt-2", "lsp-1");
        launch.id = "lch-3".to_string();
        launch.price = Some(BigDecimal::from_str("61.2").expect("decimal"));

        let snapshot = Snapshot::new(vec![provider], vec![rocket], vec![], vec![launch.clone()]);
        let row = LaunchRow::new(1, launch, &snapshot);

        assert_eq!(row.vehicle, "Falcon 9 FT");
        assert_eq!(row.provider, "SpaceX");
        assert_eq!(row.price.as_deref(), Some("61.2"));
        assert_eq!(row.payloads, None);
    }

    #[test]
    fn unknown_references_fall_back_to_ids() {
        let date = NaiveDate::from_ymd_opt(2017, 1, 1).expect("date");
        let launch = Launch::new(date, LaunchOutcome::Successful, "LEO", "rkt-x", "lsp-y");
        let row = LaunchRow::new(1, launch, &Snapshot::default());
        assert_eq!(row.vehicle, "rkt-x");
        assert_eq!(row.provider, "lsp-y");
    }

    #[test]
    fn reliability_row_carries_fraction() {
        let row = ReliabilityRow::new(2, Provider::new("ULA", 1990, "USA"), Reliability::new(1, 4));
        let json = serde_json::to_value(&row).expect("serialize");
        assert_eq!(json["rate"], 0.25);
        assert_eq!(json["launches"], 4);
    }
}
