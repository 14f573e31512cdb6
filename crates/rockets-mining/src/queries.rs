//! Report functions over a loaded [`Snapshot`].
//!
//! Each function is pure: it reads the snapshot, never writes to it, and
//! returns borrowed entities in ranked order. Launch references are checked
//! up front, so a dangling vehicle or provider fails the whole report with
//! [`MiningError::MalformedRecord`] instead of being skipped.

use std::collections::{BTreeMap, BTreeSet};

use bigdecimal::BigDecimal;
use num_traits::Zero;
use rockets_core::{EntityKind, Launch, Provider, Rocket, Snapshot};

use crate::aggregate::{reduce_count, reduce_sum_seeded, try_group_by};
use crate::error::MiningError;
use crate::rank::top_k;
use crate::reliability::Reliability;

// ---------------------------------------------------------------------------
// Reference resolution
// ---------------------------------------------------------------------------

fn vehicle_of<'a>(snapshot: &'a Snapshot, launch: &Launch) -> Result<&'a Rocket, MiningError> {
    snapshot.rocket(&launch.vehicle).ok_or_else(|| {
        MiningError::dangling(EntityKind::Launch, &launch.id, "vehicle", &launch.vehicle)
    })
}

fn provider_of<'a>(snapshot: &'a Snapshot, launch: &Launch) -> Result<&'a Provider, MiningError> {
    snapshot.provider(&launch.provider).ok_or_else(|| {
        MiningError::dangling(EntityKind::Launch, &launch.id, "provider", &launch.provider)
    })
}

fn manufacturer_of<'a>(snapshot: &'a Snapshot, rocket: &Rocket) -> Result<&'a Provider, MiningError> {
    snapshot.provider(&rocket.manufacturer).ok_or_else(|| {
        MiningError::dangling(EntityKind::Rocket, &rocket.id, "manufacturer", &rocket.manufacturer)
    })
}

fn check_references(snapshot: &Snapshot) -> Result<(), MiningError> {
    for launch in snapshot.launches() {
        vehicle_of(snapshot, launch)?;
        provider_of(snapshot, launch)?;
    }
    Ok(())
}

fn price_of(launch: &Launch) -> Result<&BigDecimal, MiningError> {
    launch
        .price
        .as_ref()
        .ok_or_else(|| MiningError::missing("price", EntityKind::Launch, &launch.id))
}

// ---------------------------------------------------------------------------
// Grouped statistics
// ---------------------------------------------------------------------------

/// Successful launch count per rocket. Rockets without a successful launch
/// are absent.
///
/// # Errors
///
/// Returns `MiningError::MalformedRecord` if any launch has a dangling reference.
pub fn successful_launches_per_rocket(
    snapshot: &Snapshot,
) -> Result<BTreeMap<&Rocket, usize>, MiningError> {
    check_references(snapshot)?;
    let successful = snapshot.launches().iter().filter(|l| l.is_successful());
    let groups = try_group_by(successful, |l| vehicle_of(snapshot, l))?;
    Ok(reduce_count(&groups))
}

/// Success rate of every provider in the snapshot, including providers that
/// never launched.
///
/// # Errors
///
/// Returns `MiningError::MalformedRecord` if any launch has a dangling reference.
pub fn success_rate_per_provider(
    snapshot: &Snapshot,
) -> Result<BTreeMap<&Provider, Reliability>, MiningError> {
    check_references(snapshot)?;
    let groups = try_group_by(snapshot.launches(), |l| provider_of(snapshot, l))?;

    let mut rates: BTreeMap<&Provider, Reliability> = snapshot
        .providers()
        .iter()
        .map(|p| (p, Reliability::default()))
        .collect();
    for (provider, launches) in groups {
        let successes = launches.iter().filter(|l| l.is_successful()).count();
        rates.insert(provider, Reliability::new(successes, launches.len()));
    }
    Ok(rates)
}

/// Summed payload-set sizes per provider country for launches into `orbit`.
///
/// `countries` restricts and seeds the result; empty means every provider
/// country in the snapshot. Every listed country is present, zero if nothing
/// matched.
///
/// # Errors
///
/// Returns `MiningError::MalformedRecord` on a dangling reference and
/// `MiningError::IncompleteData` if a matching launch has no payload set.
pub fn payloads_by_country(
    snapshot: &Snapshot,
    orbit: &str,
    countries: &[String],
) -> Result<BTreeMap<String, usize>, MiningError> {
    check_references(snapshot)?;
    let domain: BTreeSet<String> = if countries.is_empty() {
        snapshot.countries().into_iter().map(str::to_string).collect()
    } else {
        countries.iter().cloned().collect()
    };

    let mut matching = Vec::new();
    for launch in snapshot.launches().iter().filter(|l| l.orbit == orbit) {
        let provider = provider_of(snapshot, launch)?;
        if !domain.contains(&provider.country) {
            continue;
        }
        if launch.payload.is_none() {
            return Err(MiningError::missing("payload", EntityKind::Launch, &launch.id));
        }
        matching.push((provider.country.clone(), launch));
    }

    reduce_sum_seeded(
        domain,
        matching,
        |(country, _)| Ok(country.clone()),
        |(_, launch)| launch.payload.as_ref().map(BTreeSet::len),
    )
}

/// Revenue per provider for launches dated in `year`, attributed to the
/// manufacturer of the launch vehicle. Every provider is present.
///
/// # Errors
///
/// Returns `MiningError::MalformedRecord` on a dangling reference and
/// `MiningError::IncompleteData` if an in-year launch has no price.
pub fn revenue_by_provider(
    snapshot: &Snapshot,
    year: i32,
) -> Result<BTreeMap<&Provider, BigDecimal>, MiningError> {
    check_references(snapshot)?;
    let in_year: Vec<&Launch> = snapshot.launches().iter().filter(|l| l.year() == year).collect();
    for launch in &in_year {
        price_of(launch)?;
    }

    reduce_sum_seeded(
        snapshot.providers(),
        in_year,
        |launch| manufacturer_of(snapshot, vehicle_of(snapshot, launch)?),
        |launch| launch.price.clone(),
    )
}

/// Revenue of a single provider in `year`.
///
/// # Errors
///
/// Returns `MiningError::NotFound` for an unknown provider id, otherwise the
/// errors of [`revenue_by_provider`].
pub fn provider_revenue(
    snapshot: &Snapshot,
    provider_id: &str,
    year: i32,
) -> Result<BigDecimal, MiningError> {
    let provider = snapshot.provider(provider_id).ok_or_else(|| MiningError::NotFound {
        kind: EntityKind::Provider,
        id: provider_id.to_string(),
    })?;
    let revenue = revenue_by_provider(snapshot, year)?;
    Ok(revenue.get(provider).cloned().unwrap_or_else(BigDecimal::zero))
}

/// Launches into `orbit` per provider, attributed to the manufacturer of the
/// launch vehicle. Every provider is present, zero if none of its rockets
/// flew there.
///
/// # Errors
///
/// Returns `MiningError::MalformedRecord` on a dangling reference.
pub fn orbit_launches_by_provider<'a>(
    snapshot: &'a Snapshot,
    orbit: &str,
) -> Result<BTreeMap<&'a Provider, usize>, MiningError> {
    check_references(snapshot)?;
    reduce_sum_seeded(
        snapshot.providers(),
        snapshot.launches().iter().filter(|l| l.orbit == orbit),
        |launch| manufacturer_of(snapshot, vehicle_of(snapshot, launch)?),
        |_| Some(1),
    )
}

/// How many launches of rockets built by `provider_id` went into `orbit`.
///
/// # Errors
///
/// Returns `MiningError::NotFound` for an unknown provider id, otherwise the
/// errors of [`orbit_launches_by_provider`].
pub fn launches_into_orbit(
    snapshot: &Snapshot,
    provider_id: &str,
    orbit: &str,
) -> Result<usize, MiningError> {
    let provider = snapshot.provider(provider_id).ok_or_else(|| MiningError::NotFound {
        kind: EntityKind::Provider,
        id: provider_id.to_string(),
    })?;
    let counts = orbit_launches_by_provider(snapshot, orbit)?;
    Ok(counts.get(provider).copied().unwrap_or(0))
}

// ---------------------------------------------------------------------------
// Rankings
// ---------------------------------------------------------------------------

/// Rockets with the most successful launches.
///
/// # Errors
///
/// See [`successful_launches_per_rocket`].
pub fn most_launched_rockets(snapshot: &Snapshot, k: usize) -> Result<Vec<&Rocket>, MiningError> {
    let counts = successful_launches_per_rocket(snapshot)?;
    Ok(top_k(counts, k, |(_, n)| *n, |(a, _), (b, _)| a.cmp(b))
        .into_iter()
        .map(|(rocket, _)| rocket)
        .collect())
}

/// Providers with the highest success rate.
///
/// # Errors
///
/// See [`success_rate_per_provider`].
pub fn most_reliable_providers(
    snapshot: &Snapshot,
    k: usize,
) -> Result<Vec<&Provider>, MiningError> {
    let rates = success_rate_per_provider(snapshot)?;
    Ok(top_k(rates, k, |(_, r)| *r, |(a, _), (b, _)| a.cmp(b))
        .into_iter()
        .map(|(provider, _)| provider)
        .collect())
}

/// Latest launches first.
///
/// # Errors
///
/// Returns `MiningError::MalformedRecord` if any launch has a dangling reference.
pub fn most_recent_launches(snapshot: &Snapshot, k: usize) -> Result<Vec<&Launch>, MiningError> {
    check_references(snapshot)?;
    Ok(top_k(snapshot.launches(), k, |l| l.date, |a, b| a.cmp(b)))
}

/// Every successful launch, in repository order.
///
/// # Errors
///
/// Returns `MiningError::MalformedRecord` if any launch has a dangling reference.
pub fn most_recent_successful_launches(snapshot: &Snapshot) -> Result<Vec<&Launch>, MiningError> {
    check_references(snapshot)?;
    Ok(snapshot.launches().iter().filter(|l| l.is_successful()).collect())
}

/// The country whose providers put the most payloads into `orbit`.
///
/// Ties go to the alphabetically first country. `None` only when there is no
/// candidate country at all.
///
/// # Errors
///
/// See [`payloads_by_country`].
pub fn dominant_country(
    snapshot: &Snapshot,
    orbit: &str,
    countries: &[String],
) -> Result<Option<String>, MiningError> {
    let totals = payloads_by_country(snapshot, orbit, countries)?;
    Ok(top_k(totals, 1, |(_, n)| *n, |(a, _), (b, _)| a.cmp(b))
        .into_iter()
        .next()
        .map(|(country, _)| country))
}

/// Highest-priced launches first.
///
/// # Errors
///
/// Returns `MiningError::MalformedRecord` on a dangling reference and
/// `MiningError::IncompleteData` if any launch has no price.
pub fn most_expensive_launches(snapshot: &Snapshot, k: usize) -> Result<Vec<&Launch>, MiningError> {
    check_references(snapshot)?;
    let priced = snapshot
        .launches()
        .iter()
        .map(|l| price_of(l).map(|price| (price, l)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(top_k(priced, k, |(price, _)| *price, |(_, a), (_, b)| a.cmp(b))
        .into_iter()
        .map(|(_, launch)| launch)
        .collect())
}

/// Providers that earned the most in `year`. Providers without in-year
/// launches rank with zero revenue rather than being dropped.
///
/// # Errors
///
/// See [`revenue_by_provider`].
pub fn highest_revenue_providers(
    snapshot: &Snapshot,
    k: usize,
    year: i32,
) -> Result<Vec<&Provider>, MiningError> {
    let revenue = revenue_by_provider(snapshot, year)?;
    Ok(top_k(revenue, k, |(_, sum)| sum.clone(), |(a, _), (b, _)| a.cmp(b))
        .into_iter()
        .map(|(provider, _)| provider)
        .collect())
}
