use anyhow::Context;
use rockets_mining::rank::{clamp_k, top_k};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{OrbitLaunchesArgs, ProviderRevenueArgs, RevenueArgs};
use crate::context::AppContext;
use crate::output::output;
use crate::output::rows::{OrbitLaunchesReport, ProviderRevenueReport, RevenueRow};

pub fn highest(args: &RevenueArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let revenue = ctx
        .miner
        .revenue_by_provider(args.year)
        .context("revenue needs every launch in the year priced (see --enrich)")?;

    let limit = clamp_k(ctx.limit(flags));
    let ranked = top_k(revenue, limit, |(_, sum)| sum.clone(), |(a, _), (b, _)| a.cmp(b));
    let rows = ranked
        .into_iter()
        .enumerate()
        .map(|(i, (provider, revenue))| RevenueRow {
            rank: i + 1,
            id: provider.id,
            name: provider.name,
            country: provider.country,
            year: args.year,
            revenue: revenue.to_string(),
        })
        .collect::<Vec<_>>();
    output(&rows, flags.format)
}

pub fn provider(
    args: &ProviderRevenueArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let revenue = ctx.miner.provider_revenue(&args.provider, args.year)?;
    let snapshot = ctx.snapshot()?;
    let name = snapshot
        .provider(&args.provider)
        .map(|p| p.name.clone())
        .unwrap_or_default();

    output(
        &ProviderRevenueReport {
            id: args.provider.clone(),
            name,
            year: args.year,
            revenue: revenue.to_string(),
        },
        flags.format,
    )
}

pub fn orbit_launches(
    args: &OrbitLaunchesArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let launches = ctx.miner.launches_into_orbit(&args.provider, &args.orbit)?;
    let snapshot = ctx.snapshot()?;
    let name = snapshot
        .provider(&args.provider)
        .map(|p| p.name.clone())
        .unwrap_or_default();

    output(
        &OrbitLaunchesReport {
            id: args.provider.clone(),
            name,
            orbit: args.orbit.clone(),
            launches,
        },
        flags.format,
    )
}
