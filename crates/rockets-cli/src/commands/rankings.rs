use anyhow::Context;
use rockets_core::{Provider, Rocket};
use rockets_mining::Reliability;
use rockets_mining::rank::{clamp_k, top_k};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::output::rows::{LaunchRow, ReliabilityRow, RocketRow};

pub fn launched(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let counts = ctx.miner.successful_launches_per_rocket()?;
    output(&rocket_rows(counts, ctx.limit(flags)), flags.format)
}

pub fn reliable(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rates = ctx.miner.success_rate_per_provider()?;
    output(&reliability_rows(rates, ctx.limit(flags)), flags.format)
}

/// The `limit` most launched rockets, ranked from one report's counts.
fn rocket_rows(counts: Vec<(Rocket, usize)>, limit: i64) -> Vec<RocketRow> {
    top_k(counts, clamp_k(limit), |(_, n)| *n, |(a, _), (b, _)| a.cmp(b))
        .into_iter()
        .enumerate()
        .map(|(i, (rocket, n))| RocketRow::new(i + 1, rocket, n))
        .collect()
}

fn reliability_rows(rates: Vec<(Provider, Reliability)>, limit: i64) -> Vec<ReliabilityRow> {
    top_k(rates, clamp_k(limit), |(_, r)| *r, |(a, _), (b, _)| a.cmp(b))
        .into_iter()
        .enumerate()
        .map(|(i, (provider, rate))| ReliabilityRow::new(i + 1, provider, rate))
        .collect()
}

pub fn recent(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let launches = ctx.miner.most_recent_launches(ctx.limit(flags))?;
    launch_rows(ctx, launches, flags)
}

pub fn recent_successful(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let launches = ctx.miner.most_recent_successful_launches()?;
    launch_rows(ctx, launches, flags)
}

pub fn expensive(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let launches = ctx
        .miner
        .most_expensive_launches(ctx.limit(flags))
        .context("price ranking needs every launch priced (see --enrich)")?;
    launch_rows(ctx, launches, flags)
}

fn launch_rows(
    ctx: &AppContext,
    launches: Vec<rockets_core::Launch>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let snapshot = ctx.snapshot()?;
    let rows = launches
        .into_iter()
        .enumerate()
        .map(|(i, launch)| LaunchRow::new(i + 1, launch, &snapshot))
        .collect::<Vec<_>>();
    output(&rows, flags.format)
}
