use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::output::rows::{ReliabilityRow, RocketRow};

pub fn rocket_counts(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = ctx
        .miner
        .successful_launches_per_rocket()?
        .into_iter()
        .enumerate()
        .map(|(i, (rocket, n))| RocketRow::new(i + 1, rocket, n))
        .collect::<Vec<_>>();
    output(&rows, flags.format)
}

pub fn success_rates(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = ctx
        .miner
        .success_rate_per_provider()?
        .into_iter()
        .enumerate()
        .map(|(i, (provider, rate))| ReliabilityRow::new(i + 1, provider, rate))
        .collect::<Vec<_>>();
    output(&rows, flags.format)
}
