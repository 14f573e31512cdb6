use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DominantArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::output::rows::DominantReport;

pub fn dominant(args: &DominantArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let countries = ctx.countries(&args.countries);
    let payloads = ctx
        .miner
        .payloads_by_country(&args.orbit, countries)
        .context("payload totals need every matching launch to carry a payload set (see --enrich)")?;
    let dominant = ctx.miner.dominant_country(&args.orbit, countries)?;

    output(
        &DominantReport {
            orbit: args.orbit.clone(),
            dominant,
            payloads,
        },
        flags.format,
    )
}
