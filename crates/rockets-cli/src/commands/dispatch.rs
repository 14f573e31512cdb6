use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Launched => commands::rankings::launched(ctx, flags),
        Commands::Reliable => commands::rankings::reliable(ctx, flags),
        Commands::Recent => commands::rankings::recent(ctx, flags),
        Commands::RecentSuccessful => commands::rankings::recent_successful(ctx, flags),
        Commands::Expensive => commands::rankings::expensive(ctx, flags),
        Commands::Dominant(args) => commands::countries::dominant(&args, ctx, flags),
        Commands::Revenue(args) => commands::revenue::highest(&args, ctx, flags),
        Commands::ProviderRevenue(args) => commands::revenue::provider(&args, ctx, flags),
        Commands::OrbitLaunches(args) => commands::revenue::orbit_launches(&args, ctx, flags),
        Commands::RocketCounts => commands::stats::rocket_counts(ctx, flags),
        Commands::SuccessRates => commands::stats::success_rates(ctx, flags),
    }
}
