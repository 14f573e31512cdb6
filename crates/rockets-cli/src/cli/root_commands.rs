use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Rockets with the most successful launches.
    Launched,
    /// Providers with the highest launch success rate.
    Reliable,
    /// Latest launches first.
    Recent,
    /// Every successful launch, in dataset order.
    RecentSuccessful,
    /// Country whose providers carried the most payloads into an orbit.
    Dominant(DominantArgs),
    /// Highest-priced launches.
    Expensive,
    /// Providers ranked by revenue earned in a year.
    Revenue(RevenueArgs),
    /// Revenue of a single provider in a year.
    ProviderRevenue(ProviderRevenueArgs),
    /// Launches of a provider's rockets into one orbit.
    OrbitLaunches(OrbitLaunchesArgs),
    /// Successful launch count for every rocket that has one.
    RocketCounts,
    /// Success rate of every provider.
    SuccessRates,
}

#[derive(Clone, Debug, Args)]
pub struct DominantArgs {
    /// Orbit label to match exactly (e.g. LEO, GTO)
    #[arg(long)]
    pub orbit: String,

    /// Restrict to these provider countries (repeatable; default: report.countries or all)
    #[arg(long = "country")]
    pub countries: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct RevenueArgs {
    /// Calendar year of the launches to count
    #[arg(long)]
    pub year: i32,
}

#[derive(Clone, Debug, Args)]
pub struct ProviderRevenueArgs {
    /// Provider id (lsp-...)
    #[arg(long)]
    pub provider: String,

    /// Calendar year of the launches to count
    #[arg(long)]
    pub year: i32,
}

#[derive(Clone, Debug, Args)]
pub struct OrbitLaunchesArgs {
    /// Provider id (lsp-...) of the rocket manufacturer
    #[arg(long)]
    pub provider: String,

    /// Orbit label to match exactly (e.g. LEO, GTO)
    #[arg(long)]
    pub orbit: String,
}
