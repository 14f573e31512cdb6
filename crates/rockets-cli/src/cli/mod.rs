use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `rkt` binary.
#[derive(Debug, Parser)]
#[command(name = "rkt", version, about = "Ranked reports over spaceflight launch records")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Number of ranked results (overrides general.default_limit)
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Dataset file (overrides general.data_path)
    #[arg(long, global = true)]
    pub data: Option<String>,

    /// Enrichment file with launch prices and payloads (overrides general.enrichment_path)
    #[arg(long, global = true)]
    pub enrich: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            data: self.data.clone(),
            enrich: self.enrich.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "rkt",
            "--format",
            "table",
            "--limit",
            "3",
            "--verbose",
            "launched",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(3));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Launched));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["rkt", "reliable", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Reliable));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["rkt", "--format", "xml", "recent"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn dominant_collects_repeated_countries() {
        let cli = Cli::try_parse_from([
            "rkt", "dominant", "--orbit", "LEO", "--country", "USA", "--country", "Europe",
        ])
        .expect("cli should parse");

        let Commands::Dominant(args) = cli.command else {
            panic!("expected dominant");
        };
        assert_eq!(args.orbit, "LEO");
        assert_eq!(args.countries, vec!["USA", "Europe"]);
    }

    #[test]
    fn dominant_requires_orbit() {
        assert!(Cli::try_parse_from(["rkt", "dominant"]).is_err());
    }

    #[test]
    fn provider_revenue_takes_provider_and_year() {
        let cli = Cli::try_parse_from([
            "rkt",
            "provider-revenue",
            "--provider",
            "lsp-00000001",
            "--year",
            "2017",
        ])
        .expect("cli should parse");

        let Commands::ProviderRevenue(args) = cli.command else {
            panic!("expected provider-revenue");
        };
        assert_eq!(args.provider, "lsp-00000001");
        assert_eq!(args.year, 2017);
    }

    #[test]
    fn orbit_launches_takes_provider_and_orbit() {
        let cli = Cli::try_parse_from([
            "rkt",
            "orbit-launches",
            "--provider",
            "lsp-00000002",
            "--orbit",
            "GTO",
        ])
        .expect("cli should parse");

        let Commands::OrbitLaunches(args) = cli.command else {
            panic!("expected orbit-launches");
        };
        assert_eq!(args.provider, "lsp-00000002");
        assert_eq!(args.orbit, "GTO");
    }

    #[test]
    fn revenue_rejects_non_numeric_year() {
        assert!(Cli::try_parse_from(["rkt", "revenue", "--year", "soon"]).is_err());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from([
            "rkt",
            "--data",
            "/tmp/launches.json",
            "--enrich",
            "/tmp/prices.json",
            "expensive",
        ])
        .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.data.as_deref(), Some("/tmp/launches.json"));
        assert_eq!(flags.enrich.as_deref(), Some("/tmp/prices.json"));
        assert_eq!(flags.limit, None);
    }
}
