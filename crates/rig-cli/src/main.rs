//! # rig CLI entry point
//!
//! Parses command-line arguments, sets up logging and dispatches to the
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rig_cli::check::{run_check, CheckArgs};
use rig_cli::compare::{run_compare, CompareArgs};
use rig_cli::config::{CliConfig, OutputFormat, Settings};
use rig_cli::search::{run_search, SearchArgs};

/// PC build compatibility checker and component comparison tool.
#[derive(Parser, Debug)]
#[command(name = "rig", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Component catalog (YAML, or JSON by `.json` extension).
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check a saved build for compatibility issues and power headroom.
    Check(CheckArgs),

    /// Compare two to four components of the same category.
    Compare(CompareArgs),

    /// Filter and sort the component catalog.
    Search(SearchArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn init_tracing(verbose: u8, json: bool) {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    let config = cli.config.as_deref().map(CliConfig::load).transpose()?;
    let settings = Settings::resolve(config.as_ref(), cli.catalog, cli.format);
    tracing::debug!(catalog = %settings.catalog.display(), format = ?settings.format, "resolved settings");

    match &cli.command {
        Commands::Check(args) => run_check(args, &settings),
        Commands::Compare(args) => run_compare(args, &settings),
        Commands::Search(args) => run_search(args, &settings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rig_catalog::SortOrder;
    use rig_core::Category;

    #[test]
    fn cli_parse_check() {
        let cli = Cli::try_parse_from(["rig", "check", "build.yaml"]).unwrap();
        match cli.command {
            Commands::Check(args) => assert_eq!(args.build, PathBuf::from("build.yaml")),
            other => panic!("expected check, got {other:?}"),
        }
    }

    #[test]
    fn cli_parse_check_requires_file() {
        assert!(Cli::try_parse_from(["rig", "check"]).is_err());
    }

    #[test]
    fn cli_parse_compare_bounds() {
        assert!(Cli::try_parse_from(["rig", "compare", "a"]).is_err());
        assert!(Cli::try_parse_from(["rig", "compare", "a", "b"]).is_ok());
        assert!(Cli::try_parse_from(["rig", "compare", "a", "b", "c", "d"]).is_ok());
        assert!(Cli::try_parse_from(["rig", "compare", "a", "b", "c", "d", "e"]).is_err());
    }

    #[test]
    fn cli_parse_search_flags() {
        let cli = Cli::try_parse_from([
            "rig",
            "search",
            "--category",
            "cpu",
            "--max-price",
            "300",
            "--manufacturer",
            "AMD",
            "--manufacturer",
            "Intel",
            "--in-stock",
            "--sort",
            "price-asc",
        ])
        .unwrap();
        let Commands::Search(args) = cli.command else {
            panic!("expected search");
        };
        assert_eq!(args.category, Some(Category::Cpu));
        assert_eq!(args.max_price, Some(300.0));
        assert_eq!(args.manufacturers, vec!["AMD", "Intel"]);
        assert!(args.in_stock);
        assert_eq!(args.sort, SortOrder::PriceAscending);
    }

    #[test]
    fn cli_parse_search_rejects_unknown_category() {
        assert!(Cli::try_parse_from(["rig", "search", "--category", "monitor"]).is_err());
    }

    #[test]
    fn cli_parse_verbose_levels() {
        let cli0 = Cli::try_parse_from(["rig", "search"]).unwrap();
        assert_eq!(cli0.verbose, 0);
        let cli2 = Cli::try_parse_from(["rig", "-vv", "search"]).unwrap();
        assert_eq!(cli2.verbose, 2);
    }

    #[test]
    fn cli_parse_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "rig",
            "search",
            "--catalog",
            "parts.json",
            "--format",
            "json",
            "--log-json",
        ])
        .unwrap();
        assert_eq!(cli.catalog, Some(PathBuf::from("parts.json")));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.log_json);
    }

    #[test]
    fn cli_parse_no_subcommand_errors() {
        assert!(Cli::try_parse_from(["rig"]).is_err());
    }
}
