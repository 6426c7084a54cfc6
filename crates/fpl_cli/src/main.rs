//! FPL Advisor CLI
//!
//! Transfer targets, swaps, chip advice and wildcard squads from saved
//! fantasy football API documents.

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "cli")]
use fpl_cli::{build_report, load_input, render, resolve_config, resolve_round, OutputFormat, Overrides, Section};
#[cfg(feature = "cli")]
use log::info;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "fpl_advisor", version = fpl_core::VERSION)]
#[command(about = "Fantasy football transfer advice from saved API data", long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG still takes precedence when set)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Args)]
struct CommonArgs {
    /// Directory holding bootstrap-static.json and fixtures.json
    #[arg(long, default_value = "data")]
    data: PathBuf,

    /// Picks document (defaults to <data>/picks.json)
    #[arg(long)]
    picks: Option<PathBuf>,

    /// Current round, used to normalise minutes (defaults to the first fixture round)
    #[arg(long)]
    round: Option<u32>,

    /// Advisor config JSON (falls back to $FPL_ADVISOR_CONFIG, then defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Forward difficulty window in rounds
    #[arg(long)]
    window: Option<u32>,

    /// Number of transfer targets to show
    #[arg(long)]
    top_n: Option<usize>,

    /// Owned players considered for replacement
    #[arg(long)]
    max_transfers: Option<usize>,

    /// Output format: text, json or csv
    #[arg(long, default_value = "text")]
    format: OutputFormat,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Rank the best players you do not own
    Targets(CommonArgs),

    /// Show the current squad
    Team(CommonArgs),

    /// Suggest budget-aware one-for-one transfers
    Swaps(CommonArgs),

    /// Check whether a chip is worth playing
    Chip(CommonArgs),

    /// Build a new squad from your total budget
    Wildcard(CommonArgs),

    /// Targets, current squad, swaps and chip advice in one run
    Report {
        #[command(flatten)]
        common: CommonArgs,

        /// Build a wildcard squad instead of suggesting transfers
        #[arg(long, default_value = "false")]
        wildcard: bool,
    },
}

#[cfg(feature = "cli")]
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

#[cfg(feature = "cli")]
fn run(common: CommonArgs, sections: &[Section]) -> Result<()> {
    let overrides = Overrides { window: common.window, top_n: common.top_n, max_transfers: common.max_transfers };
    let config = resolve_config(common.config.as_deref(), overrides)?;

    let input = load_input(&common.data, common.picks.as_deref())?;
    let round = resolve_round(common.round, &input);
    info!("Advising for round {} (window {} rounds)", round, config.window);

    let report = build_report(&input, round, &config, sections)?;
    print!("{}", render(&report, common.format)?);
    Ok(())
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Targets(common) => run(common, &[Section::Targets]),
        Commands::Team(common) => run(common, &[Section::Team]),
        Commands::Swaps(common) => run(common, &[Section::Swaps]),
        Commands::Chip(common) => run(common, &[Section::Chip]),
        Commands::Wildcard(common) => run(common, &[Section::Wildcard]),
        Commands::Report { common, wildcard } => {
            if wildcard {
                run(common, &[Section::Wildcard])
            } else {
                run(common, &Section::ADVICE)
            }
        }
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("fpl_advisor CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
