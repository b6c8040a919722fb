//! # bgts CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bgts_cli::data::{run_list, run_seed, ListArgs, SeedArgs};
use bgts_cli::rules::{run_penalty, run_source, PenaltyArgs, SourceArgs};
use bgts_cli::serve::{run_serve, ServeArgs};

/// Gift Transparency Service CLI
///
/// Runs the declaration service and evaluates the gift rules offline:
/// penalty multipliers, prohibited-source classification, and data
/// directory seeding/inspection.
#[derive(Parser, Debug)]
#[command(name = "bgts", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP service.
    Serve(ServeArgs),

    /// Compute the fine for a gift value and breach occurrence.
    Penalty(PenaltyArgs),

    /// Classify a relationship category against the rule table.
    Source(SourceArgs),

    /// Write demo users, agencies, and declarations into a data directory.
    Seed(SeedArgs),

    /// Print the declarations held in a data directory.
    List(ListArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Serve(args) => run_serve(&args),
        Commands::Penalty(args) => run_penalty(&args),
        Commands::Source(args) => run_source(&args),
        Commands::Seed(args) => run_seed(&args),
        Commands::List(args) => run_list(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
