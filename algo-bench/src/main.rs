//! algo-bench CLI — run the catalog harnesses.
//!
//! Usage:
//!   algo-bench binarian   [--trials N] [--seed S] [--json]
//!   algo-bench count-bits [--trials N] [--seed S] [--json]
//!   algo-bench latency    [--trials N] [--seed S] [--json]
//!
//! Logs go to stderr, filtered by RUST_LOG (default: warn).

use clap::{Args, Parser, Subcommand};
use std::fmt;
use tracing_subscriber::EnvFilter;

use algo_bench::catalog::{binarian, count_bits, latency};
use algo_bench::errors::Result;
use algo_bench::harness::Harness;
use algo_bench::report::RunReport;
use algo_bench::types::{Element, DEFAULT_TRIALS};

#[derive(Parser)]
#[command(name = "algo-bench", version, about = "Cross-check competing implementations and score their growth rate")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct RunArgs {
    /// Number of randomized trials
    #[arg(short, long, default_value_t = DEFAULT_TRIALS)]
    trials: usize,
    /// Random seed (OS entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Print the report as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Set bits of a sum of powers of two
    Binarian(RunArgs),
    /// Set bits of three times a sum of distinct powers of two
    CountBits(RunArgs),
    /// Sequential merge latency of sorted files
    Latency(RunArgs),
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Binarian(args) => binarian::harness(args.seed).and_then(|h| cmd_run(h, &args)),
        Commands::CountBits(args) => count_bits::harness(args.seed).and_then(|h| cmd_run(h, &args)),
        Commands::Latency(args) => latency::harness(args.seed).and_then(|h| cmd_run(h, &args)),
    };

    if let Err(e) = outcome {
        match e.mismatch() {
            Some(mismatch) => eprintln!("{mismatch}"),
            None => eprintln!("Error: {e}"),
        }
        std::process::exit(1);
    }
}

fn cmd_run<T, R>(mut harness: Harness<T, R>, args: &RunArgs) -> Result<()>
where
    T: Element,
    R: fmt::Debug + 'static,
{
    if !args.json {
        println!("{}", RunReport::start_banner(harness.name()));
    }

    let report = harness.run_trials(args.trials)?;

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("Error serializing report: {e}"),
        }
    } else {
        println!("{report}");
    }
    Ok(())
}
