//! list-set-bench - throughput of sorted linked-list sets under three locking disciplines
//!
//! Every discipline is run with 1, 2, 4 and 8 worker threads; each worker issues the given
//! number of mostly-lookup operations against a shared set seeded with 1000 keys.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use list_set_bench::bench::Bench;
use list_set_bench::config::{BenchConfig, Cli};

fn setup_logging(verbose: bool, quiet: bool) -> Result<()> {
    let level = if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    // Logs go to stderr so the table on stdout can be piped on its own.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("failed to set tracing subscriber")
}

fn print_usage() {
    let program = std::env::args()
        .next()
        .unwrap_or_else(|| env!("CARGO_BIN_NAME").to_owned());
    println!("usage: {program} <ops_per_thread>");
    println!("example: {program} 100000");
}

fn run(cli: &Cli) -> Result<()> {
    setup_logging(cli.verbose, cli.quiet)?;

    let config = BenchConfig::from_cli(cli).context("configuration error")?;
    info!(
        ops_per_thread = config.ops_per_thread,
        seed = config.seed,
        threads = ?config.thread_counts,
        "starting benchmark"
    );

    let report = Bench::new(config)?.run().context("benchmark failed")?;
    print!("{report}");
    Ok(())
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            // Help and version requests are not failures.
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
