//! Command-line arguments and benchmark configuration.

use clap::Parser;

use crate::error::{BenchError, Result};
use crate::list_set::Discipline;
use crate::workload::Mix;

/// Thread counts benchmarked when none are given.
pub const DEFAULT_THREAD_COUNTS: [usize; 4] = [1, 2, 4, 8];

/// Throughput of sorted linked-list sets under three locking disciplines
#[derive(Parser, Debug, Clone)]
#[command(name = "list-set-bench")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Operations issued by every worker thread
    #[arg(value_name = "OPS_PER_THREAD", value_parser = clap::value_parser!(u64).range(1..))]
    pub ops_per_thread: u64,

    /// Worker thread counts to benchmark, one table column each
    #[arg(long = "threads", value_delimiter = ',', default_values_t = DEFAULT_THREAD_COUNTS)]
    pub threads: Vec<usize>,

    /// Disciplines to benchmark, one table row each
    #[arg(long = "discipline", value_enum, value_delimiter = ',', default_values_t = Discipline::ALL)]
    pub disciplines: Vec<Discipline>,

    /// Base seed of the worker generators (random when omitted)
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose", conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

/// Validated benchmark configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// Operations issued by every worker thread.
    pub ops_per_thread: u64,
    /// Worker thread counts, in column order.
    pub thread_counts: Vec<usize>,
    /// Disciplines, in row order.
    pub disciplines: Vec<Discipline>,
    /// Base seed; worker `i` of every trial uses `seed + i`.
    pub seed: u64,
    /// Operation probabilities.
    pub mix: Mix,
}

impl BenchConfig {
    /// The default benchmark: every discipline, 1, 2, 4 and 8 threads, the read-heavy mix.
    pub fn new(ops_per_thread: u64, seed: u64) -> Self {
        Self {
            ops_per_thread,
            thread_counts: DEFAULT_THREAD_COUNTS.to_vec(),
            disciplines: Discipline::ALL.to_vec(),
            seed,
            mix: Mix::READ_HEAVY,
        }
    }

    /// Builds the configuration from parsed arguments. A missing seed is drawn from entropy.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Self {
            ops_per_thread: cli.ops_per_thread,
            thread_counts: cli.threads.clone(),
            disciplines: cli.disciplines.clone(),
            seed: cli.seed.unwrap_or_else(rand::random),
            mix: Mix::READ_HEAVY,
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations that would produce an empty or meaningless table.
    pub fn validate(&self) -> Result<()> {
        if self.thread_counts.is_empty() {
            return Err(BenchError::NoThreadCounts);
        }
        if self.thread_counts.contains(&0) {
            return Err(BenchError::ZeroThreads);
        }
        if self.disciplines.is_empty() {
            return Err(BenchError::NoDisciplines);
        }
        Ok(())
    }
}
