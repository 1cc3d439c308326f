//! Runs workers against a shared set and times them.

use std::panic;
use std::time::{Duration, Instant};

use crossbeam_utils::thread::scope;
use tracing::{debug, info};

use super::report::{Report, Row};
use crate::config::BenchConfig;
use crate::error::{BenchError, Result};
use crate::list_set::{Discipline, LockCouplingListSet, MutexListSet, RwLockListSet};
use crate::workload::{populate, run_worker, OpCounts, WorkerConfig};
use crate::ConcurrentSet;

/// Outcome of one (discipline, thread count) trial.
#[derive(Debug, Clone, PartialEq)]
pub struct Trial {
    /// Discipline of the set.
    pub discipline: Discipline,
    /// Number of workers.
    pub threads: usize,
    /// Wall-clock time from the first spawn to the last join.
    pub elapsed: Duration,
    /// What the workers did, summed.
    pub counts: OpCounts,
}

/// Runs one trial of `discipline` with `threads` workers.
pub fn run_trial(discipline: Discipline, threads: usize, config: &BenchConfig) -> Result<Trial> {
    match discipline {
        Discipline::ReadWrite => trial::<RwLockListSet<u32>>(discipline, threads, config),
        Discipline::SingleMutex => trial::<MutexListSet<u32>>(discipline, threads, config),
        Discipline::PerNode => trial::<LockCouplingListSet<u32>>(discipline, threads, config),
    }
}

fn trial<S>(discipline: Discipline, threads: usize, config: &BenchConfig) -> Result<Trial>
where
    S: ConcurrentSet<u32> + Default + Sync,
{
    let set = S::default();
    populate(&set);

    let start = Instant::now();
    let counts = scope(|s| {
        let handles: Vec<_> = (0..threads)
            .map(|index| {
                let worker =
                    WorkerConfig::new(index, config.ops_per_thread, config.seed, config.mix);
                let set = &set;
                s.spawn(move |_| run_worker(set, worker))
            })
            .collect();

        // Join every worker before reporting the first failure.
        let mut total = OpCounts::default();
        let mut panicked = None;
        for (index, handle) in handles.into_iter().enumerate() {
            match handle.join() {
                Ok(worker) => total += worker,
                Err(_) => {
                    panicked.get_or_insert(index);
                }
            }
        }
        match panicked {
            Some(index) => Err(BenchError::WorkerPanicked {
                discipline,
                threads,
                index,
            }),
            None => Ok(total),
        }
    })
    .unwrap_or_else(|payload| panic::resume_unwind(payload))?;
    let elapsed = start.elapsed();
    drop(set);

    info!(
        %discipline,
        threads,
        secs = elapsed.as_secs_f64(),
        "trial finished"
    );
    debug!(
        %discipline,
        threads,
        members = counts.members,
        hits = counts.hits,
        inserted = counts.inserted,
        deleted = counts.deleted,
        "operation tally"
    );

    Ok(Trial {
        discipline,
        threads,
        elapsed,
        counts,
    })
}

/// Every trial of a benchmark configuration.
#[derive(Debug)]
pub struct Bench {
    config: BenchConfig,
}

impl Bench {
    /// Checks the configuration and prepares the benchmark.
    pub fn new(config: BenchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration being run.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Runs every (discipline, thread count) pair, one at a time, and tabulates the times.
    pub fn run(&self) -> Result<Report> {
        let mut rows = Vec::with_capacity(self.config.disciplines.len());
        for &discipline in &self.config.disciplines {
            info!(%discipline, seed = self.config.seed, "benchmarking");
            let elapsed = self
                .config
                .thread_counts
                .iter()
                .map(|&threads| run_trial(discipline, threads, &self.config).map(|t| t.elapsed))
                .collect::<Result<Vec<_>>>()?;
            rows.push(Row {
                discipline,
                elapsed,
            });
        }
        Ok(Report::new(&self.config, rows))
    }
}
