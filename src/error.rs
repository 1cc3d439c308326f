//! Error types for the benchmark harness.

use thiserror::Error;

use crate::list_set::Discipline;

/// Harness and configuration errors.
///
/// The list sets themselves never fail: a duplicate insert or an absent remove is reported
/// through their `bool` results.
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("worker {index} panicked during the {discipline} trial with {threads} threads")]
    WorkerPanicked {
        discipline: Discipline,
        threads: usize,
        index: usize,
    },

    #[error("at least one thread count is required")]
    NoThreadCounts,

    #[error("thread counts must be positive")]
    ZeroThreads,

    #[error("at least one discipline is required")]
    NoDisciplines,
}

/// Result alias for the harness.
pub type Result<T, E = BenchError> = std::result::Result<T, E>;
