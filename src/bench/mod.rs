//! Benchmark harness.

mod harness;
mod report;

pub use harness::{run_trial, Bench, Trial};
pub use report::{Report, Row};
