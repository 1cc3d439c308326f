//! Fixed-width results table.

use core::fmt;
use std::time::Duration;

use crate::config::BenchConfig;
use crate::list_set::Discipline;
use crate::workload::Mix;

/// Width of the label column, borders excluded.
const LABEL_WIDTH: usize = 29;
/// Width of a time column, borders excluded.
const CELL_WIDTH: usize = 9;

/// Times of one discipline across the configured thread counts.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Discipline of the row.
    pub discipline: Discipline,
    /// Elapsed time per thread count, in column order.
    pub elapsed: Vec<Duration>,
}

/// Benchmark results, printed as a table with one row per discipline and one column per thread
/// count.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    ops_per_thread: u64,
    mix: Mix,
    thread_counts: Vec<usize>,
    rows: Vec<Row>,
}

impl Report {
    /// Wraps the rows produced for `config`.
    pub fn new(config: &BenchConfig, rows: Vec<Row>) -> Self {
        Self {
            ops_per_thread: config.ops_per_thread,
            mix: config.mix,
            thread_counts: config.thread_counts.clone(),
            rows,
        }
    }

    /// Rows in the order they were run.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    fn width(&self) -> usize {
        LABEL_WIDTH + 2 + self.thread_counts.len() * (CELL_WIDTH + 1)
    }

    fn rule(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|{}|", "-".repeat(LABEL_WIDTH))?;
        for _ in &self.thread_counts {
            write!(f, "{}|", "-".repeat(CELL_WIDTH))?;
        }
        writeln!(f)
    }
}

/// `0.0005` becomes `0.05`, `0.999` becomes `99.9`.
fn percent(probability: f64) -> String {
    let formatted = format!("{:.4}", probability * 100.0);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_owned()
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let member = percent(self.mix.member);
        let insert = percent(self.mix.insert);
        let delete = percent(self.mix.delete());
        let columns = self.thread_counts.len() * (CELL_WIDTH + 1) - 1;

        writeln!(f)?;
        writeln!(f, "=== performance analysis - multithreaded linked list ===")?;
        writeln!(f, "operations per thread: {}", self.ops_per_thread)?;
        writeln!(
            f,
            "distribution: {member}% member, {insert}% insert, {delete}% delete"
        )?;
        writeln!(f)?;

        writeln!(f, "{}", "=".repeat(self.width()))?;
        writeln!(
            f,
            "|{:LABEL_WIDTH$}|{:^columns$}|",
            "", "Number of Threads"
        )?;
        self.rule(f)?;
        write!(f, "|{:^LABEL_WIDTH$}|", "Implementation")?;
        for threads in &self.thread_counts {
            write!(f, "{threads:^CELL_WIDTH$}|")?;
        }
        writeln!(f)?;
        self.rule(f)?;

        for row in &self.rows {
            write!(f, "| {:<width$}|", row.discipline.label(), width = LABEL_WIDTH - 1)?;
            for elapsed in &row.elapsed {
                write!(
                    f,
                    " {:>width$.3} |",
                    elapsed.as_secs_f64(),
                    width = CELL_WIDTH - 2
                )?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{}", "=".repeat(self.width()))?;

        writeln!(f)?;
        writeln!(f, "times in seconds")?;
        writeln!(f, "{} ops/thread", self.ops_per_thread)?;
        writeln!(f, "{member}% member")?;
        writeln!(f, "{insert}% insert")?;
        writeln!(f, "{delete}% delete")
    }
}
