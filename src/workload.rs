//! Randomized operation stream run by each benchmark worker.

use core::ops::{AddAssign, RangeInclusive};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ConcurrentSet;

/// Keys drawn by the workers.
pub const KEY_RANGE: RangeInclusive<u32> = 0..=99_999;

/// Number of keys the set holds before a trial starts.
pub const SEED_POPULATION: u32 = 1_000;

/// Keys the set holds before a trial starts: `0, 2, 4, …, 1998`.
pub fn seed_keys() -> impl Iterator<Item = u32> {
    (0..SEED_POPULATION).map(|i| i * 2)
}

/// Fills `set` with [`seed_keys`].
pub fn populate<S>(set: &S)
where
    S: ConcurrentSet<u32> + ?Sized,
{
    for key in seed_keys() {
        set.insert(key);
    }
}

/// Set operation picked by the workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Membership test.
    Member,
    /// Insertion.
    Insert,
    /// Deletion.
    Delete,
}

/// Probabilities of the operations. Deletions take whatever `member` and `insert` leave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mix {
    /// Probability of a membership test.
    pub member: f64,
    /// Probability of an insertion.
    pub insert: f64,
}

impl Mix {
    /// 99.9% member, 0.05% insert, 0.05% delete.
    pub const READ_HEAVY: Mix = Mix {
        member: 0.999,
        insert: 0.0005,
    };

    /// Probability of a deletion.
    pub fn delete(&self) -> f64 {
        1.0 - self.member - self.insert
    }

    /// Maps a uniform draw in `[0, 1)` to an operation using cumulative thresholds.
    pub fn pick(&self, draw: f64) -> Op {
        if draw < self.member {
            Op::Member
        } else if draw < self.member + self.insert {
            Op::Insert
        } else {
            Op::Delete
        }
    }
}

impl Default for Mix {
    fn default() -> Self {
        Self::READ_HEAVY
    }
}

/// Everything one worker needs to know.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkerConfig {
    /// Position of the worker among its siblings.
    pub index: usize,
    /// Operations to issue.
    pub ops: u64,
    /// Seed of the worker's generator.
    pub seed: u64,
    /// Operation probabilities.
    pub mix: Mix,
}

impl WorkerConfig {
    /// Configuration of worker `index` in a run seeded with `run_seed`.
    ///
    /// Siblings get distinct seeds, and the same run seed reproduces the same streams.
    pub fn new(index: usize, ops: u64, run_seed: u64, mix: Mix) -> Self {
        Self {
            index,
            ops,
            seed: run_seed.wrapping_add(index as u64),
            mix,
        }
    }
}

/// Tally of what a worker did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpCounts {
    /// Membership tests issued.
    pub members: u64,
    /// Membership tests that found their key.
    pub hits: u64,
    /// Insertions issued.
    pub inserts: u64,
    /// Insertions that added a key.
    pub inserted: u64,
    /// Deletions issued.
    pub deletes: u64,
    /// Deletions that removed a key.
    pub deleted: u64,
}

impl OpCounts {
    /// Total operations issued.
    pub fn total(&self) -> u64 {
        self.members + self.inserts + self.deletes
    }

    /// How much the set grew: successful insertions minus successful deletions.
    pub fn net_growth(&self) -> i64 {
        self.inserted as i64 - self.deleted as i64
    }
}

impl AddAssign for OpCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.members += rhs.members;
        self.hits += rhs.hits;
        self.inserts += rhs.inserts;
        self.inserted += rhs.inserted;
        self.deletes += rhs.deletes;
        self.deleted += rhs.deleted;
    }
}

/// Runs one worker's operation stream against `set`.
pub fn run_worker<S>(set: &S, config: WorkerConfig) -> OpCounts
where
    S: ConcurrentSet<u32> + ?Sized,
{
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut counts = OpCounts::default();

    for _ in 0..config.ops {
        let draw: f64 = rng.gen();
        let key = rng.gen_range(KEY_RANGE);

        match config.mix.pick(draw) {
            Op::Member => {
                counts.members += 1;
                counts.hits += u64::from(set.contains(&key));
            }
            Op::Insert => {
                counts.inserts += 1;
                counts.inserted += u64::from(set.insert(key));
            }
            Op::Delete => {
                counts.deletes += 1;
                counts.deleted += u64::from(set.remove(&key));
            }
        }
    }
    counts
}
