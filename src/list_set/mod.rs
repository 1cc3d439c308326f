//! Sorted linked-list sets, one per synchronization discipline.

mod lock_coupling;
#[cfg(test)]
mod lock_coupling_test;
mod rw_lock;
mod single_lock;
mod sorted;

use core::fmt;

use clap::ValueEnum;

pub use lock_coupling::{Iter, LockCouplingListSet};
pub use rw_lock::RwLockListSet;
pub use single_lock::MutexListSet;

use crate::ConcurrentSet;

/// Synchronization discipline of a list set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Discipline {
    /// One reader-writer lock for the entire list: [`RwLockListSet`].
    #[value(name = "rwlock")]
    ReadWrite,
    /// One mutex for the entire list: [`MutexListSet`].
    #[value(name = "mutex")]
    SingleMutex,
    /// One mutex per node with hand-over-hand traversal: [`LockCouplingListSet`].
    #[value(name = "per-node")]
    PerNode,
}

impl Discipline {
    /// Every discipline, in the order the benchmark reports them.
    pub const ALL: [Discipline; 3] = [
        Discipline::ReadWrite,
        Discipline::SingleMutex,
        Discipline::PerNode,
    ];

    /// Row label in the results table.
    pub fn label(self) -> &'static str {
        match self {
            Discipline::ReadWrite => "Read-Write Locks",
            Discipline::SingleMutex => "One Mutex for Entire List",
            Discipline::PerNode => "One Mutex per Node",
        }
    }

    /// Creates an empty set of this discipline behind a trait object.
    pub fn new_set<T>(self) -> Box<dyn ConcurrentSet<T> + Send + Sync>
    where
        T: Ord + Send + Sync + 'static,
    {
        match self {
            Discipline::ReadWrite => Box::new(RwLockListSet::new()),
            Discipline::SingleMutex => Box::new(MutexListSet::new()),
            Discipline::PerNode => Box::new(LockCouplingListSet::new()),
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
