//! Sorted linked-list sets under three synchronization disciplines, and the harness that
//! measures their throughput.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(unreachable_pub)]

mod adt;
pub mod bench;
pub mod config;
pub mod error;
pub mod list_set;
mod lock;
pub mod workload;

pub mod test;

pub use adt::ConcurrentSet;
pub use list_set::{Discipline, LockCouplingListSet, MutexListSet, RwLockListSet};
