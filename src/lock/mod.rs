//! Locks.
//!
//! The list sets take their primitives from here so that the `check-loom` feature can swap the
//! standard library's locks for loom's model-checked ones.

use core::fmt;
use core::ops::{Deref, DerefMut};

cfg_if::cfg_if! {
    if #[cfg(feature = "check-loom")] {
        pub(crate) use loom::sync::{Mutex, MutexGuard, RwLock};
    } else {
        pub(crate) use std::sync::{Mutex, MutexGuard, RwLock};
    }
}

/// Guard of one link in a hand-over-hand traversal.
///
/// Behaves like the `MutexGuard` it wraps. Test builds additionally account for how many of
/// these the current thread holds, see [`held`].
pub(crate) struct CoupledGuard<'l, T> {
    guard: MutexGuard<'l, T>,
}

impl<'l, T> CoupledGuard<'l, T> {
    /// Blocks until `mutex` is acquired.
    ///
    /// # Panics
    ///
    /// Panics if the lock is poisoned: a thread died while holding a link of the list.
    pub(crate) fn acquire(mutex: &'l Mutex<T>) -> Self {
        let guard = mutex.lock().expect("list link lock poisoned");
        #[cfg(test)]
        held::acquired();
        Self { guard }
    }
}

impl<T> Deref for CoupledGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.guard
    }
}

impl<T> DerefMut for CoupledGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.guard
    }
}

impl<T> Drop for CoupledGuard<'_, T> {
    fn drop(&mut self) {
        #[cfg(test)]
        held::released();
    }
}

impl<T> fmt::Debug for CoupledGuard<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoupledGuard").finish_non_exhaustive()
    }
}

/// Per-thread accounting of held [`CoupledGuard`]s.
#[cfg(test)]
pub(crate) mod held {
    use std::cell::Cell;

    thread_local! {
        static HELD: Cell<usize> = const { Cell::new(0) };
        static PEAK: Cell<usize> = const { Cell::new(0) };
    }

    pub(crate) fn acquired() {
        let now = HELD.with(|held| {
            held.set(held.get() + 1);
            held.get()
        });
        PEAK.with(|peak| peak.set(peak.get().max(now)));
    }

    pub(crate) fn released() {
        HELD.with(|held| held.set(held.get() - 1));
    }

    /// Number of guards the current thread holds right now.
    pub(crate) fn current() -> usize {
        HELD.with(Cell::get)
    }

    /// Largest number of guards held at once since the last [`reset_peak`].
    pub(crate) fn peak() -> usize {
        PEAK.with(Cell::get)
    }

    pub(crate) fn reset_peak() {
        PEAK.with(|peak| peak.set(current()));
    }
}
