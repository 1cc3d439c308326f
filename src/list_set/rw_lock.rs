use crate::lock::RwLock;
use crate::ConcurrentSet;

use super::sorted::SortedList;

/// Concurrent sorted singly linked list guarded by one reader-writer lock.
///
/// Lookups share the lock and run in parallel; insertions and removals take it exclusively.
/// There is no writer priority: a steady stream of lookups can delay a writer indefinitely.
/// Under the read-dominated benchmark mix that is the behaviour being measured.
#[derive(Debug)]
pub struct RwLockListSet<T> {
    list: RwLock<SortedList<T>>,
}

impl<T> RwLockListSet<T> {
    /// Creates a new list.
    pub fn new() -> Self {
        Self {
            list: RwLock::new(SortedList::new()),
        }
    }
}

impl<T: Ord> ConcurrentSet<T> for RwLockListSet<T> {
    fn contains(&self, key: &T) -> bool {
        self.list.read().expect("list lock poisoned").contains(key)
    }

    fn insert(&self, key: T) -> bool {
        self.list.write().expect("list lock poisoned").insert(key)
    }

    fn remove(&self, key: &T) -> bool {
        self.list.write().expect("list lock poisoned").remove(key)
    }

    fn keys(&self) -> Vec<T>
    where
        T: Clone,
    {
        let list = self.list.read().expect("list lock poisoned");
        list.iter().cloned().collect()
    }
}

impl<T> Default for RwLockListSet<T> {
    fn default() -> Self {
        Self::new()
    }
}
