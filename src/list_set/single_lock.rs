use crate::lock::Mutex;
use crate::ConcurrentSet;

use super::sorted::SortedList;

/// Concurrent sorted singly linked list guarded by one mutex.
///
/// Every operation holds the lock for its whole traversal, so all operations are serialized,
/// lookups included.
#[derive(Debug)]
pub struct MutexListSet<T> {
    list: Mutex<SortedList<T>>,
}

impl<T> MutexListSet<T> {
    /// Creates a new list.
    pub fn new() -> Self {
        Self {
            list: Mutex::new(SortedList::new()),
        }
    }
}

impl<T: Ord> ConcurrentSet<T> for MutexListSet<T> {
    fn contains(&self, key: &T) -> bool {
        self.list.lock().expect("list lock poisoned").contains(key)
    }

    fn insert(&self, key: T) -> bool {
        self.list.lock().expect("list lock poisoned").insert(key)
    }

    fn remove(&self, key: &T) -> bool {
        self.list.lock().expect("list lock poisoned").remove(key)
    }

    fn keys(&self) -> Vec<T>
    where
        T: Clone,
    {
        let list = self.list.lock().expect("list lock poisoned");
        list.iter().cloned().collect()
    }
}

impl<T> Default for MutexListSet<T> {
    fn default() -> Self {
        Self::new()
    }
}
