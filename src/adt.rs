//! Abstract data types.

/// Concurrent set interface.
///
/// Every method takes `&self`: implementations synchronize internally, so a set can be shared
/// between threads by reference.
pub trait ConcurrentSet<T> {
    /// Returns `true` iff the set contains the key.
    fn contains(&self, key: &T) -> bool;

    /// Adds the key to the set. Returns `true` iff the key was not already present.
    fn insert(&self, key: T) -> bool;

    /// Removes the key from the set. Returns `true` iff the key was present.
    fn remove(&self, key: &T) -> bool;

    /// Keys in ascending order.
    ///
    /// The snapshot is only consistent when no other thread is mutating the set.
    fn keys(&self) -> Vec<T>
    where
        T: Clone;
}
