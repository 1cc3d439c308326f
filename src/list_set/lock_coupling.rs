use core::cmp::Ordering;
use core::fmt;
use core::ptr;

use crate::lock::{CoupledGuard, Mutex};
use crate::ConcurrentSet;

#[derive(Debug)]
struct Node<T> {
    key: T,
    next: Mutex<*mut Node<T>>,
}

/// Concurrent sorted singly linked list using fine-grained lock-coupling.
///
/// Each link (`head`, and the `next` field of every node) has its own lock. A traversal takes
/// the lock of the next link before it lets go of the current one, always moving from the head
/// towards the tail, so operations on disjoint parts of the list run in parallel and can never
/// deadlock. A thread holds at most two link locks at any moment.
pub struct LockCouplingListSet<T> {
    head: Mutex<*mut Node<T>>,
}

unsafe impl<T: Send> Send for LockCouplingListSet<T> {}
unsafe impl<T: Send + Sync> Sync for LockCouplingListSet<T> {}

// reference to the `next` field of previous node which points to the current node
//  pre -> node
struct Cursor<'l, T>(CoupledGuard<'l, *mut Node<T>>);

impl<T> Node<T> {
    fn new(key: T, next: *mut Self) -> *mut Self {
        Box::into_raw(Box::new(Self {
            key,
            next: Mutex::new(next),
        }))
    }
}

impl<T: Ord> Cursor<'_, T> {
    /// Moves the cursor to the position of key in the sorted list.
    /// Returns whether the value was found.
    fn find(&mut self, key: &T) -> bool {
        loop {
            // SAFETY: a node is reclaimed only after it has been unlinked by a thread holding the
            // lock of the link pointing to it, which is the lock this cursor holds.
            let Some(node) = (unsafe { self.0.as_ref() }) else {
                return false;
            };
            match node.key.cmp(key) {
                // The successor link is locked before the old guard is dropped by the assignment.
                Ordering::Less => self.0 = CoupledGuard::acquire(&node.next),
                Ordering::Equal => return true,
                Ordering::Greater => return false,
            }
        }
    }
}

impl<T> LockCouplingListSet<T> {
    /// Creates a new list.
    pub fn new() -> Self {
        Self {
            head: Mutex::new(ptr::null_mut()),
        }
    }

    fn head(&self) -> Cursor<'_, T> {
        Cursor(CoupledGuard::acquire(&self.head))
    }
}

impl<T: Ord> LockCouplingListSet<T> {
    fn find(&self, key: &T) -> (bool, Cursor<'_, T>) {
        let mut cursor = self.head();
        let found = cursor.find(key);
        (found, cursor)
    }
}

impl<T: Ord> ConcurrentSet<T> for LockCouplingListSet<T> {
    fn contains(&self, key: &T) -> bool {
        self.find(key).0
    }

    fn insert(&self, key: T) -> bool {
        let (found, mut cursor) = self.find(&key);
        if found {
            return false;
        }
        *cursor.0 = Node::new(key, *cursor.0);
        true
    }

    fn remove(&self, key: &T) -> bool {
        let (found, mut cursor) = self.find(key);
        if !found {
            return false;
        }
        let target = *cursor.0;

        // SAFETY: `find` stopped on this node, so it is not null, and it stays alive while the
        // link pointing to it is locked.
        let next = CoupledGuard::acquire(unsafe { &(*target).next });
        *cursor.0 = *next;
        // Anyone still inside the node held its lock before we got it, and has moved past it.
        // Nobody can reach it any more once the cursor is released.
        drop(next);
        drop(cursor);

        // SAFETY: the node is unlinked and its lock is neither held nor awaited.
        drop(unsafe { Box::from_raw(target) });
        true
    }

    fn keys(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().collect()
    }
}

/// Hand-over-hand iterator over the keys of a [`LockCouplingListSet`].
///
/// Keys are cloned out: once the iterator moves past a node, another thread may remove and
/// reclaim it.
pub struct Iter<'l, T>(CoupledGuard<'l, *mut Node<T>>);

impl<T> LockCouplingListSet<T> {
    /// An iterator visiting all elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(CoupledGuard::acquire(&self.head))
    }
}

impl<T: Clone> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: the link pointing to the node is locked, see `Cursor::find`.
        let node = unsafe { self.0.as_ref() }?;
        let key = node.key.clone();
        self.0 = CoupledGuard::acquire(&node.next);
        Some(key)
    }
}

impl<T> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").finish_non_exhaustive()
    }
}

impl<T: fmt::Debug + Clone> fmt::Debug for LockCouplingListSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Drop for LockCouplingListSet<T> {
    fn drop(&mut self) {
        let mut curr = *self.head.lock().expect("list link lock poisoned");
        while !curr.is_null() {
            // SAFETY: `&mut self` rules out other users, and every node is owned by exactly one
            // link, so each one is freed once.
            let node = unsafe { Box::from_raw(curr) };
            curr = *node.next.lock().expect("list link lock poisoned");
        }
    }
}

impl<T> Default for LockCouplingListSet<T> {
    fn default() -> Self {
        Self::new()
    }
}
