//! Sequential sorted singly linked list.
//!
//! Not synchronized on its own: [`MutexListSet`](super::MutexListSet) and
//! [`RwLockListSet`](super::RwLockListSet) put one of these behind a single lock.

use core::cmp::Ordering;

type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug)]
struct Node<T> {
    key: T,
    next: Link<T>,
}

/// Strictly ascending chain of uniquely owned nodes.
#[derive(Debug)]
pub(crate) struct SortedList<T> {
    head: Link<T>,
}

impl<T> SortedList<T> {
    pub(crate) const fn new() -> Self {
        Self { head: None }
    }

    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T: Ord> SortedList<T> {
    /// Returns the link holding the first node whose key is not below `key`.
    fn seek<'a>(mut link: &'a mut Link<T>, key: &T) -> &'a mut Link<T> {
        while link.as_ref().is_some_and(|node| node.key < *key) {
            if let Some(node) = link {
                link = &mut node.next;
            }
        }
        link
    }

    pub(crate) fn contains(&self, key: &T) -> bool {
        let mut link = &self.head;
        while let Some(node) = link {
            match node.key.cmp(key) {
                Ordering::Less => link = &node.next,
                Ordering::Equal => return true,
                Ordering::Greater => return false,
            }
        }
        false
    }

    pub(crate) fn insert(&mut self, key: T) -> bool {
        let link = Self::seek(&mut self.head, &key);
        if link.as_ref().is_some_and(|node| node.key == key) {
            return false;
        }
        let next = link.take();
        *link = Some(Box::new(Node { key, next }));
        true
    }

    pub(crate) fn remove(&mut self, key: &T) -> bool {
        let link = Self::seek(&mut self.head, key);
        if !link.as_ref().is_some_and(|node| node.key == *key) {
            return false;
        }
        if let Some(node) = link.take() {
            *link = node.next;
        }
        true
    }
}

impl<T> Drop for SortedList<T> {
    fn drop(&mut self) {
        // Unlink node by node; the default recursive drop could exhaust the stack on long chains.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T> Default for SortedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub(crate) struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.key)
    }
}
