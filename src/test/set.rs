//! Stress tests for [`ConcurrentSet`] implementations.

use core::fmt::Debug;
use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

use crossbeam_utils::thread::scope;
use itertools::Itertools;
use rand::distributions::{Distribution, Standard};
use rand::{thread_rng, Rng};

use crate::ConcurrentSet;

/// Operations drawn by the stress tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ops {
    Contains,
    Insert,
    Remove,
}

impl Distribution<Ops> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Ops {
        match rng.gen_range(0..3) {
            0 => Ops::Contains,
            1 => Ops::Insert,
            _ => Ops::Remove,
        }
    }
}

/// Panics unless `keys` is strictly ascending, i.e. sorted without duplicates.
pub fn assert_strictly_ascending<T: Ord + Debug>(keys: &[T]) {
    if let Some((a, b)) = keys.iter().tuple_windows().find(|(a, b)| a >= b) {
        panic!("chain out of order: {a:?} is followed by {b:?} in {keys:?}");
    }
}

/// Runs random operations on one thread and checks every result against a [`BTreeSet`].
pub fn stress_sequential<T, S>(steps: usize)
where
    T: Ord + Clone + Debug,
    Standard: Distribution<T>,
    S: Default + ConcurrentSet<T>,
{
    let set = S::default();
    let mut model = BTreeSet::new();
    let mut rng = thread_rng();

    for i in 0..steps {
        let key: T = rng.gen();
        match rng.gen::<Ops>() {
            Ops::Contains => {
                assert_eq!(set.contains(&key), model.contains(&key), "step {i}: contains {key:?}")
            }
            Ops::Insert => assert_eq!(
                set.insert(key.clone()),
                model.insert(key.clone()),
                "step {i}: insert {key:?}"
            ),
            Ops::Remove => {
                assert_eq!(set.remove(&key), model.remove(&key), "step {i}: remove {key:?}")
            }
        }
    }

    let keys = set.keys();
    assert_strictly_ascending(&keys);
    assert_eq!(keys, model.into_iter().collect::<Vec<_>>());
}

/// Runs random operations on `threads` threads, then checks the chain and the per-key balance.
///
/// Every key must end up present exactly when the successful insertions of it outnumber its
/// successful removals by one, and never by more than one.
pub fn stress_concurrent<T, S>(threads: usize, steps: usize)
where
    T: Ord + Hash + Clone + Debug + Send,
    Standard: Distribution<T>,
    S: Default + Sync + ConcurrentSet<T>,
{
    let set = S::default();

    let balances = scope(|s| {
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let set = &set;
                s.spawn(move |_| {
                    let mut rng = thread_rng();
                    let mut balance = HashMap::<T, i64>::new();
                    for _ in 0..steps {
                        let key: T = rng.gen();
                        match rng.gen::<Ops>() {
                            Ops::Contains => {
                                let _ = set.contains(&key);
                            }
                            Ops::Insert => {
                                if set.insert(key.clone()) {
                                    *balance.entry(key).or_default() += 1;
                                }
                            }
                            Ops::Remove => {
                                if set.remove(&key) {
                                    *balance.entry(key).or_default() -= 1;
                                }
                            }
                        }
                    }
                    balance
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect::<Vec<_>>()
    })
    .unwrap();

    let mut total = HashMap::<T, i64>::new();
    for (key, delta) in balances.into_iter().flatten() {
        *total.entry(key).or_default() += delta;
    }

    let keys = set.keys();
    assert_strictly_ascending(&keys);
    let present: BTreeSet<_> = keys.into_iter().collect();
    for (key, balance) in &total {
        let expected = i64::from(present.contains(key));
        assert_eq!(*balance, expected, "unbalanced key {key:?}");
    }
    for key in &present {
        assert_eq!(total.get(key), Some(&1), "{key:?} present but never inserted");
    }
}
