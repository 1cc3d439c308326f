use std::collections::BTreeSet;

use crossbeam_utils::thread::scope;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::LockCouplingListSet;
use crate::lock::held;
use crate::ConcurrentSet;

#[test]
fn releases_every_lock() {
    let set = LockCouplingListSet::new();
    assert!(set.insert(2));
    assert!(set.insert(1));
    assert!(set.contains(&2));
    assert!(!set.insert(1));
    assert!(set.remove(&1));
    assert!(!set.remove(&7));
    assert_eq!(set.keys(), [2]);
    assert_eq!(held::current(), 0);
}

#[test]
fn traversal_holds_at_most_two_locks() {
    let set = LockCouplingListSet::new();
    for key in (0..64).map(|i| i * 2) {
        assert!(set.insert(key));
    }

    held::reset_peak();
    for key in 0..130 {
        let _ = set.contains(&key);
    }
    assert_eq!(held::peak(), 2);

    held::reset_peak();
    for key in 0..130 {
        if set.insert(key) {
            assert!(set.remove(&key));
        }
    }
    assert_eq!(held::peak(), 2);

    held::reset_peak();
    assert_eq!(set.iter().count(), 64);
    assert!(held::peak() <= 2);
    assert_eq!(held::current(), 0);
}

#[test]
fn empty_list_takes_only_head_lock() {
    let set = LockCouplingListSet::<u32>::new();
    held::reset_peak();
    assert!(!set.contains(&3));
    assert!(!set.remove(&3));
    assert_eq!(held::peak(), 1);
}

#[test]
fn concurrent_workers_hold_at_most_two_locks() {
    const THREADS: u64 = 8;
    const STEPS: usize = 4_000;

    let set = LockCouplingListSet::new();
    for key in (0..256u32).step_by(2) {
        assert!(set.insert(key));
    }

    scope(|s| {
        for t in 0..THREADS {
            let set = &set;
            s.spawn(move |_| {
                let mut rng = StdRng::seed_from_u64(t);
                held::reset_peak();
                for _ in 0..STEPS {
                    let key = rng.gen_range(0..256);
                    match rng.gen_range(0..3) {
                        0 => {
                            let _ = set.contains(&key);
                        }
                        1 => {
                            let _ = set.insert(key);
                        }
                        _ => {
                            let _ = set.remove(&key);
                        }
                    }
                }
                assert!(held::peak() <= 2, "peak {} locks", held::peak());
                assert_eq!(held::current(), 0);
            });
        }
    })
    .unwrap();

    let keys = set.keys();
    let unique: BTreeSet<_> = keys.iter().copied().collect();
    assert_eq!(keys, unique.into_iter().collect::<Vec<_>>());
}
