/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_ordered_atomic::atomic::{
    Atomic,
    AtomicLoadMemoryOrder,
    AtomicMemoryOrder,
    AtomicRef,
    AtomicStoreMemoryOrder,
};
use std::sync::atomic::{
    AtomicUsize as StdAtomicUsize,
    Ordering,
};
use std::sync::{
    Arc,
    Barrier,
};
use std::thread;

#[derive(Debug, Clone, PartialEq)]
struct TestData {
    value: i32,
    name: String,
}

fn data(value: i32, name: &str) -> Arc<TestData> {
    Arc::new(TestData {
        value,
        name: name.to_string(),
    })
}

/// Bumps a shared counter when destroyed.
#[derive(Debug)]
struct Tracked {
    id: usize,
    drops: Arc<StdAtomicUsize>,
}

impl Tracked {
    fn new(id: usize, drops: &Arc<StdAtomicUsize>) -> Arc<Self> {
        Arc::new(Self {
            id,
            drops: drops.clone(),
        })
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_new() {
    let atomic = AtomicRef::new(Some(data(42, "test")));
    let current = atomic.load().unwrap();
    assert_eq!(current.value, 42);
    assert_eq!(current.name, "test");
}

#[test]
fn test_empty() {
    let atomic: AtomicRef<TestData> = AtomicRef::empty();
    assert!(atomic.is_empty());
    assert!(atomic.load().is_none());
    let atomic: AtomicRef<TestData> = AtomicRef::default();
    assert!(atomic.is_empty());
    let atomic: AtomicRef<TestData> = AtomicRef::new(None);
    assert!(atomic.load_with(AtomicLoadMemoryOrder::Relaxed).is_none());
}

#[test]
fn test_load_store() {
    let atomic = AtomicRef::new(Some(data(42, "first")));
    atomic.store(Some(data(100, "second")));

    let current = atomic.load().unwrap();
    assert_eq!(current.value, 100);
    assert_eq!(current.name, "second");

    atomic.store_with(None, AtomicStoreMemoryOrder::Release);
    assert!(atomic.load_with(AtomicLoadMemoryOrder::Acquire).is_none());
}

#[test]
fn test_loaded_handle_is_independent() {
    let original = data(1, "original");
    let atomic = AtomicRef::new(Some(original.clone()));
    let loaded = atomic.load().unwrap();
    assert!(Arc::ptr_eq(&loaded, &original));

    atomic.store(Some(data(2, "replacement")));
    drop(atomic);
    assert_eq!(loaded.value, 1);
    assert_eq!(Arc::strong_count(&original), 2);
}

#[test]
fn test_slot_holds_exactly_one_reference() {
    let first = data(1, "first");
    let atomic = AtomicRef::new(Some(first.clone()));
    assert_eq!(Arc::strong_count(&first), 2);

    for _ in 0..1_000 {
        let loaded = atomic.load().unwrap();
        assert_eq!(Arc::strong_count(&first), 3);
        drop(loaded);
    }
    assert_eq!(Arc::strong_count(&first), 2);

    let second = data(2, "second");
    atomic.store(Some(second.clone()));
    assert_eq!(Arc::strong_count(&first), 1);
    assert_eq!(Arc::strong_count(&second), 2);

    let mut expected = Some(second.clone());
    assert!(atomic.compare_exchange(&mut expected, Some(first.clone())));
    drop(expected);
    assert_eq!(Arc::strong_count(&first), 2);
    assert_eq!(Arc::strong_count(&second), 1);
}

#[test]
fn test_exchange() {
    let atomic = AtomicRef::new(Some(data(42, "first")));

    let old = atomic.exchange(Some(data(100, "second"))).unwrap();
    assert_eq!(old.value, 42);
    assert_eq!(old.name, "first");
    assert_eq!(atomic.load().unwrap().value, 100);

    let old = atomic.exchange_with(None, AtomicMemoryOrder::AcqRel).unwrap();
    assert_eq!(old.value, 100);
    assert!(atomic.is_empty());
}

#[test]
fn test_exchange_result_outlives_slot() {
    let drops = Arc::new(StdAtomicUsize::new(0));
    let first = Tracked::new(1, &drops);
    let first_ptr = Arc::as_ptr(&first);
    let atomic = AtomicRef::new(Some(first));

    let previous = atomic.exchange(Some(Tracked::new(2, &drops))).unwrap();
    assert_eq!(Arc::as_ptr(&previous), first_ptr);
    assert_eq!(Arc::strong_count(&previous), 1);

    drop(atomic);
    assert_eq!(drops.load(Ordering::SeqCst), 1);
    assert_eq!(previous.id, 1);

    drop(previous);
    assert_eq!(drops.load(Ordering::SeqCst), 2);
}

#[test]
fn test_take() {
    let atomic = AtomicRef::new(Some(data(7, "taken")));
    let taken = atomic.take().unwrap();
    assert_eq!(taken.value, 7);
    assert!(atomic.take().is_none());
    assert!(atomic.is_empty());
}

#[test]
fn test_compare_exchange_success() {
    let first = data(42, "first");
    let atomic = AtomicRef::new(Some(first.clone()));

    let mut expected = Some(first.clone());
    assert!(atomic.compare_exchange(&mut expected, Some(data(100, "second"))));
    assert!(Arc::ptr_eq(expected.as_ref().unwrap(), &first));
    assert_eq!(atomic.load().unwrap().value, 100);
}

#[test]
fn test_compare_exchange_failure_reports_actual() {
    let first = data(42, "first");
    let atomic = AtomicRef::new(Some(first.clone()));

    let mut expected = Some(data(42, "first"));
    assert!(!atomic.compare_exchange_with(
        &mut expected,
        Some(data(100, "second")),
        AtomicMemoryOrder::AcqRel,
        None,
    ));
    assert!(Arc::ptr_eq(expected.as_ref().unwrap(), &first));
    assert_eq!(atomic.load().unwrap().value, 42);

    assert!(atomic.compare_exchange(&mut expected, Some(data(100, "second"))));
    assert_eq!(atomic.load().unwrap().value, 100);
}

#[test]
fn test_compare_exchange_compares_identity() {
    let atomic = AtomicRef::new(Some(data(42, "same")));
    let mut equal_but_distinct = Some(data(42, "same"));
    assert!(!atomic.compare_exchange(&mut equal_but_distinct, None));
    assert!(!atomic.is_empty());
}

#[test]
fn test_compare_exchange_with_empty() {
    let atomic: AtomicRef<TestData> = AtomicRef::empty();

    let mut expected = Some(data(1, "missing"));
    assert!(!atomic.compare_exchange(&mut expected, Some(data(2, "ignored"))));
    assert!(expected.is_none());
    assert!(atomic.is_empty());

    assert!(atomic.compare_exchange(&mut expected, Some(data(3, "installed"))));
    assert_eq!(atomic.load().unwrap().value, 3);
}

#[test]
fn test_compare_exchange_releases_exactly() {
    let drops = Arc::new(StdAtomicUsize::new(0));
    let current = Tracked::new(1, &drops);
    let atomic = AtomicRef::new(Some(current.clone()));

    // A failed exchange destroys `desired` and reports the actual value.
    let mut wrong = Some(Tracked::new(2, &drops));
    assert!(!atomic.compare_exchange(&mut wrong, Some(Tracked::new(3, &drops))));
    assert_eq!(drops.load(Ordering::SeqCst), 2);
    assert_eq!(wrong.as_ref().unwrap().id, 1);
    drop(wrong);

    // A successful exchange releases only the slot's reference.
    let mut expected = Some(current.clone());
    assert!(atomic.compare_exchange(&mut expected, Some(Tracked::new(4, &drops))));
    drop(expected);
    assert_eq!(Arc::strong_count(&current), 1);
    drop(current);
    assert_eq!(drops.load(Ordering::SeqCst), 3);

    drop(atomic);
    assert_eq!(drops.load(Ordering::SeqCst), 4);
}

#[test]
fn test_compare_exchange_weak_eventually_succeeds() {
    let first = data(1, "first");
    let atomic = AtomicRef::new(Some(first.clone()));

    let mut expected = Some(first.clone());
    let mut attempts = 0;
    while !atomic.compare_exchange_weak_with(
        &mut expected,
        Some(data(2, "second")),
        AtomicMemoryOrder::Release,
        Some(AtomicLoadMemoryOrder::Relaxed),
    ) {
        assert!(Arc::ptr_eq(expected.as_ref().unwrap(), &first));
        attempts += 1;
        assert!(attempts < 10_000, "weak compare-exchange never succeeded");
    }
    assert_eq!(atomic.load().unwrap().value, 2);
}

#[test]
fn test_compare_exchange_weak_failure_reports_actual() {
    let atomic = AtomicRef::new(Some(data(5, "current")));
    let mut expected = None;
    assert!(!atomic.compare_exchange_weak(&mut expected, Some(data(6, "next"))));
    assert_eq!(expected.unwrap().value, 5);
}

#[test]
fn test_compare_and_exchange() {
    let first = data(42, "first");
    let atomic = AtomicRef::new(Some(first.clone()));

    let prev = atomic.compare_and_exchange(Some(first.clone()), Some(data(100, "second")));
    assert!(Arc::ptr_eq(prev.as_ref().unwrap(), &first));
    assert_eq!(atomic.load().unwrap().value, 100);

    let prev = atomic.compare_and_exchange(Some(first.clone()), None);
    assert_eq!(prev.unwrap().value, 100);
    assert!(!atomic.is_empty());
}

#[test]
fn test_compare_and_exchange_weak() {
    let first = data(1, "first");
    let atomic = AtomicRef::new(Some(first.clone()));
    loop {
        let prev = atomic.compare_and_exchange_weak(Some(first.clone()), None);
        if Arc::ptr_eq(prev.as_ref().unwrap(), &first) && atomic.is_empty() {
            break;
        }
    }
    assert!(atomic
        .compare_and_exchange_weak_with(
            Some(first.clone()),
            None,
            AtomicMemoryOrder::AcqRel,
            None,
        )
        .is_none());
}

#[test]
fn test_fetch_update() {
    let atomic = AtomicRef::new(Some(Arc::new(10)));
    let old = atomic.fetch_update(|current| current.as_ref().map(|x| Arc::new(**x * 2)));
    assert_eq!(*old.unwrap(), 10);
    assert_eq!(*atomic.load().unwrap(), 20);
}

#[test]
fn test_clear_is_idempotent() {
    let drops = Arc::new(StdAtomicUsize::new(0));
    let atomic = AtomicRef::new(Some(Tracked::new(1, &drops)));

    atomic.clear();
    assert_eq!(drops.load(Ordering::SeqCst), 1);
    atomic.clear_with(AtomicStoreMemoryOrder::Relaxed);
    assert!(atomic.is_empty());

    drop(atomic);
    assert_eq!(drops.load(Ordering::SeqCst), 1);
}

#[test]
fn test_drop_releases_held_value() {
    let value = data(1, "held");
    let atomic = AtomicRef::new(Some(value.clone()));
    let _ = atomic.load();
    let _ = atomic.load();
    drop(atomic);
    assert_eq!(Arc::strong_count(&value), 1);
}

#[test]
fn test_load_unretained() {
    let value = data(3, "borrowed");
    let atomic = AtomicRef::new(Some(value.clone()));
    let baseline = Arc::strong_count(&value);

    {
        // SAFETY: nothing replaces the value while the guard lives.
        let guard = unsafe { atomic.load_unretained(AtomicLoadMemoryOrder::Acquire) }.unwrap();
        assert_eq!(guard.value, 3);
        assert!(Arc::ptr_eq(&*guard, &value));
        assert_eq!(Arc::strong_count(&value), baseline);

        let retained = Arc::clone(&*guard);
        assert_eq!(Arc::strong_count(&value), baseline + 1);
        drop(retained);
    }
    assert_eq!(Arc::strong_count(&value), baseline);

    atomic.clear();
    // SAFETY: the slot is empty, nothing is borrowed.
    assert!(unsafe { atomic.load_unretained(AtomicLoadMemoryOrder::Relaxed) }.is_none());
}

#[test]
fn test_clone() {
    let atomic = AtomicRef::new(Some(data(42, "original")));
    let cloned = atomic.clone();
    assert!(Arc::ptr_eq(&atomic.load().unwrap(), &cloned.load().unwrap()));

    atomic.store(Some(data(100, "modified")));
    assert_eq!(atomic.load().unwrap().value, 100);
    assert_eq!(cloned.load().unwrap().value, 42);
}

#[test]
fn test_from_and_into_inner() {
    let value = data(9, "inner");
    let atomic = AtomicRef::from(value.clone());
    let inner = atomic.into_inner().unwrap();
    assert!(Arc::ptr_eq(&inner, &value));
    drop(inner);
    assert_eq!(Arc::strong_count(&value), 1);

    let atomic: AtomicRef<TestData> = AtomicRef::from(None);
    assert!(atomic.into_inner().is_none());
}

#[test]
fn test_debug() {
    let atomic = AtomicRef::new(Some(Arc::new(42)));
    assert_eq!(format!("{:?}", atomic), "AtomicRef { value: Some(42) }");
    let atomic: AtomicRef<i32> = AtomicRef::empty();
    assert_eq!(format!("{:?}", atomic), "AtomicRef { value: None }");
}

#[test]
fn test_generic_usage() {
    fn swap_in<A: Atomic<Value = Option<Arc<i32>>>>(atomic: &A, value: i32) -> Option<Arc<i32>> {
        atomic.exchange(Some(Arc::new(value)))
    }
    let atomic = AtomicRef::new(Some(Arc::new(1)));
    assert_eq!(*swap_in(&atomic, 2).unwrap(), 1);
    assert_eq!(*Atomic::load(&atomic).unwrap(), 2);
}

#[test]
fn test_two_thread_hand_off() {
    let drops = Arc::new(StdAtomicUsize::new(0));
    let obj1 = Tracked::new(1, &drops);
    let obj2 = Tracked::new(2, &drops);
    let atomic = Arc::new(AtomicRef::new(Some(obj1.clone())));
    let barrier = Arc::new(Barrier::new(2));

    let reader = {
        let atomic = atomic.clone();
        let barrier = barrier.clone();
        thread::spawn(move || {
            let seen = atomic.load_with(AtomicLoadMemoryOrder::Acquire).unwrap();
            barrier.wait();
            barrier.wait();
            // The value read before the exchange stays valid.
            seen.id
        })
    };

    barrier.wait();
    let previous = atomic.exchange_with(Some(obj2.clone()), AtomicMemoryOrder::AcqRel);
    assert!(Arc::ptr_eq(previous.as_ref().unwrap(), &obj1));
    drop(previous);
    barrier.wait();

    assert_eq!(reader.join().unwrap(), 1);
    assert_eq!(Arc::strong_count(&obj1), 1);
    assert_eq!(atomic.load().unwrap().id, 2);

    drop(atomic);
    assert_eq!(Arc::strong_count(&obj2), 1);
    drop(obj1);
    drop(obj2);
    assert_eq!(drops.load(Ordering::SeqCst), 2);
}

#[test]
fn test_compare_exchange_observes_concurrent_store() {
    let obj1 = data(1, "obj1");
    let obj2 = data(2, "obj2");
    let atomic: Arc<AtomicRef<TestData>> = Arc::new(AtomicRef::empty());
    let barrier = Arc::new(Barrier::new(2));

    let writer = {
        let atomic = atomic.clone();
        let barrier = barrier.clone();
        let obj1 = obj1.clone();
        thread::spawn(move || {
            atomic.store(Some(obj1.clone()));
            assert!(Arc::ptr_eq(&atomic.load().unwrap(), &obj1));
            barrier.wait();
        })
    };

    barrier.wait();
    let mut expected = None;
    assert!(!atomic.compare_exchange(&mut expected, Some(obj2.clone())));
    assert!(Arc::ptr_eq(expected.as_ref().unwrap(), &obj1));
    assert!(atomic.compare_exchange(&mut expected, Some(obj2.clone())));
    assert!(Arc::ptr_eq(&atomic.load().unwrap(), &obj2));
    writer.join().unwrap();

    drop(expected);
    drop(atomic);
    assert_eq!(Arc::strong_count(&obj1), 1);
    assert_eq!(Arc::strong_count(&obj2), 1);
}
