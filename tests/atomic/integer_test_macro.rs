/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

/// Macro to generate comprehensive tests for atomic integer types.
macro_rules! test_atomic_integer {
    ($atomic_type:ident, $value_type:ty, $test_mod:ident) => {
        mod $test_mod {
            use prism3_ordered_atomic::atomic::{
                $atomic_type,
                AtomicInteger,
                AtomicLoadMemoryOrder,
                AtomicMemoryOrder,
                AtomicStoreMemoryOrder,
            };
            use std::sync::Arc;
            use std::thread;

            #[test]
            fn test_new() {
                let atomic = <$atomic_type>::new(42);
                assert_eq!(atomic.load(), 42);
            }

            #[test]
            fn test_default() {
                let atomic = <$atomic_type>::default();
                assert_eq!(atomic.load(), 0);
            }

            #[test]
            fn test_from() {
                let atomic = <$atomic_type>::from(100);
                assert_eq!(atomic.load(), 100);
            }

            #[test]
            fn test_load_store() {
                let atomic = <$atomic_type>::new(0);
                atomic.store(42);
                assert_eq!(atomic.load(), 42);
                atomic.store_with(10, AtomicStoreMemoryOrder::Release);
                assert_eq!(atomic.load_with(AtomicLoadMemoryOrder::Acquire), 10);
                atomic.store_with(11, AtomicStoreMemoryOrder::Relaxed);
                assert_eq!(atomic.load_with(AtomicLoadMemoryOrder::Consume), 11);
            }

            #[test]
            fn test_exchange() {
                let atomic = <$atomic_type>::new(10);
                assert_eq!(atomic.exchange(20), 10);
                assert_eq!(atomic.exchange_with(30, AtomicMemoryOrder::AcqRel), 20);
                assert_eq!(atomic.load(), 30);
            }

            #[test]
            fn test_compare_exchange_success() {
                let atomic = <$atomic_type>::new(10);
                let mut expected = 10;
                assert!(atomic.compare_exchange(&mut expected, 20));
                assert_eq!(expected, 10);
                assert_eq!(atomic.load(), 20);
            }

            #[test]
            fn test_compare_exchange_failure() {
                let atomic = <$atomic_type>::new(10);
                let mut expected = 15;
                assert!(!atomic.compare_exchange_with(
                    &mut expected,
                    20,
                    AtomicMemoryOrder::Release,
                    None,
                ));
                assert_eq!(expected, 10);
                assert_eq!(atomic.load(), 10);
            }

            #[test]
            fn test_compare_exchange_weak_loop() {
                let atomic = <$atomic_type>::new(10);
                let mut expected = 10;
                let mut attempts = 0;
                while !atomic.compare_exchange_weak_with(
                    &mut expected,
                    20,
                    AtomicMemoryOrder::AcqRel,
                    Some(AtomicLoadMemoryOrder::Relaxed),
                ) {
                    assert_eq!(expected, 10);
                    attempts += 1;
                    assert!(attempts < 10_000);
                }
                assert_eq!(atomic.load(), 20);
            }

            #[test]
            fn test_compare_and_exchange() {
                let atomic = <$atomic_type>::new(10);
                let prev = atomic.compare_and_exchange(10, 20);
                assert_eq!(prev, 10);
                assert_eq!(atomic.load(), 20);

                let prev = atomic.compare_and_exchange(10, 30);
                assert_eq!(prev, 20);
                assert_eq!(atomic.load(), 20);
            }

            #[test]
            fn test_compare_and_exchange_weak() {
                let atomic = <$atomic_type>::new(10);
                loop {
                    if atomic.compare_and_exchange_weak(10, 20) == 10 {
                        break;
                    }
                }
                assert_eq!(atomic.load(), 20);
                assert_eq!(atomic.compare_and_exchange_weak(10, 30), 20);
            }

            #[test]
            fn test_fetch_add() {
                let atomic = <$atomic_type>::new(10);
                assert_eq!(atomic.fetch_add(5), 10);
                assert_eq!(atomic.fetch_add_with(1, AtomicMemoryOrder::Relaxed), 15);
                assert_eq!(atomic.load(), 16);
            }

            #[test]
            fn test_fetch_sub() {
                let atomic = <$atomic_type>::new(10);
                assert_eq!(atomic.fetch_sub(3), 10);
                assert_eq!(atomic.fetch_sub_with(1, AtomicMemoryOrder::Release), 7);
                assert_eq!(atomic.load(), 6);
            }

            #[test]
            fn test_fetch_add_wraps() {
                let atomic = <$atomic_type>::new(<$value_type>::MAX);
                assert_eq!(atomic.fetch_add(1), <$value_type>::MAX);
                assert_eq!(atomic.load(), <$value_type>::MIN);
                atomic.fetch_sub(1);
                assert_eq!(atomic.load(), <$value_type>::MAX);
            }

            #[test]
            fn test_fetch_and() {
                let atomic = <$atomic_type>::new(0b1111);
                assert_eq!(atomic.fetch_and(0b1100), 0b1111);
                assert_eq!(atomic.load(), 0b1100);
            }

            #[test]
            fn test_fetch_or() {
                let atomic = <$atomic_type>::new(0b1100);
                assert_eq!(atomic.fetch_or(0b0011), 0b1100);
                assert_eq!(atomic.load(), 0b1111);
            }

            #[test]
            fn test_fetch_xor() {
                let atomic = <$atomic_type>::new(0b1100);
                assert_eq!(
                    atomic.fetch_xor_with(0b0110, AtomicMemoryOrder::SeqCst),
                    0b1100
                );
                assert_eq!(atomic.load(), 0b1010);
            }

            #[test]
            fn test_fetch_update() {
                let atomic = <$atomic_type>::new(10);
                let old = prism3_ordered_atomic::atomic::Atomic::fetch_update(&atomic, |x| x * 2);
                assert_eq!(old, 10);
                assert_eq!(atomic.load(), 20);
            }

            #[test]
            fn test_trait_defaults() {
                fn bump<A: AtomicInteger<Value = $value_type>>(atomic: &A) -> $value_type {
                    atomic.fetch_add(1);
                    atomic.fetch_sub(2);
                    atomic.fetch_or(0)
                }
                let atomic = <$atomic_type>::new(10);
                assert_eq!(bump(&atomic), 9);
            }

            #[test]
            fn test_debug_display() {
                let atomic = <$atomic_type>::new(42);
                assert_eq!(format!("{}", atomic), "42");
                assert!(format!("{:?}", atomic).contains("42"));
            }

            #[test]
            fn test_concurrent_fetch_add() {
                let counter = Arc::new(<$atomic_type>::new(0));
                let mut handles = vec![];

                for _ in 0..10 {
                    let counter = counter.clone();
                    let handle = thread::spawn(move || {
                        for _ in 0..10 {
                            counter.fetch_add_with(1, AtomicMemoryOrder::Relaxed);
                        }
                    });
                    handles.push(handle);
                }

                for handle in handles {
                    handle.join().unwrap();
                }

                assert_eq!(counter.load(), 100 as $value_type);
            }

            #[test]
            fn test_concurrent_cas_increment() {
                let counter = Arc::new(<$atomic_type>::new(0));
                let mut handles = vec![];

                for _ in 0..10 {
                    let counter = counter.clone();
                    let handle = thread::spawn(move || {
                        for _ in 0..10 {
                            let mut current = counter.load_with(AtomicLoadMemoryOrder::Relaxed);
                            loop {
                                let desired = current.wrapping_add(1);
                                if counter.compare_exchange_weak_with(
                                    &mut current,
                                    desired,
                                    AtomicMemoryOrder::AcqRel,
                                    None,
                                ) {
                                    break;
                                }
                            }
                        }
                    });
                    handles.push(handle);
                }

                for handle in handles {
                    handle.join().unwrap();
                }

                assert_eq!(counter.load(), 100 as $value_type);
            }
        }
    };
}
