/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Traits
//!
//! Defines common traits for atomic types, providing a unified interface
//! for atomic operations with explicit memory orders.
//!
//! Implementors only provide the `*_with` methods. The plain-named methods
//! are provided on top of them with sequentially consistent ordering, which
//! is the C11 default.
//!
//! # Author
//!
//! Haixing Hu

use crate::atomic::memory_order::{
    AtomicLoadMemoryOrder,
    AtomicMemoryOrder,
    AtomicStoreMemoryOrder,
};

/// Common trait for all atomic types.
///
/// Provides load, store, exchange and compare-exchange with explicit memory
/// orders.
///
/// # Author
///
/// Haixing Hu
pub trait Atomic {
    /// The value type stored in the atomic.
    type Value;

    /// Loads the current value.
    ///
    /// # Parameters
    ///
    /// * `order` - Memory order of the load.
    ///
    /// # Returns
    ///
    /// The current value.
    fn load_with(&self, order: AtomicLoadMemoryOrder) -> Self::Value;

    /// Stores a new value.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value.
    /// * `order` - Memory order of the store.
    fn store_with(&self, value: Self::Value, order: AtomicStoreMemoryOrder);

    /// Replaces the current value, returning the previous one.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value.
    /// * `order` - Memory order of the read-modify-write.
    ///
    /// # Returns
    ///
    /// The previous value.
    fn exchange_with(&self, value: Self::Value, order: AtomicMemoryOrder) -> Self::Value;

    /// Strong compare-and-exchange.
    ///
    /// If the current value equals `*expected`, replaces it with `desired`
    /// and returns `true`. Otherwise writes the actual current value into
    /// `*expected` and returns `false`. Never fails spuriously.
    ///
    /// # Parameters
    ///
    /// * `expected` - The expected value; updated on failure.
    /// * `desired` - The value to store on success.
    /// * `order` - Memory order on success.
    /// * `load_order` - Memory order on failure. `None` selects
    ///   [`AtomicMemoryOrder::strongest_load_order`] of `order`. Must not
    ///   be stronger than `order`.
    ///
    /// # Returns
    ///
    /// `true` if the exchange took place.
    fn compare_exchange_with(
        &self,
        expected: &mut Self::Value,
        desired: Self::Value,
        order: AtomicMemoryOrder,
        load_order: Option<AtomicLoadMemoryOrder>,
    ) -> bool;

    /// Weak compare-and-exchange.
    ///
    /// Same contract as [`compare_exchange_with`](Atomic::compare_exchange_with)
    /// but may fail spuriously even when the values are equal; should be
    /// used in a loop.
    fn compare_exchange_weak_with(
        &self,
        expected: &mut Self::Value,
        desired: Self::Value,
        order: AtomicMemoryOrder,
        load_order: Option<AtomicLoadMemoryOrder>,
    ) -> bool;

    /// Loads the current value with `SeqCst` ordering.
    #[inline]
    fn load(&self) -> Self::Value {
        self.load_with(AtomicLoadMemoryOrder::SeqCst)
    }

    /// Stores a new value with `SeqCst` ordering.
    #[inline]
    fn store(&self, value: Self::Value) {
        self.store_with(value, AtomicStoreMemoryOrder::SeqCst);
    }

    /// Replaces the current value with `SeqCst` ordering, returning the
    /// previous one.
    #[inline]
    fn exchange(&self, value: Self::Value) -> Self::Value {
        self.exchange_with(value, AtomicMemoryOrder::SeqCst)
    }

    /// Strong compare-and-exchange with `SeqCst` ordering.
    #[inline]
    fn compare_exchange(&self, expected: &mut Self::Value, desired: Self::Value) -> bool {
        self.compare_exchange_with(expected, desired, AtomicMemoryOrder::SeqCst, None)
    }

    /// Weak compare-and-exchange with `SeqCst` ordering.
    #[inline]
    fn compare_exchange_weak(&self, expected: &mut Self::Value, desired: Self::Value) -> bool {
        self.compare_exchange_weak_with(expected, desired, AtomicMemoryOrder::SeqCst, None)
    }

    /// Value-returning strong compare-and-exchange.
    ///
    /// # Returns
    ///
    /// The value observed by the operation: `expected` itself if the
    /// exchange took place, otherwise the actual current value.
    #[inline]
    fn compare_and_exchange(&self, expected: Self::Value, desired: Self::Value) -> Self::Value {
        let mut expected = expected;
        self.compare_exchange(&mut expected, desired);
        expected
    }

    /// Value-returning weak compare-and-exchange.
    #[inline]
    fn compare_and_exchange_weak(
        &self,
        expected: Self::Value,
        desired: Self::Value,
    ) -> Self::Value {
        let mut expected = expected;
        self.compare_exchange_weak(&mut expected, desired);
        expected
    }

    /// Updates the value with a function, returning the old value.
    ///
    /// Internally uses a weak CAS loop until the update succeeds, so `f`
    /// may be called more than once.
    ///
    /// # Parameters
    ///
    /// * `f` - Computes the new value from the current one.
    ///
    /// # Returns
    ///
    /// The value that was replaced.
    fn fetch_update<F>(&self, f: F) -> Self::Value
    where
        Self: Sized,
        Self::Value: Clone,
        F: Fn(&Self::Value) -> Self::Value,
    {
        let mut current = self.load_with(AtomicLoadMemoryOrder::Acquire);
        loop {
            let new = f(&current);
            let previous = current.clone();
            if self.compare_exchange_weak_with(&mut current, new, AtomicMemoryOrder::AcqRel, None) {
                return previous;
            }
        }
    }
}

/// Trait for atomic types supporting bitwise read-modify-write operations.
///
/// # Author
///
/// Haixing Hu
pub trait AtomicBitwise: Atomic {
    /// Bitwise AND with `value`, returning the previous value.
    fn fetch_and_with(&self, value: Self::Value, order: AtomicMemoryOrder) -> Self::Value;

    /// Bitwise OR with `value`, returning the previous value.
    fn fetch_or_with(&self, value: Self::Value, order: AtomicMemoryOrder) -> Self::Value;

    /// Bitwise XOR with `value`, returning the previous value.
    fn fetch_xor_with(&self, value: Self::Value, order: AtomicMemoryOrder) -> Self::Value;

    /// Bitwise AND with `SeqCst` ordering.
    #[inline]
    fn fetch_and(&self, value: Self::Value) -> Self::Value {
        self.fetch_and_with(value, AtomicMemoryOrder::SeqCst)
    }

    /// Bitwise OR with `SeqCst` ordering.
    #[inline]
    fn fetch_or(&self, value: Self::Value) -> Self::Value {
        self.fetch_or_with(value, AtomicMemoryOrder::SeqCst)
    }

    /// Bitwise XOR with `SeqCst` ordering.
    #[inline]
    fn fetch_xor(&self, value: Self::Value) -> Self::Value {
        self.fetch_xor_with(value, AtomicMemoryOrder::SeqCst)
    }
}

/// Trait for atomic integer types.
///
/// Arithmetic wraps around on overflow.
///
/// # Author
///
/// Haixing Hu
pub trait AtomicInteger: AtomicBitwise {
    /// Adds `delta`, returning the previous value.
    fn fetch_add_with(&self, delta: Self::Value, order: AtomicMemoryOrder) -> Self::Value;

    /// Subtracts `delta`, returning the previous value.
    fn fetch_sub_with(&self, delta: Self::Value, order: AtomicMemoryOrder) -> Self::Value;

    /// Adds `delta` with `SeqCst` ordering.
    #[inline]
    fn fetch_add(&self, delta: Self::Value) -> Self::Value {
        self.fetch_add_with(delta, AtomicMemoryOrder::SeqCst)
    }

    /// Subtracts `delta` with `SeqCst` ordering.
    #[inline]
    fn fetch_sub(&self, delta: Self::Value) -> Self::Value {
        self.fetch_sub_with(delta, AtomicMemoryOrder::SeqCst)
    }
}

/// A plain value type that has an atomic counterpart in this crate.
///
/// Used by [`AtomicEnum`](crate::atomic::AtomicEnum) to pick the cell that
/// stores the raw value of an enum.
pub trait AtomicPrimitive: Copy + Eq + Send + Sync + 'static {
    /// The atomic cell storing values of this type.
    type Atomic: Atomic<Value = Self> + From<Self> + Send + Sync;
}
