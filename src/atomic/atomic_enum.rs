/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Enum
//!
//! Stores enum-like values atomically through their raw representation.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::marker::PhantomData;

use crate::atomic::memory_order::{
    AtomicLoadMemoryOrder,
    AtomicMemoryOrder,
    AtomicStoreMemoryOrder,
};
use crate::atomic::traits::{
    Atomic,
    AtomicPrimitive,
};

/// A value with a lossless raw representation that fits an atomic cell.
///
/// `from_raw(value.into_raw())` must return `Some(value)`.
///
/// # Example
///
/// ```rust
/// use prism3_ordered_atomic::atomic::AtomicRepresentable;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum State {
///     Idle = 0,
///     Running = 1,
/// }
///
/// impl AtomicRepresentable for State {
///     type Raw = u8;
///
///     fn into_raw(self) -> u8 {
///         self as u8
///     }
///
///     fn from_raw(raw: u8) -> Option<Self> {
///         match raw {
///             0 => Some(State::Idle),
///             1 => Some(State::Running),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait AtomicRepresentable: Copy {
    /// The raw type stored in the atomic cell.
    type Raw: AtomicPrimitive;

    /// Converts the value into its raw representation.
    fn into_raw(self) -> Self::Raw;

    /// Converts a raw representation back into a value, or `None` if `raw`
    /// does not correspond to any value.
    fn from_raw(raw: Self::Raw) -> Option<Self>;
}

/// Atomic cell for an [`AtomicRepresentable`] value.
///
/// Every operation converts to the raw representation, forwards to the
/// underlying atomic cell with the given memory order, and converts the
/// result back. Only values of `R` are ever written, so every raw value
/// read back is valid.
///
/// # Example
///
/// ```rust,ignore
/// let state = AtomicEnum::new(State::Idle);
/// let mut expected = State::Idle;
/// assert!(state.compare_exchange(&mut expected, State::Running));
/// assert_eq!(state.load(), State::Running);
/// ```
///
/// # Author
///
/// Haixing Hu
pub struct AtomicEnum<R: AtomicRepresentable> {
    inner: <R::Raw as AtomicPrimitive>::Atomic,
    _marker: PhantomData<R>,
}

#[inline]
fn decode<R: AtomicRepresentable>(raw: R::Raw) -> R {
    match R::from_raw(raw) {
        Some(value) => value,
        None => unreachable!("atomic enum cell holds a raw value that no variant maps to"),
    }
}

impl<R: AtomicRepresentable> AtomicEnum<R> {
    /// Creates a new atomic enum.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial value.
    #[inline]
    pub fn new(value: R) -> Self {
        Self {
            inner: <R::Raw as AtomicPrimitive>::Atomic::from(value.into_raw()),
            _marker: PhantomData,
        }
    }

    /// Loads the current value.
    #[inline]
    pub fn load_with(&self, order: AtomicLoadMemoryOrder) -> R {
        decode(self.inner.load_with(order))
    }

    /// Loads the current value with `SeqCst` ordering.
    #[inline]
    pub fn load(&self) -> R {
        self.load_with(AtomicLoadMemoryOrder::SeqCst)
    }

    /// Stores a new value.
    #[inline]
    pub fn store_with(&self, value: R, order: AtomicStoreMemoryOrder) {
        self.inner.store_with(value.into_raw(), order);
    }

    /// Stores a new value with `SeqCst` ordering.
    #[inline]
    pub fn store(&self, value: R) {
        self.store_with(value, AtomicStoreMemoryOrder::SeqCst);
    }

    /// Replaces the current value, returning the previous one.
    #[inline]
    pub fn exchange_with(&self, value: R, order: AtomicMemoryOrder) -> R {
        decode(self.inner.exchange_with(value.into_raw(), order))
    }

    /// Replaces the current value with `SeqCst` ordering.
    #[inline]
    pub fn exchange(&self, value: R) -> R {
        self.exchange_with(value, AtomicMemoryOrder::SeqCst)
    }

    /// Strong compare-and-exchange on the raw representation.
    ///
    /// On failure `*expected` is replaced by the actual value.
    ///
    /// # Parameters
    ///
    /// * `expected` - The expected value; updated on failure.
    /// * `desired` - The value to store on success.
    /// * `order` - Memory order on success.
    /// * `load_order` - Memory order on failure, or `None` for
    ///   `order.strongest_load_order()`.
    #[inline]
    pub fn compare_exchange_with(
        &self,
        expected: &mut R,
        desired: R,
        order: AtomicMemoryOrder,
        load_order: Option<AtomicLoadMemoryOrder>,
    ) -> bool {
        let mut raw = expected.into_raw();
        let exchanged =
            self.inner
                .compare_exchange_with(&mut raw, desired.into_raw(), order, load_order);
        if !exchanged {
            *expected = decode(raw);
        }
        exchanged
    }

    /// Strong compare-and-exchange with `SeqCst` ordering.
    #[inline]
    pub fn compare_exchange(&self, expected: &mut R, desired: R) -> bool {
        self.compare_exchange_with(expected, desired, AtomicMemoryOrder::SeqCst, None)
    }

    /// Weak compare-and-exchange on the raw representation. May fail
    /// spuriously.
    #[inline]
    pub fn compare_exchange_weak_with(
        &self,
        expected: &mut R,
        desired: R,
        order: AtomicMemoryOrder,
        load_order: Option<AtomicLoadMemoryOrder>,
    ) -> bool {
        let mut raw = expected.into_raw();
        let exchanged =
            self.inner
                .compare_exchange_weak_with(&mut raw, desired.into_raw(), order, load_order);
        if !exchanged {
            *expected = decode(raw);
        }
        exchanged
    }

    /// Weak compare-and-exchange with `SeqCst` ordering.
    #[inline]
    pub fn compare_exchange_weak(&self, expected: &mut R, desired: R) -> bool {
        self.compare_exchange_weak_with(expected, desired, AtomicMemoryOrder::SeqCst, None)
    }

    /// Value-returning strong compare-and-exchange.
    ///
    /// # Returns
    ///
    /// The value before the operation; equal to `expected` on success.
    #[inline]
    pub fn compare_and_exchange(&self, expected: R, desired: R) -> R {
        let mut observed = expected;
        self.compare_exchange(&mut observed, desired);
        observed
    }

    /// Value-returning weak compare-and-exchange.
    #[inline]
    pub fn compare_and_exchange_weak(&self, expected: R, desired: R) -> R {
        let mut observed = expected;
        self.compare_exchange_weak(&mut observed, desired);
        observed
    }
}

impl<R: AtomicRepresentable> Atomic for AtomicEnum<R> {
    type Value = R;

    #[inline]
    fn load_with(&self, order: AtomicLoadMemoryOrder) -> R {
        self.load_with(order)
    }

    #[inline]
    fn store_with(&self, value: R, order: AtomicStoreMemoryOrder) {
        self.store_with(value, order);
    }

    #[inline]
    fn exchange_with(&self, value: R, order: AtomicMemoryOrder) -> R {
        self.exchange_with(value, order)
    }

    #[inline]
    fn compare_exchange_with(
        &self,
        expected: &mut R,
        desired: R,
        order: AtomicMemoryOrder,
        load_order: Option<AtomicLoadMemoryOrder>,
    ) -> bool {
        self.compare_exchange_with(expected, desired, order, load_order)
    }

    #[inline]
    fn compare_exchange_weak_with(
        &self,
        expected: &mut R,
        desired: R,
        order: AtomicMemoryOrder,
        load_order: Option<AtomicLoadMemoryOrder>,
    ) -> bool {
        self.compare_exchange_weak_with(expected, desired, order, load_order)
    }
}

impl<R: AtomicRepresentable + Default> Default for AtomicEnum<R> {
    #[inline]
    fn default() -> Self {
        Self::new(R::default())
    }
}

impl<R: AtomicRepresentable> From<R> for AtomicEnum<R> {
    #[inline]
    fn from(value: R) -> Self {
        Self::new(value)
    }
}

impl<R: AtomicRepresentable + fmt::Debug> fmt::Debug for AtomicEnum<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicEnum")
            .field("value", &self.load())
            .finish()
    }
}
