/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Scalar Macros
//!
//! Provides the macros that generate the boolean and integer atomic types
//! with consistent implementations. Every generated type is a transparent
//! wrapper around its `std::sync::atomic` counterpart whose operations take
//! the crate's memory order tokens.
//!
//! # Author
//!
//! Haixing Hu

/// Macro to generate an atomic scalar type.
///
/// Generates the struct, load/store/exchange, the compare-exchange family,
/// the bitwise read-modify-write operations and the trait implementations
/// shared by booleans and integers.
///
/// # Parameters
///
/// * `$name` - The name of the atomic type (e.g., `AtomicI32`)
/// * `$inner_type` - The underlying std atomic type (e.g.,
///   `std::sync::atomic::AtomicI32`)
/// * `$value_type` - The value type (e.g., `i32`)
/// * `$default` - The value used by `Default`
/// * `$doc_type` - The type description for documentation (e.g., "32-bit
///   signed integer")
macro_rules! impl_atomic_scalar {
    ($name:ident, $inner_type:ty, $value_type:ty, $default:expr, $doc_type:expr) => {
        #[doc = concat!("Atomic ", $doc_type, ".")]
        ///
        /// Every operation has an explicit-order form (`*_with`) taking a
        /// C11 memory order token, and a shorthand without the suffix that
        /// uses `SeqCst`.
        ///
        /// Compare-exchange operations take the expected value by mutable
        /// reference: on failure it is overwritten with the actual value.
        /// When no failure order is given, the strongest load order implied
        /// by the success order is used.
        ///
        /// # Example
        ///
        /// ```rust
        #[doc = concat!("use prism3_ordered_atomic::atomic::{", stringify!($name), ", AtomicMemoryOrder};")]
        ///
        #[doc = concat!("let atomic = ", stringify!($name), "::default();")]
        /// let mut expected = atomic.load();
        /// loop {
        ///     let desired = expected;
        ///     if atomic.compare_exchange_weak_with(
        ///         &mut expected,
        ///         desired,
        ///         AtomicMemoryOrder::AcqRel,
        ///         None,
        ///     ) {
        ///         break;
        ///     }
        /// }
        /// ```
        ///
        /// # Author
        ///
        /// Haixing Hu
        #[repr(transparent)]
        pub struct $name {
            inner: $inner_type,
        }

        impl $name {
            /// Creates a new atomic value.
            ///
            /// # Parameters
            ///
            /// * `value` - The initial value.
            #[inline]
            pub const fn new(value: $value_type) -> Self {
                Self {
                    inner: <$inner_type>::new(value),
                }
            }

            /// Loads the current value.
            ///
            /// # Parameters
            ///
            /// * `order` - Memory order of the load.
            ///
            /// # Returns
            ///
            /// The current value.
            #[inline]
            pub fn load_with(
                &self,
                order: $crate::atomic::AtomicLoadMemoryOrder,
            ) -> $value_type {
                self.inner.load(order.into())
            }

            /// Loads the current value with `SeqCst` ordering.
            #[inline]
            pub fn load(&self) -> $value_type {
                self.load_with($crate::atomic::AtomicLoadMemoryOrder::SeqCst)
            }

            /// Stores a new value.
            ///
            /// # Parameters
            ///
            /// * `value` - The new value to store.
            /// * `order` - Memory order of the store.
            #[inline]
            pub fn store_with(
                &self,
                value: $value_type,
                order: $crate::atomic::AtomicStoreMemoryOrder,
            ) {
                self.inner.store(value, order.into());
            }

            /// Stores a new value with `SeqCst` ordering.
            #[inline]
            pub fn store(&self, value: $value_type) {
                self.store_with(value, $crate::atomic::AtomicStoreMemoryOrder::SeqCst);
            }

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
            #[inline]
            pub fn exchange_with(
                &self,
                value: $value_type,
                order: $crate::atomic::AtomicMemoryOrder,
            ) -> $value_type {
                self.inner.swap(value, order.into())
            }

            /// Replaces the current value with `SeqCst` ordering.
            #[inline]
            pub fn exchange(&self, value: $value_type) -> $value_type {
                self.exchange_with(value, $crate::atomic::AtomicMemoryOrder::SeqCst)
            }

            /// Strong compare-and-exchange.
            ///
            /// If the current value equals `*expected`, stores `desired`
            /// and returns `true`. Otherwise writes the actual value into
            /// `*expected` and returns `false`.
            ///
            /// # Parameters
            ///
            /// * `expected` - The expected value; updated on failure.
            /// * `desired` - The value to store on success.
            /// * `order` - Memory order on success.
            /// * `load_order` - Memory order on failure, or `None` for
            ///   `order.strongest_load_order()`.
            ///
            /// # Returns
            ///
            /// `true` if the value was replaced.
            #[inline]
            pub fn compare_exchange_with(
                &self,
                expected: &mut $value_type,
                desired: $value_type,
                order: $crate::atomic::AtomicMemoryOrder,
                load_order: Option<$crate::atomic::AtomicLoadMemoryOrder>,
            ) -> bool {
                let failure = load_order.unwrap_or_else(|| order.strongest_load_order());
                $crate::atomic::memory_order::debug_check_cas_orders(order, failure);
                match self
                    .inner
                    .compare_exchange(*expected, desired, order.into(), failure.into())
                {
                    Ok(_) => true,
                    Err(actual) => {
                        *expected = actual;
                        false
                    }
                }
            }

            /// Strong compare-and-exchange with `SeqCst` ordering.
            #[inline]
            pub fn compare_exchange(
                &self,
                expected: &mut $value_type,
                desired: $value_type,
            ) -> bool {
                self.compare_exchange_with(
                    expected,
                    desired,
                    $crate::atomic::AtomicMemoryOrder::SeqCst,
                    None,
                )
            }

            /// Weak compare-and-exchange.
            ///
            /// May fail spuriously even when the values are equal; should
            /// be used in a loop.
            #[inline]
            pub fn compare_exchange_weak_with(
                &self,
                expected: &mut $value_type,
                desired: $value_type,
                order: $crate::atomic::AtomicMemoryOrder,
                load_order: Option<$crate::atomic::AtomicLoadMemoryOrder>,
            ) -> bool {
                let failure = load_order.unwrap_or_else(|| order.strongest_load_order());
                $crate::atomic::memory_order::debug_check_cas_orders(order, failure);
                match self
                    .inner
                    .compare_exchange_weak(*expected, desired, order.into(), failure.into())
                {
                    Ok(_) => true,
                    Err(actual) => {
                        *expected = actual;
                        false
                    }
                }
            }

            /// Weak compare-and-exchange with `SeqCst` ordering.
            #[inline]
            pub fn compare_exchange_weak(
                &self,
                expected: &mut $value_type,
                desired: $value_type,
            ) -> bool {
                self.compare_exchange_weak_with(
                    expected,
                    desired,
                    $crate::atomic::AtomicMemoryOrder::SeqCst,
                    None,
                )
            }

            /// Value-returning strong compare-and-exchange.
            ///
            /// # Returns
            ///
            /// The value before the operation. If it equals `expected`,
            /// the exchange took place.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_ordered_atomic::atomic::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::default();")]
            /// let current = atomic.load();
            /// assert_eq!(atomic.compare_and_exchange(current, current), current);
            /// ```
            #[inline]
            pub fn compare_and_exchange_with(
                &self,
                expected: $value_type,
                desired: $value_type,
                order: $crate::atomic::AtomicMemoryOrder,
                load_order: Option<$crate::atomic::AtomicLoadMemoryOrder>,
            ) -> $value_type {
                let mut observed = expected;
                self.compare_exchange_with(&mut observed, desired, order, load_order);
                observed
            }

            /// Value-returning strong compare-and-exchange with `SeqCst`
            /// ordering.
            #[inline]
            pub fn compare_and_exchange(
                &self,
                expected: $value_type,
                desired: $value_type,
            ) -> $value_type {
                self.compare_and_exchange_with(
                    expected,
                    desired,
                    $crate::atomic::AtomicMemoryOrder::SeqCst,
                    None,
                )
            }

            /// Value-returning weak compare-and-exchange.
            #[inline]
            pub fn compare_and_exchange_weak_with(
                &self,
                expected: $value_type,
                desired: $value_type,
                order: $crate::atomic::AtomicMemoryOrder,
                load_order: Option<$crate::atomic::AtomicLoadMemoryOrder>,
            ) -> $value_type {
                let mut observed = expected;
                self.compare_exchange_weak_with(&mut observed, desired, order, load_order);
                observed
            }

            /// Value-returning weak compare-and-exchange with `SeqCst`
            /// ordering.
            #[inline]
            pub fn compare_and_exchange_weak(
                &self,
                expected: $value_type,
                desired: $value_type,
            ) -> $value_type {
                self.compare_and_exchange_weak_with(
                    expected,
                    desired,
                    $crate::atomic::AtomicMemoryOrder::SeqCst,
                    None,
                )
            }

            /// Bitwise AND, returning the previous value.
            #[inline]
            pub fn fetch_and_with(
                &self,
                value: $value_type,
                order: $crate::atomic::AtomicMemoryOrder,
            ) -> $value_type {
                self.inner.fetch_and(value, order.into())
            }

            /// Bitwise AND with `SeqCst` ordering.
            #[inline]
            pub fn fetch_and(&self, value: $value_type) -> $value_type {
                self.fetch_and_with(value, $crate::atomic::AtomicMemoryOrder::SeqCst)
            }

            /// Bitwise OR, returning the previous value.
            #[inline]
            pub fn fetch_or_with(
                &self,
                value: $value_type,
                order: $crate::atomic::AtomicMemoryOrder,
            ) -> $value_type {
                self.inner.fetch_or(value, order.into())
            }

            /// Bitwise OR with `SeqCst` ordering.
            #[inline]
            pub fn fetch_or(&self, value: $value_type) -> $value_type {
                self.fetch_or_with(value, $crate::atomic::AtomicMemoryOrder::SeqCst)
            }

            /// Bitwise XOR, returning the previous value.
            #[inline]
            pub fn fetch_xor_with(
                &self,
                value: $value_type,
                order: $crate::atomic::AtomicMemoryOrder,
            ) -> $value_type {
                self.inner.fetch_xor(value, order.into())
            }

            /// Bitwise XOR with `SeqCst` ordering.
            #[inline]
            pub fn fetch_xor(&self, value: $value_type) -> $value_type {
                self.fetch_xor_with(value, $crate::atomic::AtomicMemoryOrder::SeqCst)
            }

            /// Gets a reference to the underlying standard library atomic
            /// type.
            #[inline]
            pub fn inner(&self) -> &$inner_type {
                &self.inner
            }
        }

        // Trait implementations forward to the inherent methods so that
        // both direct calls and generic code (fn foo<T: Atomic>(a: &T))
        // share one implementation.

        impl $crate::atomic::traits::Atomic for $name {
            type Value = $value_type;

            #[inline]
            fn load_with(&self, order: $crate::atomic::AtomicLoadMemoryOrder) -> $value_type {
                self.load_with(order)
            }

            #[inline]
            fn store_with(&self, value: $value_type, order: $crate::atomic::AtomicStoreMemoryOrder) {
                self.store_with(value, order);
            }

            #[inline]
            fn exchange_with(
                &self,
                value: $value_type,
                order: $crate::atomic::AtomicMemoryOrder,
            ) -> $value_type {
                self.exchange_with(value, order)
            }

            #[inline]
            fn compare_exchange_with(
                &self,
                expected: &mut $value_type,
                desired: $value_type,
                order: $crate::atomic::AtomicMemoryOrder,
                load_order: Option<$crate::atomic::AtomicLoadMemoryOrder>,
            ) -> bool {
                self.compare_exchange_with(expected, desired, order, load_order)
            }

            #[inline]
            fn compare_exchange_weak_with(
                &self,
                expected: &mut $value_type,
                desired: $value_type,
                order: $crate::atomic::AtomicMemoryOrder,
                load_order: Option<$crate::atomic::AtomicLoadMemoryOrder>,
            ) -> bool {
                self.compare_exchange_weak_with(expected, desired, order, load_order)
            }
        }

        impl $crate::atomic::traits::AtomicBitwise for $name {
            #[inline]
            fn fetch_and_with(
                &self,
                value: $value_type,
                order: $crate::atomic::AtomicMemoryOrder,
            ) -> $value_type {
                self.fetch_and_with(value, order)
            }

            #[inline]
            fn fetch_or_with(
                &self,
                value: $value_type,
                order: $crate::atomic::AtomicMemoryOrder,
            ) -> $value_type {
                self.fetch_or_with(value, order)
            }

            #[inline]
            fn fetch_xor_with(
                &self,
                value: $value_type,
                order: $crate::atomic::AtomicMemoryOrder,
            ) -> $value_type {
                self.fetch_xor_with(value, order)
            }
        }

        impl $crate::atomic::traits::AtomicPrimitive for $value_type {
            type Atomic = $name;
        }

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self::new($default)
            }
        }

        impl From<$value_type> for $name {
            #[inline]
            fn from(value: $value_type) -> Self {
                Self::new(value)
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("value", &self.load())
                    .finish()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.load())
            }
        }
    };
}

/// Macro to generate atomic integer types.
///
/// Generates everything [`impl_atomic_scalar`] does, plus the wrapping
/// arithmetic operations and [`AtomicInteger`](crate::atomic::AtomicInteger).
///
/// # Parameters
///
/// * `$name` - The name of the atomic type (e.g., `AtomicI32`)
/// * `$inner_type` - The underlying std atomic type
/// * `$value_type` - The value type (e.g., `i32`)
/// * `$doc_type` - The type description for documentation
macro_rules! impl_atomic_integer {
    ($name:ident, $inner_type:ty, $value_type:ty, $doc_type:expr) => {
        impl_atomic_scalar!($name, $inner_type, $value_type, 0, $doc_type);

        impl $name {
            /// Adds `delta`, wrapping on overflow, and returns the previous
            /// value.
            ///
            /// # Parameters
            ///
            /// * `delta` - The value to add.
            /// * `order` - Memory order of the read-modify-write.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use prism3_ordered_atomic::atomic::{", stringify!($name), ", AtomicMemoryOrder};")]
            ///
            #[doc = concat!("let counter = ", stringify!($name), "::new(1);")]
            /// assert_eq!(counter.fetch_add_with(2, AtomicMemoryOrder::Relaxed), 1);
            /// assert_eq!(counter.load(), 3);
            /// ```
            #[inline]
            pub fn fetch_add_with(
                &self,
                delta: $value_type,
                order: $crate::atomic::AtomicMemoryOrder,
            ) -> $value_type {
                self.inner.fetch_add(delta, order.into())
            }

            /// Adds `delta` with `SeqCst` ordering.
            #[inline]
            pub fn fetch_add(&self, delta: $value_type) -> $value_type {
                self.fetch_add_with(delta, $crate::atomic::AtomicMemoryOrder::SeqCst)
            }

            /// Subtracts `delta`, wrapping on overflow, and returns the
            /// previous value.
            #[inline]
            pub fn fetch_sub_with(
                &self,
                delta: $value_type,
                order: $crate::atomic::AtomicMemoryOrder,
            ) -> $value_type {
                self.inner.fetch_sub(delta, order.into())
            }

            /// Subtracts `delta` with `SeqCst` ordering.
            #[inline]
            pub fn fetch_sub(&self, delta: $value_type) -> $value_type {
                self.fetch_sub_with(delta, $crate::atomic::AtomicMemoryOrder::SeqCst)
            }
        }

        impl $crate::atomic::traits::AtomicInteger for $name {
            #[inline]
            fn fetch_add_with(
                &self,
                delta: $value_type,
                order: $crate::atomic::AtomicMemoryOrder,
            ) -> $value_type {
                self.fetch_add_with(delta, order)
            }

            #[inline]
            fn fetch_sub_with(
                &self,
                delta: $value_type,
                order: $crate::atomic::AtomicMemoryOrder,
            ) -> $value_type {
                self.fetch_sub_with(delta, order)
            }
        }
    };
}
