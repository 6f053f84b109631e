/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Boolean
//!
//! Provides an atomic boolean type with explicit memory orders. Booleans
//! support the logical `fetch_and`/`fetch_or`/`fetch_xor` operations but no
//! arithmetic.
//!
//! # Author
//!
//! Haixing Hu

use crate::atomic::AtomicMemoryOrder;

impl_atomic_scalar!(
    AtomicBool,
    std::sync::atomic::AtomicBool,
    bool,
    false,
    "boolean"
);

impl AtomicBool {
    /// Atomically negates the value, returning the old value.
    ///
    /// # Parameters
    ///
    /// * `order` - Memory order of the read-modify-write.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_ordered_atomic::atomic::{AtomicBool, AtomicMemoryOrder};
    ///
    /// let flag = AtomicBool::new(false);
    /// assert!(!flag.fetch_not_with(AtomicMemoryOrder::AcqRel));
    /// assert!(flag.load());
    /// ```
    #[inline]
    pub fn fetch_not_with(&self, order: AtomicMemoryOrder) -> bool {
        self.fetch_xor_with(true, order)
    }

    /// Atomically negates the value with `SeqCst` ordering.
    #[inline]
    pub fn fetch_not(&self) -> bool {
        self.fetch_not_with(AtomicMemoryOrder::SeqCst)
    }
}
