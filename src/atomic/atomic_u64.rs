/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 64-bit Unsigned Integer
//!
//! Provides an atomic 64-bit unsigned integer type with explicit memory orders.
//!
//! # Author
//!
//! Haixing Hu

impl_atomic_integer!(
    AtomicU64,
    std::sync::atomic::AtomicU64,
    u64,
    "64-bit unsigned integer"
);
