/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 32-bit Unsigned Integer
//!
//! Provides an atomic 32-bit unsigned integer type with explicit memory orders.
//!
//! # Author
//!
//! Haixing Hu

impl_atomic_integer!(
    AtomicU32,
    std::sync::atomic::AtomicU32,
    u32,
    "32-bit unsigned integer"
);
