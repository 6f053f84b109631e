/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 8-bit Unsigned Integer
//!
//! Provides an atomic 8-bit unsigned integer type with explicit memory orders.
//!
//! # Author
//!
//! Haixing Hu

impl_atomic_integer!(
    AtomicU8,
    std::sync::atomic::AtomicU8,
    u8,
    "8-bit unsigned integer"
);
