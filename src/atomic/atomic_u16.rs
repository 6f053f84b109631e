/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 16-bit Unsigned Integer
//!
//! Provides an atomic 16-bit unsigned integer type with explicit memory orders.
//!
//! # Author
//!
//! Haixing Hu

impl_atomic_integer!(
    AtomicU16,
    std::sync::atomic::AtomicU16,
    u16,
    "16-bit unsigned integer"
);
