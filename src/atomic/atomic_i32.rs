/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 32-bit Signed Integer
//!
//! Provides an atomic 32-bit signed integer type with explicit memory orders.
//!
//! # Author
//!
//! Haixing Hu

impl_atomic_integer!(
    AtomicI32,
    std::sync::atomic::AtomicI32,
    i32,
    "32-bit signed integer"
);
