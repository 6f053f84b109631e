/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 64-bit Signed Integer
//!
//! Provides an atomic 64-bit signed integer type with explicit memory orders.
//!
//! # Author
//!
//! Haixing Hu

impl_atomic_integer!(
    AtomicI64,
    std::sync::atomic::AtomicI64,
    i64,
    "64-bit signed integer"
);
