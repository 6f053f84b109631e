/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 8-bit Signed Integer
//!
//! Provides an atomic 8-bit signed integer type with explicit memory orders.
//!
//! # Author
//!
//! Haixing Hu

impl_atomic_integer!(
    AtomicI8,
    std::sync::atomic::AtomicI8,
    i8,
    "8-bit signed integer"
);
