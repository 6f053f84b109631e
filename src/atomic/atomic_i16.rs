/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic 16-bit Signed Integer
//!
//! Provides an atomic 16-bit signed integer type with explicit memory orders.
//!
//! # Author
//!
//! Haixing Hu

impl_atomic_integer!(
    AtomicI16,
    std::sync::atomic::AtomicI16,
    i16,
    "16-bit signed integer"
);
