/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Pointer-Sized Signed Integer
//!
//! Provides an atomic pointer-sized signed integer type with explicit memory orders.
//!
//! # Author
//!
//! Haixing Hu

impl_atomic_integer!(
    AtomicIsize,
    std::sync::atomic::AtomicIsize,
    isize,
    "pointer-sized signed integer"
);
