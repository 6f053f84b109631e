/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Pointer-Sized Unsigned Integer
//!
//! The word-sized atomic cell. Besides being a counter type in its own
//! right, it is the storage of [`AtomicRef`](crate::atomic::AtomicRef),
//! which keeps encoded `Arc` addresses in it.
//!
//! # Author
//!
//! Haixing Hu

impl_atomic_integer!(
    AtomicUsize,
    std::sync::atomic::AtomicUsize,
    usize,
    "pointer-sized unsigned integer"
);
