/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # prism3-ordered-atomic
//!
//! Typed atomic operations with explicit C11 memory orders, and a lock-free
//! atomic reference-counted slot.
//!
//! ## Design Goals
//!
//! - **Explicit Ordering**: Every operation names its memory order; the
//!   shorthand forms default to `SeqCst`
//! - **Exact Ownership**: `AtomicRef` never leaks or double-releases a
//!   reference, including on failed compare-exchange
//! - **Safety**: Loads from `AtomicRef` retain by default; the borrow-only
//!   read is an explicit `unsafe` fast path
//! - **Performance**: Zero-cost wrappers over `std::sync::atomic`
//!
//! ## Features
//!
//! - Memory orders: `AtomicMemoryOrder`, `AtomicLoadMemoryOrder`,
//!   `AtomicStoreMemoryOrder`
//! - Boolean atomic type: `AtomicBool`
//! - Integer atomic types: `AtomicI8`, `AtomicU8`, `AtomicI16`, `AtomicU16`,
//!   `AtomicI32`, `AtomicU32`, `AtomicI64`, `AtomicU64`, `AtomicIsize`,
//!   `AtomicUsize`
//! - Enum atomic type: `AtomicEnum<R>`
//! - Reference atomic type: `AtomicRef<T>`
//! - Fences and spin hints: `thread_fence`, `signal_fence`,
//!   `hardware_pause`, `preemption_yield`, `Backoff`
//!
//! ## Example
//!
//! ```rust
//! use prism3_ordered_atomic::{AtomicMemoryOrder, AtomicRef};
//! use std::sync::Arc;
//!
//! let head = AtomicRef::new(None);
//! let mut expected = None;
//! assert!(head.compare_exchange_with(
//!     &mut expected,
//!     Some(Arc::new("first")),
//!     AtomicMemoryOrder::AcqRel,
//!     None,
//! ));
//! assert_eq!(*head.load().unwrap(), "first");
//! ```
//!
//! ## Author
//!
//! Haixing Hu

#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod atomic;

// Re-export all atomic types and traits
pub use atomic::{
    Atomic,
    AtomicBitwise,
    AtomicBool,
    AtomicEnum,
    AtomicI16,
    AtomicI32,
    AtomicI64,
    AtomicI8,
    AtomicInteger,
    AtomicIsize,
    AtomicLoadMemoryOrder,
    AtomicMemoryOrder,
    AtomicPrimitive,
    AtomicRef,
    AtomicRepresentable,
    AtomicStoreMemoryOrder,
    AtomicU16,
    AtomicU32,
    AtomicU64,
    AtomicU8,
    AtomicUsize,
    Backoff,
    MemoryOrderError,
    Unretained,
};
pub use atomic::{
    hardware_pause,
    preemption_yield,
    signal_fence,
    thread_fence,
};
