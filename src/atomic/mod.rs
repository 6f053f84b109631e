/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Types
//!
//! Typed atomics whose every operation takes an explicit C11 memory order.
//! These types wrap `std::sync::atomic` types; the reference slot
//! [`AtomicRef`] is built on the word-sized [`AtomicUsize`].
//!
//! # Features
//!
//! - Memory order tokens split by access kind, with `SeqCst` defaults
//! - Boolean and integer atomics with exchange, compare-exchange and
//!   bitwise/arithmetic read-modify-write operations
//! - Atomic enums through their raw representation
//! - A lock-free atomic `Arc<T>` slot with exact ownership transfer
//!
//! # Author
//!
//! Haixing Hu

#[macro_use]
mod atomic_macro;

mod atomic_bool;
mod atomic_enum;
mod atomic_i16;
mod atomic_i32;
mod atomic_i64;
mod atomic_i8;
mod atomic_isize;
mod atomic_ref;
mod atomic_u16;
mod atomic_u32;
mod atomic_u64;
mod atomic_u8;
mod atomic_usize;
mod backoff;
mod debt;
mod error;
mod hint;
pub(crate) mod memory_order;
mod traits;

pub use atomic_bool::AtomicBool;
pub use atomic_enum::{
    AtomicEnum,
    AtomicRepresentable,
};
pub use atomic_i16::AtomicI16;
pub use atomic_i32::AtomicI32;
pub use atomic_i64::AtomicI64;
pub use atomic_i8::AtomicI8;
pub use atomic_isize::AtomicIsize;
pub use atomic_ref::{
    AtomicRef,
    Unretained,
};
pub use atomic_u16::AtomicU16;
pub use atomic_u32::AtomicU32;
pub use atomic_u64::AtomicU64;
pub use atomic_u8::AtomicU8;
pub use atomic_usize::AtomicUsize;
pub use backoff::Backoff;
pub use error::MemoryOrderError;
pub use hint::{
    hardware_pause,
    preemption_yield,
    signal_fence,
    thread_fence,
};
pub use memory_order::{
    AtomicLoadMemoryOrder,
    AtomicMemoryOrder,
    AtomicStoreMemoryOrder,
};
pub use traits::{
    Atomic,
    AtomicBitwise,
    AtomicInteger,
    AtomicPrimitive,
};
