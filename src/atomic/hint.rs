/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Fences and Spin Hints
//!
//! Free-standing fences that take the crate's memory order tokens, and the
//! processor/scheduler hints used while spinning.
//!
//! # Author
//!
//! Haixing Hu

use std::sync::atomic::{
    compiler_fence,
    fence,
};
use std::thread;

use crate::atomic::memory_order::AtomicMemoryOrder;

/// Establishes a memory synchronization fence between threads.
///
/// A `Relaxed` fence has no effect.
///
/// # Parameters
///
/// * `order` - The ordering of the fence.
#[inline]
pub fn thread_fence(order: AtomicMemoryOrder) {
    if order != AtomicMemoryOrder::Relaxed {
        fence(order.into());
    }
}

/// Establishes a fence between a thread and a signal handler running on the
/// same thread. Only restricts compiler reordering.
///
/// A `Relaxed` fence has no effect.
///
/// # Parameters
///
/// * `order` - The ordering of the fence.
#[inline]
pub fn signal_fence(order: AtomicMemoryOrder) {
    if order != AtomicMemoryOrder::Relaxed {
        compiler_fence(order.into());
    }
}

/// Signals the processor that the caller is in a spin-wait loop
/// (`pause` on x86, `yield` on ARM).
#[inline]
pub fn hardware_pause() {
    std::hint::spin_loop();
}

/// Gives up the remainder of the current time slice.
#[inline]
pub fn preemption_yield() {
    thread::yield_now();
}
