/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Backoff
//!
//! Exponential backoff for spin loops: pause the processor for a growing
//! number of iterations, then start yielding to the scheduler.
//!
//! # Author
//!
//! Haixing Hu

use std::cell::Cell;

use crate::atomic::hint::{
    hardware_pause,
    preemption_yield,
};

const DEFAULT_SPIN_LIMIT: u32 = 6;
const DEFAULT_YIELD_LIMIT: u32 = 10;
const MAX_SPIN_LIMIT: u32 = 16;

/// Exponential backoff for spin loops.
///
/// Each call to [`snooze`](Backoff::snooze) waits roughly twice as long as
/// the previous one. Up to `spin_limit` steps the wait is a burst of
/// [`hardware_pause`] hints; after that the thread yields. Once
/// `yield_limit` is reached the step stops growing and
/// [`is_completed`](Backoff::is_completed) returns `true`, telling the
/// caller that blocking would be a better strategy than spinning.
///
/// # Example
///
/// ```rust
/// use prism3_ordered_atomic::atomic::{AtomicBool, Backoff};
///
/// let ready = AtomicBool::new(true);
/// let backoff = Backoff::new();
/// while !ready.load() {
///     backoff.snooze();
/// }
/// ```
#[derive(Debug)]
pub struct Backoff {
    step: Cell<u32>,
    spin_limit: u32,
    yield_limit: u32,
}

impl Backoff {
    /// Creates a backoff with the default limits.
    #[inline]
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_SPIN_LIMIT, DEFAULT_YIELD_LIMIT)
    }

    /// Creates a backoff with custom limits.
    ///
    /// # Parameters
    ///
    /// * `spin_limit` - Number of steps that spin before yielding starts.
    ///   The burst at step `n` is `2^n` pauses.
    /// * `yield_limit` - Step at which the backoff is completed. Clamped to
    ///   be at least `spin_limit`.
    #[inline]
    pub fn with_limits(spin_limit: u32, yield_limit: u32) -> Self {
        let spin_limit = spin_limit.min(MAX_SPIN_LIMIT);
        Self {
            step: Cell::new(0),
            spin_limit,
            yield_limit: yield_limit.max(spin_limit),
        }
    }

    /// Resets the backoff to its initial state.
    #[inline]
    pub fn reset(&self) {
        self.step.set(0);
    }

    /// Backs off in a lock-free loop that lost a race. Never yields.
    #[inline]
    pub fn spin(&self) {
        let step = self.step.get().min(self.spin_limit);
        for _ in 0..(1u32 << step) {
            hardware_pause();
        }
        if step < self.spin_limit {
            self.step.set(step + 1);
        }
    }

    /// Backs off in a loop that is waiting for another thread to make
    /// progress.
    pub fn snooze(&self) {
        let step = self.step.get();
        if step <= self.spin_limit {
            for _ in 0..(1u32 << step) {
                hardware_pause();
            }
        } else {
            if step == self.spin_limit + 1 {
                log::trace!("backoff exhausted {} spin steps, yielding", self.spin_limit);
            }
            preemption_yield();
        }
        if step <= self.yield_limit {
            self.step.set(step + 1);
        }
    }

    /// Returns `true` once the backoff has reached its yield limit.
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.step.get() > self.yield_limit
    }
}

impl Default for Backoff {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
