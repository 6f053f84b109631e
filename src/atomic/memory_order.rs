/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Memory Orders
//!
//! C11-style memory ordering tokens. Every operation of the atomic types in
//! this crate takes one of these explicitly (or defaults to `SeqCst`).
//!
//! Three enums are used so that an invalid order for a given kind of access
//! cannot be expressed: loads never take `Release`/`AcqRel`, stores never
//! take `Acquire`/`AcqRel`, and read-modify-write operations accept all of
//! them.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::Ordering;

use crate::atomic::error::MemoryOrderError;

/// Memory order of a read-modify-write operation.
///
/// Variants are declared from weakest to strongest, so the derived
/// `PartialOrd` is the lattice used to check that a CAS failure order is
/// not stronger than its success order.
///
/// # Author
///
/// Haixing Hu
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum AtomicMemoryOrder {
    /// Only the atomicity of the operation is guaranteed; no ordering
    /// constraints are imposed on other reads or writes.
    Relaxed,

    /// Reads that depend on the loaded value cannot be reordered before the
    /// load. Rust has no consume ordering, so this is executed as
    /// `Acquire`.
    Consume,

    /// No reads or writes in the current thread can be reordered before
    /// this load. Writes released by other threads on the same atomic are
    /// visible.
    Acquire,

    /// No reads or writes in the current thread can be reordered after this
    /// store. Writes of this thread become visible to threads acquiring the
    /// same atomic.
    Release,

    /// Both `Acquire` and `Release`.
    AcqRel,

    /// `AcqRel` plus a single total order of all `SeqCst` operations.
    #[default]
    SeqCst,
}

/// Memory order of a load.
///
/// # Author
///
/// Haixing Hu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AtomicLoadMemoryOrder {
    /// See [`AtomicMemoryOrder::Relaxed`].
    Relaxed,
    /// See [`AtomicMemoryOrder::Consume`].
    Consume,
    /// See [`AtomicMemoryOrder::Acquire`].
    Acquire,
    /// See [`AtomicMemoryOrder::SeqCst`].
    #[default]
    SeqCst,
}

/// Memory order of a store.
///
/// # Author
///
/// Haixing Hu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AtomicStoreMemoryOrder {
    /// See [`AtomicMemoryOrder::Relaxed`].
    Relaxed,
    /// See [`AtomicMemoryOrder::Release`].
    Release,
    /// See [`AtomicMemoryOrder::SeqCst`].
    #[default]
    SeqCst,
}

impl AtomicMemoryOrder {
    /// Returns the strongest load order implied by this order.
    ///
    /// This is the failure order used by compare-exchange operations when
    /// the caller does not give one: the release half of the order is
    /// dropped, since a failed CAS performs no store.
    ///
    /// # Returns
    ///
    /// The load part of this order.
    #[inline]
    pub const fn strongest_load_order(self) -> AtomicLoadMemoryOrder {
        match self {
            Self::Relaxed => AtomicLoadMemoryOrder::Relaxed,
            Self::Consume => AtomicLoadMemoryOrder::Consume,
            Self::Acquire => AtomicLoadMemoryOrder::Acquire,
            Self::Release => AtomicLoadMemoryOrder::Relaxed,
            Self::AcqRel => AtomicLoadMemoryOrder::Acquire,
            Self::SeqCst => AtomicLoadMemoryOrder::SeqCst,
        }
    }

    /// Returns this order strengthened to include acquire semantics.
    #[inline]
    pub const fn with_acquire(self) -> Self {
        match self {
            Self::Relaxed | Self::Consume | Self::Acquire => Self::Acquire,
            Self::Release | Self::AcqRel => Self::AcqRel,
            Self::SeqCst => Self::SeqCst,
        }
    }

    /// Returns this order strengthened to include release semantics.
    #[inline]
    pub const fn with_release(self) -> Self {
        match self {
            Self::Relaxed | Self::Release => Self::Release,
            Self::Consume | Self::Acquire | Self::AcqRel => Self::AcqRel,
            Self::SeqCst => Self::SeqCst,
        }
    }

    /// Returns the canonical lowercase name of this order.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Relaxed => "relaxed",
            Self::Consume => "consume",
            Self::Acquire => "acquire",
            Self::Release => "release",
            Self::AcqRel => "acqrel",
            Self::SeqCst => "seqcst",
        }
    }
}

impl AtomicLoadMemoryOrder {
    /// Returns this order strengthened to at least `Acquire`.
    #[inline]
    pub const fn with_acquire(self) -> Self {
        match self {
            Self::Relaxed | Self::Consume | Self::Acquire => Self::Acquire,
            Self::SeqCst => Self::SeqCst,
        }
    }
}

impl From<AtomicLoadMemoryOrder> for AtomicMemoryOrder {
    #[inline]
    fn from(order: AtomicLoadMemoryOrder) -> Self {
        match order {
            AtomicLoadMemoryOrder::Relaxed => Self::Relaxed,
            AtomicLoadMemoryOrder::Consume => Self::Consume,
            AtomicLoadMemoryOrder::Acquire => Self::Acquire,
            AtomicLoadMemoryOrder::SeqCst => Self::SeqCst,
        }
    }
}

impl From<AtomicStoreMemoryOrder> for AtomicMemoryOrder {
    #[inline]
    fn from(order: AtomicStoreMemoryOrder) -> Self {
        match order {
            AtomicStoreMemoryOrder::Relaxed => Self::Relaxed,
            AtomicStoreMemoryOrder::Release => Self::Release,
            AtomicStoreMemoryOrder::SeqCst => Self::SeqCst,
        }
    }
}

impl TryFrom<AtomicMemoryOrder> for AtomicLoadMemoryOrder {
    type Error = MemoryOrderError;

    fn try_from(order: AtomicMemoryOrder) -> Result<Self, Self::Error> {
        match order {
            AtomicMemoryOrder::Relaxed => Ok(Self::Relaxed),
            AtomicMemoryOrder::Consume => Ok(Self::Consume),
            AtomicMemoryOrder::Acquire => Ok(Self::Acquire),
            AtomicMemoryOrder::SeqCst => Ok(Self::SeqCst),
            other => Err(MemoryOrderError::InvalidLoadOrder(other)),
        }
    }
}

impl TryFrom<AtomicMemoryOrder> for AtomicStoreMemoryOrder {
    type Error = MemoryOrderError;

    fn try_from(order: AtomicMemoryOrder) -> Result<Self, Self::Error> {
        match order {
            AtomicMemoryOrder::Relaxed => Ok(Self::Relaxed),
            AtomicMemoryOrder::Release => Ok(Self::Release),
            AtomicMemoryOrder::SeqCst => Ok(Self::SeqCst),
            other => Err(MemoryOrderError::InvalidStoreOrder(other)),
        }
    }
}

impl From<AtomicMemoryOrder> for Ordering {
    #[inline]
    fn from(order: AtomicMemoryOrder) -> Self {
        match order {
            AtomicMemoryOrder::Relaxed => Ordering::Relaxed,
            AtomicMemoryOrder::Consume | AtomicMemoryOrder::Acquire => Ordering::Acquire,
            AtomicMemoryOrder::Release => Ordering::Release,
            AtomicMemoryOrder::AcqRel => Ordering::AcqRel,
            AtomicMemoryOrder::SeqCst => Ordering::SeqCst,
        }
    }
}

impl From<AtomicLoadMemoryOrder> for Ordering {
    #[inline]
    fn from(order: AtomicLoadMemoryOrder) -> Self {
        AtomicMemoryOrder::from(order).into()
    }
}

impl From<AtomicStoreMemoryOrder> for Ordering {
    #[inline]
    fn from(order: AtomicStoreMemoryOrder) -> Self {
        AtomicMemoryOrder::from(order).into()
    }
}

impl FromStr for AtomicMemoryOrder {
    type Err = MemoryOrderError;

    /// Parses an order name, ignoring ASCII case. Both `acqrel` and
    /// `acq_rel` (likewise `seqcst` and `seq_cst`) are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relaxed" => Ok(Self::Relaxed),
            "consume" => Ok(Self::Consume),
            "acquire" => Ok(Self::Acquire),
            "release" => Ok(Self::Release),
            "acqrel" | "acq_rel" => Ok(Self::AcqRel),
            "seqcst" | "seq_cst" => Ok(Self::SeqCst),
            _ => Err(MemoryOrderError::UnknownOrder(s.to_string())),
        }
    }
}

impl FromStr for AtomicLoadMemoryOrder {
    type Err = MemoryOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<AtomicMemoryOrder>()?.try_into()
    }
}

impl FromStr for AtomicStoreMemoryOrder {
    type Err = MemoryOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<AtomicMemoryOrder>()?.try_into()
    }
}

impl fmt::Display for AtomicMemoryOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for AtomicLoadMemoryOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(AtomicMemoryOrder::from(*self).name())
    }
}

impl fmt::Display for AtomicStoreMemoryOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(AtomicMemoryOrder::from(*self).name())
    }
}

/// Checks that `failure` is not stronger than `success`.
///
/// Only enforced in debug builds.
#[inline]
pub(crate) fn debug_check_cas_orders(success: AtomicMemoryOrder, failure: AtomicLoadMemoryOrder) {
    debug_assert!(
        AtomicMemoryOrder::from(failure) <= success,
        "CAS failure order `{}` is stronger than success order `{}`",
        failure,
        success
    );
}
