/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Reference Debts
//!
//! Process-wide registry of in-flight reads of [`AtomicRef`] slots.
//!
//! A reader that wants to retain the object at some address first records
//! that address in a free debt slot (the debt), then checks that the
//! [`AtomicRef`] still holds it, and only then increments the reference
//! count. A writer that removes an address from an [`AtomicRef`] pays every
//! debt recorded for that address before releasing the slot's own reference:
//! it retains the object once on behalf of the reader and marks the debt
//! [`PAID`]. Either the reader's check sees the writer's change, or the
//! writer's scan sees the reader's debt; both sides separate their write
//! from their read with a `SeqCst` fence.
//!
//! Debt slots live in fixed-size nodes linked into a grow-only list. A
//! reader that finds every slot taken pushes a new node. Nodes are never
//! freed, so the list is bounded by the peak number of concurrent reads.
//!
//! [`AtomicRef`]: crate::atomic::AtomicRef
//!
//! # Author
//!
//! Haixing Hu

use std::iter;
use std::ptr;
use std::sync::atomic::{
    AtomicPtr,
    Ordering,
};

use crate::atomic::atomic_usize::AtomicUsize;
use crate::atomic::memory_order::{
    AtomicLoadMemoryOrder,
    AtomicMemoryOrder,
    AtomicStoreMemoryOrder,
};

/// Value of a free debt slot.
pub(crate) const NO_DEBT: usize = 0;

/// Value of a debt that a writer has paid. Never an `Arc` data address,
/// which is always word aligned.
pub(crate) const PAID: usize = 1;

const SLOTS_PER_NODE: usize = 8;

struct DebtNode {
    slots: [AtomicUsize; SLOTS_PER_NODE],
    next: *const DebtNode,
}

/// Head of the debt list. Nodes are leaked on purpose: slots are handed out
/// as `&'static` references.
static HEAD: AtomicPtr<DebtNode> = AtomicPtr::new(ptr::null_mut());

fn nodes() -> impl Iterator<Item = &'static DebtNode> {
    let mut current: *const DebtNode = HEAD.load(Ordering::Acquire);
    iter::from_fn(move || {
        // SAFETY: every pointer in the list comes from `Box::into_raw` and
        // is never freed; `next` is immutable once the node is published.
        let node = unsafe { current.as_ref() }?;
        current = node.next;
        Some(node)
    })
}

fn slots() -> impl Iterator<Item = &'static AtomicUsize> {
    nodes().flat_map(|node| node.slots.iter())
}

/// Publishes a new node whose first slot already holds `addr`.
fn push(addr: usize) -> &'static AtomicUsize {
    let node = Box::into_raw(Box::new(DebtNode {
        slots: std::array::from_fn(|i| AtomicUsize::new(if i == 0 { addr } else { NO_DEBT })),
        next: ptr::null(),
    }));
    let mut head = HEAD.load(Ordering::Acquire);
    loop {
        // SAFETY: the node is not shared until the CAS below succeeds.
        unsafe { (*node).next = head };
        match HEAD.compare_exchange_weak(head, node, Ordering::AcqRel, Ordering::Acquire) {
            Ok(_) => break,
            Err(current) => head = current,
        }
    }
    log::trace!("debt list grown by {} slots", SLOTS_PER_NODE);
    // SAFETY: the node is now owned by the list, which never frees it.
    unsafe { &(*node).slots[0] }
}

/// An outstanding debt on one address, owned by the reader that recorded it.
///
/// Must be settled with [`Debt::settle`]; dropping it leaves the slot taken.
#[must_use]
pub(crate) struct Debt {
    slot: &'static AtomicUsize,
    addr: usize,
}

impl Debt {
    /// Records a debt on `addr` in a free slot, growing the list if every
    /// slot is taken.
    ///
    /// The caller must issue a `SeqCst` fence before checking that `addr`
    /// is still published.
    pub(crate) fn claim(addr: usize) -> Debt {
        debug_assert!(addr != NO_DEBT && addr != PAID);
        for slot in slots() {
            if slot.load_with(AtomicLoadMemoryOrder::Relaxed) != NO_DEBT {
                continue;
            }
            let mut expected = NO_DEBT;
            if slot.compare_exchange_with(&mut expected, addr, AtomicMemoryOrder::Relaxed, None) {
                return Debt { slot, addr };
            }
        }
        Debt {
            slot: push(addr),
            addr,
        }
    }

    /// Frees the slot.
    ///
    /// # Returns
    ///
    /// `true` if the debt was still outstanding, `false` if a writer paid
    /// it, in which case the caller owns one extra reference to `addr`.
    pub(crate) fn settle(self) -> bool {
        let mut expected = self.addr;
        if self
            .slot
            .compare_exchange_with(&mut expected, NO_DEBT, AtomicMemoryOrder::AcqRel, None)
        {
            return true;
        }
        debug_assert_eq!(expected, PAID);
        self.slot.store_with(NO_DEBT, AtomicStoreMemoryOrder::Release);
        false
    }
}

/// Pays every outstanding debt on `addr`.
///
/// `retain` is called once per debt found, before the debt is marked paid.
/// `release` undoes a `retain` when the reader settled the debt first.
///
/// The caller must own a reference to `addr` for the whole call, and must
/// have issued a `SeqCst` fence after unpublishing it.
pub(crate) fn pay_all(addr: usize, retain: impl Fn(), release: impl Fn()) {
    for slot in slots() {
        if slot.load_with(AtomicLoadMemoryOrder::Relaxed) != addr {
            continue;
        }
        retain();
        let mut expected = addr;
        if !slot.compare_exchange_with(&mut expected, PAID, AtomicMemoryOrder::AcqRel, None) {
            release();
        }
    }
}

/// Number of debts currently recorded on `addr`.
#[cfg(test)]
pub(crate) fn outstanding(addr: usize) -> usize {
    slots()
        .filter(|slot| slot.load_with(AtomicLoadMemoryOrder::SeqCst) == addr)
        .count()
}
