/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Errors
//!
//! Atomic operations themselves never fail. The only fallible surface is
//! turning external input (configuration strings, widened orders) into a
//! memory order of the right kind.
//!
//! # Author
//!
//! Haixing Hu

use thiserror::Error;

use crate::atomic::memory_order::AtomicMemoryOrder;

/// Error produced when a memory order cannot be parsed or narrowed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoryOrderError {
    /// The string does not name any memory order.
    #[error("unknown memory order `{0}`")]
    UnknownOrder(String),

    /// The order has release semantics and cannot be used for a load.
    #[error("memory order `{0}` is not valid for a load")]
    InvalidLoadOrder(AtomicMemoryOrder),

    /// The order has acquire semantics and cannot be used for a store.
    #[error("memory order `{0}` is not valid for a store")]
    InvalidStoreOrder(AtomicMemoryOrder),
}
