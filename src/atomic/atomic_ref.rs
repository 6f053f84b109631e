/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Reference
//!
//! A lock-free slot holding an optional `Arc<T>`, with load, store, exchange
//! and compare-exchange under explicit memory orders.
//!
//! # Encoding
//!
//! The slot is a single [`AtomicUsize`] word holding either the address
//! produced by `Arc::into_raw` or the sentinel `EMPTY`. `EMPTY` is odd, so it
//! is never an `Arc` data address, and it is distinct from null. A published
//! word owns exactly one reference.
//!
//! # Retaining Loads
//!
//! A load cannot simply read the address and increment the reference count:
//! between the two steps a writer may replace the value and release the last
//! reference. A load therefore records a debt on the address it read, checks
//! that the word still holds that address, and only then retains the
//! object. Writers pay the debts on every address they unpublish before
//! releasing it. Loads never write to the word and never wait for another
//! thread; see the `debt` module.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::marker::PhantomData;
use std::mem::ManuallyDrop;
use std::ops::Deref;
use std::sync::Arc;

use crate::atomic::atomic_usize::AtomicUsize;
use crate::atomic::backoff::Backoff;
use crate::atomic::debt::{
    self,
    Debt,
};
use crate::atomic::hint::thread_fence;
use crate::atomic::memory_order::{
    debug_check_cas_orders,
    AtomicLoadMemoryOrder,
    AtomicMemoryOrder,
    AtomicStoreMemoryOrder,
};
use crate::atomic::traits::Atomic;

/// Word of an empty slot.
const EMPTY: usize = usize::MAX;

/// Order for operations that publish a word: writers acquire the object
/// they unpublish and release the one they publish.
#[inline]
const fn publishing(order: AtomicMemoryOrder) -> AtomicMemoryOrder {
    order.with_acquire().with_release()
}

/// Word of `value` without touching its reference count.
#[inline]
fn encode<T>(value: Option<&Arc<T>>) -> usize {
    match value {
        Some(arc) => Arc::as_ptr(arc) as usize,
        None => EMPTY,
    }
}

/// Converts an owned value into a publishable word owning its reference.
#[inline]
fn encode_retained<T>(value: Option<Arc<T>>) -> usize {
    match value {
        Some(arc) => {
            let ptr = Arc::into_raw(arc);
            debug_assert_eq!(ptr as usize & 1, 0, "Arc data is not word aligned");
            ptr as usize
        }
        None => EMPTY,
    }
}

/// Converts a word back into the handle it owns.
///
/// # Safety
///
/// `word` must have been produced by [`encode_retained`] and must own its
/// reference. Nothing may read the word through a slot afterwards.
#[inline]
unsafe fn decode_owned<T>(word: usize) -> Option<Arc<T>> {
    if word == EMPTY {
        return None;
    }
    // SAFETY: the word owns exactly this reference.
    Some(unsafe { Arc::from_raw(word as *const T) })
}

/// Converts an unpublished word back into the handle it owns, after paying
/// the debts of readers that may still be retaining it.
///
/// # Safety
///
/// `word` must have been produced by [`encode_retained`], must own its
/// reference, and must no longer be reachable through the slot.
unsafe fn take_word<T>(word: usize) -> Option<Arc<T>> {
    if word != EMPTY {
        let ptr = word as *const T;
        thread_fence(AtomicMemoryOrder::SeqCst);
        debt::pay_all(
            word,
            // SAFETY: the word's own reference keeps the object alive.
            || unsafe { Arc::increment_strong_count(ptr) },
            // SAFETY: undoes the increment just above.
            || unsafe { Arc::decrement_strong_count(ptr) },
        );
    }
    // SAFETY: forwarded from the caller.
    unsafe { decode_owned(word) }
}

/// Releases the reference an unpublished word owns.
///
/// # Safety
///
/// Same as [`take_word`].
#[inline]
unsafe fn release_word<T>(word: usize) {
    // SAFETY: forwarded from the caller.
    drop(unsafe { take_word::<T>(word) });
}

/// Atomic reference type.
///
/// Holds zero or one `Arc<T>` and atomically replaces it. Every operation
/// transfers ownership exactly: the value passed in is owned by the slot
/// once the operation takes effect, values handed out are owned by the
/// caller, and a failed compare-exchange gives back nothing it did not take.
///
/// # Memory Ordering
///
/// Every operation takes a C11 memory order (`*_with` methods) or uses
/// `SeqCst`. The orders are forwarded to the underlying word, strengthened
/// only as far as the reference hand-off requires: reads that hand out a
/// reference acquire, and writes acquire and release.
///
/// Compare-exchange compares object identity (`Arc::ptr_eq`), never the
/// object's value.
///
/// # Example
///
/// ```rust
/// use prism3_ordered_atomic::atomic::AtomicRef;
/// use std::sync::Arc;
///
/// #[derive(Debug)]
/// struct Config {
///     timeout: u64,
/// }
///
/// let atomic_config = AtomicRef::new(Some(Arc::new(Config { timeout: 1000 })));
///
/// let old_config = atomic_config.exchange(Some(Arc::new(Config { timeout: 2000 })));
/// assert_eq!(old_config.unwrap().timeout, 1000);
/// assert_eq!(atomic_config.load().unwrap().timeout, 2000);
/// ```
///
/// # Author
///
/// Haixing Hu
pub struct AtomicRef<T> {
    storage: AtomicUsize,
    _marker: PhantomData<Option<Arc<T>>>,
}

impl<T> AtomicRef<T> {
    /// Creates a new atomic reference.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial value, or `None` for an empty slot.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_ordered_atomic::atomic::AtomicRef;
    /// use std::sync::Arc;
    ///
    /// let atomic = AtomicRef::new(Some(Arc::new(42)));
    /// assert_eq!(*atomic.load().unwrap(), 42);
    /// ```
    #[inline]
    pub fn new(value: Option<Arc<T>>) -> Self {
        Self {
            storage: AtomicUsize::new(encode_retained(value)),
            _marker: PhantomData,
        }
    }

    /// Creates an empty atomic reference.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            storage: AtomicUsize::new(EMPTY),
            _marker: PhantomData,
        }
    }

    /// Retains the object at `word` if the slot still publishes it.
    ///
    /// Returns the retained handle (`None` for an empty word), or the word
    /// now in the slot when it moved on before the debt was recorded.
    fn try_retain(
        &self,
        word: usize,
        order: AtomicLoadMemoryOrder,
    ) -> Result<Option<Arc<T>>, usize> {
        if word == EMPTY {
            return Ok(None);
        }
        let ptr = word as *const T;
        let debt = Debt::claim(word);
        thread_fence(AtomicMemoryOrder::SeqCst);
        let current = self.storage.load_with(order.with_acquire());
        if current != word {
            if debt.settle() {
                return Err(current);
            }
            // The writer that unpublished `word` retained it for us.
            // SAFETY: a paid debt transfers one reference to the reader.
            return Ok(Some(unsafe { Arc::from_raw(ptr) }));
        }
        // SAFETY: `word` was published after the debt was recorded, so any
        // writer unpublishing it pays the debt before releasing it.
        unsafe { Arc::increment_strong_count(ptr) };
        if !debt.settle() {
            // SAFETY: the debt was paid too; one of the two is surplus.
            unsafe { Arc::decrement_strong_count(ptr) };
        }
        // SAFETY: the increment above belongs to this handle.
        Ok(Some(unsafe { Arc::from_raw(ptr) }))
    }

    /// Loads the current value.
    ///
    /// The returned handle is owned by the caller and stays valid however
    /// the slot is mutated afterwards. Never waits for another thread: a
    /// retry only happens after a writer replaced the value.
    ///
    /// # Parameters
    ///
    /// * `order` - Memory order of the load.
    ///
    /// # Returns
    ///
    /// The current value, or `None` if the slot is empty.
    pub fn load_with(&self, order: AtomicLoadMemoryOrder) -> Option<Arc<T>> {
        let backoff = Backoff::new();
        let mut word = self.storage.load_with(order);
        loop {
            match self.try_retain(word, order) {
                Ok(value) => return value,
                Err(current) => {
                    backoff.spin();
                    word = current;
                }
            }
        }
    }

    /// Loads the current value with `SeqCst` ordering.
    #[inline]
    pub fn load(&self) -> Option<Arc<T>> {
        self.load_with(AtomicLoadMemoryOrder::SeqCst)
    }

    /// Reads the current value without retaining it.
    ///
    /// This is a single atomic load: the returned guard borrows the
    /// reference owned by the slot instead of taking one of its own.
    ///
    /// # Safety
    ///
    /// The guard is only valid while the slot keeps holding that object.
    /// The caller must ensure no concurrent `store`, `exchange`,
    /// `compare_exchange` or `clear` replaces the value before the guard
    /// is dropped, unless the object is kept alive by another handle.
    /// Use [`load_with`](AtomicRef::load_with) when this cannot be ensured.
    ///
    /// # Parameters
    ///
    /// * `order` - Memory order of the load.
    #[inline]
    pub unsafe fn load_unretained(&self, order: AtomicLoadMemoryOrder) -> Option<Unretained<'_, T>> {
        let addr = self.storage.load_with(order);
        if addr == EMPTY {
            return None;
        }
        // SAFETY: the slot owns a reference to `addr`, and the caller
        // guarantees it is not released while the guard lives. The guard
        // never drops this handle.
        let value = unsafe { Arc::from_raw(addr as *const T) };
        Some(Unretained {
            value: ManuallyDrop::new(value),
            _slot: PhantomData,
        })
    }

    /// Stores a new value, releasing the previous one.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value, or `None` to empty the slot.
    /// * `order` - Memory order of the store.
    #[inline]
    pub fn store_with(&self, value: Option<Arc<T>>, order: AtomicStoreMemoryOrder) {
        let word = encode_retained(value);
        let previous = self.storage.exchange_with(word, publishing(order.into()));
        // SAFETY: `previous` was unpublished by the exchange.
        unsafe { release_word::<T>(previous) };
    }

    /// Stores a new value with `SeqCst` ordering.
    #[inline]
    pub fn store(&self, value: Option<Arc<T>>) {
        self.store_with(value, AtomicStoreMemoryOrder::SeqCst);
    }

    /// Replaces the current value, handing the previous one to the caller.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value, or `None` to empty the slot.
    /// * `order` - Memory order of the read-modify-write.
    ///
    /// # Returns
    ///
    /// The previous value, owned by the caller.
    #[inline]
    pub fn exchange_with(&self, value: Option<Arc<T>>, order: AtomicMemoryOrder) -> Option<Arc<T>> {
        let word = encode_retained(value);
        let previous = self.storage.exchange_with(word, publishing(order));
        // SAFETY: `previous` was unpublished by the exchange.
        unsafe { take_word(previous) }
    }

    /// Replaces the current value with `SeqCst` ordering.
    #[inline]
    pub fn exchange(&self, value: Option<Arc<T>>) -> Option<Arc<T>> {
        self.exchange_with(value, AtomicMemoryOrder::SeqCst)
    }

    /// Empties the slot, returning the value it held.
    #[inline]
    pub fn take(&self) -> Option<Arc<T>> {
        self.exchange(None)
    }

    /// Empties the slot, releasing the value it held.
    ///
    /// Dropping the slot does the same, so clearing first never releases
    /// anything twice.
    ///
    /// # Parameters
    ///
    /// * `order` - Memory order of the store.
    #[inline]
    pub fn clear_with(&self, order: AtomicStoreMemoryOrder) {
        self.store_with(None, order);
    }

    /// Empties the slot with `SeqCst` ordering.
    #[inline]
    pub fn clear(&self) {
        self.clear_with(AtomicStoreMemoryOrder::SeqCst);
    }

    /// Returns `true` if the slot holds no value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.load() == EMPTY
    }

    /// Strong compare-and-exchange.
    ///
    /// If the slot holds the same object as `*expected` (or both are
    /// `None`), stores `desired` and releases the previous reference.
    /// Otherwise releases `desired`, replaces `*expected` with a handle to
    /// the value actually held, and returns `false`. Never fails
    /// spuriously.
    ///
    /// Loads do not write to the slot, so a retry only happens after
    /// another writer replaced the value; readers alone cannot hold a
    /// writer back.
    ///
    /// # Parameters
    ///
    /// * `expected` - The expected value; updated on failure.
    /// * `desired` - The value to store on success.
    /// * `order` - Memory order on success.
    /// * `load_order` - Memory order on failure, or `None` for
    ///   `order.strongest_load_order()`. Must not be stronger than `order`.
    ///
    /// # Returns
    ///
    /// `true` if the value was replaced.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_ordered_atomic::atomic::{AtomicMemoryOrder, AtomicRef};
    /// use std::sync::Arc;
    ///
    /// let atomic = AtomicRef::new(Some(Arc::new(10)));
    /// let mut expected = None;
    /// assert!(!atomic.compare_exchange_with(
    ///     &mut expected,
    ///     Some(Arc::new(20)),
    ///     AtomicMemoryOrder::AcqRel,
    ///     None,
    /// ));
    /// assert_eq!(*expected.clone().unwrap(), 10);
    /// assert!(atomic.compare_exchange(&mut expected, Some(Arc::new(20))));
    /// assert_eq!(*atomic.load().unwrap(), 20);
    /// ```
    pub fn compare_exchange_with(
        &self,
        expected: &mut Option<Arc<T>>,
        desired: Option<Arc<T>>,
        order: AtomicMemoryOrder,
        load_order: Option<AtomicLoadMemoryOrder>,
    ) -> bool {
        let failure = load_order.unwrap_or_else(|| order.strongest_load_order());
        debug_check_cas_orders(order, failure);
        let success = publishing(order);
        let expected_word = encode(expected.as_ref());
        // The word CAS cannot retain conditionally, so `desired` is
        // retained up front and released again on failure.
        let desired_word = encode_retained(desired);
        let backoff = Backoff::new();
        let mut current = self.storage.load_with(failure);
        loop {
            if current == expected_word {
                if self.storage.compare_exchange_with(
                    &mut current,
                    desired_word,
                    success,
                    Some(failure),
                ) {
                    // SAFETY: `expected_word` was unpublished by the CAS.
                    unsafe { release_word::<T>(expected_word) };
                    return true;
                }
                backoff.spin();
                continue;
            }
            match self.try_retain(current, failure) {
                Ok(actual) => {
                    // SAFETY: `desired_word` was never published.
                    drop(unsafe { decode_owned::<T>(desired_word) });
                    *expected = actual;
                    return false;
                }
                Err(observed) => {
                    backoff.spin();
                    current = observed;
                }
            }
        }
    }

    /// Strong compare-and-exchange with `SeqCst` ordering.
    #[inline]
    pub fn compare_exchange(&self, expected: &mut Option<Arc<T>>, desired: Option<Arc<T>>) -> bool {
        self.compare_exchange_with(expected, desired, AtomicMemoryOrder::SeqCst, None)
    }

    /// Weak compare-and-exchange.
    ///
    /// Same as [`compare_exchange_with`](AtomicRef::compare_exchange_with)
    /// but makes a single attempt, so it may fail even though the slot
    /// holds the expected object. After such a failure `*expected` is left
    /// unchanged. Should be used in a loop.
    pub fn compare_exchange_weak_with(
        &self,
        expected: &mut Option<Arc<T>>,
        desired: Option<Arc<T>>,
        order: AtomicMemoryOrder,
        load_order: Option<AtomicLoadMemoryOrder>,
    ) -> bool {
        let failure = load_order.unwrap_or_else(|| order.strongest_load_order());
        debug_check_cas_orders(order, failure);
        let success = publishing(order);
        let expected_word = encode(expected.as_ref());
        let desired_word = encode_retained(desired);
        let mut current = self.storage.load_with(failure);
        if current == expected_word {
            if self.storage.compare_exchange_weak_with(
                &mut current,
                desired_word,
                success,
                Some(failure),
            ) {
                // SAFETY: `expected_word` was unpublished by the CAS.
                unsafe { release_word::<T>(expected_word) };
                return true;
            }
        }
        // SAFETY: `desired_word` was never published.
        drop(unsafe { decode_owned::<T>(desired_word) });
        let backoff = Backoff::new();
        loop {
            if current == expected_word {
                return false;
            }
            match self.try_retain(current, failure) {
                Ok(actual) => {
                    *expected = actual;
                    return false;
                }
                Err(observed) => {
                    backoff.spin();
                    current = observed;
                }
            }
        }
    }

    /// Weak compare-and-exchange with `SeqCst` ordering.
    #[inline]
    pub fn compare_exchange_weak(
        &self,
        expected: &mut Option<Arc<T>>,
        desired: Option<Arc<T>>,
    ) -> bool {
        self.compare_exchange_weak_with(expected, desired, AtomicMemoryOrder::SeqCst, None)
    }

    /// Value-returning strong compare-and-exchange.
    ///
    /// # Returns
    ///
    /// `expected` itself if the exchange took place, otherwise a handle to
    /// the value actually held. Compare with `Arc::ptr_eq` to tell the two
    /// apart.
    #[inline]
    pub fn compare_and_exchange_with(
        &self,
        expected: Option<Arc<T>>,
        desired: Option<Arc<T>>,
        order: AtomicMemoryOrder,
        load_order: Option<AtomicLoadMemoryOrder>,
    ) -> Option<Arc<T>> {
        let mut observed = expected;
        self.compare_exchange_with(&mut observed, desired, order, load_order);
        observed
    }

    /// Value-returning strong compare-and-exchange with `SeqCst` ordering.
    #[inline]
    pub fn compare_and_exchange(
        &self,
        expected: Option<Arc<T>>,
        desired: Option<Arc<T>>,
    ) -> Option<Arc<T>> {
        self.compare_and_exchange_with(expected, desired, AtomicMemoryOrder::SeqCst, None)
    }

    /// Value-returning weak compare-and-exchange.
    #[inline]
    pub fn compare_and_exchange_weak_with(
        &self,
        expected: Option<Arc<T>>,
        desired: Option<Arc<T>>,
        order: AtomicMemoryOrder,
        load_order: Option<AtomicLoadMemoryOrder>,
    ) -> Option<Arc<T>> {
        let mut observed = expected;
        self.compare_exchange_weak_with(&mut observed, desired, order, load_order);
        observed
    }

    /// Value-returning weak compare-and-exchange with `SeqCst` ordering.
    #[inline]
    pub fn compare_and_exchange_weak(
        &self,
        expected: Option<Arc<T>>,
        desired: Option<Arc<T>>,
    ) -> Option<Arc<T>> {
        self.compare_and_exchange_weak_with(expected, desired, AtomicMemoryOrder::SeqCst, None)
    }

    /// Consumes the slot, returning the value it held.
    #[inline]
    pub fn into_inner(self) -> Option<Arc<T>> {
        self.take()
    }
}

/// Borrowed view of the value in an [`AtomicRef`], returned by
/// [`AtomicRef::load_unretained`].
///
/// Dereferences to the slot's own `Arc<T>`. Cloning through it retains the
/// object, producing a handle that outlives the guard.
pub struct Unretained<'a, T> {
    value: ManuallyDrop<Arc<T>>,
    _slot: PhantomData<&'a AtomicRef<T>>,
}

impl<T> Deref for Unretained<'_, T> {
    type Target = Arc<T>;

    #[inline]
    fn deref(&self) -> &Arc<T> {
        &self.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Unretained<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self.value, f)
    }
}

impl<T> Atomic for AtomicRef<T> {
    type Value = Option<Arc<T>>;

    #[inline]
    fn load_with(&self, order: AtomicLoadMemoryOrder) -> Option<Arc<T>> {
        self.load_with(order)
    }

    #[inline]
    fn store_with(&self, value: Option<Arc<T>>, order: AtomicStoreMemoryOrder) {
        self.store_with(value, order);
    }

    #[inline]
    fn exchange_with(&self, value: Option<Arc<T>>, order: AtomicMemoryOrder) -> Option<Arc<T>> {
        self.exchange_with(value, order)
    }

    #[inline]
    fn compare_exchange_with(
        &self,
        expected: &mut Option<Arc<T>>,
        desired: Option<Arc<T>>,
        order: AtomicMemoryOrder,
        load_order: Option<AtomicLoadMemoryOrder>,
    ) -> bool {
        self.compare_exchange_with(expected, desired, order, load_order)
    }

    #[inline]
    fn compare_exchange_weak_with(
        &self,
        expected: &mut Option<Arc<T>>,
        desired: Option<Arc<T>>,
        order: AtomicMemoryOrder,
        load_order: Option<AtomicLoadMemoryOrder>,
    ) -> bool {
        self.compare_exchange_weak_with(expected, desired, order, load_order)
    }
}

impl<T> Default for AtomicRef<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Arc<T>> for AtomicRef<T> {
    #[inline]
    fn from(value: Arc<T>) -> Self {
        Self::new(Some(value))
    }
}

impl<T> From<Option<Arc<T>>> for AtomicRef<T> {
    #[inline]
    fn from(value: Option<Arc<T>>) -> Self {
        Self::new(value)
    }
}

impl<T> Clone for AtomicRef<T> {
    /// Creates an independent slot initially holding the same object.
    fn clone(&self) -> Self {
        Self::new(self.load())
    }
}

impl<T> Drop for AtomicRef<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug> fmt::Debug for AtomicRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicRef")
            .field("value", &self.load())
            .finish()
    }
}
