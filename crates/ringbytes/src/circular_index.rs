//! Positional bookkeeping for a circular queue that stores no payload.
//!
//! A [`CircularIndex`] of capacity `n` hands out slot indices in `0..n` for a
//! queue kept in caller-owned storage. One slot always stays unused so that
//! `first == next` can only mean "empty"; the usable length is therefore
//! `n - 1`.
//!
//! ```rust
//! use ringbytes::CircularIndex;
//!
//! let mut idx = CircularIndex::new(4)?;
//! assert!(idx.add_last());
//! assert!(idx.add_last());
//! assert!(idx.add_first());
//! assert_eq!((idx.first(), idx.last()), (Some(3), Some(1)));
//! assert!(idx.is_full());
//! # Ok::<(), ringbytes::RingBufferError>(())
//! ```
use crate::{
    error::{Result, RingBufferError},
    wrap::{wrap_add, wrap_sub},
};

/// Configuration for [`CircularIndex`].
///
/// # Default
///
/// All options default to `false`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CircularIndexOptions {
    /// Whether `first` and `next` snap back to slot 0 whenever the last
    /// element is removed.
    ///
    /// Callers that only care about relative order get small, predictable
    /// indices; callers that need position continuity across an empty queue
    /// should leave this off.
    ///
    /// # Default
    ///
    /// `false`
    pub reset_on_zero: bool,
}

/// First/last/length tracker for a circular queue of fixed capacity.
///
/// All operations are O(1) and never allocate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircularIndex {
    capacity: usize,
    first: usize,
    /// Slot the next `add_last` writes to.
    next: usize,
    len: usize,
    options: CircularIndexOptions,
}

impl CircularIndex {
    /// Creates an empty tracker anchored at slot 0.
    ///
    /// # Errors
    ///
    /// [`RingBufferError::InvalidArgument`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::build(capacity, 0, 0, CircularIndexOptions::default())
    }

    /// Creates a tracker that already holds `len` elements starting at
    /// `first`.
    ///
    /// # Errors
    ///
    /// [`RingBufferError::InvalidArgument`] if `capacity` is zero, `first` is
    /// not a slot in `0..capacity`, or `len` exceeds `capacity - 1`.
    pub fn with_position(capacity: usize, first: usize, len: usize) -> Result<Self> {
        Self::build(capacity, first, len, CircularIndexOptions::default())
    }

    /// Creates an empty tracker with the given options.
    ///
    /// # Errors
    ///
    /// [`RingBufferError::InvalidArgument`] if `capacity` is zero.
    pub fn with_options(capacity: usize, options: CircularIndexOptions) -> Result<Self> {
        Self::build(capacity, 0, 0, options)
    }

    fn build(
        capacity: usize,
        first: usize,
        len: usize,
        options: CircularIndexOptions,
    ) -> Result<Self> {
        if capacity == 0 {
            return Err(RingBufferError::InvalidArgument("capacity must be positive"));
        }
        if first >= capacity {
            return Err(RingBufferError::InvalidArgument("first out of range"));
        }
        if len > capacity - 1 {
            return Err(RingBufferError::InvalidArgument("size exceeds maximum size"));
        }
        Ok(Self {
            capacity,
            first,
            next: (first + len) % capacity,
            len,
            options,
        })
    }

    /// Number of slots, including the one that always stays free.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Largest number of elements the tracker can hold: `capacity - 1`.
    #[must_use]
    pub fn max_len(&self) -> usize {
        self.capacity - 1
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether emptying the queue snaps the cursors back to slot 0.
    #[must_use]
    pub fn reset_on_zero(&self) -> bool {
        self.options.reset_on_zero
    }

    /// `true` when no slot is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first == self.next
    }

    /// `true` when `len() == max_len()`.
    #[must_use]
    pub fn is_full(&self) -> bool {
        wrap_add(self.next, 1, self.capacity) == self.first
    }

    /// Occupies the slot after the current tail.
    ///
    /// Returns `false`, leaving the tracker untouched, if it is full.
    pub fn add_last(&mut self) -> bool {
        if self.is_full() {
            return false;
        }
        self.next = wrap_add(self.next, 1, self.capacity);
        self.len += 1;
        true
    }

    /// Occupies the slot before the current head.
    ///
    /// On an empty tracker the new element lands on the anchor slot reported
    /// by [`next_first`](Self::next_first), the same slot `add_last` would use.
    /// Returns `false`, leaving the tracker untouched, if it is full.
    pub fn add_first(&mut self) -> bool {
        if self.is_full() {
            return false;
        }
        if self.is_empty() {
            self.next = wrap_add(self.next, 1, self.capacity);
        } else {
            self.first = wrap_sub(self.first, 1, self.capacity);
        }
        self.len += 1;
        true
    }

    /// Releases the head slot. Returns `false` if the tracker is empty.
    pub fn remove_first(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.first = wrap_add(self.first, 1, self.capacity);
        self.len -= 1;
        self.reset_if_drained();
        true
    }

    /// Releases the tail slot. Returns `false` if the tracker is empty.
    pub fn remove_last(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.next = wrap_sub(self.next, 1, self.capacity);
        self.len -= 1;
        self.reset_if_drained();
        true
    }

    /// Slot of the head element, or `None` when empty.
    #[must_use]
    pub fn first(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.first)
    }

    /// Slot of the tail element, or `None` when empty.
    #[must_use]
    pub fn last(&self) -> Option<usize> {
        (!self.is_empty()).then(|| wrap_sub(self.next, 1, self.capacity))
    }

    /// Slot the next [`add_first`](Self::add_first) would occupy, or `None`
    /// when full.
    #[must_use]
    pub fn next_first(&self) -> Option<usize> {
        if self.is_full() {
            None
        } else if self.is_empty() {
            Some(self.first)
        } else {
            Some(wrap_sub(self.first, 1, self.capacity))
        }
    }

    /// Slot the next [`add_last`](Self::add_last) would occupy, or `None`
    /// when full.
    #[must_use]
    pub fn next_last(&self) -> Option<usize> {
        if self.is_full() {
            None
        } else if self.is_empty() {
            Some(self.first)
        } else {
            Some(self.next)
        }
    }

    /// Drops every element and moves both cursors to slot 0.
    pub fn reset(&mut self) {
        self.len = 0;
        self.first = 0;
        self.next = 0;
    }

    fn reset_if_drained(&mut self) {
        if self.len == 0 && self.options.reset_on_zero {
            self.reset();
        }
        debug_assert_eq!(self.next, (self.first + self.len) % self.capacity);
    }
}
