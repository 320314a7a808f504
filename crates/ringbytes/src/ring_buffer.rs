//! Fixed-capacity circular byte buffer.
//!
//! The buffer owns a boxed slice one byte longer than its capacity. That
//! spare slot means the read and write cursors only coincide when the buffer
//! is empty or exactly full, and the occupied length (`len`) decides which.
//! Cursors advance modulo the storage length and the allocation never moves
//! or grows.
//!
//! Bulk operations copy at most two contiguous runs: the part of the logical
//! range before the physical end of the storage, and the wrapped remainder
//! starting at index 0.
use alloc::{boxed::Box, string::String, vec, vec::Vec};
use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    iter::FusedIterator,
    slice,
};

use bstr::BStr;

use crate::{
    error::{Result, RingBufferError, check_range},
    hex,
    wrap::wrap_add,
};

/// A fixed-capacity FIFO of bytes backed by a circular array.
///
/// Equality and hashing look only at the logical byte sequence: two buffers
/// with different capacities or cursor positions compare equal when they
/// hold the same bytes in the same order.
///
/// `RingBuffer` does no internal locking. Share it across threads only
/// behind external mutual exclusion.
///
/// # Examples
///
/// ```rust
/// use ringbytes::RingBuffer;
///
/// let mut buf = RingBuffer::with_capacity(11)?;
/// buf.push_slice(b"HELLO WORLD")?;
/// assert_eq!(buf.free(), 0);
/// assert_eq!(buf.find(b"WORLD"), Some(6));
/// assert_eq!(buf.pop()?, b'H');
/// assert_eq!(buf.to_string(), "ELLO WORLD");
/// # Ok::<(), ringbytes::RingBufferError>(())
/// ```
#[derive(Clone)]
pub struct RingBuffer {
    storage: Box<[u8]>,
    read_pos: usize,
    write_pos: usize,
    len: usize,
}

impl RingBuffer {
    /// Creates an empty buffer that holds up to `capacity` bytes.
    ///
    /// # Errors
    ///
    /// [`RingBufferError::InvalidArgument`] if `capacity` is zero or the
    /// storage for it cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(RingBufferError::InvalidArgument("capacity must be positive"));
        }
        let storage_len = capacity
            .checked_add(1)
            .ok_or(RingBufferError::InvalidArgument("capacity too large"))?;
        let mut storage = reserve(storage_len)?;
        storage.resize(storage_len, 0);
        Ok(Self {
            storage: storage.into_boxed_slice(),
            read_pos: 0,
            write_pos: 0,
            len: 0,
        })
    }

    /// Creates a full buffer holding a copy of `bytes`.
    ///
    /// The capacity equals `bytes.len()`, or 1 for an empty slice.
    #[must_use]
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self::filled(bytes.len().max(1), bytes, &[])
    }

    /// Creates a buffer of the given capacity holding a copy of `bytes`.
    ///
    /// # Errors
    ///
    /// [`RingBufferError::InvalidArgument`] if `capacity` is zero or smaller
    /// than `bytes.len()`.
    pub fn from_slice_with_capacity(bytes: &[u8], capacity: usize) -> Result<Self> {
        Self::from_range_with_capacity(bytes, 0, bytes.len(), capacity)
    }

    /// Creates a full buffer holding a copy of `bytes[offset..offset + length]`.
    ///
    /// # Errors
    ///
    /// [`RingBufferError::InvalidArgument`] if the range does not lie inside
    /// `bytes`.
    pub fn from_range(bytes: &[u8], offset: usize, length: usize) -> Result<Self> {
        Self::from_range_with_capacity(bytes, offset, length, length.max(1))
    }

    /// Creates a buffer of the given capacity holding a copy of
    /// `bytes[offset..offset + length]`.
    ///
    /// # Errors
    ///
    /// [`RingBufferError::InvalidArgument`] if the range does not lie inside
    /// `bytes`, or if `capacity` is zero or smaller than `length`.
    pub fn from_range_with_capacity(
        bytes: &[u8],
        offset: usize,
        length: usize,
        capacity: usize,
    ) -> Result<Self> {
        check_range(bytes.len(), offset, length)?;
        if capacity < length {
            return Err(RingBufferError::InvalidArgument("capacity smaller than length"));
        }
        let mut buf = Self::with_capacity(capacity)?;
        buf.push_range(bytes, offset, length)?;
        Ok(buf)
    }

    /// Creates a full buffer from `text`, one byte per character.
    ///
    /// Characters up to U+00FF map to their code point; anything above is
    /// stored as `b'?'`.
    #[must_use]
    pub fn from_latin1(text: &str) -> Self {
        Self::from_slice(&encode_latin1(text))
    }

    /// Like [`from_latin1`](Self::from_latin1) with an explicit capacity.
    ///
    /// # Errors
    ///
    /// [`RingBufferError::InvalidArgument`] if `capacity` is zero or smaller
    /// than the number of characters in `text`.
    pub fn from_latin1_with_capacity(text: &str, capacity: usize) -> Result<Self> {
        Self::from_slice_with_capacity(&encode_latin1(text), capacity)
    }

    /// Builds a buffer whose first bytes are `head` followed by `tail`.
    fn filled(capacity: usize, head: &[u8], tail: &[u8]) -> Self {
        let len = head.len() + tail.len();
        debug_assert!(capacity >= 1 && len <= capacity);
        let mut storage = vec![0; capacity + 1].into_boxed_slice();
        storage[..head.len()].copy_from_slice(head);
        storage[head.len()..len].copy_from_slice(tail);
        Self {
            storage,
            read_pos: 0,
            write_pos: len,
            len,
        }
    }

    /// Maximum number of bytes the buffer can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len() - 1
    }

    /// Number of bytes currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of bytes that can still be pushed.
    #[must_use]
    pub fn free(&self) -> usize {
        self.capacity() - self.len
    }

    /// Whether at least `n` more bytes fit.
    #[must_use]
    pub fn is_free(&self, n: usize) -> bool {
        self.free() >= n
    }

    /// `true` when no bytes are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `true` when `len() == capacity()`.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Panics if the cursors disagree with the stored length.
    #[cfg(any(test, feature = "fuzzing"))]
    pub fn assert_consistent(&self) {
        let storage_len = self.storage.len();
        assert!(self.read_pos < storage_len && self.write_pos < storage_len);
        assert!(self.len <= self.capacity());
        assert_eq!(wrap_add(self.read_pos, self.len, storage_len), self.write_pos);
    }

    /// Forgets all stored bytes. The allocation is kept.
    pub fn clear(&mut self) {
        self.read_pos = 0;
        self.write_pos = 0;
        self.len = 0;
    }

    /// Appends one byte.
    ///
    /// # Errors
    ///
    /// [`RingBufferError::BufferFull`] if the buffer is full.
    pub fn push(&mut self, byte: u8) -> Result<()> {
        if self.is_full() {
            return Err(RingBufferError::BufferFull);
        }
        self.storage[self.write_pos] = byte;
        self.write_pos = wrap_add(self.write_pos, 1, self.storage.len());
        self.len += 1;
        Ok(())
    }

    /// Appends all of `bytes`, or nothing.
    ///
    /// # Errors
    ///
    /// [`RingBufferError::BufferTooSmall`] if `bytes.len() > free()`.
    pub fn push_slice(&mut self, bytes: &[u8]) -> Result<()> {
        self.push_range(bytes, 0, bytes.len())
    }

    /// Appends `bytes[offset..offset + length]`, or nothing.
    ///
    /// An empty range is a no-op that never fails for lack of room.
    ///
    /// # Errors
    ///
    /// - [`RingBufferError::InvalidArgument`] if the range does not lie
    ///   inside `bytes`.
    /// - [`RingBufferError::BufferTooSmall`] if `length > free()`.
    pub fn push_range(&mut self, bytes: &[u8], offset: usize, length: usize) -> Result<()> {
        check_range(bytes.len(), offset, length)?;
        if length == 0 {
            return Ok(());
        }
        if length > self.free() {
            return Err(RingBufferError::BufferTooSmall {
                requested: length,
                available: self.free(),
            });
        }

        let src = &bytes[offset..offset + length];
        let storage_len = self.storage.len();
        let head = length.min(storage_len - self.write_pos);
        self.storage[self.write_pos..self.write_pos + head].copy_from_slice(&src[..head]);
        self.storage[..length - head].copy_from_slice(&src[head..]);

        self.write_pos = wrap_add(self.write_pos, length, storage_len);
        self.len += length;
        Ok(())
    }

    /// Removes and returns the oldest byte.
    ///
    /// # Errors
    ///
    /// [`RingBufferError::BufferEmpty`] if the buffer is empty.
    pub fn pop(&mut self) -> Result<u8> {
        if self.is_empty() {
            return Err(RingBufferError::BufferEmpty);
        }
        let byte = self.storage[self.read_pos];
        self.read_pos = wrap_add(self.read_pos, 1, self.storage.len());
        self.len -= 1;
        Ok(byte)
    }

    /// Removes the oldest `count` bytes and returns them.
    ///
    /// Use [`discard`](Self::discard) to drop bytes without copying them out.
    ///
    /// # Errors
    ///
    /// - [`RingBufferError::InvalidArgument`] if `count > capacity()`.
    /// - [`RingBufferError::BufferTooSmall`] if `count > len()`.
    pub fn take(&mut self, count: usize) -> Result<Vec<u8>> {
        self.check_count(count)?;
        let out = self.collect_range(0, count, count);
        self.advance_read(count);
        Ok(out)
    }

    /// Drops the oldest `count` bytes without copying them.
    ///
    /// # Errors
    ///
    /// - [`RingBufferError::InvalidArgument`] if `count > capacity()`.
    /// - [`RingBufferError::BufferTooSmall`] if `count > len()`.
    pub fn discard(&mut self, count: usize) -> Result<()> {
        self.check_count(count)?;
        self.advance_read(count);
        Ok(())
    }

    fn check_count(&self, count: usize) -> Result<()> {
        if count > self.capacity() {
            return Err(RingBufferError::InvalidArgument("count exceeds capacity"));
        }
        if count > self.len {
            return Err(RingBufferError::BufferTooSmall {
                requested: count,
                available: self.len,
            });
        }
        Ok(())
    }

    fn advance_read(&mut self, count: usize) {
        debug_assert!(count <= self.len);
        self.read_pos = wrap_add(self.read_pos, count, self.storage.len());
        self.len -= count;
    }

    /// Returns the byte `index` positions after the oldest one.
    ///
    /// # Errors
    ///
    /// - [`RingBufferError::InvalidArgument`] if `index >= capacity()`.
    /// - [`RingBufferError::BufferTooSmall`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<u8> {
        if index >= self.capacity() {
            return Err(RingBufferError::InvalidArgument("index exceeds capacity"));
        }
        if index >= self.len {
            return Err(RingBufferError::BufferTooSmall {
                requested: index + 1,
                available: self.len,
            });
        }
        Ok(self.storage[wrap_add(self.read_pos, index, self.storage.len())])
    }

    /// The stored bytes as up to two slices in logical order.
    ///
    /// The second slice is empty unless the contents wrap past the physical
    /// end of the storage.
    #[must_use]
    pub fn as_slices(&self) -> (&[u8], &[u8]) {
        self.segments(0, self.len)
    }

    /// Logical range `offset..offset + length` as at most two physical runs.
    fn segments(&self, offset: usize, length: usize) -> (&[u8], &[u8]) {
        debug_assert!(offset + length <= self.len);
        let storage_len = self.storage.len();
        let start = wrap_add(self.read_pos, offset, storage_len);
        let head = storage_len - start;
        if length <= head {
            (&self.storage[start..start + length], &[])
        } else {
            (&self.storage[start..], &self.storage[..length - head])
        }
    }

    fn collect_range(&self, offset: usize, length: usize, capacity: usize) -> Vec<u8> {
        let (head, tail) = self.segments(offset, length);
        let mut out = Vec::with_capacity(capacity);
        out.extend_from_slice(head);
        out.extend_from_slice(tail);
        out
    }

    /// Iterates over the stored bytes, oldest first.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        let (head, tail) = self.as_slices();
        Iter {
            head: head.iter(),
            tail: tail.iter(),
        }
    }

    /// Copies all stored bytes into a new vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.collect_range(0, self.len, self.len)
    }

    /// Copies the stored bytes `offset..offset + length` into a new vector.
    ///
    /// # Errors
    ///
    /// [`RingBufferError::InvalidArgument`] if the range is not inside
    /// `0..len()`.
    pub fn to_vec_range(&self, offset: usize, length: usize) -> Result<Vec<u8>> {
        self.to_vec_range_with_capacity(offset, length, length)
    }

    /// Like [`to_vec_range`](Self::to_vec_range), reserving room for at least
    /// `capacity` bytes in the returned vector.
    ///
    /// # Errors
    ///
    /// [`RingBufferError::InvalidArgument`] if the range is not inside
    /// `0..len()`, `capacity < length`, or `capacity` bytes cannot be
    /// allocated.
    pub fn to_vec_range_with_capacity(
        &self,
        offset: usize,
        length: usize,
        capacity: usize,
    ) -> Result<Vec<u8>> {
        check_range(self.len, offset, length)?;
        if capacity < length {
            return Err(RingBufferError::InvalidArgument("capacity smaller than length"));
        }
        let (head, tail) = self.segments(offset, length);
        let mut out = reserve(capacity)?;
        out.extend_from_slice(head);
        out.extend_from_slice(tail);
        Ok(out)
    }

    /// Copies the stored bytes `offset..offset + length` into
    /// `target[target_offset..target_offset + length]`.
    ///
    /// The copy is done in one `memcpy`, or two when the range wraps past the
    /// end of the storage.
    ///
    /// # Errors
    ///
    /// [`RingBufferError::InvalidArgument`] if the source range is not inside
    /// `0..len()` or the destination range is not inside `target`.
    pub fn copy_to(
        &self,
        offset: usize,
        length: usize,
        target: &mut [u8],
        target_offset: usize,
    ) -> Result<()> {
        check_range(self.len, offset, length)?;
        check_range(target.len(), target_offset, length)?;
        let (head, tail) = self.segments(offset, length);
        let split = target_offset + head.len();
        target[target_offset..split].copy_from_slice(head);
        if !tail.is_empty() {
            target[split..target_offset + length].copy_from_slice(tail);
        }
        Ok(())
    }

    /// Returns an independent buffer with the same capacity and contents.
    ///
    /// Unlike `clone`, the copy starts its contents at storage index 0.
    #[must_use]
    pub fn copy(&self) -> Self {
        let (head, tail) = self.as_slices();
        Self::filled(self.capacity(), head, tail)
    }

    /// Returns an independent, full buffer holding the stored bytes
    /// `offset..offset + length`.
    ///
    /// # Errors
    ///
    /// [`RingBufferError::InvalidArgument`] if the range is not inside
    /// `0..len()`.
    pub fn copy_range(&self, offset: usize, length: usize) -> Result<Self> {
        self.copy_range_with_capacity(offset, length, length.max(1))
    }

    /// Returns an independent buffer of the given capacity holding the stored
    /// bytes `offset..offset + length`.
    ///
    /// # Errors
    ///
    /// [`RingBufferError::InvalidArgument`] if the range is not inside
    /// `0..len()`, or `capacity` is zero, smaller than `length` or too large
    /// to allocate.
    pub fn copy_range_with_capacity(
        &self,
        offset: usize,
        length: usize,
        capacity: usize,
    ) -> Result<Self> {
        check_range(self.len, offset, length)?;
        if capacity < length {
            return Err(RingBufferError::InvalidArgument("capacity smaller than length"));
        }
        let mut copy = Self::with_capacity(capacity)?;
        let (head, tail) = self.segments(offset, length);
        copy.push_slice(head)?;
        copy.push_slice(tail)?;
        Ok(copy)
    }

    fn matches_at(&self, offset: usize, needle: &[u8]) -> bool {
        let (head, tail) = self.segments(offset, needle.len());
        let (needle_head, needle_tail) = needle.split_at(head.len());
        head == needle_head && tail == needle_tail
    }

    /// `true` if the stored bytes begin with a non-empty `prefix`.
    #[must_use]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        !prefix.is_empty() && prefix.len() <= self.len && self.matches_at(0, prefix)
    }

    /// `true` if the stored bytes end with a non-empty `suffix`.
    #[must_use]
    pub fn ends_with(&self, suffix: &[u8]) -> bool {
        !suffix.is_empty()
            && suffix.len() <= self.len
            && self.matches_at(self.len - suffix.len(), suffix)
    }

    fn search(&self, needle: &[u8], from: usize) -> Option<usize> {
        if needle.is_empty() || needle.len() > self.len {
            return None;
        }
        (from..=self.len - needle.len()).find(|&offset| self.matches_at(offset, needle))
    }

    /// Position of the first occurrence of `needle`, counted from the oldest
    /// byte. An empty needle never matches.
    #[must_use]
    pub fn find(&self, needle: &[u8]) -> Option<usize> {
        self.search(needle, 0)
    }

    /// Position of the first occurrence of `needle` at or after `from`.
    ///
    /// # Errors
    ///
    /// [`RingBufferError::InvalidArgument`] if `from >= len()`.
    pub fn find_from(&self, needle: &[u8], from: usize) -> Result<Option<usize>> {
        if from >= self.len {
            return Err(RingBufferError::InvalidArgument("search offset out of range"));
        }
        Ok(self.search(needle, from))
    }

    /// Counts non-overlapping occurrences of `needle`.
    ///
    /// Returns `None` for an empty needle, which is not a countable query;
    /// `Some(0)` means the needle simply does not occur.
    ///
    /// ```rust
    /// let buf = ringbytes::RingBuffer::from_slice(b"aaaa");
    /// assert_eq!(buf.occurrences(b"aa"), Some(2));
    /// assert_eq!(buf.occurrences(b""), None);
    /// ```
    #[must_use]
    pub fn occurrences(&self, needle: &[u8]) -> Option<usize> {
        if needle.is_empty() {
            return None;
        }
        let mut count = 0;
        let mut from = 0;
        while let Some(offset) = self.search(needle, from) {
            count += 1;
            from = offset + needle.len();
        }
        Some(count)
    }

    /// Counts occurrences of a single byte.
    #[must_use]
    pub fn occurrences_of(&self, byte: u8) -> usize {
        self.occurrences(&[byte]).unwrap_or(0)
    }

    /// Compares the stored bytes against `bytes`.
    ///
    /// Behaves like [`starts_with`](Self::starts_with), except that an empty
    /// buffer and an empty slice are considered equal.
    #[must_use]
    pub fn equals_bytes(&self, bytes: &[u8]) -> bool {
        (bytes.is_empty() && self.is_empty()) || self.starts_with(bytes)
    }

    /// Renders the stored bytes as uppercase hex pairs.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        self.hex_range(0, self.len)
    }

    /// Renders the stored bytes `offset..offset + length` as uppercase hex
    /// pairs.
    ///
    /// # Errors
    ///
    /// [`RingBufferError::InvalidArgument`] if the range is not inside
    /// `0..len()`.
    pub fn to_hex_string_range(&self, offset: usize, length: usize) -> Result<String> {
        check_range(self.len, offset, length)?;
        Ok(self.hex_range(offset, length))
    }

    fn hex_range(&self, offset: usize, length: usize) -> String {
        let (head, tail) = self.segments(offset, length);
        let mut out = String::with_capacity(length * 2);
        for &byte in head.iter().chain(tail) {
            hex::push_byte(&mut out, byte);
        }
        out
    }
}

/// Empty vector with room for `capacity` bytes. Allocation failure is an
/// error, not a panic.
fn reserve(capacity: usize) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    out.try_reserve_exact(capacity)
        .map_err(|_| RingBufferError::InvalidArgument("capacity too large"))?;
    Ok(out)
}

fn encode_latin1(text: &str) -> Vec<u8> {
    text.chars().map(|c| u8::try_from(c).unwrap_or(b'?')).collect()
}

impl From<&[u8]> for RingBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self::from_slice(bytes)
    }
}

impl From<&str> for RingBuffer {
    fn from(text: &str) -> Self {
        Self::from_latin1(text)
    }
}

impl PartialEq for RingBuffer {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        let (sa, sb) = self.as_slices();
        let (oa, ob) = other.as_slices();
        // Both sides are split at different points; compare in three runs so
        // every comparison is between contiguous slices.
        match sa.len().cmp(&oa.len()) {
            Ordering::Equal => sa == oa && sb == ob,
            Ordering::Less => {
                let front = sa.len();
                let mid = oa.len() - front;
                let (oa_front, oa_mid) = oa.split_at(front);
                let (sb_mid, sb_back) = sb.split_at(mid);
                sa == oa_front && sb_mid == oa_mid && sb_back == ob
            }
            Ordering::Greater => {
                let front = oa.len();
                let mid = sa.len() - front;
                let (sa_front, sa_mid) = sa.split_at(front);
                let (ob_mid, ob_back) = ob.split_at(mid);
                sa_front == oa && sa_mid == ob_mid && sb == ob_back
            }
        }
    }
}

impl Eq for RingBuffer {}

impl Hash for RingBuffer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for byte in self {
            state.write_u8(byte);
        }
    }
}

impl fmt::Display for RingBuffer {
    /// One character per byte, Latin-1 style.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for byte in self {
            f.write_char(char::from(byte))?;
        }
        Ok(())
    }
}

impl fmt::Debug for RingBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.to_vec();
        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity())
            .field("len", &self.len)
            .field("data", &BStr::new(&data))
            .finish()
    }
}

/// Iterator over the bytes of a [`RingBuffer`], oldest first.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    head: slice::Iter<'a, u8>,
    tail: slice::Iter<'a, u8>,
}

impl Iterator for Iter<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        self.head.next().or_else(|| self.tail.next()).copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.head.len() + self.tail.len();
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<u8> {
        self.tail.next_back().or_else(|| self.head.next_back()).copied()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a RingBuffer {
    type Item = u8;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
