//! Modular cursor arithmetic over unsigned indices.

/// `(index + addend) mod len`.
#[inline]
pub(crate) fn wrap_add(index: usize, addend: usize, len: usize) -> usize {
    debug_assert!(index < len);
    debug_assert!(addend <= len);
    (index + addend) % len
}

/// `(index - subtrahend) mod len`, kept non-negative by adding `len` first.
#[inline]
pub(crate) fn wrap_sub(index: usize, subtrahend: usize, len: usize) -> usize {
    debug_assert!(index < len);
    debug_assert!(subtrahend <= len);
    (index + len - subtrahend) % len
}
