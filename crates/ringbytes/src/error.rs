use thiserror::Error;

/// Failure conditions reported by [`RingBuffer`](crate::RingBuffer) and
/// [`CircularIndex`](crate::CircularIndex).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingBufferError {
    /// A constructor argument, offset, length or structural index is out of
    /// range.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// A single byte was pushed into a full buffer.
    #[error("buffer full")]
    BufferFull,
    /// A single byte was popped from an empty buffer.
    #[error("buffer empty")]
    BufferEmpty,
    /// A bulk operation asked for more bytes (or room) than the buffer has.
    #[error("buffer too small: requested {requested}, available {available}")]
    BufferTooSmall {
        /// Number of bytes the operation needed.
        requested: usize,
        /// Number of bytes (or free slots) actually available.
        available: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T, E = RingBufferError> = core::result::Result<T, E>;

/// Checks that `offset..offset + length` lies inside a sequence of `len`
/// elements.
///
/// A non-zero `offset` must point at an existing element, even when `length`
/// is zero.
pub(crate) fn check_range(len: usize, offset: usize, length: usize) -> Result<()> {
    if offset != 0 && offset >= len {
        return Err(RingBufferError::InvalidArgument("offset out of range"));
    }
    match offset.checked_add(length) {
        Some(end) if end <= len => Ok(()),
        _ => Err(RingBufferError::InvalidArgument("offset + length out of range")),
    }
}
