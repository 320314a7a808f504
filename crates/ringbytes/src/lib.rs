//! Fixed-capacity circular byte buffers and circular index bookkeeping.
//!
//! [`RingBuffer`] accumulates and drains byte streams (for example, bytes read
//! incrementally from a socket) without reallocating or shifting memory on
//! every read or write. Its capacity is fixed at construction and never grows.
//!
//! [`CircularIndex`] tracks the first/last occupied slot and the length of a
//! circular queue without storing any payload, for callers that keep their
//! own storage and only need the positional bookkeeping.
//!
//! # Capacity
//!
//! Both structures reserve one slot to tell "full" apart from "empty": a
//! `RingBuffer` with `capacity()` `n` allocates `n + 1` bytes, and a
//! `CircularIndex` with capacity `n` holds at most `n - 1` elements.
//!
//! # Thread safety
//!
//! Neither type synchronizes internally. Every mutating operation takes
//! `&mut self`; callers that share a buffer between threads must provide
//! their own mutual exclusion (e.g. wrap it in a `Mutex`).
//!
//! # Errors
//!
//! Fallible operations return [`RingBufferError`]. Checks run before any
//! mutation, so a failed call leaves the buffer exactly as it was.
//!
//! ```rust
//! use ringbytes::{RingBuffer, RingBufferError};
//!
//! let mut buf = RingBuffer::with_capacity(4)?;
//! buf.push_slice(b"abc")?;
//! assert_eq!(
//!     buf.push_slice(b"de"),
//!     Err(RingBufferError::BufferTooSmall { requested: 2, available: 1 })
//! );
//! assert_eq!(buf.take(2)?, b"ab");
//! # Ok::<(), RingBufferError>(())
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): `std::io::Read` and `std::io::Write` for [`RingBuffer`].
//! - `serde`: `Serialize`/`Deserialize` for [`RingBuffer`].

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod circular_index;
mod error;
mod hex;
mod ring_buffer;
mod wrap;

#[cfg(feature = "std")]
mod io;
#[cfg(feature = "serde")]
mod serde_impls;

#[cfg(test)]
mod tests;

pub use circular_index::{CircularIndex, CircularIndexOptions};
pub use error::{Result, RingBufferError};
pub use hex::{encode_byte as hex_byte, push_byte as push_hex_byte};
pub use ring_buffer::{Iter, RingBuffer};
