//! Splits a byte stream that arrives in irregular chunks into
//! newline-terminated frames, using a fixed-size `RingBuffer` as the staging
//! area between the "socket" and the frame parser.
//!
//! Each chunk is appended with `push_slice`; complete frames are located with
//! `find`, copied out with `take`, and the delimiter is dropped with
//! `discard`. A frame that would not fit in the buffer is reported instead of
//! silently growing memory.
//!
//! Run with
//!
//! ```bash
//! cargo run -p ringbytes --example line_framing
//! ```

use ringbytes::{RingBuffer, RingBufferError};

const CAPACITY: usize = 32;

fn drain_frames(buf: &mut RingBuffer) -> Result<Vec<Vec<u8>>, RingBufferError> {
    let mut frames = Vec::new();
    while let Some(end) = buf.find(b"\n") {
        frames.push(buf.take(end)?);
        buf.discard(1)?;
    }
    Ok(frames)
}

fn main() -> Result<(), RingBufferError> {
    // In real life these would come from `TcpStream::read`.
    let simulated_stream: [&[u8]; 8] = [
        b"HELO mail.exa",
        b"mple.org\nMAIL",
        b" FROM:<alice@",
        b"example.org>\n",
        b"RCPT TO:<bob@example.org>\nDA",
        b"TA\n",
        b"QU",
        b"IT\n",
    ];

    let mut buf = RingBuffer::with_capacity(CAPACITY)?;
    for chunk in simulated_stream {
        if !buf.is_free(chunk.len()) {
            eprintln!(
                "frame longer than {CAPACITY} bytes: {}",
                buf.to_hex_string()
            );
            return Err(RingBufferError::BufferTooSmall {
                requested: chunk.len(),
                available: buf.free(),
            });
        }
        buf.push_slice(chunk)?;
        for frame in drain_frames(&mut buf)? {
            println!("frame: {}", RingBuffer::from_slice(&frame));
        }
    }

    if buf.is_empty() {
        println!("stream ended on a frame boundary");
    } else {
        println!("{} trailing bytes: {buf}", buf.len());
    }
    Ok(())
}
