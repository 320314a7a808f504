//! Uppercase hexadecimal rendering of single bytes.
use alloc::string::String;

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Returns the two uppercase hex digits for `byte`, high nibble first.
///
/// ```rust
/// assert_eq!(ringbytes::hex_byte(0x4C), *b"4C");
/// assert_eq!(ringbytes::hex_byte(0x0a), *b"0A");
/// ```
#[must_use]
pub fn encode_byte(byte: u8) -> [u8; 2] {
    [DIGITS[usize::from(byte >> 4)], DIGITS[usize::from(byte & 0x0F)]]
}

/// Appends the two uppercase hex digits for `byte` to `out`.
pub fn push_byte(out: &mut String, byte: u8) {
    let [hi, lo] = encode_byte(byte);
    out.push(char::from(hi));
    out.push(char::from(lo));
}
