//! Minimal-width big-endian integer codec.
//!
//! Widths run 1 through 8 bytes and are chosen as the smallest that holds
//! the value; the width itself travels in a control-byte field, never in
//! the payload.

/// Smallest number of big-endian bytes that can hold `value`.
pub fn width_for(value: u64) -> usize {
    let bytes = (u64::BITS - value.leading_zeros()).div_ceil(8) as usize;
    bytes.max(1)
}

/// Append exactly `width` big-endian bytes of `value`.
pub fn write(out: &mut Vec<u8>, width: usize, value: u64) {
    for shift in (0..width).rev() {
        out.push((value >> (shift * 8)) as u8);
    }
}

/// Read a big-endian integer whose width is implied by the slice length.
///
/// The caller guarantees `bytes.len() <= 8`.
pub fn read(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0u64, |acc, &b| acc << 8 | b as u64)
}
