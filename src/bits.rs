//! Bit addressing in byte buffers, most significant bit first.
//!
//! Bit `k` lives in byte `k / 8` at position `7 - k % 8`, so bit 0 is the MSB of the
//! first byte. Indices past the end of the buffer are ignored on write and read as 0.

#[inline]
fn locate(k: usize) -> (usize, u8) {
    (k / 8, 0x80 >> (k % 8))
}

pub fn set_bit_msb(buf: &mut [u8], k: usize) {
    let (byte, mask) = locate(k);
    if let Some(b) = buf.get_mut(byte) {
        *b |= mask;
    }
}

pub fn clear_bit_msb(buf: &mut [u8], k: usize) {
    let (byte, mask) = locate(k);
    if let Some(b) = buf.get_mut(byte) {
        *b &= !mask;
    }
}

pub fn test_bit_msb(buf: &[u8], k: usize) -> bool {
    let (byte, mask) = locate(k);
    buf.get(byte).is_some_and(|b| b & mask != 0)
}

/// Bit `k` as 0 or 1.
#[inline]
pub fn get_bit_msb(buf: &[u8], k: usize) -> u8 {
    u8::from(test_bit_msb(buf, k))
}
