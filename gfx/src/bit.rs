//! Packed-pixel bit arithmetic.
//!
//! Two layouts live here, and they are deliberately opposite:
//!
//! - The *framebuffer* stores 2-bit pixels four to a byte, with the leftmost
//!   pixel in the least significant bits.
//! - *Sprites* store 1- or 2-bit samples eight or four to a byte, with the
//!   leftmost sample in the most significant bits.
//!
//! Everything that touches either layout goes through these functions, so
//! this is the only place that knows where the bits are.

/// Number of framebuffer pixels packed into each byte.
pub const PIXELS_PER_BYTE: usize = 4;

/// Mask covering a single 2-bit pixel at shift zero.
pub const PIXEL_MASK: u8 = 0b11;

/// Finds the byte holding pixel `(x, y)` in a framebuffer `width` pixels
/// wide.
#[inline(always)]
pub fn byte_index(width: usize, x: usize, y: usize) -> usize {
    (width * y + x) >> 2
}

/// Bit offset of pixel `x` within its byte.
#[inline(always)]
pub fn pixel_shift(x: usize) -> u32 {
    ((x & 0x3) << 1) as u32
}

/// Replaces the pixel at column `x` inside `byte` with `color`, leaving the
/// other three pixels alone.
///
/// Only the bottom two bits of `color` are significant.
#[inline(always)]
pub fn insert(byte: u8, color: u8, x: usize) -> u8 {
    let shift = pixel_shift(x);
    let mask = PIXEL_MASK << shift;
    ((color & PIXEL_MASK) << shift) | (byte & !mask)
}

/// Reads the pixel at column `x` out of `byte`.
#[inline(always)]
pub fn extract(byte: u8, x: usize) -> u8 {
    (byte >> pixel_shift(x)) & PIXEL_MASK
}

/// Repeats a 2-bit color across all four pixels of a byte.
#[inline(always)]
pub fn replicate(color: u8) -> u8 {
    let c = color & PIXEL_MASK;
    (c << 6) | (c << 4) | (c << 2) | c
}

/// Splits the half-open span `[start, end)` around its byte-aligned interior.
///
/// Returns `(fill_start, fill_end)`, where `fill_end` is `end` rounded down
/// to a multiple of four and `fill_start` is `start` rounded up, but never
/// past `fill_end`. Both inputs must be non-negative.
#[inline]
pub fn aligned_interior(start: usize, end: usize) -> (usize, usize) {
    let fill_end = end - (end % PIXELS_PER_BYTE);
    let fill_start = core::cmp::min((start + 3) & !0x3, fill_end);
    (fill_start, fill_end)
}

/// Reads a 2-bit sample from a sprite.
///
/// `index` is the linear sample position (`y * stride + x`) and picks the
/// byte; the bit position within that byte is taken from the column `x`
/// alone. For strides that are a multiple of four these agree.
///
/// Returns `None` if the sample lies past the end of `data`.
#[inline]
pub fn sample_2bpp(data: &[u8], index: usize, x: usize) -> Option<u8> {
    let byte = *data.get(index >> 2)?;
    let shift = 6 - ((x & 0x03) << 1);
    Some((byte >> shift) & 0b11)
}

/// Reads a 1-bit sample from a sprite. Arguments are as for
/// [`sample_2bpp`], with eight samples to a byte.
#[inline]
pub fn sample_1bpp(data: &[u8], index: usize, x: usize) -> Option<u8> {
    let byte = *data.get(index >> 3)?;
    let shift = 7 - (x & 0x07);
    Some((byte >> shift) & 0b1)
}
