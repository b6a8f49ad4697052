//! Packed 2bpp pixel storage.
//!
//! All mutation of the framebuffer bytes goes through `write_pixel` or, for
//! byte-aligned stretches of a horizontal run, `fill_run`. The bit layout
//! itself is defined in `gfx::bit`.

use gfx::bit;

use crate::{Color, FRAMEBUFFER_SIZE, H, W, WIDTH};

/// A borrowed view of the host's framebuffer memory.
///
/// Holding the `&mut` for the duration of a call is what guarantees the
/// rasterizer exclusive access; nothing is locked.
#[derive(Debug)]
pub struct Framebuffer<'a> {
    bytes: &'a mut [u8; FRAMEBUFFER_SIZE],
}

impl<'a> Framebuffer<'a> {
    pub fn new(bytes: &'a mut [u8; FRAMEBUFFER_SIZE]) -> Self {
        Framebuffer { bytes }
    }

    /// Sets every pixel to color index 0.
    pub fn clear(&mut self) {
        for byte in self.bytes.iter_mut() {
            *byte = 0;
        }
    }

    /// Writes `color` at `(x, y)`, which must be on the canvas.
    ///
    /// This is the unchecked fast path: callers are expected to have clipped
    /// already. Only the bottom two bits of `color` are used.
    #[inline]
    pub fn write_pixel(&mut self, color: Color, x: i32, y: i32) {
        debug_assert!(on_canvas(x, y), "pixel ({}, {}) off canvas", x, y);
        let (x, y) = (x as usize, y as usize);
        let idx = bit::byte_index(WIDTH, x, y);
        self.bytes[idx] = bit::insert(self.bytes[idx], color, x);
    }

    /// Writes `color` at `(x, y)` if that is on the canvas; otherwise does
    /// nothing.
    #[inline]
    pub fn write_pixel_clipped(&mut self, color: Color, x: i32, y: i32) {
        if on_canvas(x, y) {
            self.write_pixel(color, x, y);
        }
    }

    /// Reads the color index at `(x, y)`, or `None` off the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if !on_canvas(x, y) {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        Some(bit::extract(self.bytes[bit::byte_index(WIDTH, x, y)], x))
    }

    /// Paints the half-open run `[start_x, end_x)` of row `y`.
    ///
    /// The caller must have clamped the run to the canvas: `0 <= start_x`,
    /// `end_x <= WIDTH` and `0 <= y < HEIGHT`. Byte-aligned stretches of four
    /// or more pixels are filled a byte at a time; the ragged ends, and runs
    /// too short to contain a whole byte, go pixel by pixel.
    pub(crate) fn fill_run(&mut self, color: Color, start_x: i32, y: i32, end_x: i32) {
        if start_x >= end_x {
            return;
        }
        debug_assert!(start_x >= 0 && end_x <= W && y >= 0 && y < H);

        let (fill_start, fill_end) =
            bit::aligned_interior(start_x as usize, end_x as usize);
        let (fill_start, fill_end) = (fill_start as i32, fill_end as i32);

        if fill_end - fill_start >= 4 {
            for xx in start_x..fill_start {
                self.write_pixel(color, xx, y);
            }

            let row = y as usize;
            let from = bit::byte_index(WIDTH, fill_start as usize, row);
            let to = bit::byte_index(WIDTH, fill_end as usize, row);
            let fill = bit::replicate(color);
            for byte in &mut self.bytes[from..to] {
                *byte = fill;
            }

            for xx in fill_end..end_x {
                self.write_pixel(color, xx, y);
            }
        } else {
            for xx in start_x..end_x {
                self.write_pixel(color, xx, y);
            }
        }
    }
}

#[inline(always)]
pub(crate) fn on_canvas(x: i32, y: i32) -> bool {
    x >= 0 && x < W && y >= 0 && y < H
}
