//! Sprite blitting.
//!
//! Sprites are packed 1bpp or 2bpp images, leftmost sample in the most
//! significant bits. Each sample is an index into the draw-color register,
//! which decides the palette color or makes the pixel transparent.

use core::convert::TryFrom;

use bitflags::bitflags;
use gfx::bit;

use crate::{DrawColors, Framebuffer, H, W};

bitflags! {
    /// Options controlling how a sprite is sampled.
    pub struct BlitFlags: u32 {
        /// Source holds two bits per sample, rather than one.
        const BPP2 = 0b0001;
        /// Mirror horizontally.
        const FLIP_X = 0b0010;
        /// Mirror vertically.
        const FLIP_Y = 0b0100;
        /// Rotate 90 degrees counterclockwise.
        const ROTATE = 0b1000;
    }
}

/// A region of sprite data to copy from.
#[derive(Copy, Clone, Debug)]
pub struct Source<'a> {
    pub data: &'a [u8],
    /// Left edge of the region within the sprite, in samples.
    pub x: u32,
    /// Top edge of the region within the sprite, in samples.
    pub y: u32,
    /// Width of a full sprite row, in samples.
    pub stride: u32,
}

impl<'a> Source<'a> {
    /// A source starting at the top-left corner of `data`.
    pub fn new(data: &'a [u8], stride: u32) -> Self {
        Source {
            data,
            x: 0,
            y: 0,
            stride,
        }
    }

    /// The same sprite, with the region moved to start at `(x, y)`.
    pub fn at(self, x: u32, y: u32) -> Self {
        Source { x, y, ..self }
    }

    /// Reads the sample at `(sx, sy)` relative to the region origin.
    ///
    /// Anything outside `data`, including negative positions, reads as
    /// `None`.
    fn sample(&self, bpp2: bool, sx: i64, sy: i64) -> Option<u8> {
        let x = i64::from(self.x) + sx;
        let y = i64::from(self.y) + sy;
        if x < 0 || y < 0 {
            return None;
        }
        let index = y.checked_mul(i64::from(self.stride))?.checked_add(x)?;
        let index = usize::try_from(index).ok()?;
        // Only the low bits of the column pick the shift.
        let column = (x & 0x7) as usize;
        if bpp2 {
            bit::sample_2bpp(self.data, index, column)
        } else {
            bit::sample_1bpp(self.data, index, column)
        }
    }
}

impl<'a> Framebuffer<'a> {
    /// Copies a `width` x `height` region of `src` to the canvas with its
    /// top-left corner at `(dst_x, dst_y)`.
    ///
    /// The destination rectangle is clipped to the canvas first. Flips
    /// mirror within the clipped rectangle, so a sprite hanging off the
    /// right or bottom edge shows the near part of its mirror image.
    /// `ROTATE` swaps the sampling axes and toggles `FLIP_X`.
    ///
    /// Each sample `i` is drawn in the color given by draw-color nibble `i`;
    /// samples whose nibble is zero leave the canvas untouched.
    pub fn blit(
        &mut self,
        dc: DrawColors,
        src: Source,
        dst_x: i32,
        dst_y: i32,
        width: u32,
        height: u32,
        flags: BlitFlags,
    ) {
        log::trace!(
            "blit {}x{} at ({}, {}) from ({}, {}) {:?}",
            width,
            height,
            dst_x,
            dst_y,
            src.x,
            src.y,
            flags
        );
        let (dst_x, dst_y) = (i64::from(dst_x), i64::from(dst_y));

        let clip_x_min = dst_x.max(0) - dst_x;
        let clip_y_min = dst_y.max(0) - dst_y;
        let clip_x_max = i64::from(width).min(i64::from(W) - dst_x);
        let clip_y_max = i64::from(height).min(i64::from(H) - dst_y);

        let bpp2 = flags.contains(BlitFlags::BPP2);
        let rotate = flags.contains(BlitFlags::ROTATE);
        let flip_x = flags.contains(BlitFlags::FLIP_X) != rotate;
        let flip_y = flags.contains(BlitFlags::FLIP_Y);

        for row in clip_y_min..clip_y_max {
            for col in clip_x_min..clip_x_max {
                let (mut sx, mut sy) = if rotate { (row, col) } else { (col, row) };
                if flip_x {
                    sx = clip_x_max - sx - 1;
                }
                if flip_y {
                    sy = clip_y_max - sy - 1;
                }

                let index = match src.sample(bpp2, sx, sy) {
                    Some(i) => i,
                    None => continue,
                };
                if let Some(color) = dc.role(usize::from(index)) {
                    // Clipping above keeps this on the canvas.
                    self.write_pixel(color, (dst_x + col) as i32, (dst_y + row) as i32);
                }
            }
        }
    }
}
