//! Arbitrary lines.

use gfx::Bresenham;

use crate::{DrawColors, Framebuffer, H, W};

impl<'a> Framebuffer<'a> {
    /// Draws a line from `(x1, y1)` to `(x2, y2)`, both endpoints included,
    /// in the primary color.
    ///
    /// The endpoints may lie anywhere; points off the canvas are skipped.
    pub fn line(&mut self, dc: DrawColors, x1: i32, y1: i32, x2: i32, y2: i32) {
        log::trace!("line ({}, {}) - ({}, {})", x1, y1, x2, y2);
        let color = match dc.primary() {
            Some(c) => c,
            None => return,
        };

        // Every point lies in the endpoints' bounding box.
        if y1.max(y2) < 0 || y1.min(y2) >= H || x1.max(x2) < 0 || x1.min(x2) >= W {
            return;
        }

        // Lines are walked top to bottom, so nothing past the bottom edge
        // can come back onto the canvas.
        for (x, y) in Bresenham::new(x1, y1, x2, y2).take_while(|&(_, y)| y < H) {
            self.write_pixel_clipped(color, x, y);
        }
    }
}
