//! Filled and outlined rectangles.

use crate::{DrawColors, Framebuffer, H, W};

impl<'a> Framebuffer<'a> {
    /// Draws a `width` x `height` rectangle with its top-left corner at
    /// `(x, y)`.
    ///
    /// The interior is filled with the primary color and the one-pixel
    /// outline drawn in the secondary color. When both are enabled, the fill
    /// is inset by a pixel so it never paints under the outline.
    pub fn rect(&mut self, dc: DrawColors, x: i32, y: i32, width: i32, height: i32) {
        log::trace!("rect ({}, {}) {}x{}", x, y, width, height);
        let start_x = x.max(0);
        let start_y = y.max(0);
        let end_x_unclamped = x.saturating_add(width);
        let end_y_unclamped = y.saturating_add(height);
        let end_x = end_x_unclamped.min(W);
        let end_y = end_y_unclamped.min(H);

        let offset = if dc.nibble(1) != 0 { 1 } else { 0 };

        if let Some(fill) = dc.primary() {
            let (fill_start_x, fill_end_x) =
                (start_x.saturating_add(offset), end_x.saturating_sub(offset));
            for yy in start_y.saturating_add(offset)..end_y.saturating_sub(offset) {
                self.fill_run(fill, fill_start_x, yy, fill_end_x);
            }
        }

        if let Some(stroke) = dc.secondary() {
            if start_x >= end_x || start_y >= end_y {
                return;
            }

            // The verticals stop one row short; the bottom edge covers the
            // last row.

            // Left edge
            if x >= 0 && x < W {
                for yy in start_y..end_y - 1 {
                    self.write_pixel(stroke, x, yy);
                }
            }

            // Right edge. Visibility is decided on the unclamped boundary: a
            // rectangle that runs off the right side has no right edge.
            if end_x > 0 && end_x_unclamped < W + 1 {
                for yy in start_y..end_y - 1 {
                    self.write_pixel(stroke, end_x - 1, yy);
                }
            }

            // Top edge
            self.fill_run(stroke, start_x, start_y, end_x);

            // Bottom edge
            self.fill_run(stroke, start_x, end_y - 1, end_x);
        }
    }
}
