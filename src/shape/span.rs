//! Horizontal and vertical lines.

use crate::{DrawColors, Framebuffer, H, W};

impl<'a> Framebuffer<'a> {
    /// Draws `len` pixels rightward from `(x, y)` in the primary color.
    pub fn hline(&mut self, dc: DrawColors, x: i32, y: i32, len: i32) {
        log::trace!("hline ({}, {}) len {}", x, y, len);
        let end = x.saturating_add(len);
        if end <= 0 || y < 0 || y >= H {
            return;
        }
        let color = match dc.primary() {
            Some(c) => c,
            None => return,
        };

        self.fill_run(color, x.max(0), y, end.min(W));
    }

    /// Draws `len` pixels downward from `(x, y)` in the primary color.
    pub fn vline(&mut self, dc: DrawColors, x: i32, y: i32, len: i32) {
        log::trace!("vline ({}, {}) len {}", x, y, len);
        let end = y.saturating_add(len);
        if end <= 0 || x < 0 || x >= W {
            return;
        }
        let color = match dc.primary() {
            Some(c) => c,
            None => return,
        };

        for yy in y.max(0)..end.min(H) {
            self.write_pixel(color, x, yy);
        }
    }
}
