//! Helpers shared by the unit tests.

use crate::{Color, Framebuffer, H, W};

/// Asserts that every pixel on the canvas has the color `expected` gives for
/// it.
pub fn check_pixels(fb: &Framebuffer, expected: impl Fn(i32, i32) -> Color) {
    for y in 0..H {
        for x in 0..W {
            let want = expected(x, y);
            assert_eq!(
                fb.pixel(x, y),
                Some(want),
                "Pixel at ({}, {}) should be {}",
                x,
                y,
                want
            );
        }
    }
}

/// Collects the coordinates of every pixel that isn't color 0, in row-major
/// order.
pub fn lit_pixels(fb: &Framebuffer) -> Vec<(i32, i32)> {
    let mut out = vec![];
    for y in 0..H {
        for x in 0..W {
            if fb.pixel(x, y) != Some(0) {
                out.push((x, y));
            }
        }
    }
    out
}

/// Counts pixels of color `color`.
pub fn count(fb: &Framebuffer, color: Color) -> usize {
    let mut n = 0;
    for y in 0..H {
        for x in 0..W {
            if fb.pixel(x, y) == Some(color) {
                n += 1;
            }
        }
    }
    n
}
