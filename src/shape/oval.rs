//! Ovals, by the midpoint ellipse algorithm.

use crate::draw_colors::wrapped_index;
use crate::{Color, DrawColors, Framebuffer, H, W};

/// Wide enough for the error terms of any oval with `i32` dimensions, which
/// reach about 2^93.
type Wide = i128;

impl<'a> Framebuffer<'a> {
    /// Draws the ellipse inscribed in the `width` x `height` box at `(x, y)`.
    ///
    /// The outline uses the secondary color and the interior the primary
    /// color. Odd dimensions round down. Unlike the other shapes, a secondary
    /// nibble of zero does *not* hide the outline (it wraps to palette index
    /// 3); only `0xF` disables the oval entirely.
    pub fn oval(&mut self, dc: DrawColors, x: i32, y: i32, width: i32, height: i32) {
        log::trace!("oval ({}, {}) {}x{}", x, y, width, height);
        let dc0 = dc.nibble(0);
        let dc1 = dc.nibble(1);

        if dc1 == 0xF {
            return;
        }

        let stroke = wrapped_index(dc1);
        let fill = if dc0 != 0 { Some(wrapped_index(dc0)) } else { None };

        let a = width >> 1;
        let b = height >> 1;

        if a <= 0 || b <= 0 {
            return;
        }

        let (a, b) = (Wide::from(a), Wide::from(b));
        let (x, y) = (Wide::from(x), Wide::from(y));

        // Everything lands inside the bounding box, so a box that misses
        // the canvas draws nothing.
        if x + 2 * a < 0 || x >= Wide::from(W) || y + 2 * b < 0 || y >= Wide::from(H) {
            return;
        }

        let x0 = x + a;
        let y0 = y + b;
        let aa2 = a * a * 2;
        let bb2 = b * b * 2;

        // Region 1: the steep flanks, stepping along y.
        {
            let (mut x, mut y) = (a, 0);
            let mut dx = (1 - 2 * a) * b * b;
            let mut dy = a * a;
            let mut sx = bb2 * a;
            let mut sy = 0;
            let mut e = 0;

            while sx >= sy {
                self.plot_quadrants(stroke, x0, y0, x, y);

                if let Some(fill) = fill {
                    let start = (x0 - x + 1).max(0);
                    let end = (x0 + x).min(Wide::from(W));
                    self.fill_mirrored_rows(fill, start, y0, y, end);
                }

                y += 1;
                sy += aa2;
                e += dy;
                dy += aa2;
                if 2 * e + dx > 0 {
                    x -= 1;
                    sx -= bb2;
                    e += dx;
                    dx += bb2;
                }
            }
        }

        // Region 2: the flat caps, stepping along x. The interior span for a
        // row is only known once we step off it, so we count the x steps
        // taken since the last row change (`ddx`) and fill on the way out.
        {
            let (mut x, mut y) = (0, b);
            let mut dx = b * b;
            let mut dy = (1 - 2 * b) * a * a;
            let mut sx = 0;
            let mut sy = aa2 * b;
            let mut e = 0;
            let mut ddx = 0;

            while sy >= sx {
                self.plot_quadrants(stroke, x0, y0, x, y);

                x += 1;
                sx += bb2;
                e += dx;
                dx += bb2;
                ddx += 1;
                if 2 * e + dy > 0 {
                    if let Some(fill) = fill {
                        let w = x - ddx - 1;
                        let start = (x0 - w).max(0);
                        let end = (x0 + w + 1).min(Wide::from(W));
                        self.fill_mirrored_rows(fill, start, y0, y, end);
                    }

                    y -= 1;
                    sy -= aa2;
                    e += dy;
                    dy += aa2;
                    ddx = 0;
                }
            }
        }
    }

    /// Plots `(x0 ± x, y0 ± y)`, clipped.
    fn plot_quadrants(&mut self, color: Color, x0: Wide, y0: Wide, x: Wide, y: Wide) {
        self.plot_clipped(color, x0 + x, y0 + y);
        self.plot_clipped(color, x0 + x, y0 - y);
        self.plot_clipped(color, x0 - x, y0 + y);
        self.plot_clipped(color, x0 - x, y0 - y);
    }

    fn plot_clipped(&mut self, color: Color, x: Wide, y: Wide) {
        if x >= 0 && x < Wide::from(W) && y >= 0 && y < Wide::from(H) {
            self.write_pixel(color, x as i32, y as i32);
        }
    }

    /// Fills `[start, end)` on rows `y0 + y` and `y0 - y`. The span must
    /// already be clamped to the canvas width; rows off the canvas are
    /// skipped.
    fn fill_mirrored_rows(&mut self, color: Color, start: Wide, y0: Wide, y: Wide, end: Wide) {
        if end - start <= 0 {
            return;
        }
        for &row in &[y0 + y, y0 - y] {
            if row >= 0 && row < Wide::from(H) {
                self.fill_run(color, start as i32, row as i32, end as i32);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_util::*;
    use crate::{DrawColors, Framebuffer, FRAMEBUFFER_SIZE, H, W};
    use rand::{Rng, SeedableRng};

    /// Checks mirror symmetry of everything drawn, around the center of an
    /// oval at `(x, y)` with semi-axes `a` and `b`.
    fn check_symmetric(fb: &Framebuffer, x: i32, y: i32, a: i32, b: i32) {
        let (x0, y0) = (x + a, y + b);
        for py in y..=y + 2 * b {
            for px in x..=x + 2 * a {
                let here = fb.pixel(px, py);
                assert_eq!(here, fb.pixel(2 * x0 - px, py), "h-mirror of ({}, {})", px, py);
                assert_eq!(here, fb.pixel(px, 2 * y0 - py), "v-mirror of ({}, {})", px, py);
            }
        }
    }

    #[test]
    fn circle_extremes() {
        let mut mem = [0; FRAMEBUFFER_SIZE];
        let mut fb = Framebuffer::new(&mut mem);
        fb.oval(DrawColors(0x20), 10, 10, 20, 20);
        // Stroke touches the four extreme points of the box.
        assert_eq!(fb.pixel(10, 20), Some(1));
        assert_eq!(fb.pixel(30, 20), Some(1));
        assert_eq!(fb.pixel(20, 10), Some(1));
        assert_eq!(fb.pixel(20, 30), Some(1));
        // ...and not the corners.
        assert_eq!(fb.pixel(10, 10), Some(0));
        assert_eq!(fb.pixel(30, 30), Some(0));
        // Outline only: the center is empty.
        assert_eq!(fb.pixel(20, 20), Some(0));
    }

    #[test]
    fn symmetric_for_even_sizes() {
        for &(w, h) in &[(2, 2), (4, 4), (10, 6), (6, 10), (20, 20), (32, 8), (8, 32), (50, 36)] {
            for &dc in &[0x20, 0x34, 0x13] {
                let mut mem = [0; FRAMEBUFFER_SIZE];
                let mut fb = Framebuffer::new(&mut mem);
                fb.oval(DrawColors(dc), 40, 50, w, h);
                check_symmetric(&fb, 40, 50, w / 2, h / 2);
            }
        }
    }

    #[test]
    fn filled_rows_are_solid_and_closed() {
        for &(w, h) in &[(4, 4), (10, 6), (6, 10), (21, 21), (40, 12), (12, 40), (64, 50)] {
            let mut mem = [0; FRAMEBUFFER_SIZE];
            let mut fb = Framebuffer::new(&mut mem);
            fb.oval(DrawColors(0x34), 30, 20, w, h);
            let (a, b) = (w / 2, h / 2);
            for y in 20..=20 + 2 * b {
                let row: Vec<i32> = (0..W).filter(|&x| fb.pixel(x, y) != Some(0)).collect();
                assert!(!row.is_empty(), "{}x{}: row {} empty", w, h, y);
                let (first, last) = (row[0], row[row.len() - 1]);
                assert_eq!(row.len() as i32, last - first + 1, "{}x{}: gap in row {}", w, h, y);
                // The ends of every row are outline, never fill.
                assert_eq!(fb.pixel(first, y), Some(2));
                assert_eq!(fb.pixel(last, y), Some(2));
                assert!(first >= 30 && last <= 30 + 2 * a);
            }
            assert_eq!(fb.pixel(30 + a, 20 + b), Some(3), "{}x{}: center", w, h);
            assert!(lit_pixels(&fb).iter().all(|&(_, y)| y >= 20 && y <= 20 + 2 * b));
        }
    }

    #[test]
    fn fill_only_with_zero_stroke_nibble() {
        // A zero secondary nibble wraps to palette index 3 rather than
        // hiding the outline.
        let mut mem = [0; FRAMEBUFFER_SIZE];
        let mut fb = Framebuffer::new(&mut mem);
        fb.oval(DrawColors(0x02), 0, 0, 10, 10);
        assert_eq!(fb.pixel(0, 5), Some(3));
        assert_eq!(fb.pixel(5, 5), Some(1));
    }

    #[test]
    fn sentinel_disables() {
        let mut mem = [0; FRAMEBUFFER_SIZE];
        let mut fb = Framebuffer::new(&mut mem);
        fb.oval(DrawColors(0xF2), 0, 0, 10, 10);
        check_pixels(&fb, |_, _| 0);
    }

    #[test]
    fn degenerate_sizes_draw_nothing() {
        let mut mem = [0; FRAMEBUFFER_SIZE];
        let mut fb = Framebuffer::new(&mut mem);
        for &(w, h) in &[(0, 10), (10, 0), (1, 10), (10, 1), (-10, 10), (10, -10)] {
            fb.oval(DrawColors(0x34), 20, 20, w, h);
        }
        check_pixels(&fb, |_, _| 0);
    }

    #[test]
    fn odd_sizes_round_down() {
        let mut even_mem = [0; FRAMEBUFFER_SIZE];
        let mut odd_mem = [0; FRAMEBUFFER_SIZE];
        Framebuffer::new(&mut even_mem).oval(DrawColors(0x34), 7, 9, 12, 8);
        Framebuffer::new(&mut odd_mem).oval(DrawColors(0x34), 7, 9, 13, 9);
        assert!(even_mem[..] == odd_mem[..]);
    }

    #[test]
    fn clipped_ovals_match_unclipped_interior() {
        // An oval hanging off every edge must paint the same on-canvas
        // pixels as the same oval drawn on a conceptually larger canvas:
        // check by comparing against a copy shifted fully on-canvas.
        let mut clipped_mem = [0; FRAMEBUFFER_SIZE];
        let mut whole_mem = [0; FRAMEBUFFER_SIZE];
        let mut clipped = Framebuffer::new(&mut clipped_mem);
        let mut whole = Framebuffer::new(&mut whole_mem);
        clipped.oval(DrawColors(0x34), -20, -10, 60, 40);
        whole.oval(DrawColors(0x34), 0, 0, 60, 40);
        for y in 0..30 {
            for x in 0..40 {
                assert_eq!(clipped.pixel(x, y), whole.pixel(x + 20, y + 10), "({}, {})", x, y);
            }
        }
    }

    #[test]
    fn random_ovals_stay_in_bounds() {
        let mut rng = rand::rngs::SmallRng::seed_from_u64(11181981);
        let mut mem = [0; FRAMEBUFFER_SIZE];
        let mut fb = Framebuffer::new(&mut mem);
        for _ in 0..500 {
            let x = rng.gen_range(-300, 300);
            let y = rng.gen_range(-300, 300);
            let w = rng.gen_range(-10, 600);
            let h = rng.gen_range(-10, 600);
            fb.oval(DrawColors(rng.gen()), x, y, w, h);
        }
        fb.oval(DrawColors(0x34), i32::MIN, i32::MIN, i32::MAX, i32::MAX);
        fb.oval(DrawColors(0x34), i32::MAX, i32::MAX, 100, 100);
        assert!(fb.pixel(W, H).is_none());
    }

    /// Draws one oval at `(2, 3)` and checks the canvas against a picture of
    /// its top-left corner: `.` for color 0, digits for the rest. Everything
    /// outside the picture must be empty.
    fn check_picture(dc: u16, w: i32, h: i32, picture: &[&str]) {
        let mut mem = [0; FRAMEBUFFER_SIZE];
        let mut fb = Framebuffer::new(&mut mem);
        fb.oval(DrawColors(dc), 2, 3, w, h);
        let rows = picture.len() as i32;
        let cols = picture[0].len() as i32;
        check_pixels(&fb, |x, y| {
            if x < cols && y < rows {
                match picture[y as usize].as_bytes()[x as usize] {
                    b'.' => 0,
                    c => c - b'0',
                }
            } else {
                0
            }
        });
    }

    #[test]
    fn exact_outline_10x6() {
        check_picture(
            0x30,
            10,
            6,
            &[
                "..............",
                "..............",
                "..............",
                ".....22222....",
                "...22.....22..",
                "..2.........2.",
                "..2.........2.",
                "..2.........2.",
                "...22.....22..",
                ".....22222....",
            ],
        );
    }

    #[test]
    fn exact_filled_10x6() {
        check_picture(
            0x34,
            10,
            6,
            &[
                "..............",
                "..............",
                "..............",
                ".....22222....",
                "...223333322..",
                "..23333333332.",
                "..23333333332.",
                "..23333333332.",
                "...223333322..",
                ".....22222....",
            ],
        );
    }

    #[test]
    fn exact_outline_6x10() {
        check_picture(
            0x30,
            6,
            10,
            &[
                "..........",
                "..........",
                "..........",
                "....222...",
                "...2...2..",
                "...2...2..",
                "..2.....2.",
                "..2.....2.",
                "..2.....2.",
                "..2.....2.",
                "..2.....2.",
                "...2...2..",
                "...2...2..",
                "....222...",
            ],
        );
    }

    #[test]
    fn exact_filled_6x10() {
        check_picture(
            0x34,
            6,
            10,
            &[
                "..........",
                "..........",
                "..........",
                "....222...",
                "...23332..",
                "...23332..",
                "..2333332.",
                "..2333332.",
                "..2333332.",
                "..2333332.",
                "..2333332.",
                "...23332..",
                "...23332..",
                "....222...",
            ],
        );
    }

    #[test]
    fn exact_outline_16x16() {
        check_picture(
            0x30,
            16,
            16,
            &[
                "....................",
                "....................",
                "....................",
                "........22222.......",
                "......22.....22.....",
                ".....2.........2....",
                "....2...........2...",
                "...2.............2..",
                "...2.............2..",
                "..2...............2.",
                "..2...............2.",
                "..2...............2.",
                "..2...............2.",
                "..2...............2.",
                "...2.............2..",
                "...2.............2..",
                "....2...........2...",
                ".....2.........2....",
                "......22.....22.....",
                "........22222.......",
            ],
        );
    }

    #[test]
    fn exact_filled_16x16() {
        check_picture(
            0x34,
            16,
            16,
            &[
                "....................",
                "....................",
                "....................",
                "........22222.......",
                "......223333322.....",
                ".....23333333332....",
                "....2333333333332...",
                "...233333333333332..",
                "...233333333333332..",
                "..23333333333333332.",
                "..23333333333333332.",
                "..23333333333333332.",
                "..23333333333333332.",
                "..23333333333333332.",
                "...233333333333332..",
                "...233333333333332..",
                "....2333333333332...",
                ".....23333333332....",
                "......223333322.....",
                "........22222.......",
            ],
        );
    }

    #[test]
    fn huge_oval_through_canvas() {
        // Semi-axes of 70000 x 10, centered at (80, 60): on the canvas this
        // is the flat middle of the oval, a band of fill between two
        // outline rows.
        let mut mem = [0; FRAMEBUFFER_SIZE];
        let mut fb = Framebuffer::new(&mut mem);
        let w = 140_000;
        fb.oval(DrawColors(0x34), 80 - w / 2, 50, w, 20);
        check_pixels(&fb, |_, y| match y {
            50 | 70 => 2,
            51..=69 => 3,
            _ => 0,
        });
    }

    #[test]
    fn huge_oval_off_canvas() {
        let mut mem = [0; FRAMEBUFFER_SIZE];
        let mut fb = Framebuffer::new(&mut mem);
        fb.oval(DrawColors(0x34), W, 0, i32::MAX, i32::MAX);
        fb.oval(DrawColors(0x34), 0, i32::MIN, i32::MAX, i32::MAX);
        check_pixels(&fb, |_, _| 0);
    }
}
