//! Integer Bresenham line stepping.

/// Iterator over the points of a line, both endpoints included.
///
/// Lines are always walked top to bottom: if the second endpoint is above the
/// first, the endpoints are swapped before stepping. Each step may advance
/// along X, along Y, or both (a diagonal move).
///
/// The classic formulation starts the error term at half of the major delta,
/// which is not integral for odd deltas. We keep the error term doubled
/// instead, which yields exactly the same decisions without fractions.
#[derive(Clone, Debug)]
pub struct Bresenham {
    x: i32,
    y: i32,
    x_end: i32,
    y_end: i32,
    sx: i32,
    /// Twice the X delta (always non-negative).
    dx2: i64,
    /// Twice the Y delta (always non-negative).
    dy2: i64,
    /// Twice the error term.
    err2: i64,
    done: bool,
}

impl Bresenham {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let (x1, y1, x2, y2) = if y1 > y2 {
            (x2, y2, x1, y1)
        } else {
            (x1, y1, x2, y2)
        };

        let dx = (i64::from(x2) - i64::from(x1)).abs();
        let dy = i64::from(y2) - i64::from(y1);
        let sx = if x1 < x2 { 1 } else { -1 };

        Bresenham {
            x: x1,
            y: y1,
            x_end: x2,
            y_end: y2,
            sx,
            dx2: dx * 2,
            dy2: dy * 2,
            err2: if dx > dy { dx } else { -dy },
            done: false,
        }
    }
}

impl Iterator for Bresenham {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.done {
            return None;
        }

        let point = (self.x, self.y);
        if self.x == self.x_end && self.y == self.y_end {
            self.done = true;
            return Some(point);
        }

        let e2 = self.err2;
        if e2 > -self.dx2 {
            self.err2 -= self.dy2;
            self.x += self.sx;
        }
        if e2 < self.dy2 {
            self.err2 += self.dx2;
            self.y += 1;
        }
        Some(point)
    }
}
