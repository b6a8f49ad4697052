//! Draw-color register decoding.
//!
//! The register is a `u16` holding four nibbles, `dc0` in the least
//! significant position. A nibble of zero means "don't draw this role"; any
//! other value `v` selects palette index `(v - 1) & 3`. Only the low two bits
//! of `v - 1` matter, so values above 4 wrap around.
//!
//! The host may rewrite the register between any two calls, so it is decoded
//! afresh on every call and never cached.

use crate::Color;

/// A snapshot of the draw-color register.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
#[repr(transparent)]
pub struct DrawColors(pub u16);

impl DrawColors {
    /// Raw nibble `index`. Only the bottom two bits of `index` are used, so
    /// indices past 3 wrap around.
    #[inline(always)]
    pub fn nibble(self, index: usize) -> u8 {
        ((self.0 >> ((index & 0x3) * 4)) & 0xF) as u8
    }

    /// Palette index selected by nibble `index`, or `None` if that role is
    /// transparent.
    #[inline(always)]
    pub fn role(self, index: usize) -> Option<Color> {
        palette_index(self.nibble(index))
    }

    /// Primary color (`dc0`): shape fill, and the stroke of lines and text.
    #[inline(always)]
    pub fn primary(self) -> Option<Color> {
        self.role(0)
    }

    /// Secondary color (`dc1`): the outline of rectangles and ovals.
    #[inline(always)]
    pub fn secondary(self) -> Option<Color> {
        self.role(1)
    }
}

impl From<u16> for DrawColors {
    fn from(reg: u16) -> Self {
        DrawColors(reg)
    }
}

/// Maps a nonzero nibble onto the palette; zero is transparent.
#[inline(always)]
pub fn palette_index(nibble: u8) -> Option<Color> {
    if nibble == 0 {
        None
    } else {
        Some(wrapped_index(nibble))
    }
}

/// Maps a nibble onto the palette without treating zero specially: zero
/// wraps around to index 3.
#[inline(always)]
pub fn wrapped_index(nibble: u8) -> Color {
    nibble.wrapping_sub(1) & 0x3
}
