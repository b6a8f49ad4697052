//! 8x8 bitmap font covering printable ASCII.
//!
//! The table is a single 1bpp sprite, eight pixels wide, with the glyphs for
//! codes `FIRST_CHAR..FIRST_CHAR + GLYPH_COUNT` stacked vertically. Each row
//! is one byte, leftmost pixel in the MSB.
//!
//! Glyph ink is stored as *zero* bits and the background as ones. When the
//! table is blitted through the draw-color register, ink therefore samples
//! color index 0 (the first draw color) and the background index 1 (the
//! second, usually transparent).

#![cfg_attr(not(test), no_std)]

pub const GLYPH_WIDTH: usize = 8;
pub const GLYPH_HEIGHT: usize = 8;

/// Character code of the first glyph in the table.
pub const FIRST_CHAR: u8 = 32;

/// Number of glyphs in the table (codes 32 through 126).
pub const GLYPH_COUNT: usize = 95;

const FONT_BYTES: usize = GLYPH_COUNT * GLYPH_HEIGHT;

/// Wrapper around font image to force word alignment.
#[repr(align(4))]
pub struct Font([u8; FONT_BYTES]);

impl Font {
    /// The whole table, suitable as a blit source with a stride of
    /// `GLYPH_WIDTH`.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The eight row bytes of the glyph for `code`, if the table has one.
    pub fn glyph(&self, code: u8) -> Option<&[u8]> {
        let index = usize::from(code.checked_sub(FIRST_CHAR)?);
        if index >= GLYPH_COUNT {
            return None;
        }
        let offset = index * GLYPH_HEIGHT;
        Some(&self.0[offset..offset + GLYPH_HEIGHT])
    }
}

/// Static image of the 8x8 font.
pub static FONT: Font = Font(*include_bytes!("font_8x8.bin"));
