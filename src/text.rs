//! Text drawing with the built-in 8x8 font.

use font_8x8::{FIRST_CHAR, FONT, GLYPH_HEIGHT, GLYPH_WIDTH};

use crate::{BlitFlags, DrawColors, Framebuffer, Source};

const ADVANCE: i32 = GLYPH_WIDTH as i32;
const LINE_HEIGHT: i32 = GLYPH_HEIGHT as i32;

impl<'a> Framebuffer<'a> {
    /// Draws the character codes in `codes` with the top-left corner of the
    /// first glyph at `(x, y)`.
    ///
    /// Glyph ink uses the primary color and the glyph background the
    /// secondary color; either may be transparent. A code of 0 ends the
    /// string early, and 10 starts a new line back at `x`. Codes without a
    /// glyph draw nothing but still take up a cell.
    pub fn text(&mut self, dc: DrawColors, codes: &[u8], x: i32, y: i32) {
        log::trace!("text ({}, {}) {} codes", x, y, codes.len());
        let mut cx = x;
        let mut cy = y;
        for &code in codes {
            match code {
                0 => return,
                b'\n' => {
                    cy = cy.saturating_add(LINE_HEIGHT);
                    cx = x;
                }
                _ => {
                    // Codes below the table wrap to huge rows, which sample
                    // as transparent.
                    let row = u32::from(code.wrapping_sub(FIRST_CHAR)) * GLYPH_HEIGHT as u32;
                    let src = Source::new(FONT.as_bytes(), GLYPH_WIDTH as u32).at(0, row);
                    self.blit(
                        dc,
                        src,
                        cx,
                        cy,
                        GLYPH_WIDTH as u32,
                        GLYPH_HEIGHT as u32,
                        BlitFlags::empty(),
                    );
                    cx = cx.saturating_add(ADVANCE);
                }
            }
        }
    }
}
