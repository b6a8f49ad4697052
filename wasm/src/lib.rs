//! Browser host for the fourtone rasterizer.
//!
//! A [`Console`] owns the memory map (palette, draw-color register and
//! framebuffer) and exposes the drawing calls to JavaScript. Each call reads
//! the draw-color register fresh out of memory, so writes through `poke` or
//! a view of `memory_ptr` take effect on the next call.

mod error;
mod logger;
pub mod memory;
mod utils;

use std::convert::TryFrom;

use wasm_bindgen::prelude::*;

use fourtone::{BlitFlags, DrawColors, Framebuffer, Source, HEIGHT, WIDTH};

pub use error::HostError;
use memory::{Memory, PowerOn, ADDR_FRAMEBUFFER};

/// Character code drawn for text that doesn't fit in a byte. It has no glyph,
/// so it renders as a blank cell.
const NO_GLYPH: u8 = 0xFF;

#[wasm_bindgen]
pub fn width() -> usize {
    WIDTH
}

#[wasm_bindgen]
pub fn height() -> usize {
    HEIGHT
}

#[wasm_bindgen]
pub struct Console {
    memory: Memory,
    /// Composited RGBA output, one `u32` per pixel.
    rgba: Vec<u32>,
}

impl Console {
    /// Builds a console with explicit power-on settings.
    pub fn with_settings(settings: &PowerOn) -> Self {
        log::info!(
            "console up: {}x{}, draw colors {:#06x}",
            WIDTH,
            HEIGHT,
            settings.draw_colors
        );
        Console {
            memory: Memory::new(settings),
            rgba: vec![0; WIDTH * HEIGHT],
        }
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    /// Latches the draw-color register and borrows the framebuffer for one
    /// drawing call.
    fn canvas(&mut self) -> (DrawColors, Framebuffer<'_>) {
        let dc = self.memory.draw_colors();
        (dc, Framebuffer::new(self.memory.framebuffer_mut()))
    }
}

#[wasm_bindgen]
impl Console {
    pub fn new() -> Self {
        // Good a place as any...
        self::utils::set_panic_hook();
        logger::init(log::LevelFilter::Info);

        Console::with_settings(&PowerOn::default())
    }

    pub fn clear(&mut self) {
        let (_, mut fb) = self.canvas();
        fb.clear();
    }

    pub fn hline(&mut self, x: i32, y: i32, len: i32) {
        let (dc, mut fb) = self.canvas();
        fb.hline(dc, x, y, len);
    }

    pub fn vline(&mut self, x: i32, y: i32, len: i32) {
        let (dc, mut fb) = self.canvas();
        fb.vline(dc, x, y, len);
    }

    pub fn rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let (dc, mut fb) = self.canvas();
        fb.rect(dc, x, y, width, height);
    }

    pub fn oval(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let (dc, mut fb) = self.canvas();
        fb.oval(dc, x, y, width, height);
    }

    pub fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let (dc, mut fb) = self.canvas();
        fb.line(dc, x1, y1, x2, y2);
    }

    /// Draws a string of character codes.
    pub fn text(&mut self, codes: &[u8], x: i32, y: i32) {
        let (dc, mut fb) = self.canvas();
        fb.text(dc, codes, x, y);
    }

    /// Draws a JavaScript string, one cell per character.
    pub fn text_utf8(&mut self, text: &str, x: i32, y: i32) {
        let codes: Vec<u8> = text
            .chars()
            .map(|c| u8::try_from(u32::from(c)).unwrap_or(NO_GLYPH))
            .collect();
        self.text(&codes, x, y);
    }

    /// Blits a whole sprite, whose rows are `width` samples long.
    pub fn blit(
        &mut self,
        sprite: &[u8],
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        flags: u32,
    ) {
        self.blit_sub(sprite, x, y, width, height, 0, 0, width, flags);
    }

    /// Blits the `width` x `height` region at `(src_x, src_y)` of a sprite
    /// with rows `stride` samples long.
    pub fn blit_sub(
        &mut self,
        sprite: &[u8],
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        src_x: u32,
        src_y: u32,
        stride: u32,
        flags: u32,
    ) {
        let src = Source::new(sprite, stride).at(src_x, src_y);
        let flags = BlitFlags::from_bits_truncate(flags);
        let (dc, mut fb) = self.canvas();
        fb.blit(dc, src, x, y, width, height, flags);
    }

    pub fn draw_colors(&self) -> u16 {
        self.memory.draw_colors().0
    }

    pub fn set_draw_colors(&mut self, value: u16) {
        log::debug!("draw colors {:#06x}", value);
        self.memory.set_draw_colors(value);
    }

    pub fn palette(&self) -> Vec<u32> {
        self.memory.palette().to_vec()
    }

    pub fn set_palette(&mut self, colors: &[u32]) -> Result<(), JsValue> {
        match self.memory.set_palette_slice(colors) {
            Ok(()) => {
                log::debug!("palette {:06x?}", colors);
                Ok(())
            }
            Err(e) => {
                log::warn!("{}", e);
                Err(e.into())
            }
        }
    }

    pub fn peek(&self, addr: usize) -> Result<u8, JsValue> {
        Ok(self.memory.peek(addr)?)
    }

    pub fn poke(&mut self, addr: usize, value: u8) -> Result<(), JsValue> {
        Ok(self.memory.poke(addr, value)?)
    }

    pub fn memory_ptr(&self) -> *const u8 {
        self.memory.as_bytes().as_ptr()
    }

    pub fn framebuffer_ptr(&self) -> *const u8 {
        self.memory.as_bytes()[ADDR_FRAMEBUFFER..].as_ptr()
    }

    /// Expands the framebuffer through the palette into the RGBA buffer at
    /// `composite_ptr`.
    pub fn composite(&mut self) {
        let palette = self.memory.palette();
        let mut colors = [0; 4];
        for (rgba, &rgb) in colors.iter_mut().zip(&palette) {
            *rgba = unpack_color(rgb);
        }

        for (dest4, &byte) in self
            .rgba
            .chunks_mut(gfx::bit::PIXELS_PER_BYTE)
            .zip(self.memory.framebuffer().iter())
        {
            for (x, pixel) in dest4.iter_mut().enumerate() {
                *pixel = colors[usize::from(gfx::bit::extract(byte, x))];
            }
        }
    }

    pub fn composite_ptr(&self) -> *const u32 {
        self.rgba.as_ptr()
    }
}

impl Default for Console {
    fn default() -> Self {
        Console::with_settings(&PowerOn::default())
    }
}

fn unpack_color(rgb: u32) -> u32 {
    // We're little-endian, so we want ABGR.
    let r = (rgb >> 16) & 0xFF;
    let g = rgb & 0xFF_00;
    let b = (rgb & 0xFF) << 16;
    0xFF_00_00_00 | r | g | b
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{ADDR_DRAW_COLORS, ADDR_PALETTE};

    fn console() -> Console {
        Console::default()
    }

    fn pixel(c: &Console, x: usize, y: usize) -> u8 {
        let byte = c.memory().framebuffer()[gfx::bit::byte_index(WIDTH, x, y)];
        gfx::bit::extract(byte, x)
    }

    #[test]
    fn unpack_is_abgr() {
        assert_eq!(unpack_color(0x123456), 0xFF_56_34_12);
        assert_eq!(unpack_color(0x000000), 0xFF_00_00_00);
    }

    #[test]
    fn register_read_per_call() {
        let mut c = console();
        c.set_draw_colors(0x0002);
        c.hline(0, 0, 4);
        c.memory_mut().poke(ADDR_DRAW_COLORS, 0x04).unwrap();
        c.hline(0, 1, 4);
        assert_eq!(pixel(&c, 0, 0), 1);
        assert_eq!(pixel(&c, 0, 1), 3);
    }

    #[test]
    fn power_on_colors_draw() {
        // 0x1203: rectangles fill with palette 2 and have no outline.
        let mut c = console();
        c.rect(10, 10, 5, 5);
        assert_eq!(pixel(&c, 10, 10), 2);
        assert_eq!(pixel(&c, 14, 14), 2);
        assert_eq!(pixel(&c, 15, 15), 0);
    }

    #[test]
    fn clear_wipes_framebuffer_only() {
        let mut c = console();
        c.set_draw_colors(0x0004);
        c.rect(0, 0, WIDTH as i32, HEIGHT as i32);
        c.clear();
        assert!(c.memory().framebuffer().iter().all(|&b| b == 0));
        assert_eq!(c.draw_colors(), 0x0004);
    }

    #[test]
    fn composite_through_palette() {
        let mut c = console();
        c.memory_mut()
            .set_palette_slice(&[0x000000, 0xFF0000, 0x00FF00, 0x0000FF])
            .unwrap();
        c.set_draw_colors(0x0003);
        c.hline(1, 0, 1);
        c.set_draw_colors(0x0004);
        c.hline(2, 0, 1);
        c.composite();

        let rgba = &c.rgba;
        assert_eq!(rgba[0], 0xFF_00_00_00);
        assert_eq!(rgba[1], 0xFF_00_FF_00);
        assert_eq!(rgba[2], 0xFF_FF_00_00);
        assert!(rgba[3..].iter().all(|&p| p == 0xFF_00_00_00));
    }

    #[test]
    fn composite_follows_poked_palette() {
        let mut c = console();
        c.memory_mut().poke(ADDR_PALETTE, 0x11).unwrap();
        c.memory_mut().poke(ADDR_PALETTE + 1, 0x22).unwrap();
        c.memory_mut().poke(ADDR_PALETTE + 2, 0x33).unwrap();
        c.composite();
        assert!(c.rgba.iter().all(|&p| p == 0xFF_11_22_33));
    }

    #[test]
    fn blit_whole_sprite_uses_width_as_stride() {
        let mut c = console();
        c.set_draw_colors(0x0040);
        // 8x2, 1bpp: a dot at (7, 0) and one at (0, 1).
        c.blit(&[0b0000_0001, 0b1000_0000], 0, 0, 8, 2, 0);
        assert_eq!(pixel(&c, 7, 0), 3);
        assert_eq!(pixel(&c, 0, 1), 3);
        assert_eq!(pixel(&c, 0, 0), 0);
    }

    #[test]
    fn blit_sub_unknown_flag_bits_ignored() {
        let mut c = console();
        c.set_draw_colors(0x0040);
        c.blit_sub(&[0b1000_0000], 3, 4, 1, 1, 0, 0, 8, 0xFFFF_FFF0);
        assert_eq!(pixel(&c, 3, 4), 3);
    }

    #[test]
    fn text_utf8_one_cell_per_char() {
        let mut a = console();
        let mut b = console();
        a.set_draw_colors(0x0004);
        b.set_draw_colors(0x0004);
        a.text_utf8("\u{e9}\u{263a}A", 0, 0);
        b.text(b"A", 16, 0);
        assert!(a.memory().framebuffer()[..] == b.memory().framebuffer()[..]);
    }

    #[test]
    fn pointers_line_up() {
        let c = console();
        assert_eq!(
            c.framebuffer_ptr() as usize - c.memory_ptr() as usize,
            ADDR_FRAMEBUFFER
        );
    }
}
