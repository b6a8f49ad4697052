//! The console's memory map.
//!
//! Programs see one flat byte array. The rasterizer's state lives at fixed
//! addresses inside it:
//!
//! | Address            | Contents                                   |
//! |--------------------|--------------------------------------------|
//! | `ADDR_PALETTE`     | four `u32` colors, `0xRRGGBB`, little-endian |
//! | `ADDR_DRAW_COLORS` | the draw-color register, `u16` little-endian |
//! | `ADDR_FRAMEBUFFER` | the packed 2bpp framebuffer                 |
//!
//! Everything else is free for program use.

use arrayref::{array_mut_ref, array_ref};
use smart_default::SmartDefault;

use fourtone::{DrawColors, FRAMEBUFFER_SIZE};

use crate::HostError;

/// Total size of the memory map in bytes.
pub const MEMORY_SIZE: usize = 64 * 1024;

pub const ADDR_PALETTE: usize = 0x04;
pub const ADDR_DRAW_COLORS: usize = 0x14;
pub const ADDR_FRAMEBUFFER: usize = 0xA0;

/// Number of palette entries.
pub const PALETTE_SIZE: usize = 4;

/// Register contents loaded when the console starts.
#[derive(Clone, Debug, SmartDefault)]
pub struct PowerOn {
    #[default(_code = "[0xe0f8cf, 0x86c06c, 0x306850, 0x071821]")]
    pub palette: [u32; PALETTE_SIZE],
    #[default = 0x1203]
    pub draw_colors: u16,
}

pub struct Memory {
    bytes: Vec<u8>,
}

impl Memory {
    pub fn new(settings: &PowerOn) -> Self {
        let mut memory = Memory {
            bytes: vec![0; MEMORY_SIZE],
        };
        memory.set_palette(&settings.palette);
        memory.set_draw_colors(settings.draw_colors);
        memory
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn framebuffer(&self) -> &[u8; FRAMEBUFFER_SIZE] {
        array_ref!(self.bytes, ADDR_FRAMEBUFFER, FRAMEBUFFER_SIZE)
    }

    pub fn framebuffer_mut(&mut self) -> &mut [u8; FRAMEBUFFER_SIZE] {
        array_mut_ref!(self.bytes, ADDR_FRAMEBUFFER, FRAMEBUFFER_SIZE)
    }

    /// Reads the draw-color register as it currently stands.
    pub fn draw_colors(&self) -> DrawColors {
        let raw = array_ref!(self.bytes, ADDR_DRAW_COLORS, 2);
        u16::from_le_bytes(*raw).into()
    }

    pub fn set_draw_colors(&mut self, value: u16) {
        *array_mut_ref!(self.bytes, ADDR_DRAW_COLORS, 2) = value.to_le_bytes();
    }

    pub fn palette(&self) -> [u32; PALETTE_SIZE] {
        let raw = array_ref!(self.bytes, ADDR_PALETTE, PALETTE_SIZE * 4);
        let mut out = [0; PALETTE_SIZE];
        for (color, chunk) in out.iter_mut().zip(raw.chunks(4)) {
            *color = u32::from_le_bytes(*array_ref!(chunk, 0, 4));
        }
        out
    }

    pub fn set_palette(&mut self, colors: &[u32; PALETTE_SIZE]) {
        let raw = array_mut_ref!(self.bytes, ADDR_PALETTE, PALETTE_SIZE * 4);
        for (chunk, color) in raw.chunks_mut(4).zip(colors) {
            chunk.copy_from_slice(&color.to_le_bytes());
        }
    }

    /// Like `set_palette`, for callers holding a slice of unchecked length.
    pub fn set_palette_slice(&mut self, colors: &[u32]) -> Result<(), HostError> {
        if colors.len() != PALETTE_SIZE {
            return Err(HostError::PaletteLength(colors.len()));
        }
        self.set_palette(array_ref!(colors, 0, PALETTE_SIZE));
        Ok(())
    }

    pub fn peek(&self, addr: usize) -> Result<u8, HostError> {
        self.bytes
            .get(addr)
            .copied()
            .ok_or(HostError::AddressOutOfRange(addr))
    }

    pub fn poke(&mut self, addr: usize, value: u8) -> Result<(), HostError> {
        let byte = self
            .bytes
            .get_mut(addr)
            .ok_or(HostError::AddressOutOfRange(addr))?;
        *byte = value;
        Ok(())
    }
}
