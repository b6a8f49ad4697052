//! Four-tone framebuffer rasterizer.
//!
//! Draws points, lines, rectangles, ovals, sprites and text into a packed
//! 2bpp framebuffer, using only integer arithmetic. Every primitive clips
//! against the fixed `WIDTH` x `HEIGHT` canvas, so no input can cause an
//! out-of-bounds access.
//!
//! Colors are not given directly. Each drawing call takes the current value
//! of the *draw-color register* ([`DrawColors`]), whose nibbles map drawing
//! roles (fill, stroke, sprite color indices) onto the four palette entries.
//!
//! The framebuffer memory belongs to the host; a [`Framebuffer`] only borrows
//! it, and holds no other state between calls.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod blit;
pub mod draw_colors;
pub mod framebuffer;
pub mod shape;
pub mod text;

#[cfg(test)]
mod test_util;

pub use blit::{BlitFlags, Source};
pub use draw_colors::DrawColors;
pub use framebuffer::Framebuffer;

/// A 2-bit palette index, `0..=3`.
pub type Color = u8;

/// Canvas width in pixels.
pub const WIDTH: usize = 160;

/// Canvas height in pixels.
pub const HEIGHT: usize = 160;

/// Size of the packed framebuffer in bytes, at four pixels per byte.
pub const FRAMEBUFFER_SIZE: usize = (WIDTH * HEIGHT + 3) / 4;

// Signed versions of the canvas bounds, for clipping.
pub(crate) const W: i32 = WIDTH as i32;
pub(crate) const H: i32 = HEIGHT as i32;
