//! Packed 2bpp bitmap graphics algorithms.
//!
//! This crate is deliberately free of any framebuffer state so that the bit
//! layout and stepping algorithms can be tested on the host in isolation.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod bit;
pub mod line;

pub use line::Bresenham;
