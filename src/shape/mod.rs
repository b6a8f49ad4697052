//! Shape rasterizers.
//!
//! Each primitive is a method on `Framebuffer` taking the draw-color register
//! value for that call. Shapes clip against the canvas and never fail;
//! anything off-canvas, empty, or drawn in a transparent role is a no-op.

mod line;
mod oval;
mod rect;
mod span;
