//! # Framebuffer Module
//!
//! Packs a monochrome logical canvas into a linear framebuffer of arbitrary
//! bits per pixel.
//!
//! ## Modules
//!
//! - `geometry`: `Geometry` describing the device buffer (stride, bpp, size)
//! - `address`: `BitAddress` mapping a pixel to its bit/byte span
//! - `matrix`: `PixelMatrix` with per-pixel dirty tracking
//! - `writer`: `flush` and `FramebufferWriter` packing dirty pixels
//!
//! ## Architecture
//!
//! Drawing never touches the device buffer directly:
//! 1. Drawing operations modify the pixel matrix (not the real framebuffer)
//! 2. A pixel is marked dirty only when its state actually changes
//! 3. `flush()` only packs dirty pixels into the real framebuffer
//!
//! ## Polarity
//!
//! The target panel treats a cleared bit as black and a set bit as white.
//! Foreground pixels clear their bits, background pixels set them.
//! Bits inside a byte are numbered MSB-first.

pub mod address;
pub mod geometry;
pub mod matrix;
pub mod writer;

pub use address::BitAddress;
pub use geometry::{Geometry, GeometryError};
pub use matrix::{MonoPixel, PixelMatrix};
pub use writer::{clear, flush, FramebufferWriter};
