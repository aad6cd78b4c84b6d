//! # Text Module
//!
//! Expands glyphs and strings into pixel matrix writes.
//!
//! - `format`: `TextFormat` (top-left position and integer scale)
//! - `raster`: `draw_glyph`, `draw_string` and region helpers
//!
//! Nothing here can fail. Cells that land off the canvas are clipped, and
//! a string stops at the first character whose left edge is off screen.

pub mod format;
pub mod raster;

pub use format::TextFormat;
pub use raster::{draw_glyph, draw_string, draw_string_with, fill_rect, text_width};
