//! # Font Module
//!
//! Fixed 3x5 bitmap glyphs for clock-style text.
//!
//! - `glyph`: `Glyph` cells and the ASCII-art constructor
//! - `table`: `GlyphTable` mapping characters to glyphs with a fallback
//!
//! Lookups never fail: any character without an entry renders as the
//! table's fallback glyph, an `X` shape in the built-in table.

pub mod glyph;
pub mod table;

pub use glyph::{Glyph, GLYPH_HEIGHT, GLYPH_SPACING, GLYPH_WIDTH};
pub use table::GlyphTable;
