//! Monochrome glyph rendering onto packed linear framebuffers.
//!
//! Drawing goes to a [`PixelMatrix`] that remembers which pixels changed;
//! [`flush`] then packs only those pixels into the device buffer, whatever
//! its stride and bits per pixel.
//!
//! ```
//! use fbglyph::{draw_string, FramebufferWriter, Geometry, PixelMatrix, TextFormat};
//!
//! let geometry = Geometry::new(178, 128, 24, 1, 3072).unwrap();
//! let mut buffer = vec![0u8; geometry.total_size];
//! let mut writer = FramebufferWriter::new(&mut buffer, geometry).unwrap();
//! let mut matrix = PixelMatrix::new(&geometry);
//!
//! writer.clear();
//! draw_string("00:00.000", &TextFormat::new(16, 16, 3), &mut matrix);
//! assert!(writer.flush(&mut matrix) > 0);
//! assert_eq!(writer.flush(&mut matrix), 0);
//! ```

pub mod font;
pub mod format;
pub mod framebuffer;
pub mod text;
pub mod ui;

pub use font::{Glyph, GlyphTable};
pub use format::format_elapsed;
pub use framebuffer::{clear, flush, BitAddress, FramebufferWriter, Geometry, GeometryError, PixelMatrix};
pub use text::{draw_glyph, draw_string, draw_string_with, TextFormat};
