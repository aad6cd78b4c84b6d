//! Glyph and string rasterization onto a `PixelMatrix`
use super::format::TextFormat;
use crate::font::{Glyph, GlyphTable, GLYPH_HEIGHT, GLYPH_SPACING, GLYPH_WIDTH};
use crate::framebuffer::PixelMatrix;

/// Horizontal distance between the left edges of adjacent characters.
/// Saturates instead of overflowing.
#[inline]
pub const fn advance(scale: usize) -> usize {
    (GLYPH_WIDTH + GLYPH_SPACING).saturating_mul(scale)
}

/// Pixels covered by `chars` characters, trailing spacing included.
#[inline]
pub const fn text_width(chars: usize, scale: usize) -> usize {
    chars.saturating_mul(advance(scale))
}

/// `base + index * scale`, or `None` once it leaves `limit`.
#[inline]
fn cell_origin(base: usize, index: usize, scale: usize, limit: usize) -> Option<usize> {
    index
        .checked_mul(scale)
        .and_then(|offset| base.checked_add(offset))
        .filter(|&origin| origin < limit)
}

/// Draw one glyph with its top-left cell at (`format.x`, `format.y`).
///
/// Both foreground and background cells are written, so a glyph fully
/// replaces whatever was under its footprint.
pub fn draw_glyph(glyph: &Glyph, format: &TextFormat, matrix: &mut PixelMatrix) {
    let (width, height) = (matrix.width(), matrix.height());
    let scale = format.scale;
    if format.x >= width || format.y >= height {
        return;
    }

    // cell origins grow with the index, so the first one off canvas ends the loop
    for cell_row in 0..GLYPH_HEIGHT {
        let Some(top) = cell_origin(format.y, cell_row, scale, height) else {
            break;
        };
        for cell_col in 0..GLYPH_WIDTH {
            let Some(left) = cell_origin(format.x, cell_col, scale, width) else {
                break;
            };
            let foreground = glyph.is_set(cell_row, cell_col);
            // top < height, so stepping by one reaches height before overflowing
            for y in (top..height).take(scale) {
                for x in (left..width).take(scale) {
                    matrix.set_pixel(y, x, foreground);
                }
            }
        }
    }
}

/// Draw `text` left to right using the built-in glyph table.
pub fn draw_string(text: &str, format: &TextFormat, matrix: &mut PixelMatrix) {
    draw_string_with(&GlyphTable::BUILTIN, text, format, matrix);
}

/// Draw `text` left to right using `table`.
///
/// Drawing stops at the first character whose left edge is at or past
/// the right side of the screen; that character and the rest are dropped.
pub fn draw_string_with(
    table: &GlyphTable<'_>,
    text: &str,
    format: &TextFormat,
    matrix: &mut PixelMatrix,
) {
    let step = advance(format.scale);
    for (index, ch) in text.chars().enumerate() {
        let Some(x) = cell_origin(format.x, index, step, matrix.width()) else {
            break;
        };
        let char_format = TextFormat { x, ..*format };
        draw_glyph(table.lookup(ch), &char_format, matrix);
    }
}

/// Set every pixel of a rectangle, clipped to the canvas.
pub fn fill_rect(
    matrix: &mut PixelMatrix,
    x: usize,
    y: usize,
    width: usize,
    height: usize,
    foreground: bool,
) {
    let bottom = y.saturating_add(height).min(matrix.height());
    let right = x.saturating_add(width).min(matrix.width());
    for row in y..bottom {
        for col in x..right {
            matrix.set_pixel(row, col, foreground);
        }
    }
}
