/// Glyph width in cells
pub const GLYPH_WIDTH: usize = 3;

/// Glyph height in cells
pub const GLYPH_HEIGHT: usize = 5;

/// Blank cells between adjacent glyphs
pub const GLYPH_SPACING: usize = 1;

/// A 3x5 monochrome bitmap. Each row is stored in the low three bits,
/// MSB being the leftmost cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    rows: [u8; GLYPH_HEIGHT],
}

impl Glyph {
    /// Build a glyph from ASCII art: a space is background, anything
    /// else is foreground. Every row must be at least 3 bytes long.
    pub const fn from_rows(art: [&str; GLYPH_HEIGHT]) -> Self {
        let mut rows = [0u8; GLYPH_HEIGHT];
        let mut row = 0;
        while row < GLYPH_HEIGHT {
            let bytes = art[row].as_bytes();
            let mut col = 0;
            while col < GLYPH_WIDTH {
                if bytes[col] != b' ' {
                    rows[row] |= 1 << (GLYPH_WIDTH - 1 - col);
                }
                col += 1;
            }
            row += 1;
        }
        Self { rows }
    }

    #[inline]
    pub const fn is_set(&self, row: usize, col: usize) -> bool {
        row < GLYPH_HEIGHT && col < GLYPH_WIDTH && self.rows[row] & (1 << (GLYPH_WIDTH - 1 - col)) != 0
    }
}
