//! Bit addressing of a single pixel inside a packed framebuffer
use super::geometry::Geometry;

/// Where one pixel lives in the packed buffer.
///
/// Offsets are MSB-first: offset 0 is bit 7 of the byte. Recomputed for
/// every pixel on every flush and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitAddress {
    pub bit_start: usize,
    pub bit_end: usize,
    pub byte_start: usize,
    pub byte_end: usize,
    /// First pixel bit inside `byte_start`, in `0..=7`
    pub start_offset: u8,
    /// Last pixel bit inside `byte_end`, in `0..=7`
    pub end_offset: u8,
}

impl BitAddress {
    /// Locate the pixel at (`row`, `col`).
    ///
    /// The caller guarantees that a pixel never crosses a row boundary.
    /// Any geometry accepted by [`Geometry::new`] satisfies this; a
    /// hand-built geometry that does not yields addresses in the next row.
    #[inline]
    pub fn compute(row: usize, col: usize, geometry: &Geometry) -> Self {
        let bit_start = row * geometry.line_length * 8 + col * geometry.bits_per_pixel;
        let bit_end = bit_start + geometry.bits_per_pixel - 1;

        Self {
            bit_start,
            bit_end,
            byte_start: bit_start / 8,
            byte_end: bit_end / 8,
            start_offset: (bit_start % 8) as u8,
            end_offset: (bit_end % 8) as u8,
        }
    }

    /// Number of byte boundaries the pixel crosses. 0 means a single byte.
    #[inline]
    pub const fn byte_range(&self) -> usize {
        self.byte_end - self.byte_start
    }

    /// Bits `start_offset..=7` of the first byte.
    #[inline]
    pub const fn prefix_mask(&self) -> u8 {
        0xFF >> self.start_offset
    }

    /// Bits `0..=end_offset` of the last byte.
    #[inline]
    pub const fn suffix_mask(&self) -> u8 {
        0xFF << (7 - self.end_offset)
    }

    /// Bits `start_offset..=end_offset` when the pixel fits in one byte.
    #[inline]
    pub const fn single_byte_mask(&self) -> u8 {
        self.prefix_mask() & self.suffix_mask()
    }
}
