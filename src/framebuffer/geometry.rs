//! Framebuffer geometry as reported by the display device
use core::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("bits per pixel must be at least 1")]
    ZeroBitsPerPixel,
    #[error("row of {width} pixels at {bits_per_pixel} bpp does not fit in {line_length} bytes")]
    RowOverflow {
        width: usize,
        bits_per_pixel: usize,
        line_length: usize,
    },
    #[error("{height} rows of {line_length} bytes exceed the {total_size} byte framebuffer")]
    SizeOverflow {
        height: usize,
        line_length: usize,
        total_size: usize,
    },
    #[error("buffer holds {actual} bytes but the geometry needs {expected}")]
    BufferTooSmall { expected: usize, actual: usize },
}

/// Immutable description of a linear framebuffer.
///
/// `line_length` may include hardware padding, so it can be larger than
/// `width * bits_per_pixel / 8`. A valid geometry guarantees that a pixel
/// never spans two rows, which the bit addressing relies on, and that the
/// bit index of every pixel fits in a `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub width: usize,
    pub height: usize,
    /// Bytes per row, padding included
    pub line_length: usize,
    pub bits_per_pixel: usize,
    /// Bytes in the whole framebuffer
    pub total_size: usize,
}

impl Geometry {
    pub fn new(
        width: usize,
        height: usize,
        line_length: usize,
        bits_per_pixel: usize,
        total_size: usize,
    ) -> Result<Self, GeometryError> {
        if bits_per_pixel == 0 {
            return Err(GeometryError::ZeroBitsPerPixel);
        }
        let row_overflow = GeometryError::RowOverflow {
            width,
            bits_per_pixel,
            line_length,
        };
        let row_bits = width.checked_mul(bits_per_pixel).ok_or(row_overflow)?;
        let line_bits = line_length.checked_mul(8).ok_or(row_overflow)?;
        if line_bits < row_bits {
            return Err(row_overflow);
        }

        let size_overflow = GeometryError::SizeOverflow {
            height,
            line_length,
            total_size,
        };
        line_bits.checked_mul(height).ok_or(size_overflow)?;
        match line_length.checked_mul(height) {
            Some(bytes) if bytes <= total_size => {}
            _ => return Err(size_overflow),
        }

        Ok(Self {
            width,
            height,
            line_length,
            bits_per_pixel,
            total_size,
        })
    }

    /// Tightest geometry for the given dimensions: rows padded only up to
    /// the next whole byte.
    pub fn packed(width: usize, height: usize, bits_per_pixel: usize) -> Result<Self, GeometryError> {
        let line_length = width
            .checked_mul(bits_per_pixel)
            .ok_or(GeometryError::RowOverflow {
                width,
                bits_per_pixel,
                line_length: 0,
            })?
            .div_ceil(8);
        let total_size = line_length
            .checked_mul(height)
            .ok_or(GeometryError::SizeOverflow {
                height,
                line_length,
                total_size: usize::MAX,
            })?;
        Self::new(width, height, line_length, bits_per_pixel, total_size)
    }

    #[inline]
    pub const fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} pixels, {} bytes, {} bytes per line, {} bpp",
            self.width, self.height, self.total_size, self.line_length, self.bits_per_pixel
        )
    }
}
