//! Logical monochrome canvas with per-pixel dirty tracking
use super::geometry::Geometry;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::BinaryColor,
    Pixel,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonoPixel {
    pub foreground: bool,
    /// Set when `foreground` changed since this pixel was last flushed
    pub dirty: bool,
}

/// Row-major grid of [`MonoPixel`], one per screen pixel.
pub struct PixelMatrix {
    pixels: Vec<MonoPixel>,
    width: usize,
    height: usize,
}

impl PixelMatrix {
    /// All background, nothing dirty.
    pub fn new(geometry: &Geometry) -> Self {
        Self::with_size(geometry.width, geometry.height)
    }

    pub(crate) fn with_size(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![MonoPixel::default(); width * height],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    /// Set one pixel. Off-canvas coordinates are ignored, and writing the
    /// value a pixel already holds leaves its dirty flag untouched.
    #[inline]
    pub fn set_pixel(&mut self, row: usize, col: usize, foreground: bool) {
        let Some(index) = self.index(row, col) else {
            return;
        };
        let pixel = &mut self.pixels[index];
        if pixel.foreground != foreground {
            pixel.foreground = foreground;
            pixel.dirty = true;
        }
    }

    pub fn is_foreground(&self, row: usize, col: usize) -> Option<bool> {
        self.index(row, col).map(|i| self.pixels[i].foreground)
    }

    pub fn is_dirty(&self, row: usize, col: usize) -> Option<bool> {
        self.index(row, col).map(|i| self.pixels[i].dirty)
    }

    pub fn dirty_count(&self) -> usize {
        self.pixels.iter().filter(|p| p.dirty).count()
    }

    /// Force every pixel to be repainted on the next flush.
    pub fn invalidate(&mut self) {
        for pixel in self.pixels.iter_mut() {
            pixel.dirty = true;
        }
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [MonoPixel] {
        &mut self.pixels
    }
}

// Implement DrawTarget for embedded-graphics
impl DrawTarget for PixelMatrix {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 {
                continue;
            }
            self.set_pixel(y as usize, x as usize, color.is_on());
        }
        Ok(())
    }
}

impl OriginDimensions for PixelMatrix {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}
