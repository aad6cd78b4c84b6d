//! Packs dirty pixels from a `PixelMatrix` into the device framebuffer
use super::address::BitAddress;
use super::geometry::{Geometry, GeometryError};
use super::matrix::{MonoPixel, PixelMatrix};
use log::{info, trace};

/// Fill byte for fully covered bytes of a foreground pixel.
const FOREGROUND_FILL: u8 = 0x00;
/// Fill byte for fully covered bytes of a background pixel.
const BACKGROUND_FILL: u8 = 0xFF;

/// Paint the whole framebuffer background.
///
/// # Panics
///
/// If `buffer` is shorter than `geometry.total_size`.
pub fn clear(buffer: &mut [u8], geometry: &Geometry) {
    buffer[..geometry.total_size].fill(BACKGROUND_FILL);
}

/// Write every dirty pixel of `matrix` into `buffer` and clear its dirty
/// flag. Returns how many pixels were written.
///
/// Traversal is row-major. A second call with no intervening changes
/// writes nothing.
///
/// # Panics
///
/// If `buffer` is shorter than `geometry.total_size`, or if `matrix` was
/// not built for `geometry`. Both are checked before any byte is written.
pub fn flush(buffer: &mut [u8], geometry: &Geometry, matrix: &mut PixelMatrix) -> usize {
    assert!(
        buffer.len() >= geometry.total_size,
        "framebuffer holds {} bytes, geometry needs {}",
        buffer.len(),
        geometry.total_size
    );
    assert!(
        matrix.width() == geometry.width && matrix.height() == geometry.height,
        "matrix is {}x{}, geometry is {}x{}",
        matrix.width(),
        matrix.height(),
        geometry.width,
        geometry.height
    );

    let width = geometry.width;
    let mut written = 0;
    for (index, pixel) in matrix.pixels_mut().iter_mut().enumerate() {
        if !pixel.dirty {
            continue;
        }
        let address = BitAddress::compute(index / width, index % width, geometry);
        write_pixel(buffer, &address, pixel);
        pixel.dirty = false;
        written += 1;
    }

    if written > 0 {
        trace!("flushed {} pixels", written);
    }
    written
}

#[inline]
fn write_pixel(buffer: &mut [u8], address: &BitAddress, pixel: &MonoPixel) {
    if address.byte_range() == 0 {
        write_single_byte(buffer, address, pixel.foreground);
    } else {
        write_multi_byte(buffer, address, pixel.foreground);
    }
}

fn write_single_byte(buffer: &mut [u8], address: &BitAddress, foreground: bool) {
    let mask = address.single_byte_mask();
    if foreground {
        buffer[address.byte_start] &= !mask;
    } else {
        buffer[address.byte_start] |= mask;
    }
}

fn write_multi_byte(buffer: &mut [u8], address: &BitAddress, foreground: bool) {
    let prefix = address.prefix_mask();
    let suffix = address.suffix_mask();
    if foreground {
        buffer[address.byte_start] &= !prefix;
        buffer[address.byte_end] &= !suffix;
    } else {
        buffer[address.byte_start] |= prefix;
        buffer[address.byte_end] |= suffix;
    }

    if address.byte_range() >= 2 {
        let fill = if foreground { FOREGROUND_FILL } else { BACKGROUND_FILL };
        buffer[address.byte_start + 1..address.byte_end].fill(fill);
    }
}

/// A mapped framebuffer together with its geometry.
pub struct FramebufferWriter<'a> {
    framebuffer: &'a mut [u8],
    geometry: Geometry,
}

impl<'a> FramebufferWriter<'a> {
    pub fn new(framebuffer: &'a mut [u8], geometry: Geometry) -> Result<Self, GeometryError> {
        if framebuffer.len() < geometry.total_size {
            return Err(GeometryError::BufferTooSmall {
                expected: geometry.total_size,
                actual: framebuffer.len(),
            });
        }
        info!("framebuffer: {}", geometry);

        Ok(Self {
            framebuffer,
            geometry,
        })
    }

    #[inline]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    #[inline]
    pub fn buffer(&self) -> &[u8] {
        &self.framebuffer[..]
    }

    /// Fill entire screen with background
    pub fn clear(&mut self) {
        clear(self.framebuffer, &self.geometry);
    }

    pub fn flush(&mut self, matrix: &mut PixelMatrix) -> usize {
        flush(self.framebuffer, &self.geometry, matrix)
    }
}
