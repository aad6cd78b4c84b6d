use fbglyph::font::table::{UNKNOWN, ZERO};
use fbglyph::font::{Glyph, GLYPH_HEIGHT, GLYPH_WIDTH};
use fbglyph::{
    clear, draw_glyph, draw_string, flush, BitAddress, FramebufferWriter, Geometry, PixelMatrix,
    TextFormat,
};

fn screen(width: usize, height: usize, line_length: usize, bpp: usize) -> (Geometry, Vec<u8>, PixelMatrix) {
    let geometry = Geometry::new(width, height, line_length, bpp, line_length * height).unwrap();
    let mut buffer = vec![0u8; geometry.total_size];
    clear(&mut buffer, &geometry);
    let matrix = PixelMatrix::new(&geometry);
    (geometry, buffer, matrix)
}

/// Bits of a pixel, as (byte index, mask) pairs.
fn pixel_bits(geometry: &Geometry, row: usize, col: usize) -> Vec<(usize, u8)> {
    let address = BitAddress::compute(row, col, geometry);
    if address.byte_range() == 0 {
        return vec![(address.byte_start, address.single_byte_mask())];
    }
    let mut bits = vec![(address.byte_start, address.prefix_mask())];
    bits.extend((address.byte_start + 1..address.byte_end).map(|byte| (byte, 0xFF)));
    bits.push((address.byte_end, address.suffix_mask()));
    bits
}

fn is_foreground(buffer: &[u8], geometry: &Geometry, row: usize, col: usize) -> bool {
    pixel_bits(geometry, row, col)
        .into_iter()
        .all(|(byte, mask)| buffer[byte] & mask == 0)
}

fn is_background(buffer: &[u8], geometry: &Geometry, row: usize, col: usize) -> bool {
    pixel_bits(geometry, row, col)
        .into_iter()
        .all(|(byte, mask)| buffer[byte] & mask == mask)
}

fn assert_glyph_at(buffer: &[u8], geometry: &Geometry, glyph: &Glyph, x: usize, y: usize) {
    for row in 0..GLYPH_HEIGHT {
        for col in 0..GLYPH_WIDTH {
            if glyph.is_set(row, col) {
                assert!(is_foreground(buffer, geometry, y + row, x + col), "({}, {}) not set", row, col);
            } else {
                assert!(is_background(buffer, geometry, y + row, x + col), "({}, {}) set", row, col);
            }
        }
    }
}

#[test]
fn zero_glyph_lands_in_buffer() {
    for bpp in [1usize, 2, 3, 4, 8, 12] {
        let line_length = (8 * bpp).div_ceil(8) + 1;
        let (geometry, mut buffer, mut matrix) = screen(8, 6, line_length, bpp);
        draw_string("0", &TextFormat::new(0, 0, 1), &mut matrix);
        flush(&mut buffer, &geometry, &mut matrix);
        assert_glyph_at(&buffer, &geometry, &ZERO, 0, 0);
    }
}

#[test]
fn set_then_reset_round_trips() {
    let (geometry, mut buffer, mut matrix) = screen(10, 3, 4, 3);
    let pristine = buffer.clone();

    matrix.set_pixel(1, 5, true);
    flush(&mut buffer, &geometry, &mut matrix);
    assert!(is_foreground(&buffer, &geometry, 1, 5));
    assert!(is_background(&buffer, &geometry, 1, 4));
    assert!(is_background(&buffer, &geometry, 1, 6));

    matrix.set_pixel(1, 5, false);
    flush(&mut buffer, &geometry, &mut matrix);
    assert_eq!(buffer, pristine);
}

#[test]
fn repeated_flush_is_idempotent() {
    let (geometry, mut buffer, mut matrix) = screen(64, 16, 9, 1);
    draw_string("12:34.5-6", &TextFormat::new(1, 2, 1), &mut matrix);
    assert!(flush(&mut buffer, &geometry, &mut matrix) > 0);
    let first = buffer.clone();
    assert_eq!(flush(&mut buffer, &geometry, &mut matrix), 0);
    assert_eq!(buffer, first);
}

#[test]
fn unchanged_state_never_reaches_buffer() {
    let (geometry, mut buffer, mut matrix) = screen(16, 4, 2, 1);
    matrix.set_pixel(2, 2, true);
    flush(&mut buffer, &geometry, &mut matrix);

    // corrupt the byte behind the pixel; redundant writes must not repair it
    buffer[4] = 0xAA;
    matrix.set_pixel(2, 2, true);
    matrix.set_pixel(3, 3, false);
    assert_eq!(matrix.dirty_count(), 0);
    assert_eq!(flush(&mut buffer, &geometry, &mut matrix), 0);
    assert_eq!(buffer[4], 0xAA);
}

#[test]
fn redrawing_same_text_is_free() {
    let (geometry, mut buffer, mut matrix) = screen(64, 16, 8, 1);
    let format = TextFormat::new(0, 0, 2);
    draw_string("00:00", &format, &mut matrix);
    flush(&mut buffer, &geometry, &mut matrix);

    draw_string("00:00", &format, &mut matrix);
    assert_eq!(matrix.dirty_count(), 0);

    draw_string("00:01", &format, &mut matrix);
    assert!(matrix.dirty_count() > 0);
}

#[test]
fn string_drops_characters_past_right_edge() {
    // scale 2: characters start at x = 5, 13, 21, 29; the fourth is off a 29 pixel screen
    let (geometry, mut buffer, mut matrix) = screen(29, 10, 4, 1);
    let mut reference = PixelMatrix::new(&geometry);
    let format = TextFormat::new(5, 0, 2);

    draw_string("8888", &format, &mut matrix);
    draw_string("888", &format, &mut reference);
    for row in 0..geometry.height {
        for col in 0..geometry.width {
            assert_eq!(matrix.is_foreground(row, col), reference.is_foreground(row, col));
        }
    }
    flush(&mut buffer, &geometry, &mut matrix);
}

#[test]
fn fallback_glyph_for_unsupported_characters() {
    let (geometry, mut buffer, mut matrix) = screen(8, 5, 1, 1);
    draw_string("Z", &TextFormat::default(), &mut matrix);
    flush(&mut buffer, &geometry, &mut matrix);
    assert_glyph_at(&buffer, &geometry, &UNKNOWN, 0, 0);
}

#[test]
fn scaled_glyph_clipped_at_bottom() {
    let (geometry, mut buffer, mut matrix) = screen(12, 7, 2, 1);
    draw_glyph(&ZERO, &TextFormat::new(0, 2, 3), &mut matrix);
    flush(&mut buffer, &geometry, &mut matrix);
    // the top cell row covers rows 2..5, row 5..7 shows the start of "# #"
    assert!((0..9).all(|col| is_foreground(&buffer, &geometry, 2, col)));
    assert!(is_foreground(&buffer, &geometry, 6, 0));
    assert!(is_background(&buffer, &geometry, 6, 4));
    assert!(is_foreground(&buffer, &geometry, 6, 8));
    assert!(is_background(&buffer, &geometry, 0, 0));
}

#[test]
fn full_repaint_after_invalidate() {
    let geometry = Geometry::new(16, 2, 3, 1, 6).unwrap();
    let mut buffer = vec![0x00u8; 6];
    let mut matrix = PixelMatrix::new(&geometry);
    let mut writer = FramebufferWriter::new(&mut buffer, geometry).unwrap();

    matrix.invalidate();
    assert_eq!(writer.flush(&mut matrix), 32);
    assert_eq!(writer.buffer(), [0xFF, 0xFF, 0x00, 0xFF, 0xFF, 0x00]);
}
