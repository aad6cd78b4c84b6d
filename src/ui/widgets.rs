// Minimal widget system drawing into a PixelMatrix
use crate::font::GLYPH_HEIGHT;
use crate::framebuffer::PixelMatrix;
use crate::text::{draw_string, fill_rect, text_width, TextFormat};
use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Line, PrimitiveStyle},
};

pub trait Widget {
    fn render(&mut self, matrix: &mut PixelMatrix);
}

/// Text that is only re-rasterized when it changes.
///
/// When new text is shorter than what was drawn before, the leftover
/// columns are painted background so no stale glyphs remain.
pub struct Label {
    format: TextFormat,
    text: String,
    drawn_chars: usize,
    needs_render: bool,
}

impl Label {
    pub fn new(format: TextFormat, text: &str) -> Self {
        Self {
            format,
            text: text.to_string(),
            drawn_chars: 0,
            needs_render: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn format(&self) -> &TextFormat {
        &self.format
    }

    pub fn set_text(&mut self, text: &str) {
        if self.text != text {
            self.text.clear();
            self.text.push_str(text);
            self.needs_render = true;
        }
    }

    pub fn needs_render(&self) -> bool {
        self.needs_render
    }
}

impl Widget for Label {
    fn render(&mut self, matrix: &mut PixelMatrix) {
        if !self.needs_render {
            return;
        }
        draw_string(&self.text, &self.format, matrix);

        let chars = self.text.chars().count();
        if self.drawn_chars > chars {
            let scale = self.format.scale;
            fill_rect(
                matrix,
                self.format.x.saturating_add(text_width(chars, scale)),
                self.format.y,
                text_width(self.drawn_chars - chars, scale),
                GLYPH_HEIGHT.saturating_mul(scale),
                false,
            );
        }
        self.drawn_chars = chars;
        self.needs_render = false;
    }
}

/// Horizontal separator line
pub struct Rule {
    pub start: Point,
    pub length: u32,
    pub thickness: u32,
}

impl Rule {
    pub fn new(start: Point, length: u32, thickness: u32) -> Self {
        Self { start, length, thickness }
    }
}

impl Widget for Rule {
    fn render(&mut self, matrix: &mut PixelMatrix) {
        let end = self.start + Point::new(self.length.saturating_sub(1) as i32, 0);
        Line::new(self.start, end)
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, self.thickness))
            .draw(matrix)
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_renders_once_until_changed() {
        let mut matrix = PixelMatrix::with_size(40, 10);
        let mut label = Label::new(TextFormat::new(0, 0, 1), "8");
        assert!(label.needs_render());
        label.render(&mut matrix);
        assert!(!label.needs_render());
        assert!(matrix.dirty_count() > 0);

        label.set_text("8");
        assert!(!label.needs_render());

        label.set_text("1");
        assert!(label.needs_render());
        assert_eq!(label.text(), "1");
    }

    #[test]
    fn shorter_text_erases_stale_glyphs() {
        let mut matrix = PixelMatrix::with_size(40, 10);
        let mut label = Label::new(TextFormat::new(0, 0, 1), "888");
        label.render(&mut matrix);
        assert_eq!(matrix.is_foreground(0, 8), Some(true));

        label.set_text("8");
        label.render(&mut matrix);
        for row in 0..GLYPH_HEIGHT {
            for col in 4..12 {
                assert_eq!(matrix.is_foreground(row, col), Some(false));
            }
        }
        assert_eq!(matrix.is_foreground(0, 0), Some(true));
    }

    #[test]
    fn oversized_label_shrinks_without_overflow() {
        let mut matrix = PixelMatrix::with_size(6, 5);
        let mut label = Label::new(TextFormat::new(2, 0, usize::MAX / 3), "88");
        label.render(&mut matrix);
        assert_eq!(matrix.is_foreground(4, 5), Some(true));

        // the stale glyph starts off canvas, so only the first one remains
        label.set_text("1");
        label.render(&mut matrix);
        assert_eq!(matrix.is_foreground(0, 2), Some(false));
        assert_eq!(matrix.is_foreground(0, 0), Some(false));
    }

    #[test]
    fn rule_draws_a_horizontal_line() {
        let mut matrix = PixelMatrix::with_size(10, 4);
        Rule::new(Point::new(2, 1), 5, 1).render(&mut matrix);
        assert_eq!(matrix.dirty_count(), 5);
        assert!((2..7).all(|col| matrix.is_foreground(1, col) == Some(true)));
        assert_eq!(matrix.is_foreground(1, 7), Some(false));
    }
}
