/// Where and how large to draw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextFormat {
    /// Left edge in pixels
    pub x: usize,
    /// Top edge in pixels
    pub y: usize,
    /// Each glyph cell becomes a `scale` x `scale` block
    pub scale: usize,
}

impl TextFormat {
    /// `scale` is clamped to at least 1.
    pub const fn new(x: usize, y: usize, scale: usize) -> Self {
        let scale = if scale == 0 { 1 } else { scale };
        Self { x, y, scale }
    }
}

impl Default for TextFormat {
    fn default() -> Self {
        Self::new(0, 0, 1)
    }
}
