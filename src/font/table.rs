//! Character to glyph mapping
use super::glyph::Glyph;
use log::trace;

pub const ZERO: Glyph = Glyph::from_rows([
    "###",
    "# #",
    "# #",
    "# #",
    "###",
]);

pub const ONE: Glyph = Glyph::from_rows([
    " # ",
    "## ",
    " # ",
    " # ",
    "###",
]);

pub const TWO: Glyph = Glyph::from_rows([
    "###",
    "  #",
    "###",
    "#  ",
    "###",
]);

pub const THREE: Glyph = Glyph::from_rows([
    "###",
    "  #",
    "###",
    "  #",
    "###",
]);

pub const FOUR: Glyph = Glyph::from_rows([
    "# #",
    "# #",
    "###",
    "  #",
    "  #",
]);

pub const FIVE: Glyph = Glyph::from_rows([
    "###",
    "#  ",
    "###",
    "  #",
    "###",
]);

pub const SIX: Glyph = Glyph::from_rows([
    "###",
    "#  ",
    "###",
    "# #",
    "###",
]);

pub const SEVEN: Glyph = Glyph::from_rows([
    "###",
    "# #",
    "  #",
    "  #",
    "  #",
]);

pub const EIGHT: Glyph = Glyph::from_rows([
    "###",
    "# #",
    "###",
    "# #",
    "###",
]);

pub const NINE: Glyph = Glyph::from_rows([
    "###",
    "# #",
    "###",
    "  #",
    "###",
]);

pub const COLON: Glyph = Glyph::from_rows([
    "   ",
    " # ",
    "   ",
    " # ",
    "   ",
]);

pub const PERIOD: Glyph = Glyph::from_rows([
    "   ",
    "   ",
    "   ",
    "   ",
    " # ",
]);

pub const HYPHEN: Glyph = Glyph::from_rows([
    "   ",
    "   ",
    "###",
    "   ",
    "   ",
]);

/// Drawn for any character the table has no entry for
pub const UNKNOWN: Glyph = Glyph::from_rows([
    "# #",
    "# #",
    " # ",
    "# #",
    "# #",
]);

const BUILTIN_GLYPHS: [(char, Glyph); 13] = [
    ('0', ZERO),
    ('1', ONE),
    ('2', TWO),
    ('3', THREE),
    ('4', FOUR),
    ('5', FIVE),
    ('6', SIX),
    ('7', SEVEN),
    ('8', EIGHT),
    ('9', NINE),
    (':', COLON),
    ('.', PERIOD),
    ('-', HYPHEN),
];

/// Glyph lookup backed by a borrowed slice of entries.
///
/// New characters are added by building a table over a different slice;
/// the rasterizer only ever sees `lookup`.
#[derive(Debug, Clone, Copy)]
pub struct GlyphTable<'a> {
    entries: &'a [(char, Glyph)],
    fallback: &'a Glyph,
}

impl<'a> GlyphTable<'a> {
    /// Digits, `:`, `.` and `-`, falling back to [`UNKNOWN`].
    pub const BUILTIN: GlyphTable<'static> = GlyphTable {
        entries: &BUILTIN_GLYPHS,
        fallback: &UNKNOWN,
    };

    pub const fn new(entries: &'a [(char, Glyph)], fallback: &'a Glyph) -> Self {
        Self { entries, fallback }
    }

    pub fn get(&self, ch: char) -> Option<&'a Glyph> {
        self.entries
            .iter()
            .find(|(key, _)| *key == ch)
            .map(|(_, glyph)| glyph)
    }

    /// Never fails: unknown characters map to the fallback glyph.
    pub fn lookup(&self, ch: char) -> &'a Glyph {
        self.get(ch).unwrap_or_else(|| {
            trace!("no glyph for {:?}, using fallback", ch);
            self.fallback
        })
    }

    #[inline]
    pub fn fallback(&self) -> &'a Glyph {
        self.fallback
    }

    pub fn contains(&self, ch: char) -> bool {
        self.get(ch).is_some()
    }
}

impl Default for GlyphTable<'static> {
    fn default() -> Self {
        Self::BUILTIN
    }
}
