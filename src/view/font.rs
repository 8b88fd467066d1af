use rustc_hash::FxHashMap;

/// Metrics of one glyph, in em units relative to the pen on the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Glyph {
    pub advance: f32,
    /// `[x0, y0, x1, y1]`
    pub bounds: [f32; 4],
    /// `[u0, v0, u1, v1]` in the font texture.
    pub uv: [f32; 4],
}

impl Glyph {
    /// Glyphs without area (spaces) advance the pen but produce no quad.
    pub fn is_blank(&self) -> bool {
        self.bounds[2] <= self.bounds[0] || self.bounds[3] <= self.bounds[1]
    }
}

/// Font collaborator used to measure and shape text.
pub trait FontMetrics {
    /// Natural point size of the font.
    fn font_size(&self) -> f32;
    fn ascender(&self) -> f32;
    /// Distance below the baseline, negative for most fonts.
    fn descender(&self) -> f32;
    fn line_spacing(&self) -> f32;
    fn texture_size(&self) -> [f32; 2];
    fn glyph(&self, ch: char) -> Option<Glyph>;

    /// Extent of a single line of text in em units.
    fn em_size(&self, text: &str) -> [f32; 2] {
        let width = text
            .chars()
            .filter_map(|ch| self.glyph(ch))
            .map(|glyph| glyph.advance)
            .sum();
        [width, self.ascender() - self.descender()]
    }
}

/// Textured font with a glyph table.
#[derive(Debug, Clone)]
pub struct TxfFont {
    font_size: f32,
    ascender: f32,
    descender: f32,
    line_spacing: f32,
    texture_size: [f32; 2],
    glyphs: FxHashMap<char, Glyph>,
}

impl TxfFont {
    pub fn new(
        font_size: f32,
        ascender: f32,
        descender: f32,
        line_spacing: f32,
        texture_size: [f32; 2],
    ) -> Self {
        Self {
            font_size,
            ascender,
            descender,
            line_spacing,
            texture_size,
            glyphs: FxHashMap::default(),
        }
    }

    /// Printable ASCII laid out 16 glyphs per row in 32 pixel cells, each
    /// half an em wide.
    pub fn monospace(font_size: f32) -> Self {
        const CELL: f32 = 32.0;
        const COLUMNS: u32 = 16;
        let mut font = Self::new(font_size, 0.75, -0.25, 1.25, [512.0, 256.0]);
        let [tex_w, tex_h] = font.texture_size;
        for code in 0x20u32..0x7f {
            let Some(ch) = char::from_u32(code) else {
                continue;
            };
            let index = code - 0x20;
            // Row 0 holds the solid color texels used for fills.
            let col = (index % COLUMNS) as f32;
            let row = (index / COLUMNS + 1) as f32;
            let bounds = if ch == ' ' {
                [0.0; 4]
            } else {
                [0.0, font.descender, 0.5, font.ascender]
            };
            font.insert_glyph(
                ch,
                Glyph {
                    advance: 0.5,
                    bounds,
                    uv: [
                        col * CELL / tex_w,
                        row * CELL / tex_h,
                        (col + 1.0) * CELL / tex_w,
                        (row + 1.0) * CELL / tex_h,
                    ],
                },
            );
        }
        font
    }

    pub fn insert_glyph(&mut self, ch: char, glyph: Glyph) {
        self.glyphs.insert(ch, glyph);
    }
}

impl FontMetrics for TxfFont {
    fn font_size(&self) -> f32 {
        self.font_size
    }

    fn ascender(&self) -> f32 {
        self.ascender
    }

    fn descender(&self) -> f32 {
        self.descender
    }

    fn line_spacing(&self) -> f32 {
        self.line_spacing
    }

    fn texture_size(&self) -> [f32; 2] {
        self.texture_size
    }

    fn glyph(&self, ch: char) -> Option<Glyph> {
        self.glyphs.get(&ch).copied()
    }
}

/// Pen and point size shared by the measuring and emitting steps of a pass.
pub struct TxfDrawState<'f, F: FontMetrics + ?Sized> {
    pub font: &'f F,
    pub x: f32,
    pub y: f32,
    /// Point size in pixels.
    pub psize: f32,
    /// Baseline to baseline distance in pixels.
    pub line_spacing: f32,
}

impl<'f, F: FontMetrics + ?Sized> TxfDrawState<'f, F> {
    pub fn new(font: &'f F) -> Self {
        let mut ds = Self {
            font,
            x: 0.0,
            y: 0.0,
            psize: 0.0,
            line_spacing: 0.0,
        };
        ds.set_font_size(font.font_size());
        ds
    }

    pub fn set_font_size(&mut self, psize: f32) {
        self.psize = psize;
        self.line_spacing = self.font.line_spacing() * psize;
    }

    /// Text extent in pixels at the current point size.
    pub fn text_size(&self, text: &str) -> [f32; 2] {
        let [w, h] = self.font.em_size(text);
        [w * self.psize, h * self.psize]
    }

    pub fn descender_px(&self) -> f32 {
        self.font.descender() * self.psize
    }
}

#[cfg(test)]
mod tests {
    use super::{FontMetrics, TxfDrawState, TxfFont};

    #[test]
    fn monospace_measures_half_em_per_char() {
        let font = TxfFont::monospace(10.0);
        assert_eq!(font.em_size("Hi there"), [4.0, 1.0]);
        assert!(font.glyph(' ').is_some_and(|g| g.is_blank()));
        assert!(font.glyph('A').is_some_and(|g| !g.is_blank()));
        assert!(font.glyph('\u{e9}').is_none());
    }

    #[test]
    fn draw_state_scales_by_point_size() {
        let font = TxfFont::monospace(10.0);
        let mut ds = TxfDrawState::new(&font);
        assert_eq!(ds.text_size("abcd"), [20.0, 10.0]);
        assert_eq!(ds.line_spacing, 12.5);

        ds.set_font_size(20.0);
        assert_eq!(ds.text_size("abcd"), [40.0, 20.0]);
        assert_eq!(ds.line_spacing, 25.0);
        assert_eq!(ds.descender_px(), -5.0);
    }
}
