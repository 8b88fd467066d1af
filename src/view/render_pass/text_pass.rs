use crate::LayoutError;
use crate::view::font::{FontMetrics, TxfDrawState};
use crate::view::gpu::FILL_GLYPH;
use crate::view::quad_writer::QuadWriter;

/// One line of text shaped from the pen position of a draw state.
pub struct TextPass<'t> {
    content: &'t str,
}

impl<'t> TextPass<'t> {
    pub fn new(content: &'t str) -> Self {
        Self { content }
    }

    /// Emits one quad per visible glyph and advances the pen past the text.
    /// Returns the number of quads written.
    pub fn execute<F: FontMetrics + ?Sized>(
        &self,
        ds: &mut TxfDrawState<'_, F>,
        writer: &mut QuadWriter<'_>,
    ) -> Result<usize, LayoutError> {
        let psize = ds.psize;
        let mut quads = 0;
        for ch in self.content.chars() {
            let Some(glyph) = ds.font.glyph(ch) else {
                log::warn!("no glyph for {ch:?}");
                continue;
            };
            if !glyph.is_blank() {
                let [x0, y0, x1, y1] = glyph.bounds;
                let rect = [
                    ds.x + x0 * psize,
                    ds.y + y0 * psize,
                    (x1 - x0) * psize,
                    (y1 - y0) * psize,
                ];
                writer.emit_quad(rect, glyph.uv, [FILL_GLYPH, 1.0])?;
                quads += 1;
            }
            ds.x += glyph.advance * psize;
        }
        Ok(quads)
    }
}

#[cfg(test)]
mod tests {
    use super::TextPass;
    use crate::view::font::{TxfDrawState, TxfFont};
    use crate::view::gpu::QUAD_ATTRS;
    use crate::view::quad_writer::QuadWriter;

    #[test]
    fn blanks_advance_without_quads() {
        let font = TxfFont::monospace(10.0);
        let mut ds = TxfDrawState::new(&font);
        ds.x = 100.0;
        ds.y = 50.0;
        let mut attrs = vec![0.0; 4 * QUAD_ATTRS];
        let mut writer = QuadWriter::new(&mut attrs);
        let quads = TextPass::new("a b").execute(&mut ds, &mut writer).unwrap();
        assert_eq!(quads, 2);
        assert_eq!(writer.cursor(), 2 * QUAD_ATTRS);
        assert_eq!(ds.x, 115.0);

        // Second glyph starts two advances along, below the baseline by the descender.
        assert_eq!(&attrs[QUAD_ATTRS..QUAD_ATTRS + 2], &[110.0, 47.5]);
    }

    #[test]
    fn unknown_glyphs_are_skipped() {
        let font = TxfFont::monospace(10.0);
        let mut ds = TxfDrawState::new(&font);
        let mut attrs = vec![0.0; 4 * QUAD_ATTRS];
        let mut writer = QuadWriter::new(&mut attrs);
        let quads = TextPass::new("\u{e9}x").execute(&mut ds, &mut writer).unwrap();
        assert_eq!(quads, 1);
        assert_eq!(ds.x, 5.0);
    }
}
