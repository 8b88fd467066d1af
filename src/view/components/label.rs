use crate::{LayoutConfig, LayoutError};
use crate::style::GuiRect;
use crate::view::components::{SizeCon, Widget};
use crate::view::font::{FontMetrics, TxfDrawState};
use crate::view::quad_writer::QuadWriter;
use crate::view::render_pass::TextPass;

pub struct Label<'a> {
    pub text: &'a str,
}

impl<'a> Label<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl Widget for Label<'_> {
    fn measure<F: FontMetrics + ?Sized>(
        &self,
        ds: &TxfDrawState<'_, F>,
        _config: &LayoutConfig,
    ) -> SizeCon {
        let [w, h] = ds.text_size(self.text);
        SizeCon::fixed(w as i32, h as i32)
    }

    fn emit<F: FontMetrics + ?Sized>(
        &self,
        writer: &mut QuadWriter<'_>,
        rect: &GuiRect,
        _cons: &SizeCon,
        ds: &mut TxfDrawState<'_, F>,
        _config: &LayoutConfig,
    ) -> Result<usize, LayoutError> {
        ds.x = rect.x as f32;
        ds.y = rect.y as f32 - ds.descender_px();
        TextPass::new(self.text).execute(ds, writer)?;
        Ok(writer.cursor())
    }
}

#[cfg(test)]
mod tests {
    use super::Label;
    use crate::LayoutConfig;
    use crate::style::GuiRect;
    use crate::view::components::{SizeCon, Widget};
    use crate::view::font::{TxfDrawState, TxfFont};
    use crate::view::gpu::QUAD_ATTRS;
    use crate::view::quad_writer::QuadWriter;

    #[test]
    fn glyphs_sit_on_descender_baseline() {
        let font = TxfFont::monospace(20.0);
        let mut ds = TxfDrawState::new(&font);
        let config = LayoutConfig::default();
        let label = Label::new("HP 12");
        let cons = label.measure(&ds, &config);
        assert_eq!(cons, SizeCon::fixed(50, 20));

        let mut attrs = vec![0.0; 8 * QUAD_ATTRS];
        let mut writer = QuadWriter::new(&mut attrs);
        let rect = GuiRect::new(30, 40, cons.pref_w, cons.pref_h);
        let cursor = label.emit(&mut writer, &rect, &cons, &mut ds, &config).unwrap();
        assert_eq!(cursor, 4 * QUAD_ATTRS);
        // Glyph bottom is the rect bottom: baseline 45 plus descender -5.
        assert_eq!(&attrs[..2], &[30.0, 40.0]);
    }
}
