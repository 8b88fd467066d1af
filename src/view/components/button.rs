use crate::{LayoutConfig, LayoutError};
use crate::style::GuiRect;
use crate::view::components::{SizeCon, Widget};
use crate::view::font::{FontMetrics, TxfDrawState};
use crate::view::quad_writer::QuadWriter;
use crate::view::render_pass::{DrawRectPass, TextPass};

/// Text on a filled frame.
pub struct Button<'a> {
    pub text: &'a str,
}

impl<'a> Button<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

fn padding<F: FontMetrics + ?Sized>(ds: &TxfDrawState<'_, F>, config: &LayoutConfig) -> f32 {
    config.button_padding * ds.psize
}

impl Widget for Button<'_> {
    fn measure<F: FontMetrics + ?Sized>(
        &self,
        ds: &TxfDrawState<'_, F>,
        config: &LayoutConfig,
    ) -> SizeCon {
        let [text_w, text_h] = ds.text_size(self.text);
        SizeCon::fixed(
            (text_w + padding(ds, config)) as i32,
            (text_h * config.button_height_factor) as i32,
        )
    }

    fn emit<F: FontMetrics + ?Sized>(
        &self,
        writer: &mut QuadWriter<'_>,
        rect: &GuiRect,
        cons: &SizeCon,
        ds: &mut TxfDrawState<'_, F>,
        config: &LayoutConfig,
    ) -> Result<usize, LayoutError> {
        DrawRectPass::new(*rect, config.button_color_index).execute(ds.font, writer)?;

        let text_w = cons.pref_w - padding(ds, config) as i32;
        ds.x = (rect.x + (rect.w - text_w) / 2) as f32;
        ds.y = rect.y as f32 - ds.descender_px() + config.button_baseline_nudge * ds.psize;
        TextPass::new(self.text).execute(ds, writer)?;
        Ok(writer.cursor())
    }
}

#[cfg(test)]
mod tests {
    use super::Button;
    use crate::LayoutConfig;
    use crate::style::GuiRect;
    use crate::view::components::{SizeCon, Widget};
    use crate::view::font::{TxfDrawState, TxfFont};
    use crate::view::gpu::QUAD_ATTRS;
    use crate::view::quad_writer::QuadWriter;

    #[test]
    fn size_adds_padding_and_frame_height() {
        let font = TxfFont::monospace(10.0);
        let ds = TxfDrawState::new(&font);
        let cons = Button::new("Quit").measure(&ds, &LayoutConfig::default());
        assert_eq!(cons, SizeCon::fixed(32, 16));
    }

    #[test]
    fn emits_background_then_centered_glyphs() {
        let font = TxfFont::monospace(10.0);
        let mut ds = TxfDrawState::new(&font);
        let config = LayoutConfig::default();
        let button = Button::new("Quit");
        let cons = button.measure(&ds, &config);
        // Forced wider than preferred, so the text is centered in the extra room.
        let rect = GuiRect::new(0, 0, 52, cons.pref_h);

        let mut attrs = vec![0.0; 8 * QUAD_ATTRS];
        let mut writer = QuadWriter::new(&mut attrs);
        let cursor = button.emit(&mut writer, &rect, &cons, &mut ds, &config).unwrap();
        assert_eq!(cursor, 5 * QUAD_ATTRS);
        // First glyph quad starts at (52 - 20) / 2.
        assert_eq!(attrs[QUAD_ATTRS], 16.0);
    }
}
