use crate::LayoutError;
use crate::style::GuiRect;
use crate::view::font::FontMetrics;
use crate::view::gpu::FILL_SOLID;
use crate::view::quad_writer::QuadWriter;

/// Solid rectangle filled with a color texel of the font texture.
pub struct DrawRectPass {
    rect: GuiRect,
    color_index: u8,
}

impl DrawRectPass {
    pub fn new(rect: GuiRect, color_index: u8) -> Self {
        Self { rect, color_index }
    }

    pub fn execute<F: FontMetrics + ?Sized>(
        &self,
        font: &F,
        writer: &mut QuadWriter<'_>,
    ) -> Result<(), LayoutError> {
        let rect = [
            self.rect.x as f32,
            self.rect.y as f32,
            self.rect.w as f32,
            self.rect.h as f32,
        ];
        writer.emit_quad(rect, color_uv(font, self.color_index), [FILL_SOLID, 1.0])
    }
}

/// Samples the center of texel `color_index` on the first texture row.
pub fn color_uv<F: FontMetrics + ?Sized>(font: &F, color_index: u8) -> [f32; 4] {
    let [tex_w, tex_h] = font.texture_size();
    let u = (f32::from(color_index) + 0.5) / tex_w;
    let v = 0.5 / tex_h;
    [u, v, u, v]
}
