use crate::LayoutError;
use crate::view::gpu::{QUAD_ATTRS, Vertex};

/// Forward-only cursor over the attribute space reserved for one list.
pub struct QuadWriter<'a> {
    attrs: &'a mut [f32],
    cursor: usize,
}

impl<'a> QuadWriter<'a> {
    pub fn new(attrs: &'a mut [f32]) -> Self {
        Self { attrs, cursor: 0 }
    }

    /// Attributes written so far.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn quad_count(&self) -> usize {
        self.cursor / QUAD_ATTRS
    }

    /// Writes two triangles covering `rect` (`[x, y, w, h]`) textured with
    /// `uv` (`[u0, v0, u1, v1]`).
    pub fn emit_quad(
        &mut self,
        rect: [f32; 4],
        uv: [f32; 4],
        fill: [f32; 2],
    ) -> Result<(), LayoutError> {
        let end = self.cursor + QUAD_ATTRS;
        let capacity = self.attrs.len();
        let dst = self
            .attrs
            .get_mut(self.cursor..end)
            .ok_or(LayoutError::BufferOverrun {
                needed: end,
                capacity,
            })?;

        let [x, y, w, h] = rect;
        let [u0, v0, u1, v1] = uv;
        let corner = |px: f32, py: f32, u: f32, v: f32| Vertex {
            position: [px, py, 0.0],
            uv: [u, v],
            fill,
        };
        let bl = corner(x, y, u0, v0);
        let br = corner(x + w, y, u1, v0);
        let tr = corner(x + w, y + h, u1, v1);
        let tl = corner(x, y + h, u0, v1);
        let vertices = [bl, br, tr, bl, tr, tl];

        dst.copy_from_slice(bytemuck::cast_slice(&vertices));
        self.cursor = end;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::QuadWriter;
    use crate::LayoutError;
    use crate::view::gpu::{ATTR_COUNT, QUAD_ATTRS};

    #[test]
    fn quad_is_two_triangles_from_bottom_left() {
        let mut attrs = vec![0.0; QUAD_ATTRS];
        let mut writer = QuadWriter::new(&mut attrs);
        writer
            .emit_quad([10.0, 20.0, 30.0, 40.0], [0.0, 0.0, 1.0, 1.0], [1.0, 1.0])
            .unwrap();
        assert_eq!(writer.cursor(), QUAD_ATTRS);
        assert_eq!(writer.quad_count(), 1);

        assert_eq!(&attrs[..ATTR_COUNT], &[10.0, 20.0, 0.0, 0.0, 0.0, 1.0, 1.0]);
        let tr = 2 * ATTR_COUNT;
        assert_eq!(&attrs[tr..tr + 5], &[40.0, 60.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn overrun_leaves_cursor_untouched() {
        let mut attrs = vec![0.0; QUAD_ATTRS + 3];
        let mut writer = QuadWriter::new(&mut attrs);
        writer.emit_quad([0.0; 4], [0.0; 4], [0.0; 2]).unwrap();
        let err = writer.emit_quad([0.0; 4], [0.0; 4], [0.0; 2]);
        assert_eq!(
            err,
            Err(LayoutError::BufferOverrun {
                needed: 2 * QUAD_ATTRS,
                capacity: QUAD_ATTRS + 3
            })
        );
        assert_eq!(writer.cursor(), QUAD_ATTRS);
    }
}
