use wgpu::util::DeviceExt;

/// Float attributes per vertex.
pub const ATTR_COUNT: usize = 7;
/// Two triangles per quad.
pub const VERTS_PER_QUAD: usize = 6;
pub const QUAD_ATTRS: usize = ATTR_COUNT * VERTS_PER_QUAD;

pub const FILL_GLYPH: f32 = 0.0;
pub const FILL_SOLID: f32 = 1.0;

#[derive(Debug, Default, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Vertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
    // [fill mode, opacity]
    pub fill: [f32; 2],
}

impl Vertex {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2, 2 => Float32x2];

    pub fn buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Creates a vertex buffer holding the attributes of one primitive list.
pub fn upload_vertices(device: &wgpu::Device, label: &str, vertices: &[Vertex]) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(vertices),
        usage: wgpu::BufferUsages::VERTEX,
    })
}

/// Owner of the triangle lists a layout pass writes into.
pub trait GpuLists {
    /// Returns the whole attribute space reserved for `list`.
    fn begin_tris(&mut self, list: u32) -> &mut [f32];
    /// Closes `list` with `used` attributes written.
    fn end_tris(&mut self, list: u32, used: usize);
    /// Closes `list` after a failed pass so nothing from it is drawn.
    fn abort_tris(&mut self, list: u32) {
        self.end_tris(list, 0);
    }
}

/// Display size queried when a layout has no root rectangle.
pub trait DisplaySize {
    fn display_size(&self) -> (i32, i32);
}

impl DisplaySize for (i32, i32) {
    fn display_size(&self) -> (i32, i32) {
        *self
    }
}

#[derive(Debug, Clone, Default)]
struct PrimList {
    attrs: Vec<f32>,
    used: usize,
}

/// CPU side triangle lists, each pre-sized to a fixed number of quads.
#[derive(Debug, Clone)]
pub struct VertexLists {
    lists: Vec<PrimList>,
    default_quads: usize,
}

impl VertexLists {
    pub fn new(default_quads: usize) -> Self {
        Self {
            lists: Vec::new(),
            default_quads,
        }
    }

    /// Sets the capacity of `list` to `quads` and clears it.
    pub fn reserve_quads(&mut self, list: u32, quads: usize) {
        let prim = self.list_mut(list);
        prim.attrs.clear();
        prim.attrs.resize(quads * QUAD_ATTRS, 0.0);
        prim.used = 0;
    }

    fn list_mut(&mut self, list: u32) -> &mut PrimList {
        let index = list as usize;
        if index >= self.lists.len() {
            let attrs = vec![0.0; self.default_quads * QUAD_ATTRS];
            self.lists.resize(
                index + 1,
                PrimList {
                    attrs,
                    used: 0,
                },
            );
        }
        &mut self.lists[index]
    }

    pub fn attrs(&self, list: u32) -> &[f32] {
        self.lists
            .get(list as usize)
            .map(|prim| &prim.attrs[..prim.used])
            .unwrap_or(&[])
    }

    pub fn vertices(&self, list: u32) -> &[Vertex] {
        let attrs = self.attrs(list);
        bytemuck::cast_slice(&attrs[..attrs.len() - attrs.len() % ATTR_COUNT])
    }

    pub fn quad_count(&self, list: u32) -> usize {
        self.attrs(list).len() / QUAD_ATTRS
    }

    pub fn upload(&self, device: &wgpu::Device, list: u32) -> wgpu::Buffer {
        upload_vertices(device, "Layout Vertex Buffer", self.vertices(list))
    }
}

impl GpuLists for VertexLists {
    fn begin_tris(&mut self, list: u32) -> &mut [f32] {
        let prim = self.list_mut(list);
        prim.used = 0;
        &mut prim.attrs
    }

    /// A count past the reserved capacity is rejected and leaves the list empty.
    fn end_tris(&mut self, list: u32, used: usize) {
        let prim = self.list_mut(list);
        if used > prim.attrs.len() {
            log::warn!(
                "list {list}: {used} attributes exceed capacity {}",
                prim.attrs.len()
            );
            prim.used = 0;
        } else {
            prim.used = used;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ATTR_COUNT, GpuLists, QUAD_ATTRS, Vertex, VertexLists};

    #[test]
    fn vertex_matches_attribute_count() {
        assert_eq!(std::mem::size_of::<Vertex>(), ATTR_COUNT * 4);
        assert_eq!(Vertex::buffer_layout().array_stride, 28);
    }

    #[test]
    fn lists_expose_only_used_attributes() {
        let mut lists = VertexLists::new(2);
        let attrs = lists.begin_tris(1);
        assert_eq!(attrs.len(), 84);
        attrs[..ATTR_COUNT].copy_from_slice(&[1.0, 2.0, 0.0, 0.5, 0.5, 1.0, 1.0]);
        lists.end_tris(1, ATTR_COUNT);

        assert_eq!(lists.attrs(0).len(), 0);
        assert_eq!(lists.vertices(1)[0].position, [1.0, 2.0, 0.0]);
        assert_eq!(lists.quad_count(1), 0);

        lists.abort_tris(1);
        assert!(lists.vertices(1).is_empty());
    }

    #[test]
    fn oversized_count_is_rejected() {
        let mut lists = VertexLists::new(1);
        lists.begin_tris(0);
        lists.end_tris(0, QUAD_ATTRS);
        assert_eq!(lists.quad_count(0), 1);

        lists.begin_tris(0);
        lists.end_tris(0, QUAD_ATTRS + 1);
        assert!(lists.attrs(0).is_empty());
    }
}
