//! Triangle vertex data and its GPU layout.

use std::mem::{offset_of, size_of};

use bytemuck::{Pod, Zeroable};
use thiserror::Error;

/// Interleaved vertex: 2D position followed by an RGB color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 2],
    pub col: [f32; 3],
}

/// The one triangle drawn by the demo.
pub const TRIANGLE: [Vertex; 3] = [
    Vertex { pos: [-0.6, -0.4], col: [1.0, 0.0, 0.0] },
    Vertex { pos: [0.6, -0.4], col: [0.0, 1.0, 0.0] },
    Vertex { pos: [0.0, 0.6], col: [0.0, 0.0, 1.0] },
];

/// One float vertex attribute inside the interleaved record.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct VertexAttribute {
    /// Shader input name.
    pub name: &'static str,
    /// Number of `f32` components.
    pub components: i32,
    /// Byte offset inside `Vertex`.
    pub offset: i32,
}

impl Vertex {
    pub const STRIDE: i32 = size_of::<Vertex>() as i32;

    pub const POSITION: VertexAttribute = VertexAttribute {
        name: "vPos",
        components: 2,
        offset: offset_of!(Vertex, pos) as i32,
    };

    pub const COLOR: VertexAttribute = VertexAttribute {
        name: "vCol",
        components: 3,
        offset: offset_of!(Vertex, col) as i32,
    };
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("vertex byte image has {len} bytes, not a multiple of {stride}")]
pub struct VertexDecodeError {
    pub len: usize,
    pub stride: usize,
}

/// Byte image of `vertices` as uploaded to the GPU.
pub fn vertex_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Decodes a byte image read back from a vertex buffer.
///
/// The source may be unaligned, so the vertices are copied out.
pub fn decode_vertices(bytes: &[u8]) -> Result<Vec<Vertex>, VertexDecodeError> {
    let stride = size_of::<Vertex>();
    if bytes.len() % stride != 0 {
        return Err(VertexDecodeError { len: bytes.len(), stride });
    }
    Ok(bytes
        .chunks_exact(stride)
        .map(bytemuck::pod_read_unaligned)
        .collect())
}
